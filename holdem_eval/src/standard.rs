use core::convert::TryFrom;
use core::fmt;

use holdem_base::constants::SEVEN_CARD_HAND_SIZE;
use holdem_base::CardSet;

/// A poker hand-ranking category, i.e. a straight, a flush, etc., ordered
/// from weakest to strongest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum HandCategory {
    /// Five cards that don't fall into any of the other categories.
    HighCard = 0,
    /// Two cards of one rank, and three cards of three other ranks.
    OnePair,
    /// Two cards of one rank, two cards of another rank and a fifth card of
    /// a different, third rank.
    TwoPair,
    /// Three cards of the same rank, and two cards of two other ranks.
    ThreeOfAKind,
    /// Five cards of sequential rank, with at least two different suits.
    Straight,
    /// Five cards of the same suit, but without sequential rank.
    Flush,
    /// Three cards of one rank and two cards of another rank.
    FullHouse,
    /// Four cards of the same rank and one card of another rank.
    FourOfAKind,
    /// Five cards of sequential rank, all of the same suit.
    StraightFlush,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];
}

impl TryFrom<u8> for HandCategory {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HandCategory::ALL.get(value as usize).copied().ok_or(())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

const CATEGORY_SHIFT: u32 = 40;
const HEIGHT_SHIFT: u32 = 20;
const FIELD_MASK: u64 = (1 << 20) - 1;

/// The strength of the best standard five-card poker hand that can be made
/// from a seven-card [`CardSet`].
///
/// `HandRanking`s compare with plain `u64` ordering (via the derived
/// [`Ord`]): the category occupies the most significant bits, so a
/// higher-category hand always outranks a lower-category one regardless of
/// height or side cards; within a category, the height field (e.g. a
/// straight's top card, a full house's trip rank) breaks ties before the
/// side-card field (kickers) does. Both the height and side fields are rank
/// bitmaps — unions of one-hot rank bits rather than a single integer — so
/// comparing several kickers at once is a single integer comparison instead
/// of a sorted-kicker-list walk.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct HandRanking(u64);

impl HandRanking {
    fn new(category: HandCategory, height: u32, side: u32) -> HandRanking {
        HandRanking(
            ((category as u64) << CATEGORY_SHIFT)
                | (((height as u64) & FIELD_MASK) << HEIGHT_SHIFT)
                | ((side as u64) & FIELD_MASK),
        )
    }

    /// Returns the hand-ranking category (high card, pair, ..., straight
    /// flush) this ranking belongs to.
    pub fn category(&self) -> HandCategory {
        HandCategory::try_from(((self.0 >> CATEGORY_SHIFT) & 0xFF) as u8)
            .expect("category field is always one of the nine declared variants")
    }
}

impl fmt::Debug for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandRanking({:?})", self.category())
    }
}

#[inline]
fn highest_bit(bitmap: u16) -> u32 {
    debug_assert_ne!(bitmap, 0, "highest_bit of an empty bitmap is undefined");
    1 << (15 - bitmap.leading_zeros())
}

/// Clears the lowest set bits of `bitmap` until at most `n` remain.
#[inline]
fn top_n_bits(mut bitmap: u16, n: u32) -> u16 {
    while bitmap.count_ones() > n {
        bitmap &= bitmap - 1;
    }
    bitmap
}

/// Returns the rank index of the top card of the highest straight found in
/// `bitmap` (bit `r` set iff a card of rank `r` is present), or `None` if
/// no five ranks are consecutive.
///
/// `bitmap` is first extended with a virtual ace-low rank below Two, so a
/// wheel (`A-2-3-4-5`) is detected the same way as any other straight. The
/// standard "AND four shifted copies together" trick then finds every rank
/// whose four ranks below it are also present; the highest such rank is the
/// top card of the best straight in the bitmap.
fn straight_top_rank(bitmap: u16) -> Option<u8> {
    let ace_low = (bitmap >> 12) & 1;
    let extended = ((bitmap as u32) << 1) | (ace_low as u32);

    let run = extended & (extended << 1) & (extended << 2) & (extended << 3) & (extended << 4);
    if run == 0 {
        return None;
    }

    let highest_position = 31 - run.leading_zeros();
    Some((highest_position - 1) as u8)
}

/// Returns the rank of the best standard five-card poker hand that can be
/// made from exactly seven cards.
///
/// # Examples
///
/// ```
/// use holdem_base::CardSet;
/// use holdem_eval::{poker_rank, HandCategory};
///
/// let cards: CardSet = "3c Js Qd 3h Jc 2h 7s".parse()?;
/// let ranking = poker_rank(&cards);
/// assert_eq!(ranking.category(), HandCategory::TwoPair);
/// # Ok::<(), holdem_base::ParseError>(())
/// ```
///
/// # Panics (debug only)
///
/// Panics in debug builds if `cards` does not contain exactly seven cards.
#[inline]
pub fn poker_rank(cards: &CardSet) -> HandRanking {
    debug_assert_eq!(
        cards.len() as usize,
        SEVEN_CARD_HAND_SIZE,
        "poker_rank requires exactly 7 cards"
    );

    let suit_counts = cards.suit_counts();
    for (suit, &count) in suit_counts.iter().enumerate() {
        if count >= 5 {
            let suited = cards.suit_rank_bitmap(suit);
            if let Some(top) = straight_top_rank(suited) {
                return HandRanking::new(HandCategory::StraightFlush, 1 << top, 0);
            }

            let side = top_n_bits(suited, 5);
            return HandRanking::new(HandCategory::Flush, 0, side as u32);
        }
    }

    let rank_counts = cards.rank_counts();
    let colorless = cards.colorless_bitmap();

    if let Some(quad_rank) = rank_counts.iter().position(|&c| c == 4) {
        let others = colorless & !(1 << quad_rank);
        return HandRanking::new(HandCategory::FourOfAKind, 1 << quad_rank, highest_bit(others));
    }

    if let Some(top) = straight_top_rank(colorless) {
        return HandRanking::new(HandCategory::Straight, 1 << top, 0);
    }

    let mut trip_bitmap = 0u16;
    let mut pair_bitmap = 0u16;
    for (rank, &count) in rank_counts.iter().enumerate() {
        match count {
            3 => trip_bitmap |= 1 << rank,
            2 => pair_bitmap |= 1 << rank,
            _ => {}
        }
    }

    if trip_bitmap != 0 {
        if trip_bitmap.count_ones() >= 2 {
            // Two triples: the lower one demotes to the pair slot, since
            // only one trip and one pair are usable in a five-card hand.
            let lower_trip = trip_bitmap & trip_bitmap.wrapping_neg();
            pair_bitmap |= lower_trip;
            trip_bitmap ^= lower_trip;
        }

        let trip_rank = highest_bit(trip_bitmap).trailing_zeros();
        if pair_bitmap != 0 {
            return HandRanking::new(
                HandCategory::FullHouse,
                1 << trip_rank,
                highest_bit(pair_bitmap),
            );
        }

        let side = top_n_bits(colorless & !(1 << trip_rank), 2);
        return HandRanking::new(HandCategory::ThreeOfAKind, 1 << trip_rank, side as u32);
    }

    match pair_bitmap.count_ones() {
        0 => {
            let side = top_n_bits(colorless, 5);
            HandRanking::new(HandCategory::HighCard, 0, side as u32)
        }
        1 => {
            let side = top_n_bits(colorless & !pair_bitmap, 3);
            HandRanking::new(HandCategory::OnePair, pair_bitmap as u32, side as u32)
        }
        2 => {
            let side = highest_bit(colorless & !pair_bitmap);
            HandRanking::new(HandCategory::TwoPair, pair_bitmap as u32, side)
        }
        _ => {
            // Three pairs over seven cards: keep the top two as the pair
            // height, and let the demoted low pair's card compete against
            // the best non-pair card as the kicker.
            let lowest_pair = pair_bitmap & pair_bitmap.wrapping_neg();
            let height = pair_bitmap ^ lowest_pair;
            let best_remaining_kicker = colorless & !pair_bitmap;
            let side = core::cmp::max(
                if best_remaining_kicker != 0 {
                    highest_bit(best_remaining_kicker)
                } else {
                    0
                },
                lowest_pair as u32,
            );
            HandRanking::new(HandCategory::TwoPair, height as u32, side)
        }
    }
}
