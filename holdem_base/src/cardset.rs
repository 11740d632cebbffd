use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use crate::card::{Card, ParseError};
use crate::constants::{
    CARD_COUNT, RANK_COUNT, RANK_FIELD_BITS, SUIT_COUNT, SUIT_FIELD_BITS, SUIT_FIELD_OFFSET,
};
use crate::CARDS;

const RANK_FIELD_MASK: u64 = (1 << RANK_FIELD_BITS) - 1;
const SUIT_FIELD_MASK: u64 = (1 << SUIT_FIELD_BITS) - 1;
const SUIT_RANK_MASK: u64 = (1 << RANK_COUNT) - 1;

/// A packed, unordered set of 0 to 52 cards from a standard deck.
///
/// Internally a `CardSet` is two `u64` words — together the "single 128-bit
/// word" the packed representation calls for, split into two machine words
/// so every sub-field access is plain scalar arithmetic:
///
/// - `mask`: one bit per `(suit, rank)`, indexed `13 * suit + rank`, set iff
///   that card is present. A suit's 13-bit rank bitmap is a single shift and
///   mask away (`(mask >> (13 * suit)) & 0x1FFF`).
/// - `counters`: thirteen 3-bit per-rank accumulators (how many cards of
///   each rank are present, 0..=4) packed into the low 39 bits, followed by
///   four 4-bit per-suit counters (how many cards of each suit are present,
///   0..=13) in the next 16 bits.
///
/// `add`/`remove` are a single addition/subtraction of a precomputed
/// per-card delta (see [`Card`]) against `counters`, plus an OR/AND-NOT
/// against `mask` — branch-free, and the two sub-fields can never carry
/// into one another because every field has headroom above its legal
/// maximum.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct CardSet {
    mask: u64,
    counters: u64,
}

impl CardSet {
    /// Returns an empty card set.
    pub fn empty() -> CardSet {
        CardSet {
            mask: 0,
            counters: 0,
        }
    }

    /// Returns a card set containing all 52 cards.
    pub fn full_deck() -> CardSet {
        let mut set = CardSet::empty();
        for &card in CARDS.iter() {
            set.add(card);
        }
        set
    }

    /// Returns `true` if the set contains the given card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.mask & card.bit != 0
    }

    /// Returns the number of cards in the set, computed as the sum of the
    /// four per-suit counters.
    #[inline]
    pub fn len(&self) -> u32 {
        self.suit_counts().iter().map(|&c| c as u32).sum()
    }

    /// Returns `true` if the set contains no cards.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Inserts `card` into the set.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if `card` is already present. In release
    /// builds this precondition is unchecked: violating it leaves the set
    /// in an inconsistent state.
    #[inline]
    pub fn add(&mut self, card: Card) {
        debug_assert!(!self.contains(card), "card already present in set");
        self.mask |= card.bit;
        self.counters += card.delta;
    }

    /// Removes `card` from the set.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if `card` is not present.
    #[inline]
    pub fn remove(&mut self, card: Card) {
        debug_assert!(self.contains(card), "card not present in set");
        self.mask &= !card.bit;
        self.counters -= card.delta;
    }

    /// Adds every card of `other` into `self`.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if `self` and `other` share any card.
    #[inline]
    pub fn add_all(&mut self, other: CardSet) {
        debug_assert!(self.is_disjoint(&other), "card sets are not disjoint");
        self.mask |= other.mask;
        self.counters += other.counters;
    }

    /// Returns `true` if `self` and `other` share no cards.
    pub fn is_disjoint(&self, other: &CardSet) -> bool {
        self.mask & other.mask == 0
    }

    /// Returns, for each rank `Two..=Ace`, how many cards of that rank are
    /// present (0..=4).
    #[inline]
    pub fn rank_counts(&self) -> [u8; RANK_COUNT] {
        let mut counts = [0u8; RANK_COUNT];
        for (rank, slot) in counts.iter_mut().enumerate() {
            *slot = ((self.counters >> (RANK_FIELD_BITS as usize * rank)) & RANK_FIELD_MASK) as u8;
        }
        counts
    }

    /// Returns, for each suit `Clubs..=Spades`, how many cards of that suit
    /// are present (0..=13).
    #[inline]
    pub fn suit_counts(&self) -> [u8; SUIT_COUNT] {
        let mut counts = [0u8; SUIT_COUNT];
        for (suit, slot) in counts.iter_mut().enumerate() {
            let shift = SUIT_FIELD_OFFSET as usize + SUIT_FIELD_BITS as usize * suit;
            *slot = ((self.counters >> shift) & SUIT_FIELD_MASK) as u8;
        }
        counts
    }

    /// Returns the 13-bit rank bitmap (bit `r` set iff a card of rank `r`
    /// of the given suit is present) for suit index `suit` (0 = Clubs ..
    /// 3 = Spades).
    ///
    /// Exposed mainly for hand-ranking kernels built on top of `holdem_base`
    /// that need direct bitmap access rather than the decoded count arrays.
    #[inline]
    pub fn suit_rank_bitmap(&self, suit: usize) -> u16 {
        ((self.mask >> (RANK_COUNT * suit)) & SUIT_RANK_MASK) as u16
    }

    /// Returns the "colorless" 13-bit bitmap of ranks present at all,
    /// irrespective of suit (bit `r` set iff `rank_counts()[r] >= 1`).
    #[inline]
    pub fn colorless_bitmap(&self) -> u16 {
        (0..SUIT_COUNT).fold(0u16, |acc, suit| acc | self.suit_rank_bitmap(suit))
    }

    /// Returns an iterator over the cards in the set, ordered by suit then
    /// rank.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            left: 0,
            right: CARD_COUNT as u8,
            remaining: self.len() as u8,
            set: self,
        }
    }
}

impl Default for CardSet {
    fn default() -> CardSet {
        CardSet::empty()
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.add(card);
        }
    }
}

impl<'a> Extend<&'a Card> for CardSet {
    fn extend<T: IntoIterator<Item = &'a Card>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardSet::empty();
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        CardSet::from_iter(iter.into_iter().copied())
    }
}

impl FromStr for CardSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(CardSet::empty());
        }

        let mut set = CardSet::empty();
        for token in trimmed.split(' ') {
            let card: Card = token.parse()?;
            if set.contains(card) {
                return Err(ParseError);
            }
            set.add(card);
        }
        Ok(set)
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the cards of a [`CardSet`], in `(suit, rank)` order.
#[derive(Debug)]
pub struct Iter<'a> {
    left: u8,
    right: u8,
    remaining: u8,
    set: &'a CardSet,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        while self.left < self.right {
            let card = &CARDS[self.left as usize];
            self.left += 1;
            if self.set.contains(*card) {
                self.remaining -= 1;
                return Some(card);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.left < self.right {
            self.right -= 1;
            let card = &CARDS[self.right as usize];
            if self.set.contains(*card) {
                self.remaining -= 1;
                return Some(card);
            }
        }
        None
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
impl<'a> FusedIterator for Iter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use rstest::rstest;

    #[test]
    fn empty_set_has_no_cards() {
        let set = CardSet::empty();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn full_deck_has_52_cards_and_correct_counters() {
        let set = CardSet::full_deck();
        assert_eq!(set.len(), 52);
        assert_eq!(set.rank_counts(), [4; 13]);
        assert_eq!(set.suit_counts(), [13; 4]);
        assert_eq!(set.iter().count(), 52);
    }

    #[rstest]
    #[case::duplicate_card("AH 5H 4C 3C AH")]
    #[case::invalid_token("AH 5H 4C 3C YY")]
    fn failed_parse(#[case] s: &str) {
        assert!(s.parse::<CardSet>().is_err());
    }

    #[rstest]
    #[case(&["AH"], 1)]
    #[case(&["AH", "AS"], 2)]
    #[case(&["JH", "TC", "7H", "5S"], 4)]
    fn add_cards(#[case] cards: &[&str], #[case] expected_count: u32) -> Result<(), ParseError> {
        let mut set = CardSet::empty();
        for &s in cards {
            set.add(s.parse()?);
        }
        assert_eq!(set.len(), expected_count);
        Ok(())
    }

    #[test]
    fn add_then_remove_is_identity() {
        let base: CardSet = "7C 7H KC".parse().unwrap();
        let card: Card = "2D".parse().unwrap();

        let mut mutated = base;
        mutated.add(card);
        mutated.remove(card);

        assert!(mutated == base);
    }

    #[test]
    fn add_all_is_commutative_for_disjoint_sets() {
        let s: CardSet = "7C 7H".parse().unwrap();
        let t: CardSet = "KC 2D".parse().unwrap();

        let mut st = CardSet::empty();
        st.add_all(s);
        st.add_all(t);

        let mut ts = CardSet::empty();
        ts.add_all(t);
        ts.add_all(s);

        assert!(st == ts);
    }

    #[test]
    fn counters_track_rank_and_suit_multiplicity() {
        let set: CardSet = "7C 7H 7D KC".parse().unwrap();
        let rank_counts = set.rank_counts();
        assert_eq!(rank_counts[Rank::Seven.index()], 3);
        assert_eq!(rank_counts[Rank::King.index()], 1);

        let suit_counts = set.suit_counts();
        assert_eq!(suit_counts[Suit::Clubs.index()], 2);
        assert_eq!(suit_counts[Suit::Hearts.index()], 1);
        assert_eq!(suit_counts[Suit::Diamonds.index()], 1);
    }

    #[test]
    fn colorless_bitmap_ignores_multiplicity() {
        let set: CardSet = "7C 7H 7D KC".parse().unwrap();
        // bit 5 = Seven, bit 11 = King
        assert_eq!(set.colorless_bitmap(), (1 << 5) | (1 << 11));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let set: CardSet = "7C KC 2D".parse().unwrap();
        let rendered = set.to_string();
        let reparsed: CardSet = rendered.parse().unwrap();
        assert!(set == reparsed);
    }
}
