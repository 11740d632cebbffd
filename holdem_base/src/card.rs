use core::cmp::Ordering;
use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "colored")]
use colored::{Color, Colorize};

use crate::constants::{CARDS, CARD_GLYPHS, RANK_COUNT};
use crate::rank::Rank;
use crate::suit::Suit;

/// A single card from a standard 52-card deck.
///
/// `Card`s are produced exclusively from the precomputed [`CARDS`] table
/// (via [`Card::new`] or parsing), so every live `Card` already carries its
/// [`CardSet`](crate::CardSet) contribution — constructing one never does
/// any work beyond a table lookup.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    pub(crate) bit: u64,
    pub(crate) delta: u64,
}

impl Card {
    pub(crate) const fn zeroed() -> Card {
        Card { bit: 0, delta: 0 }
    }

    pub(crate) const fn from_raw(bit: u64, delta: u64) -> Card {
        Card { bit, delta }
    }

    /// Creates the card of the given `rank` and `suit`.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        CARDS[RANK_COUNT * suit.index() + rank.index()]
    }

    /// Returns the card's position in a standard 52-card deck ordered by
    /// suit then rank (clubs to spades, deuces to aces).
    pub fn index(&self) -> usize {
        self.bit.trailing_zeros() as usize
    }

    /// Returns the rank of the card.
    pub fn rank(&self) -> Rank {
        Rank::try_from((self.index() % RANK_COUNT) as u8).unwrap()
    }

    /// Returns the suit of the card.
    pub fn suit(&self) -> Suit {
        Suit::try_from((self.index() / RANK_COUNT) as u8).unwrap()
    }

    /// Orders cards the same way [`Ord`] does, except [`Rank::Ace`] is
    /// treated as the lowest rank instead of the highest. Suits break ties
    /// in their declaration order (`Clubs` lowest, `Spades` highest).
    pub fn aces_low_cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Rank::Ace, Rank::Ace) => self.cmp(other),
            (Rank::Ace, _) => Ordering::Less,
            (_, Rank::Ace) => Ordering::Greater,
            (_, _) => self.cmp(other),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank(), self.suit()).cmp(&(other.rank(), other.suit()))
    }
}

/// An error returned when parsing a [`Card`], [`Rank`], [`Suit`], or
/// [`CardSet`](crate::CardSet) from a string fails.
///
/// This is the sole error type for every `FromStr` implementation in
/// `holdem_base`: the crate accepts only typed ranks, suits, and card
/// combinations, so there is no separate error surface for "semantically
/// invalid but well-formed" input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse a card, rank, suit, or card set")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParseError);
        }

        let rank = s[..1].parse::<Rank>()?;
        let suit = s[1..].parse::<Suit>()?;

        Ok(Card::new(rank, suit))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CARD_GLYPHS[self.index()])
    }
}

impl fmt::Display for Card {
    #[cfg(feature = "colored")]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CARD_GLYPHS[self.index()].color(self.terminal_color()))
    }

    #[cfg(not(feature = "colored"))]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CARD_GLYPHS[self.index()])
    }
}

#[cfg(feature = "colored")]
impl Card {
    fn terminal_color(&self) -> Color {
        if cfg!(feature = "colored-4color") {
            match self.suit() {
                Suit::Clubs => Color::Green,
                Suit::Diamonds => Color::Blue,
                Suit::Hearts => Color::Red,
                Suit::Spades => Color::Black,
            }
        } else {
            match self.suit() {
                Suit::Hearts | Suit::Diamonds => Color::Red,
                Suit::Spades | Suit::Clubs => Color::Black,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::two_of_clubs("2C", Card::new(Rank::Two, Suit::Clubs))]
    #[case::eight_of_hearts("8H", Card::new(Rank::Eight, Suit::Hearts))]
    #[case::jack_of_diamonds("JD", Card::new(Rank::Jack, Suit::Diamonds))]
    #[case::king_of_spades("KS", Card::new(Rank::King, Suit::Spades))]
    #[case::ace_of_diamonds("AD", Card::new(Rank::Ace, Suit::Diamonds))]
    fn parse(#[case] s: &str, #[case] expected: Card) -> Result<(), ParseError> {
        assert_eq!(s.parse::<Card>()?, expected);
        Ok(())
    }

    #[rstest]
    #[case::empty("")]
    #[case::two_cards("2C 5H")]
    #[case::invalid_rank("YH")]
    #[case::invalid_suit("KF")]
    #[case::lowercase_rank("th")]
    fn invalid_parse(#[case] s: &str) {
        assert_eq!(s.parse::<Card>(), Err(ParseError));
    }

    #[test]
    fn display_is_bit_exact() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "TH");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
    }

    #[rstest]
    #[case::same_rank("3C", "3S")]
    #[case::same_suit("5C", "6C")]
    #[case::aces_high("KH", "AH")]
    #[case::rank_outranks_suit("2D", "AC")]
    fn order(#[case] lower: &str, #[case] higher: &str) -> Result<(), ParseError> {
        assert_eq!(
            lower.parse::<Card>()?.cmp(&higher.parse::<Card>()?),
            Ordering::Less
        );
        Ok(())
    }

    #[test]
    fn aces_low_cmp_treats_ace_as_lowest() {
        let ace: Card = "AC".parse().unwrap();
        let two: Card = "2D".parse().unwrap();
        let king: Card = "KH".parse().unwrap();

        assert_eq!(ace.aces_low_cmp(&two), Ordering::Less);
        assert_eq!(king.aces_low_cmp(&ace), Ordering::Greater);
    }

    #[test]
    fn all_52_cards_have_distinct_indices() {
        let mut seen = [false; 52];
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let idx = Card::new(rank, suit).index();
                assert!(!seen[idx], "duplicate index {idx}");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
