use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use crate::card::ParseError;

/// One of the four suits of a standard 52-card deck. Suits have no
/// ordering significance for hand ranking; they exist only to distinguish
/// otherwise identically-ranked cards.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits, in `Clubs, Diamonds, Hearts, Spades` order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns the 0-indexed position of the suit (`Clubs` = 0 .. `Spades` = 3).
    pub fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn glyph(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl TryFrom<u8> for Suit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::ALL.get(value as usize).copied().ok_or(ParseError)
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "C" | "c" | "♣" => Ok(Suit::Clubs),
            "D" | "d" | "♦" => Ok(Suit::Diamonds),
            "H" | "h" | "♥" => Ok(Suit::Hearts),
            "S" | "s" | "♠" => Ok(Suit::Spades),
            _ => Err(ParseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C", Ok(Suit::Clubs))]
    #[case("h", Ok(Suit::Hearts))]
    #[case("♦", Ok(Suit::Diamonds))]
    #[case("♠", Ok(Suit::Spades))]
    #[case("a", Err(ParseError))]
    #[case("HH", Err(ParseError))]
    fn parse(#[case] s: &str, #[case] expected: Result<Suit, ParseError>) {
        assert_eq!(s.parse::<Suit>(), expected);
    }

    #[test]
    fn no_suit_orders_another() {
        assert_ne!(Suit::Clubs, Suit::Spades);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for suit in Suit::ALL {
            assert_eq!(suit.to_string().parse::<Suit>().unwrap(), suit);
        }
    }
}
