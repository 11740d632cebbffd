use crate::card::Card;

/// Number of cards in a standard deck.
pub const CARD_COUNT: usize = 52;

/// Number of distinct ranks in a standard 52-card deck.
pub const RANK_COUNT: usize = 13;

/// Number of distinct suits in a standard 52-card deck.
pub const SUIT_COUNT: usize = 4;

/// Number of cards in a Texas Hold'em showdown hand (two hole cards plus
/// five community cards).
pub const SEVEN_CARD_HAND_SIZE: usize = 7;

/// Width in bits of a single rank's accumulator field in a
/// [`CardSet`](crate::CardSet)'s packed counters word.
pub(crate) const RANK_FIELD_BITS: u32 = 3;

/// Starting bit of the per-suit counter block in the packed counters word,
/// immediately after the thirteen 3-bit rank fields (`13 * 3 = 39`).
pub(crate) const SUIT_FIELD_OFFSET: u32 = 39;

/// Width in bits of a single suit's counter field.
pub(crate) const SUIT_FIELD_BITS: u32 = 4;

/// Every card's precomputed contribution to a [`CardSet`](crate::CardSet):
/// both its one-hot bit in the card-present mask and its additive delta in
/// the packed rank/suit counters word. Table index and mask-bit position
/// coincide (`13 * suit + rank`), so a card's own index doubles as its
/// position in the deck ordered by suit then rank.
///
/// This table is computed once, at compile time, and is never mutated: the
/// "initialize once before first use, read-only thereafter" lookup table
/// the packed representation calls for has no runtime initialization step
/// to race on at all.
pub static CARDS: [Card; CARD_COUNT] = {
    let mut table = [Card::zeroed(); CARD_COUNT];
    let mut suit = 0usize;
    while suit < SUIT_COUNT {
        let mut rank = 0usize;
        while rank < RANK_COUNT {
            let idx = RANK_COUNT * suit + rank;
            let bit = 1u64 << idx;
            let delta = (1u64 << (RANK_FIELD_BITS as usize * rank))
                | (1u64 << (SUIT_FIELD_OFFSET as usize + SUIT_FIELD_BITS as usize * suit));
            table[idx] = Card::from_raw(bit, delta);
            rank += 1;
        }
        suit += 1;
    }
    table
};

/// Bit-exact two-character display strings for all 52 cards, rank glyph
/// followed by suit glyph (`"2".."9","T","J","Q","K","A"` then `"C D H S"`).
pub static CARD_GLYPHS: [&str; CARD_COUNT] = [
    "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "TC", "JC", "QC", "KC", "AC", "2D", "3D", "4D",
    "5D", "6D", "7D", "8D", "9D", "TD", "JD", "QD", "KD", "AD", "2H", "3H", "4H", "5H", "6H", "7H",
    "8H", "9H", "TH", "JH", "QH", "KH", "AH", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "TS",
    "JS", "QS", "KS", "AS",
];
