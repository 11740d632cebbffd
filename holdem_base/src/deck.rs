use rand_mt::Mt19937GenRand32;

use crate::constants::CARD_COUNT;
use crate::{Card, CARDS};

/// The default seed used by [`Deck::new`] (and by [`Deck::default`]).
///
/// A fixed default seed makes `Deck::new()` output reproducible across runs
/// without forcing every caller to thread a seed through — tests and
/// benchmarks that want independent randomness should use
/// [`Deck::with_seed`] explicitly.
pub const DEFAULT_SEED: u32 = 12345;

/// A shuffled collection of playing cards that can be dealt one at a time.
///
/// Shuffling and dealing are driven by a fixed-seed Mersenne Twister
/// (`Mt19937GenRand32`), not a thread-local generator: given the same seed,
/// two `Deck`s deal the identical sequence of cards, which is what makes
/// hand-evaluator benchmarks and statistical tests reproducible.
pub struct Deck {
    cards: [Card; CARD_COUNT],
    remaining: usize,
    rng: Mt19937GenRand32,
}

impl Deck {
    /// Creates a new full 52-card deck seeded with [`DEFAULT_SEED`].
    pub fn new() -> Deck {
        Deck::with_seed(DEFAULT_SEED)
    }

    /// Creates a new full 52-card deck, shuffled and dealt deterministically
    /// from `seed`.
    pub fn with_seed(seed: u32) -> Deck {
        Deck {
            cards: CARDS,
            remaining: CARD_COUNT,
            rng: Mt19937GenRand32::new(seed),
        }
    }

    /// Deals a single card from the deck, or `None` if the deck is empty.
    ///
    /// The drawn index is folded from the generator's next 32 output bits by
    /// multiplication rather than by rejection sampling
    /// (`(next_u32 * remaining) >> 32`): this carries a slight bias toward
    /// lower indices, which is acceptable for shuffled-hand sampling and
    /// avoids the unbounded retry loop rejection sampling would need.
    pub fn deal(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        Some(self.deal_unchecked())
    }

    fn deal_unchecked(&mut self) -> Card {
        let index = ((self.rng.next_u32() as u64 * self.remaining as u64) >> 32) as usize;
        self.remaining -= 1;
        self.cards.swap(index, self.remaining);
        self.cards[self.remaining]
    }

    /// Deals `N` cards at once. Returns `None`, leaving the deck untouched,
    /// if fewer than `N` cards remain.
    pub fn deal_n<const N: usize>(&mut self) -> Option<[Card; N]> {
        if N > self.remaining {
            return None;
        }

        let mut out = [CARDS[0]; N];
        for slot in out.iter_mut() {
            *slot = self.deal_unchecked();
        }
        Some(out)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns `true` if no cards remain in the deck.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Replaces all previously dealt cards, leaving the shuffling RNG's
    /// state as-is (so a reset deck deals a fresh, still-deterministic,
    /// sequence rather than repeating the last one).
    pub fn reset(&mut self) {
        self.cards = CARDS;
        self.remaining = CARD_COUNT;
    }
}

impl Default for Deck {
    fn default() -> Deck {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_has_52_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        assert!(!deck.is_empty());
    }

    #[test]
    fn dealing_exhausts_the_deck_without_repeats() {
        let mut deck = Deck::with_seed(DEFAULT_SEED);
        let mut seen = [false; CARD_COUNT];
        let mut count = 0;
        while let Some(card) = deck.deal() {
            let idx = card.index();
            assert!(!seen[idx], "card {idx} dealt twice");
            seen[idx] = true;
            count += 1;
        }
        assert_eq!(count, CARD_COUNT);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn same_seed_deals_the_same_sequence() {
        let mut a = Deck::with_seed(42);
        let mut b = Deck::with_seed(42);
        for _ in 0..52 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn different_seeds_usually_diverge() {
        let mut a = Deck::with_seed(1);
        let mut b = Deck::with_seed(2);
        let diverged = (0..7).any(|_| a.deal() != b.deal());
        assert!(diverged);
    }

    #[test]
    fn deal_n_respects_remaining_count() {
        let mut deck = Deck::with_seed(DEFAULT_SEED);
        assert!(deck.deal_n::<53>().is_none());
        assert_eq!(deck.len(), 52);

        let hand = deck.deal_n::<7>().unwrap();
        assert_eq!(hand.len(), 7);
        assert_eq!(deck.len(), 45);
    }

    #[test]
    fn reset_restores_a_full_deck() {
        let mut deck = Deck::with_seed(DEFAULT_SEED);
        deck.deal_n::<10>().unwrap();
        deck.reset();
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn default_seed_is_reproducible_across_constructors() {
        let mut a = Deck::new();
        let mut b = Deck::with_seed(DEFAULT_SEED);
        for _ in 0..52 {
            assert_eq!(a.deal(), b.deal());
        }
    }
}
