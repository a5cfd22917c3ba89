//! The shoe: a multi-deck card supply with reshuffle-when-low.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::EmptyDeckError;

/// Remaining-card count below which the shoe is rebuilt.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 50;

/// The undealt cards of one or more 52-card decks.
///
/// Cards are shuffled when the shoe is built, so drawing from the top is the
/// same as removing a uniformly random remaining card.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undealt cards; the next draw is the last element.
    cards: Vec<Card>,
    /// Number of 52-card decks in a full shoe.
    deck_count: u8,
    /// Reshuffle when fewer than this many cards remain.
    threshold: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds and shuffles a shoe of `deck_count` decks.
    ///
    /// The deck count is not validated here; see
    /// [`TableOptions::validate`](crate::TableOptions::validate).
    ///
    /// ```
    /// use asciijack::Deck;
    ///
    /// let deck = Deck::new(6, 42);
    /// assert_eq!(deck.remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(deck_count: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_shoe(deck_count, &mut rng);

        Self {
            cards,
            deck_count,
            threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            rng,
        }
    }

    /// Creates a shoe whose next draws are exactly `draws`, in order.
    ///
    /// Reshuffling still rebuilds a full shoe of `deck_count` decks.
    #[must_use]
    pub fn stacked(deck_count: u8, draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();

        Self {
            cards,
            deck_count,
            threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Sets the low-water mark below which the shoe is rebuilt.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    fn create_shoe(deck_count: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in RANKS {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns whether fewer cards remain than the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() < self.threshold
    }

    /// Rebuilds the full shoe and shuffles it.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_shoe(self.deck_count, &mut self.rng);
        debug!(decks = self.deck_count, cards = self.cards.len(), "shoe reshuffled");
    }

    /// Checks the threshold and reshuffles if needed.
    ///
    /// This should be called at the start of a round, before dealing.
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}
