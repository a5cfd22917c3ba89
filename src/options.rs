//! Table configuration options.

use core::ops::RangeInclusive;
use core::time::Duration;

use crate::credits::Credits;
use crate::deck::DEFAULT_RESHUFFLE_THRESHOLD;
use crate::error::OptionsError;

/// Supported number of decks in the shoe.
pub const DECK_COUNT_RANGE: RangeInclusive<u8> = 6..=8;

/// Credits a new session starts with.
pub const DEFAULT_STARTING_CREDITS: u64 = 10_000;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use asciijack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_starting_credits(500);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks.
    pub decks: u8,
    /// Reshuffle when fewer than this many cards remain at round start.
    pub reshuffle_threshold: usize,
    /// Credits the session starts with.
    pub starting_credits: u64,
    /// Cosmetic delay between dealt cards. Zero disables pacing.
    pub pace: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            starting_credits: DEFAULT_STARTING_CREDITS,
            pace: Duration::from_secs(1),
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use asciijack::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(7);
    /// assert_eq!(options.decks, 7);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting credits.
    #[must_use]
    pub const fn with_starting_credits(mut self, credits: u64) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Sets the pacing delay.
    #[must_use]
    pub const fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Returns the starting balance.
    #[must_use]
    pub const fn credits(&self) -> Credits {
        Credits::from_whole(self.starting_credits)
    }

    /// Checks the options against the table limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is outside 6..=8 or the starting
    /// credits are zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !DECK_COUNT_RANGE.contains(&self.decks) {
            return Err(OptionsError::DeckCount(self.decks));
        }
        if self.starting_credits == 0 {
            return Err(OptionsError::ZeroCredits);
        }
        Ok(())
    }
}
