//! Credit balance arithmetic.

use core::fmt;

/// A credit balance.
///
/// Stored in half-credit units: bets are whole credits, but a 3:2 blackjack
/// payout on an odd bet produces a half credit that must not be rounded away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Credits(u64);

impl Credits {
    /// An empty balance.
    pub const ZERO: Self = Self(0);

    /// Creates a balance of `whole` credits.
    #[must_use]
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole.saturating_mul(2))
    }

    /// Creates a balance from half-credit units.
    #[must_use]
    pub const fn from_halves(halves: u64) -> Self {
        Self(halves)
    }

    /// Returns the balance in half-credit units.
    #[must_use]
    pub const fn halves(self) -> u64 {
        self.0
    }

    /// Returns the whole-credit part of the balance.
    #[must_use]
    pub const fn whole(self) -> u64 {
        self.0 / 2
    }

    /// Returns whether the balance is empty.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the balance can cover `amount` whole credits.
    #[must_use]
    pub const fn covers(self, amount: u64) -> bool {
        match amount.checked_mul(2) {
            Some(halves) => halves <= self.0,
            None => false,
        }
    }

    /// Adds `halves` half-credit units.
    #[must_use]
    pub const fn plus_halves(self, halves: u64) -> Self {
        Self(self.0.saturating_add(halves))
    }

    /// Removes `amount` whole credits, bottoming out at zero.
    #[must_use]
    pub const fn minus_whole(self, amount: u64) -> Self {
        Self(self.0.saturating_sub(amount.saturating_mul(2)))
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.whole())
        } else {
            write!(f, "{}.5", self.whole())
        }
    }
}
