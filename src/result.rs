//! Round result types for settlement.

use crate::credits::Credits;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (natural, dealer busts, or higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Push (tie). The bet is returned unchanged.
    Push,
}

/// Payout multiplier applied to a winning bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payout {
    /// Even money (1:1).
    #[default]
    Even,
    /// Natural blackjack (3:2).
    Blackjack,
}

impl Payout {
    /// Returns the winnings for `bet`, in half-credit units.
    #[must_use]
    pub const fn winnings_halves(self, bet: u64) -> u64 {
        match self {
            Self::Even => bet.saturating_mul(2),
            Self::Blackjack => bet.saturating_mul(3),
        }
    }

    /// Returns the winnings for `bet` as a balance.
    #[must_use]
    pub const fn winnings(self, bet: u64) -> Credits {
        Credits::from_halves(self.winnings_halves(bet))
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final bet, after any double down.
    pub bet: u64,
    /// The payout multiplier for a player win.
    pub payout: Payout,
    /// Whether the bet was doubled.
    pub doubled: bool,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player had a natural.
    pub player_blackjack: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Applies the result to a balance.
    ///
    /// A player win adds `bet × multiplier`, a dealer win removes `bet`, and a
    /// push leaves the balance unchanged.
    #[must_use]
    pub const fn apply(&self, credits: Credits) -> Credits {
        match self.outcome {
            Outcome::PlayerWin => credits.plus_halves(self.payout.winnings_halves(self.bet)),
            Outcome::DealerWin => credits.minus_whole(self.bet),
            Outcome::Push => credits,
        }
    }
}
