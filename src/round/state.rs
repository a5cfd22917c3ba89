//! Round state types.

/// Round state.
///
/// A round moves strictly forward: `Dealing → PlayerTurn → DealerTurn →
/// Settled`. A natural or a player bust skips straight to `Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Bet placed, no cards dealt yet.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result is available.
    Settled,
}
