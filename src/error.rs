//! Error types for game operations.

use thiserror::Error;

/// A card was drawn from an empty shoe.
///
/// The session reshuffles at the start of every round, so this only surfaces
/// when that invariant is broken. It aborts the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyDeckError;

/// Errors that can occur while validating a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is higher than the current credits.
    #[error("bet can't be higher than credits")]
    InsufficientCredits,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Not enough credits to cover a doubled bet.
    #[error("not enough credits to double down")]
    InsufficientCredits,
    /// The shoe ran dry mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for the dealer turn.
    #[error("invalid round state for the dealer turn")]
    InvalidState,
    /// The shoe ran dry mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors raised by [`TableOptions::validate`](crate::TableOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Deck count outside the supported range.
    #[error("deck number must be between 6 and 8, got {0}")]
    DeckCount(u8),
    /// Starting credits of zero leave nothing to play with.
    #[error("starting credits must be positive")]
    ZeroCredits,
}

/// Malformed or out-of-range terminal input. Recovered by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input is not an integer.
    #[error("please enter a valid number")]
    NotANumber,
    /// Bet is negative.
    #[error("bet must be positive")]
    NegativeBet,
    /// Bet exceeds the balance.
    #[error("bet can't be higher than credits, you have {credits} credits")]
    BetTooHigh {
        /// Credits at the time of the prompt.
        credits: crate::Credits,
    },
    /// Deck count outside 6..=8.
    #[error("deck number must be between 6 and 8")]
    DeckCountOutOfRange,
    /// Unrecognized action.
    #[error("invalid input, please enter 1, 2, or 3")]
    UnknownAction,
}

/// Errors that abort a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Bet rejected by the session.
    #[error("bet rejected: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed unrecoverably.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer turn failed.
    #[error("dealer turn failed: {0}")]
    Dealer(#[from] DealerError),
    /// Terminal I/O failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
