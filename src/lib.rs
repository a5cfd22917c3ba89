//! A terminal blackjack game against a fixed-policy dealer.
//!
//! The crate provides a [`Round`] state machine that runs one hand from deal
//! to settlement, a [`Session`] that carries the credit balance and the shoe
//! across rounds, and a [`Console`] that plays the game over any text
//! reader and writer with ASCII card art.
//!
//! # Example
//!
//! ```no_run
//! use asciijack::{Console, Session, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut session = Session::start(options, 42);
//! let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let end = session.run(&mut console).unwrap();
//! let _ = end;
//! ```

pub mod card;
pub mod console;
pub mod credits;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod render;
pub mod result;
pub mod round;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::Console;
pub use credits::Credits;
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DealerError, EmptyDeckError, InputError, OptionsError,
    SessionError,
};
pub use hand::Hand;
pub use options::TableOptions;
pub use render::TableSnapshot;
pub use result::{Outcome, Payout, RoundResult};
pub use round::{Round, RoundState};
pub use session::{Action, PlayerInput, RoundStatus, Session, SessionEnd, TableView};
