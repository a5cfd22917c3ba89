//! Round engine: one hand of blackjack from deal to settlement.

use tracing::debug;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::{Outcome, Payout, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::RoundState;

/// A single round between the player and the dealer.
///
/// The round owns both hands and the bet. The deck is borrowed per call, so
/// the session keeps the shoe across rounds.
///
/// # Example
///
/// ```
/// use asciijack::{Card, Deck, Outcome, Round, RoundState, Suit};
///
/// let mut deck = Deck::stacked(
///     6,
///     &[
///         Card::new(Suit::Spades, 10), // player
///         Card::new(Suit::Hearts, 8),  // player
///         Card::new(Suit::Clubs, 10),  // dealer up
///         Card::new(Suit::Diamonds, 9), // dealer hole
///     ],
/// );
/// let mut round = Round::new(100);
/// round.deal(&mut deck).unwrap();
/// round.stand().unwrap();
/// round.dealer_play(&mut deck).unwrap();
///
/// assert_eq!(round.state(), RoundState::Settled);
/// assert_eq!(round.outcome(), Some(Outcome::DealerWin));
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; the second card is the hole card.
    dealer: Hand,
    /// Current bet.
    bet: u64,
    /// Multiplier for a player win.
    payout: Payout,
    /// Whether the bet was doubled.
    doubled: bool,
    /// Whether the hole card is face up.
    hole_revealed: bool,
    /// Current state.
    state: RoundState,
    /// Set once the round is settled.
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a round with the given bet, ready to deal.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            bet,
            payout: Payout::Even,
            doubled: false,
            hole_revealed: false,
            state: RoundState::Dealing,
            outcome: None,
        }
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// A natural settles the round at once: player blackjack against a dealer
    /// without one pays 3:2, two naturals push. Otherwise the round moves to
    /// the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the shoe holds
    /// fewer than four cards.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if deck.remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        debug!(
            bet = self.bet,
            player = self.player.value(),
            dealer_up = ?self.dealer.first(),
            "dealt"
        );

        // Two cards can only reach 21 as a natural.
        if self.player.value() >= BLACKJACK {
            if self.dealer.is_blackjack() {
                self.settle(Outcome::Push, Payout::Even);
            } else {
                self.settle(Outcome::PlayerWin, Payout::Blackjack);
            }
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    fn settle(&mut self, outcome: Outcome, payout: Payout) {
        self.hole_revealed = true;
        self.payout = payout;
        self.outcome = Some(outcome);
        self.state = RoundState::Settled;
        debug!(
            ?outcome,
            ?payout,
            bet = self.bet,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round settled"
        );
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the payout multiplier for a player win.
    #[must_use]
    pub const fn payout(&self) -> Payout {
        self.payout
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's hole card is face up.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the outcome once the round is settled.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the settlement details once the round is settled.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        let outcome = self.outcome?;
        Some(RoundResult {
            outcome,
            bet: self.bet,
            payout: self.payout,
            doubled: self.doubled,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            player_blackjack: self.player.is_blackjack(),
            dealer_blackjack: self.dealer.is_blackjack(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
        })
    }
}
