use tracing::{debug, warn};

use crate::card::Card;
use crate::credits::Credits;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, Payout};

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round for the dealer without the dealer drawing. A
    /// total of exactly 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn or the shoe is
    /// empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = deck.draw()?;
        self.player.add_card(card);
        debug!(%card, player = self.player.value(), "player hits");

        let value = self.player.value();
        if value > BLACKJACK {
            self.settle(Outcome::DealerWin, Payout::Even);
        } else if value == BLACKJACK {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(player = self.player.value(), "player stands");
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// The doubled bet must be covered by `credits`, the balance at the time
    /// of the action. A rejected double leaves the round untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn, the doubled
    /// bet exceeds `credits`, or the shoe is empty.
    pub fn double_down(&mut self, deck: &mut Deck, credits: Credits) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let doubled = self.bet.saturating_mul(2);
        if !credits.covers(doubled) {
            warn!(bet = self.bet, %credits, "double down rejected");
            return Err(ActionError::InsufficientCredits);
        }

        let card = deck.draw()?;
        self.bet = doubled;
        self.doubled = true;
        self.player.add_card(card);
        debug!(%card, bet = self.bet, player = self.player.value(), "player doubles");

        if self.player.is_bust() {
            self.settle(Outcome::DealerWin, Payout::Even);
        } else {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }
}
