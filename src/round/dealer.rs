use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealerError;
use crate::result::{Outcome, Payout};

use super::{Round, RoundState};

/// The dealer draws below this total and stands on it or above, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Plays one step of the dealer's fixed policy.
    ///
    /// Reveals the hole card, then draws one card if the dealer is below 17
    /// and returns it. Once the dealer stands the round is settled and `None`
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_step(&mut self, deck: &mut Deck) -> Result<Option<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.hole_revealed = true;

        if self.dealer.value() < DEALER_STANDS_ON {
            let card = deck.draw()?;
            self.dealer.add_card(card);
            debug!(%card, dealer = self.dealer.value(), "dealer draws");
            return Ok(Some(card));
        }

        self.showdown();
        Ok(None)
    }

    /// Dealer plays their hand to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_step(deck)? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Compares the standing hands. Only reached without a natural, so a
    /// player win always pays even money here.
    fn showdown(&mut self) {
        let outcome = if self.dealer.is_bust() {
            Outcome::PlayerWin
        } else {
            match self.dealer.value().cmp(&self.player.value()) {
                Ordering::Greater => Outcome::DealerWin,
                Ordering::Less => Outcome::PlayerWin,
                Ordering::Equal => Outcome::Push,
            }
        };

        self.settle(outcome, Payout::Even);
    }
}
