//! Session: the credit balance and the shoe across rounds.

use std::io;

use tracing::{debug, info};

use crate::credits::Credits;
use crate::deck::Deck;
use crate::error::{ActionError, BetError, DealerError, SessionError};
use crate::options::TableOptions;
use crate::render::TableSnapshot;
use crate::result::RoundResult;
use crate::round::{Round, RoundState};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Double the bet, draw exactly one card, end the turn.
    Double,
    /// End the turn.
    Stand,
}

/// Source of player decisions.
///
/// Implementations re-prompt on malformed input and only return valid
/// values.
pub trait PlayerInput {
    /// Asks for the number of decks in the shoe (6 to 8).
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn deck_count(&mut self) -> io::Result<u8>;

    /// Asks for a bet between 0 and `credits`. Zero means leave the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn bet(&mut self, credits: Credits) -> io::Result<u64>;

    /// Asks for the next action.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn action(&mut self) -> io::Result<Action>;
}

/// Sink for everything the player gets to see.
///
/// The session calls these after each transition that changes visible
/// information. Implementations must not affect the game; their methods
/// fail only when writing to the output fails.
pub trait TableView {
    /// The shoe is being rebuilt.
    fn shuffling(&mut self) -> io::Result<()>;

    /// Cards are about to be dealt.
    fn dealing(&mut self) -> io::Result<()>;

    /// The table changed.
    fn show_table(&mut self, table: &TableSnapshot<'_>) -> io::Result<()>;

    /// A double down was refused for lack of credits.
    fn double_rejected(&mut self, credits: Credits) -> io::Result<()>;

    /// The round is settled.
    fn round_over(&mut self, result: &RoundResult, table: &TableSnapshot<'_>) -> io::Result<()>;

    /// The balance after settlement.
    fn credits(&mut self, credits: Credits) -> io::Result<()>;

    /// The session is over.
    fn session_over(&mut self, end: SessionEnd) -> io::Result<()>;

    /// Cosmetic pause between dealer draws.
    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What happened in [`Session::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// A round was played and settled.
    Played(RoundResult),
    /// The player bet zero and left. No round was played.
    Left,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player left with this balance.
    Left(Credits),
    /// The player can no longer cover a bet. The house wins.
    Broke,
}

/// A player's stay at the table.
///
/// The session owns the balance and the shoe. Each round borrows the shoe and
/// hands back a [`RoundResult`] that the session applies to the balance.
#[derive(Debug, Clone)]
pub struct Session {
    /// Table options.
    options: TableOptions,
    /// Current balance.
    credits: Credits,
    /// The shoe, kept across rounds.
    deck: Deck,
    /// Rounds settled so far.
    rounds_played: u32,
}

impl Session {
    /// Starts a session with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use asciijack::{Session, TableOptions};
    ///
    /// let session = Session::start(TableOptions::default().with_decks(8), 7);
    /// assert_eq!(session.credits().whole(), 10_000);
    /// assert_eq!(session.deck().remaining(), 8 * 52);
    /// ```
    #[must_use]
    pub fn start(options: TableOptions, seed: u64) -> Self {
        let deck = Deck::new(options.decks, seed).with_threshold(options.reshuffle_threshold);
        Self::with_deck(options, deck)
    }

    /// Starts a session with the given shoe.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        info!(
            credits = options.starting_credits,
            decks = deck.deck_count(),
            "session started"
        );
        Self {
            credits: options.credits(),
            options,
            deck,
            rounds_played: 0,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn credits(&self) -> Credits {
        self.credits
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Checks a bet against the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or exceeds the balance.
    pub const fn validate_bet(&self, bet: u64) -> Result<(), BetError> {
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.credits.covers(bet) {
            return Err(BetError::InsufficientCredits);
        }
        Ok(())
    }

    /// Plays one round.
    ///
    /// Reshuffles the shoe if it is low, takes a bet (zero leaves the table),
    /// deals, runs the player's turn and the dealer's turn, then applies the
    /// result to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is invalid, the shoe runs dry mid-round, or
    /// the table's input or output fails.
    pub fn play_round<T>(&mut self, table: &mut T) -> Result<RoundStatus, SessionError>
    where
        T: PlayerInput + TableView,
    {
        if self.deck.check_and_reshuffle() {
            table.shuffling()?;
        }

        let bet = table.bet(self.credits)?;
        if bet == 0 {
            info!(credits = %self.credits, "player left the table");
            return Ok(RoundStatus::Left);
        }
        self.validate_bet(bet)?;

        table.dealing()?;
        let mut round = Round::new(bet);
        round.deal(&mut self.deck)?;
        table.show_table(&TableSnapshot::of(&round))?;

        while round.state() == RoundState::PlayerTurn {
            match table.action()? {
                Action::Hit => {
                    round.hit(&mut self.deck)?;
                }
                Action::Stand => round.stand()?,
                Action::Double => match round.double_down(&mut self.deck, self.credits) {
                    Ok(_) => {}
                    Err(ActionError::InsufficientCredits) => {
                        table.double_rejected(self.credits)?;
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                },
            }

            if round.state() != RoundState::Settled {
                table.show_table(&TableSnapshot::of(&round))?;
            }
        }

        while round.state() == RoundState::DealerTurn {
            if round.dealer_step(&mut self.deck)?.is_some() {
                table.pause()?;
                table.show_table(&TableSnapshot::of(&round))?;
            }
        }

        let result = round.result().ok_or(DealerError::InvalidState)?;
        self.credits = result.apply(self.credits);
        self.rounds_played += 1;
        debug!(
            outcome = ?result.outcome,
            bet = result.bet,
            credits = %self.credits,
            "credits settled"
        );

        table.round_over(&result, &TableSnapshot::of(&round))?;
        table.credits(self.credits)?;

        Ok(RoundStatus::Played(result))
    }

    /// Plays rounds until the player leaves or can no longer bet.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Session::play_round`].
    pub fn run<T>(&mut self, table: &mut T) -> Result<SessionEnd, SessionError>
    where
        T: PlayerInput + TableView,
    {
        let end = loop {
            if self.credits.whole() == 0 {
                break SessionEnd::Broke;
            }
            if self.play_round(table)? == RoundStatus::Left {
                break SessionEnd::Left(self.credits);
            }
        };

        info!(?end, rounds = self.rounds_played, "session over");
        table.session_over(end)?;
        Ok(end)
    }
}
