//! Terminal front end: prompts, input parsing and table output.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::credits::Credits;
use crate::error::InputError;
use crate::options::DECK_COUNT_RANGE;
use crate::render::{TableSnapshot, result_banner, table_art};
use crate::result::RoundResult;
use crate::session::{Action, PlayerInput, SessionEnd, TableView};

const SHUFFLE_DOTS: usize = 10;
const DEAL_DOTS: usize = 3;

fn parse_integer(input: &str) -> Result<i64, InputError> {
    input.trim().parse().map_err(|_| InputError::NotANumber)
}

/// Parses a deck count between 6 and 8.
///
/// # Errors
///
/// Returns an error if the input is not a number or is out of range.
pub fn parse_deck_count(input: &str) -> Result<u8, InputError> {
    let value = parse_integer(input)?;
    u8::try_from(value)
        .ok()
        .filter(|decks| DECK_COUNT_RANGE.contains(decks))
        .ok_or(InputError::DeckCountOutOfRange)
}

/// Parses a bet between 0 and `credits`. Zero is the signal to leave.
///
/// # Errors
///
/// Returns an error if the input is not a number, is negative, or exceeds
/// `credits`.
pub fn parse_bet(input: &str, credits: Credits) -> Result<u64, InputError> {
    let value = parse_integer(input)?;
    let bet = u64::try_from(value).map_err(|_| InputError::NegativeBet)?;
    if !credits.covers(bet) {
        return Err(InputError::BetTooHigh { credits });
    }
    Ok(bet)
}

/// Parses an action: `1`/`h`/`hit`, `2`/`d`/`double` or `3`/`s`/`stand`.
///
/// # Errors
///
/// Returns an error for anything else.
pub fn parse_action(input: &str) -> Result<Action, InputError> {
    match input.trim().to_lowercase().as_str() {
        "1" | "h" | "hit" => Ok(Action::Hit),
        "2" | "d" | "double" => Ok(Action::Double),
        "3" | "s" | "stand" => Ok(Action::Stand),
        _ => Err(InputError::UnknownAction),
    }
}

/// A text console over any line reader and writer.
///
/// Implements both [`PlayerInput`] and [`TableView`], so a session can be
/// driven from stdin/stdout or from in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pace: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console without pacing delays.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pace: Duration::ZERO,
        }
    }

    /// Sets the cosmetic delay used for dealing and dealer draws.
    #[must_use]
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the greeting and the starting balance.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn welcome(&mut self, credits: Credits) -> io::Result<()> {
        writeln!(self.output, "Welcome to ASCII Blackjack!\n")?;
        self.sleep();
        writeln!(self.output, "Starting with {credits} credits.")?;
        self.sleep();
        Ok(())
    }

    fn sleep(&self) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    /// Reads one line after printing `prompt`. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts until `parse` accepts the input. `None` at end of input.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        while let Some(line) = self.read_line(prompt)? {
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "Error: {err}.")?,
            }
        }
        Ok(None)
    }

    fn dots(&mut self, message: &str, count: usize) -> io::Result<()> {
        write!(self.output, "{message}")?;
        for _ in 0..count {
            self.output.flush()?;
            self.sleep();
            write!(self.output, ".")?;
        }
        writeln!(self.output)
    }
}

fn end_of_input(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("input closed while waiting for {what}"),
    )
}

impl<R: BufRead, W: Write> PlayerInput for Console<R, W> {
    fn deck_count(&mut self) -> io::Result<u8> {
        self.prompt("How many decks do you want to play with? ", parse_deck_count)?
            .ok_or_else(|| end_of_input("a deck count"))
    }

    fn bet(&mut self, credits: Credits) -> io::Result<u64> {
        // Closed input leaves the table.
        Ok(self
            .prompt("Bet amount: ", |line| parse_bet(line, credits))?
            .unwrap_or(0))
    }

    fn action(&mut self) -> io::Result<Action> {
        self.prompt(
            "What do you want to do? (Hit = 1 Double = 2 Stand = 3)\n",
            parse_action,
        )?
        .ok_or_else(|| end_of_input("an action"))
    }
}

impl<R: BufRead, W: Write> TableView for Console<R, W> {
    fn shuffling(&mut self) -> io::Result<()> {
        self.dots("Deck is low. Shuffling deck", SHUFFLE_DOTS)
    }

    fn dealing(&mut self) -> io::Result<()> {
        self.dots("Dealing cards", DEAL_DOTS)
    }

    fn show_table(&mut self, table: &TableSnapshot<'_>) -> io::Result<()> {
        write!(self.output, "{}", table_art(table, None))
    }

    fn double_rejected(&mut self, credits: Credits) -> io::Result<()> {
        writeln!(
            self.output,
            "Not enough credits to double down. You have {credits} credits."
        )
    }

    fn round_over(&mut self, result: &RoundResult, table: &TableSnapshot<'_>) -> io::Result<()> {
        let banner = result_banner(result);
        write!(self.output, "{}", table_art(table, Some(&banner)))
    }

    fn credits(&mut self, credits: Credits) -> io::Result<()> {
        writeln!(self.output, "\nCredits left: {credits}")
    }

    fn session_over(&mut self, end: SessionEnd) -> io::Result<()> {
        match end {
            SessionEnd::Left(credits) => {
                writeln!(self.output, "You left the table with {credits} credits.")
            }
            SessionEnd::Broke => writeln!(self.output, "No credits left. The house always wins."),
        }
    }

    fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        self.sleep();
        Ok(())
    }
}
