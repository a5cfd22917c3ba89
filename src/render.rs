//! ASCII art rendering for cards and the table.
//!
//! Everything here is pure: it turns cards and results into text and never
//! touches game state.

use core::fmt::Write as _;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};
use crate::round::Round;

/// Number of text lines in one card.
pub const CARD_HEIGHT: usize = 7;

const SEPARATOR: &str = "----------------------------------VS----------------------------------";

/// What is visible on the table at one moment.
#[derive(Debug, Clone, Copy)]
pub struct TableSnapshot<'a> {
    /// The player's hand.
    pub player: &'a Hand,
    /// The dealer's hand.
    pub dealer: &'a Hand,
    /// Whether the dealer's hole card is still face down.
    pub hole_hidden: bool,
}

impl<'a> TableSnapshot<'a> {
    /// Captures the visible state of a round.
    #[must_use]
    pub const fn of(round: &'a Round) -> Self {
        Self {
            player: round.player(),
            dealer: round.dealer(),
            hole_hidden: !round.is_hole_revealed(),
        }
    }
}

/// Renders one card as seven lines of eleven columns.
#[must_use]
pub fn card_art(card: &Card) -> [String; CARD_HEIGHT] {
    let label = card.label();
    let symbol = card.suit.symbol();
    [
        "+---------+".to_string(),
        format!("|{label:<2}       |"),
        "|         |".to_string(),
        format!("|    {symbol}    |"),
        "|         |".to_string(),
        format!("|       {label:>2}|"),
        "+---------+".to_string(),
    ]
}

/// Renders cards side by side, one space apart.
#[must_use]
pub fn hand_art(cards: &[Card]) -> String {
    let arts: Vec<[String; CARD_HEIGHT]> = cards.iter().map(card_art).collect();
    let mut out = String::new();
    for line in 0..CARD_HEIGHT {
        let row: Vec<&str> = arts.iter().map(|art| art[line].as_str()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Returns the text shown next to the separator once a round is settled.
#[must_use]
pub fn result_banner(result: &RoundResult) -> String {
    match result.outcome {
        Outcome::DealerWin => format!("DEALER WON {}", result.bet),
        Outcome::PlayerWin => format!("PLAYER WON {}!", result.payout.winnings(result.bet)),
        Outcome::Push => "PUSH".to_string(),
    }
}

/// Renders the dealer's hand, the separator, and the player's hand.
///
/// While the hole card is hidden only the dealer's up card is drawn and its
/// rank stands in for the total.
#[must_use]
pub fn table_art(table: &TableSnapshot<'_>, banner: Option<&str>) -> String {
    let mut out = String::new();

    match table.dealer.first() {
        Some(up) if table.hole_hidden => {
            let _ = writeln!(
                out,
                "Dealer's Hand: {} (Second card is hidden. Dealer stands on soft 17.)",
                up.label()
            );
            out.push_str(&hand_art(core::slice::from_ref(up)));
        }
        _ => {
            let _ = writeln!(
                out,
                "Dealer's Hand: {} (Dealer always stands on soft 17.)",
                table.dealer.value()
            );
            out.push_str(&hand_art(table.dealer.cards()));
        }
    }

    out.push_str(SEPARATOR);
    if let Some(banner) = banner {
        out.push(' ');
        out.push_str(banner);
    }
    out.push('\n');

    out.push_str(&hand_art(table.player.cards()));
    let _ = writeln!(out, "Your Hand: {}", table.player.value());
    out
}
