//! Terminal blackjack.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use asciijack::options::{DEFAULT_STARTING_CREDITS, TableOptions};
use asciijack::{Console, Credits, PlayerInput, Session};
use clap::Parser;
use tracing::{Level, info};

/// Play blackjack against the dealer in your terminal.
#[derive(Parser, Debug)]
#[command(name = "asciijack", version, about)]
struct Args {
    /// Number of decks in the shoe (asked interactively when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(6..=8))]
    decks: Option<u8>,

    /// Starting credits
    #[arg(long, default_value_t = DEFAULT_STARTING_CREDITS)]
    credits: u64,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the dealing delays
    #[arg(long)]
    fast: bool,

    /// Log game events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let pace = if args.fast {
        Duration::ZERO
    } else {
        TableOptions::default().pace
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock()).with_pace(pace);

    console
        .welcome(Credits::from_whole(args.credits))
        .context("failed to write to the terminal")?;

    let decks = match args.decks {
        Some(decks) => decks,
        None => console.deck_count().context("failed to read the deck count")?,
    };

    let options = TableOptions::default()
        .with_decks(decks)
        .with_starting_credits(args.credits)
        .with_pace(pace);
    options.validate().context("invalid table options")?;

    let seed = args.seed.unwrap_or_else(time_seed);
    info!(seed, decks, "shuffling shoe");

    let mut session = Session::start(options, seed);
    session.run(&mut console).context("game aborted")?;

    Ok(())
}
