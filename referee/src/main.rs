use std::path::PathBuf;

use clap::Parser;
use referee::{play_game, Recorder};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Two-player tic-tac-toe on the console.
///
/// Players take turns typing the row and column of their next move, e.g.
/// `2 3`. X moves first.
#[derive(Parser)]
struct Args {
    /// Record the game's moves and result as JSON into this file
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut recorder = if let Some(path) = args.record {
        Some(Recorder::new(path)?)
    } else {
        None
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    play_game(stdin, &mut stdout, &mut recorder)?;

    Ok(())
}

// Logs go to stderr, stdout belongs to the game.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
