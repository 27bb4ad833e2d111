#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use gomoku::{init_logging, CliInput, CliView, Match, Roster, BOARD_SIZE, WIN_LENGTH};
#[cfg(feature = "std")]
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Two-player five-in-a-row on the console", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name shown for the first player (X).
    #[arg(long, default_value = "Player X")]
    x_name: String,
    /// Name shown for the second player (O).
    #[arg(long, default_value = "Player O")]
    o_name: String,
    #[arg(long, help = "Log level (off, error, warn, info, debug, trace); overrides GOMOKU_LOG")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    println!("Welcome to Gomoku!");
    println!(
        "Board is {0}x{0}, rows and columns numbered 0-{1}. Line up {2} to win.",
        BOARD_SIZE,
        BOARD_SIZE - 1,
        WIN_LENGTH
    );

    let roster = Roster::new(cli.x_name, cli.o_name);
    let mut source = CliInput::new(roster.clone(), std::io::stdin().lock(), std::io::stdout());
    let mut view = CliView::new(roster, std::io::stdout());
    let mut game = Match::new();
    game.run(&mut source, &mut view)
        .context("game ended before a result")?;
    Ok(())
}
