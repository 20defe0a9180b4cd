use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use connect_four::config::AppConfig;
use connect_four::error::MoveError;
use connect_four::game::{GameEngine, GameResult, MoveOutcome, COLS};

/// Play a scripted Connect Four game and print the final position.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play a scripted game of Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the final position and status as JSON
    #[arg(long)]
    json: bool,

    /// Columns to play in order (1-7), or `r` to start a new game
    #[arg(required = true)]
    moves: Vec<Step>,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Drop(usize),
    Reset,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" | "reset" => Ok(Step::Reset),
            _ => s
                .parse()
                .map(Step::Drop)
                .map_err(|_| format!("expected a column number or 'r', got '{s}'")),
        }
    }
}

/// A rejected move, numbered the way the command line numbers columns.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum StepError {
    #[error("column {column} is out of range (1..={})", COLS)]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over; use 'r' to start a new game")]
    GameOver,
}

/// Play a 1-based command-line column through the engine.
fn play_column(engine: &mut GameEngine, column: usize) -> Result<MoveOutcome, StepError> {
    let index = column
        .checked_sub(1)
        .ok_or(StepError::InvalidColumn { column })?;
    engine.apply_move(index).map_err(|err| match err {
        MoveError::InvalidColumn { .. } => StepError::InvalidColumn { column },
        MoveError::ColumnFull { .. } => StepError::ColumnFull { column },
        MoveError::GameOver => StepError::GameOver,
    })
}

const DEFAULT_LOG_FILTER: &str = "connect_four=info";

/// Use `RUST_LOG` as given; the default only applies when it is unset or
/// unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(directives.as_deref()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let names = &config.players;

    let mut engine = GameEngine::new();
    for step in cli.moves {
        let column = match step {
            Step::Reset => {
                engine.reset();
                tracing::info!("new game");
                continue;
            }
            Step::Drop(column) => column,
        };

        let mover = engine.current_player();
        match play_column(&mut engine, column) {
            Ok(outcome) => {
                tracing::debug!(
                    player = names.name(mover),
                    column,
                    row = outcome.row,
                    "disc placed"
                );
                match outcome.result {
                    GameResult::Win(winner) => tracing::info!(winner = names.name(winner), "game won"),
                    GameResult::Draw => tracing::info!("game drawn"),
                    GameResult::InProgress => {}
                }
            }
            Err(err) => tracing::warn!(column, "move skipped: {err}"),
        }
    }

    if cli.json {
        let report = serde_json::json!({
            "status": engine.status(),
            "current_player": names.name(engine.current_player()),
            "board": engine.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", engine.board());
    println!();
    match engine.result() {
        GameResult::Win(winner) => println!("{} wins!", names.name(winner)),
        GameResult::Draw => println!("It's a draw!"),
        GameResult::InProgress => println!("{} to move", names.name(engine.current_player())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::game::Player;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_debug_directives() {
        assert_eq!(
            log_filter(Some("connect_four=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_step_parses_columns_and_reset() {
        assert!(matches!("4".parse::<Step>(), Ok(Step::Drop(4))));
        assert!(matches!("r".parse::<Step>(), Ok(Step::Reset)));
        assert!(matches!("reset".parse::<Step>(), Ok(Step::Reset)));
    }

    #[test]
    fn test_step_rejects_junk() {
        let err = "x".parse::<Step>().unwrap_err();
        assert_eq!(err, "expected a column number or 'r', got 'x'");
        assert!("-1".parse::<Step>().is_err());
    }

    #[test]
    fn test_play_column_is_one_based() {
        let mut engine = GameEngine::new();
        let outcome = play_column(&mut engine, 1).unwrap();
        assert_eq!(outcome.row, 5);
        assert_eq!(engine.board().get(5, 0), Some(Player::One));

        play_column(&mut engine, 7).unwrap();
        assert_eq!(engine.board().get(5, 6), Some(Player::Two));
    }

    #[test]
    fn test_play_column_reports_out_of_range_in_cli_numbers() {
        let mut engine = GameEngine::new();
        let err = play_column(&mut engine, 0).unwrap_err();
        assert_eq!(err, StepError::InvalidColumn { column: 0 });
        assert_eq!(err.to_string(), "column 0 is out of range (1..=7)");

        let err = play_column(&mut engine, 8).unwrap_err();
        assert_eq!(err.to_string(), "column 8 is out of range (1..=7)");
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_play_column_reports_full_column_in_cli_numbers() {
        let mut engine = GameEngine::new();
        for _ in 0..6 {
            play_column(&mut engine, 3).unwrap();
        }
        let err = play_column(&mut engine, 3).unwrap_err();
        assert_eq!(err, StepError::ColumnFull { column: 3 });
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_play_column_after_win() {
        let mut engine = GameEngine::new();
        for column in [1, 7, 2, 7, 3, 7, 4] {
            play_column(&mut engine, column).unwrap();
        }
        assert_eq!(engine.result(), GameResult::Win(Player::One));
        assert_eq!(play_column(&mut engine, 5), Err(StepError::GameOver));
    }
}
