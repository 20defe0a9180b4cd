//! Core Connect Four game logic: board representation, player identity, and
//! the engine that applies moves and tracks the outcome.

mod board;
mod engine;
mod player;

pub use board::{Board, Grid, COLS, CONNECT, ROWS};
pub use engine::{GameEngine, GameResult, GameStatus, MoveOutcome};
pub use player::Player;
