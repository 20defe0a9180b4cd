use serde::{Deserialize, Serialize};

use super::{Board, Grid, Player, COLS};
use crate::error::MoveError;

/// Result of the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Where the engine sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Empty,
    InProgress,
    Won(Player),
    Drawn,
}

/// Returned by a successful [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub row: usize,
    pub result: GameResult,
}

/// Owns one game: board, turn and outcome.
///
/// Mutations take `&mut self`; callers sharing an engine across threads or
/// clients must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    result: GameResult,
    last_move: Option<(usize, usize)>,
}

impl GameEngine {
    /// Create an empty game with Player One to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            result: GameResult::InProgress,
            last_move: None,
        }
    }

    /// Get current player. After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the grid for rendering
    pub fn snapshot(&self) -> Grid {
        self.board.grid()
    }

    /// Get result of the latest move
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Get lifecycle position (empty, in progress, won or drawn)
    pub fn status(&self) -> GameStatus {
        match self.result {
            GameResult::Win(player) => GameStatus::Won(player),
            GameResult::Draw => GameStatus::Drawn,
            GameResult::InProgress if self.last_move.is_none() => GameStatus::Empty,
            GameResult::InProgress => GameStatus::InProgress,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Number of discs placed this game
    pub fn move_count(&self) -> usize {
        self.board.disc_count()
    }

    /// (row, col) of the most recent disc this game
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Drop the current player's disc into `column`.
    ///
    /// The win check runs for the mover before the turn flag changes; the
    /// turn only toggles when the game stays in progress.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_disc(column, mover)?;
        self.last_move = Some((row, column));

        self.result = if self.board.completes_four(row, column, mover) {
            GameResult::Win(mover)
        } else if self.board.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        };

        if self.result == GameResult::InProgress {
            self.current_player = mover.other();
        }

        Ok(MoveOutcome {
            row,
            result: self.result,
        })
    }

    /// Clear the board and hand the first move back to Player One
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.result = GameResult::InProgress;
        self.last_move = None;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
