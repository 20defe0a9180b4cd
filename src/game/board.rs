use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Discs in a row needed to win.
pub const CONNECT: usize = 4;

/// Row-major cell grid. Row 0 is the top, row `ROWS - 1` the bottom.
pub type Grid = [[Option<Player>; COLS]; ROWS];

/// (row, col) steps for the four lines through a cell.
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (-1, 1), // Diagonal /
    (1, 1),  // Diagonal \
];

/// Cells scanned on each side of the placed disc.
const REACH: isize = CONNECT as isize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Bounds-checked lookup. Positions off the grid read as empty.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col].is_some()
    }

    /// Row a disc dropped into `col` would land on, if the column has room
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = Some(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Check whether `player` has four in a row on any line through
    /// (row, col).
    ///
    /// Each line is a 7-cell window centred on the position. The run counter
    /// resets on any empty, opposing or off-grid cell.
    pub fn completes_four(&self, row: usize, col: usize, player: Player) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.line_has_four(row as isize, col as isize, dr, dc, player))
    }

    fn line_has_four(&self, row: isize, col: isize, dr: isize, dc: isize, player: Player) -> bool {
        let mut chain = 0;
        for offset in -REACH..=REACH {
            if self.cell_at(row + offset * dr, col + offset * dc) == Some(player) {
                chain += 1;
                if chain == CONNECT {
                    return true;
                }
            } else {
                chain = 0;
            }
        }
        false
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    /// Owned copy of the cells
    pub fn grid(&self) -> Grid {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = cell.map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", col + 1)?;
        }
        Ok(())
    }
}
