/*
board.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordchain.

Wordchain is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordchain is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordchain. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Letter grid.
//!
//! The board has one row per word of the chain.
//! The first and last rows (anchor rows) are revealed from the start, and so is the first
//! letter of every row, which links the rows together.
//! The [`Board`] object only knows about cells; the rules that decide when a cell changes
//! live in [`crate::game`].

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::chains::Chain;
use crate::config::CHAIN_LEN;

/// Status of a cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellStatus {
    /// No letter, editable.
    Empty,

    /// Letter entered by the player, not verified yet.
    Filled,

    /// Letter shown from the start.
    Revealed,

    /// Letter given by a hint.
    Hint,

    /// Letter of a solved row.
    Correct,

    /// Cell past the end of the word in a solved or anchor row.
    Solid,

    /// Letter shown after the player failed the row.
    Incorrect,
}

impl CellStatus {
    /// Whether the player can no longer change a cell in this status.
    pub fn is_permanent(self) -> bool {
        !matches!(self, CellStatus::Empty | CellStatus::Filled)
    }
}

/// Board cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Upper case letter, if any.
    pub letter: Option<char>,

    pub status: CellStatus,

    /// Whether the player can no longer change the cell.
    pub permanent: bool,
}

impl Cell {
    /// Create an editable empty cell.
    pub fn empty() -> Self {
        Self::with_status(None, CellStatus::Empty)
    }

    /// Create a cell. The permanent flag derives from the status.
    pub fn with_status(letter: Option<char>, status: CellStatus) -> Self {
        Self {
            letter: letter.map(|c| c.to_ascii_uppercase()),
            status,
            permanent: status.is_permanent(),
        }
    }
}

/// Grid of [`Cell`] objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Number of columns.
    width: usize,

    /// Rows of cells. Every row has [`Board::width`] cells.
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a [`Board`] object for the given chain.
    ///
    /// The words must fit in the grid, which [`Chain::new`] verifies.
    pub fn new(chain: &Chain, width: usize) -> Self {
        let rows: Vec<Vec<Cell>> = chain
            .words()
            .iter()
            .enumerate()
            .map(|(row, word)| {
                let letters: Vec<char> = word.chars().collect();
                (0..width)
                    .map(|col| {
                        if Self::is_anchor_row(row) {
                            match letters.get(col) {
                                Some(c) => Cell::with_status(Some(*c), CellStatus::Revealed),
                                None => Cell::with_status(None, CellStatus::Solid),
                            }
                        } else if col == 0 {
                            Cell::with_status(letters.first().copied(), CellStatus::Revealed)
                        } else {
                            Cell::empty()
                        }
                    })
                    .collect()
            })
            .collect();
        Self { width, rows }
    }

    /// Whether the row is revealed from the start.
    pub fn is_anchor_row(row: usize) -> bool {
        row == 0 || row == CHAIN_LEN - 1
    }

    /// Indexes of the rows that the player must solve.
    pub fn guess_rows() -> std::ops::Range<usize> {
        1..CHAIN_LEN - 1
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Return the cell at the given position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Return the cells of a row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// Return all the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Replace a cell.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.rows[row][col] = cell;
    }

    /// Return the word entered in a row, in lower case.
    ///
    /// Cells without letters are skipped.
    pub fn entered_word(&self, row: usize) -> String {
        self.rows[row]
            .iter()
            .filter_map(|c| c.letter)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Whether every cell of the row is permanent.
    pub fn is_row_permanent(&self, row: usize) -> bool {
        self.rows[row].iter().all(|c| c.permanent)
    }

    /// Whether the row has been solved by the player.
    pub fn is_row_solved(&self, row: usize) -> bool {
        self.rows[row]
            .iter()
            .all(|c| matches!(c.status, CellStatus::Correct | CellStatus::Solid))
    }

    /// Return the columns that the player can still edit in the row.
    pub fn editable_columns(&self, row: usize) -> Vec<usize> {
        self.rows[row]
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.permanent)
            .map(|(i, _)| i)
            .collect()
    }

    /// Clear the cells that the player can edit in the row.
    pub fn clear_row(&mut self, row: usize) {
        for cell in self.rows[row].iter_mut().filter(|c| !c.permanent) {
            *cell = Cell::empty();
        }
    }

    /// Write the solved word over the row: cells inside the word become correct, cells past
    /// the word become solid.
    pub fn solve_row(&mut self, row: usize, word: &str) {
        let letters: Vec<char> = word.chars().collect();
        for (col, cell) in self.rows[row].iter_mut().enumerate() {
            *cell = match letters.get(col) {
                Some(c) => Cell::with_status(Some(*c), CellStatus::Correct),
                None => Cell::with_status(None, CellStatus::Solid),
            };
        }
    }

    /// Show the answer of a failed row: every cell of the row becomes incorrect, with the
    /// letter of the word when the cell is inside the word.
    pub fn reveal_row(&mut self, row: usize, word: &str) {
        let letters: Vec<char> = word.chars().collect();
        for (col, cell) in self.rows[row].iter_mut().enumerate() {
            *cell = Cell::with_status(letters.get(col).copied(), CellStatus::Incorrect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let chain = Chain::new(&["moon", "light", "bulb", "head", "start"], 10).unwrap();
        Board::new(&chain, 10)
    }

    #[test]
    fn anchor_rows_are_revealed() {
        let board = board();
        assert_eq!(board.height(), 5);
        for row in [0, 4] {
            assert!(board.is_row_permanent(row));
        }
        assert_eq!(board.cell(0, 3).unwrap().letter, Some('N'));
        assert_eq!(board.cell(0, 3).unwrap().status, CellStatus::Revealed);
        assert_eq!(board.cell(0, 4).unwrap().status, CellStatus::Solid);
        assert_eq!(board.cell(4, 4).unwrap().letter, Some('T'));
    }

    #[test]
    fn guess_rows_start_empty() {
        let board = board();
        for row in Board::guess_rows() {
            let first = board.cell(row, 0).unwrap();
            assert!(first.permanent);
            assert_eq!(first.status, CellStatus::Revealed);
            assert_eq!(board.editable_columns(row), (1..10).collect::<Vec<usize>>());
        }
        assert_eq!(board.cell(2, 0).unwrap().letter, Some('B'));
    }

    #[test]
    fn entered_word_skips_empty_cells() {
        let mut board = board();
        board.set_cell(1, 1, Cell::with_status(Some('i'), CellStatus::Filled));
        board.set_cell(1, 3, Cell::with_status(Some('g'), CellStatus::Filled));
        assert_eq!(board.entered_word(1), "lig");
        board.clear_row(1);
        assert_eq!(board.entered_word(1), "l");
    }

    #[test]
    fn solve_row_marks_solid_cells() {
        let mut board = board();
        board.solve_row(2, "bulb");
        assert!(board.is_row_permanent(2));
        assert!(board.is_row_solved(2));
        assert_eq!(board.cell(2, 3).unwrap().letter, Some('B'));
        assert_eq!(board.cell(2, 4).unwrap().letter, None);
        assert_eq!(board.cell(2, 4).unwrap().status, CellStatus::Solid);
    }

    #[test]
    fn reveal_row_marks_every_cell_incorrect() {
        let mut board = board();
        board.reveal_row(2, "bulb");
        assert!(board.is_row_permanent(2));
        assert!(!board.is_row_solved(2));
        assert!(
            board
                .row(2)
                .iter()
                .all(|c| c.status == CellStatus::Incorrect)
        );
        assert_eq!(board.cell(2, 1).unwrap().letter, Some('U'));
        assert_eq!(board.cell(2, 9).unwrap().letter, None);
    }

    #[test]
    fn status_names() {
        assert_eq!(CellStatus::Incorrect.to_string(), "incorrect");
        assert!(!CellStatus::Filled.is_permanent());
        assert!(CellStatus::Hint.is_permanent());
    }
}
