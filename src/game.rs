/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object is the puzzle state machine.
//! A game goes from row to row until the three guess rows are solved (the game is won), or
//! until the player makes a wrong guess on a row for which all the hints have been used (the
//! row is revealed and the game is lost).
//!
//! Every operation first verifies that it is allowed and returns a [`Rejected`] error
//! otherwise.
//! A rejected operation does not modify the game.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use strum_macros::Display;

use crate::board::{Board, Cell, CellStatus};
use crate::chains::{Chain, ChainError};
use crate::config::{CHAIN_LEN, GameConfig};
use crate::row_progress::RowProgress;

/// Game status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reasons for refusing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The character is not a letter between A and Z.
    InvalidInput,

    /// The cell does not exist, or cannot be selected.
    OutOfBounds,

    /// The cell cannot be changed anymore.
    PermanentCell,

    /// The rows must be solved from top to bottom.
    RowOutOfOrder,

    /// No row is being edited.
    NoActiveRow,

    /// Not enough wrong guesses yet for a hint.
    HintBudgetNotReached,

    /// All the hints for the row have been used.
    HintCapReached,

    /// All the letters of the row are already shown.
    NothingToReveal,

    /// No letter to remove.
    NothingToErase,

    /// The game is over.
    PostTerminalOperation,

    /// A ranking has already been recorded for this game.
    RankingAlreadySubmitted,

    /// The ranking name is empty.
    EmptyName,

    /// Only won games can be ranked or shared.
    GameNotWon,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg: &str = match self {
            Rejected::InvalidInput => "only the letters A to Z are accepted",
            Rejected::OutOfBounds => "there is no such cell",
            Rejected::PermanentCell => "this cell cannot be changed",
            Rejected::RowOutOfOrder => "solve the rows from top to bottom",
            Rejected::NoActiveRow => "select a row first",
            Rejected::HintBudgetNotReached => "hints are available after three wrong guesses",
            Rejected::HintCapReached => "no more hints for this row",
            Rejected::NothingToReveal => "all the letters are already shown",
            Rejected::NothingToErase => "nothing to erase",
            Rejected::PostTerminalOperation => "the game is over, start a new game",
            Rejected::RankingAlreadySubmitted => "this game is already in the rankings",
            Rejected::EmptyName => "the name cannot be empty",
            Rejected::GameNotWon => "only solved games can be ranked or shared",
        };
        write!(f, "{msg}")
    }
}

impl Error for Rejected {}

/// Result of a word submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The row is solved, and other rows remain.
    Solved { row: usize },

    /// The row is solved and so is the puzzle.
    Won { row: usize },

    /// Wrong guess. The row is cleared.
    Missed { row: usize, attempts: usize },

    /// Wrong guess after the last hint. The row is revealed and the game is lost.
    Revealed { row: usize },
}

/// Result of a hint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintOutcome {
    pub row: usize,

    /// Columns that the hint revealed.
    pub columns: Vec<usize>,
}

/// Position where the presentation layer should put its input focus.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusHint {
    pub row: usize,
    pub col: usize,
}

/// Copy of the game state for the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub active_row: Option<usize>,
    pub focus: Option<FocusHint>,
    pub status: GameStatus,
    pub total_hint_count: usize,

    /// Wrong guesses on the active row since its last hint.
    pub incorrect_attempts: usize,

    /// Whether the hint control should be enabled.
    pub hint_enabled: bool,

    /// Game duration in seconds, once the game is over.
    pub elapsed_secs: Option<u64>,
}

/// Number of letters that a hint reveals among the `remaining` hidden letters.
pub fn hint_batch(remaining: usize, fraction: f64) -> usize {
    if remaining == 0 {
        return 0;
    }
    let n: usize = (remaining as f64 * fraction).ceil() as usize;
    n.clamp(1, remaining)
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,

    /// Answer key.
    chain: Chain,

    board: Board,

    /// Counters for each row. Only the guess rows are used.
    progress: [RowProgress; CHAIN_LEN],

    /// Row being edited.
    active_row: Option<usize>,

    /// Column where the next typed letter goes.
    cursor_column: usize,

    /// Hints given during the game, all rows included.
    total_hint_count: usize,

    status: GameStatus,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// Time when the game was won or lost.
    end_time: Option<Instant>,
}

impl Game {
    /// Create a [`Game`] object for the given chain.
    pub fn new(config: GameConfig, chain: Chain) -> Result<Self, ChainError> {
        let config: GameConfig = config.sanitize();
        if chain.longest() > config.grid_width {
            // Report which word does not fit
            Chain::new(chain.words(), config.grid_width)?;
        }

        let board: Board = Board::new(&chain, config.grid_width);
        let mut game = Self {
            config,
            chain,
            board,
            progress: [RowProgress::new(); CHAIN_LEN],
            active_row: None,
            cursor_column: 1,
            total_hint_count: 0,
            status: GameStatus::InProgress,
            start_time: Instant::now(),
            end_time: None,
        };
        if game.config.strict_row_order {
            game.active_row = game.current_row();
        }
        info!("New game: {}", game.chain);
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    pub fn total_hint_count(&self) -> usize {
        self.total_hint_count
    }

    /// Return the counters of a row.
    pub fn row_progress(&self, row: usize) -> RowProgress {
        self.progress[row]
    }

    /// Return the game duration. The clock stops when the game is over.
    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Return the game duration in whole seconds once the game is over.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.end_time
            .map(|end| end.duration_since(self.start_time).as_secs())
    }

    /// Whether a hint can be requested now.
    pub fn hint_enabled(&self) -> bool {
        if self.is_over() {
            return false;
        }
        match self.active_row {
            Some(row) => {
                let progress: &RowProgress = &self.progress[row];
                progress.hint_unlocked(self.config.attempts_before_hint)
                    && !progress.hints_exhausted(self.config.hint_cap)
                    && !self.hidden_letters(row).is_empty()
            }
            None => false,
        }
    }

    /// Return a copy of the state for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            active_row: self.active_row,
            focus: self.active_row.map(|row| FocusHint {
                row,
                col: self.cursor_column,
            }),
            status: self.status,
            total_hint_count: self.total_hint_count,
            incorrect_attempts: self
                .active_row
                .map(|row| self.progress[row].incorrect_attempts)
                .unwrap_or(0),
            hint_enabled: self.hint_enabled(),
            elapsed_secs: self.elapsed_secs(),
        }
    }

    /// First guess row that is not solved yet.
    fn current_row(&self) -> Option<usize> {
        Board::guess_rows().find(|row| !self.board.is_row_permanent(*row))
    }

    /// Row that receives the keyboard input.
    fn editing_row(&self) -> Result<usize, Rejected> {
        match self.active_row {
            Some(row) => Ok(row),
            None if self.config.strict_row_order => self.current_row().ok_or(Rejected::NoActiveRow),
            None => Err(Rejected::NoActiveRow),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), Rejected> {
        if self.is_over() {
            Err(Rejected::PostTerminalOperation)
        } else {
            Ok(())
        }
    }

    /// Verify that the player can change the given cell.
    fn check_editable(&self, row: usize, col: usize) -> Result<(), Rejected> {
        self.ensure_in_progress()?;
        let cell: &Cell = self.board.cell(row, col).ok_or(Rejected::OutOfBounds)?;
        if cell.permanent {
            return Err(Rejected::PermanentCell);
        }
        if self.config.strict_row_order && self.current_row() != Some(row) {
            return Err(Rejected::RowOutOfOrder);
        }
        Ok(())
    }

    /// First editable column after `col`, if any.
    fn next_editable(&self, row: usize, col: usize) -> Option<usize> {
        ((col + 1)..self.board.width()).find(|c| !self.board.row(row)[*c].permanent)
    }

    /// Last editable column before `col`, if any.
    fn previous_editable(&self, row: usize, col: usize) -> Option<usize> {
        (1..col).rev().find(|c| !self.board.row(row)[*c].permanent)
    }

    /// First editable column of the row, or 1 when the row is complete.
    fn first_editable(&self, row: usize) -> usize {
        self.next_editable(row, 0).unwrap_or(1)
    }

    /// Columns of the word that are not shown yet, in reading order.
    fn hidden_letters(&self, row: usize) -> Vec<usize> {
        let len: usize = self.chain.word(row).len();
        (1..len)
            .filter(|c| !self.board.row(row)[*c].permanent)
            .collect()
    }

    /// Put a letter in a cell.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: char) -> Result<(), Rejected> {
        if !letter.is_ascii_alphabetic() {
            return Err(Rejected::InvalidInput);
        }
        self.check_editable(row, col)?;

        self.board
            .set_cell(row, col, Cell::with_status(Some(letter), CellStatus::Filled));
        self.active_row = Some(row);
        self.cursor_column = self.next_editable(row, col).unwrap_or(col);
        debug!("Letter {letter} at ({row}, {col})");
        Ok(())
    }

    /// Remove the letter from a cell.
    pub fn clear_letter(&mut self, row: usize, col: usize) -> Result<(), Rejected> {
        self.check_editable(row, col)?;

        self.board.set_cell(row, col, Cell::empty());
        self.active_row = Some(row);
        self.cursor_column = col;
        debug!("Cleared ({row}, {col})");
        Ok(())
    }

    /// Type a letter at the cursor position of the active row.
    pub fn type_letter(&mut self, letter: char) -> Result<(), Rejected> {
        if !letter.is_ascii_alphabetic() {
            return Err(Rejected::InvalidInput);
        }
        self.ensure_in_progress()?;
        let row: usize = self.editing_row()?;
        let col: usize = if self.board.row(row)[self.cursor_column].permanent {
            self.next_editable(row, self.cursor_column)
                .ok_or(Rejected::PermanentCell)?
        } else {
            self.cursor_column
        };
        self.set_letter(row, col, letter)
    }

    /// Remove the letter at the cursor, or the one before it.
    pub fn backspace(&mut self) -> Result<(), Rejected> {
        self.ensure_in_progress()?;
        let row: usize = self.editing_row()?;
        let cursor: &Cell = &self.board.row(row)[self.cursor_column];
        let col: usize = if cursor.status == CellStatus::Filled {
            self.cursor_column
        } else {
            self.previous_editable(row, self.cursor_column)
                .ok_or(Rejected::NothingToErase)?
        };
        self.clear_letter(row, col)
    }

    /// Move the cursor to a cell, and make its row the active row.
    pub fn focus(&mut self, row: usize, col: usize) -> Result<(), Rejected> {
        self.ensure_in_progress()?;
        if row >= self.board.height() || col == 0 || col >= self.board.width() {
            return Err(Rejected::OutOfBounds);
        }
        if Board::is_anchor_row(row) || self.board.is_row_permanent(row) {
            return Err(Rejected::PermanentCell);
        }
        if self.config.strict_row_order && self.current_row() != Some(row) {
            return Err(Rejected::RowOutOfOrder);
        }
        self.active_row = Some(row);
        self.cursor_column = col;
        debug!("Focus on ({row}, {col})");
        Ok(())
    }

    /// Cell selected with the mouse or by touch. Same rules as [`Game::focus`].
    pub fn click_cell(&mut self, row: usize, col: usize) -> Result<(), Rejected> {
        debug!("Click on ({row}, {col})");
        self.focus(row, col)
    }

    /// Verify the word entered in the active row.
    pub fn submit(&mut self) -> Result<SubmitOutcome, Rejected> {
        self.ensure_in_progress()?;
        let row: usize = self.editing_row()?;
        let entered: String = self.board.entered_word(row);
        let word: String = self.chain.word(row).to_string();

        if entered == word {
            self.board.solve_row(row, &word);
            self.progress[row].clear();
            info!("Row {row} solved: {word}");

            if Board::guess_rows().all(|r| self.board.is_row_solved(r)) {
                self.end_time = Some(Instant::now());
                self.status = GameStatus::Won;
                self.active_row = None;
                info!(
                    "Puzzle solved in {}s with {} hints",
                    self.elapsed().as_secs(),
                    self.total_hint_count
                );
                return Ok(SubmitOutcome::Won { row });
            }

            self.active_row = if self.config.strict_row_order {
                self.current_row()
            } else {
                None
            };
            self.cursor_column = match self.active_row {
                Some(r) => self.first_editable(r),
                None => 1,
            };
            return Ok(SubmitOutcome::Solved { row });
        }

        self.progress[row].add_miss(row);
        if self.progress[row].hints_exhausted(self.config.hint_cap) {
            self.reveal_row(row);
            return Ok(SubmitOutcome::Revealed { row });
        }

        self.board.clear_row(row);
        self.cursor_column = self.first_editable(row);
        Ok(SubmitOutcome::Missed {
            row,
            attempts: self.progress[row].incorrect_attempts,
        })
    }

    /// Reveal some letters of the active row.
    pub fn give_hint(&mut self) -> Result<HintOutcome, Rejected> {
        self.ensure_in_progress()?;
        let row: usize = self.active_row.ok_or(Rejected::NoActiveRow)?;
        let progress: &RowProgress = &self.progress[row];
        if progress.hints_exhausted(self.config.hint_cap) {
            return Err(Rejected::HintCapReached);
        }
        if !progress.hint_unlocked(self.config.attempts_before_hint) {
            return Err(Rejected::HintBudgetNotReached);
        }
        let hidden: Vec<usize> = self.hidden_letters(row);
        if hidden.is_empty() {
            return Err(Rejected::NothingToReveal);
        }

        let count: usize = hint_batch(hidden.len(), self.config.hint_fraction);
        let columns: Vec<usize> = hidden.into_iter().take(count).collect();
        let letters: Vec<char> = self.chain.word(row).chars().collect();
        for col in &columns {
            self.board.set_cell(
                row,
                *col,
                Cell::with_status(Some(letters[*col]), CellStatus::Hint),
            );
        }
        self.progress[row].add_hint(row);
        self.total_hint_count += 1;
        self.cursor_column = self.first_editable(row);
        info!("Hint for row {row}: columns {columns:?}");
        Ok(HintOutcome { row, columns })
    }

    /// Show the answer of a row and end the game.
    fn reveal_row(&mut self, row: usize) {
        let word: String = self.chain.word(row).to_string();
        self.board.reveal_row(row, &word);
        self.end_time = Some(Instant::now());
        self.status = GameStatus::Lost;
        self.active_row = None;
        info!("Row {row} revealed after the last hint: the game is lost");
    }
}
