/*
draw.rs

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

//! Draw the board and the rankings as text.
//!
//! Every cell takes three characters, and its look depends on its status:
//!
//! | Status    | Look  |
//! |-----------|-------|
//! | empty     | ` _ ` |
//! | filled    | ` A ` |
//! | revealed  | `[A]` |
//! | hint      | `{A}` |
//! | correct   | `(A)` |
//! | solid     | `###` |
//! | incorrect | `!A!` |

use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::board::{Cell, CellStatus};
use crate::game::{GameStatus, Snapshot};
use crate::notifier::{Notification, NotificationKind};
use crate::rankings::RankingRecord;

/// Text of a cell.
pub fn cell_text(cell: &Cell) -> String {
    let l: char = cell.letter.unwrap_or(' ');
    match cell.status {
        CellStatus::Empty => " _ ".to_string(),
        CellStatus::Filled => format!(" {l} "),
        CellStatus::Revealed => format!("[{l}]"),
        CellStatus::Hint => format!("{{{l}}}"),
        CellStatus::Correct => format!("({l})"),
        CellStatus::Solid => "###".to_string(),
        CellStatus::Incorrect => format!("!{l}!"),
    }
}

/// Draw the board, the cursor, and the status line.
pub fn draw_board(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let width: usize = snapshot.board.width();

    let _ = write!(out, "    ");
    for col in 0..width {
        let _ = write!(out, "{col:^3}");
    }
    out.push('\n');

    for (row, cells) in snapshot.board.rows().iter().enumerate() {
        let marker: char = if snapshot.active_row == Some(row) {
            '>'
        } else {
            ' '
        };
        let _ = write!(out, "{marker} {row} ");
        for cell in cells {
            out.push_str(&cell_text(cell));
        }
        out.push('\n');

        if let Some(focus) = snapshot.focus
            && focus.row == row
        {
            let _ = writeln!(out, "    {}{:^3}", "   ".repeat(focus.col), "^");
        }
    }

    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

/// One line summary of the game.
pub fn status_line(snapshot: &Snapshot) -> String {
    let hints: usize = snapshot.total_hint_count;
    match snapshot.status {
        GameStatus::InProgress => {
            let hint: &str = if snapshot.hint_enabled {
                "available (:hint)"
            } else {
                "locked"
            };
            format!(
                "Hints used: {hints}   Wrong guesses: {}   Hint: {hint}",
                snapshot.incorrect_attempts
            )
        }
        GameStatus::Won => format!(
            "Solved in {} seconds with {hints} hints",
            snapshot.elapsed_secs.unwrap_or(0)
        ),
        GameStatus::Lost => format!(
            "Game over after {} seconds",
            snapshot.elapsed_secs.unwrap_or(0)
        ),
    }
}

/// Text of the end of game notification.
pub fn draw_notification(notification: &Notification) -> String {
    match &notification.kind {
        NotificationKind::Won { time, hints } => format!(
            "Amazing!\nYou solved the Wordchain in {time} seconds\nYou used {hints} hints\n\
             Use :rank NAME to enter the rankings, or :share to share your results."
        ),
        NotificationKind::Lost { row, word } => format!(
            "Out of hints!\nThe word on row {row} was {}.\nUse :new to try another chain.",
            word.to_uppercase()
        ),
    }
}

/// Draw the rankings table.
pub fn draw_rankings(records: &[RankingRecord]) -> String {
    if records.is_empty() {
        return "No rankings yet\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<20} {:>8} {:>6}  Date",
        "Rank", "Name", "Time (s)", "Hints"
    );
    for (i, r) in records.iter().enumerate() {
        let date: String = match r.when {
            Some(when) => DateTime::<Local>::from(when)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:>8} {:>6}  {date}",
            i + 1,
            r.name,
            r.time,
            r.hints
        );
    }
    out
}

/// Title line with the date of the day.
pub fn title() -> String {
    format!("Wordchain - {}", Local::now().format("%x"))
}
