/*
row_progress.rs

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

//! Manage the wrong guesses and the hints of a row.

use log::debug;

use serde::{Deserialize, Serialize};

/// Counters for a guess row.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowProgress {
    /// Wrong guesses since the last hint, or since the row was started.
    /// A hint resets this counter.
    pub incorrect_attempts: usize,

    /// Number of hints given for the row.
    pub hints_given: usize,

    /// Wrong guesses since the last hint.
    /// Reset together with [`RowProgress::incorrect_attempts`].
    pub attempts_since_last_hint: usize,
}

impl RowProgress {
    /// Create a [`RowProgress`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the counters, when the row is solved.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record a wrong guess.
    pub fn add_miss(&mut self, row: usize) {
        self.incorrect_attempts += 1;
        self.attempts_since_last_hint += 1;
        debug!(
            "Wrong guess for row {row}: {} attempts since the last hint",
            self.incorrect_attempts
        );
    }

    /// Record a hint. The wrong guesses made before the hint are forgiven.
    pub fn add_hint(&mut self, row: usize) {
        self.hints_given += 1;
        self.incorrect_attempts = 0;
        self.attempts_since_last_hint = 0;
        debug!("Hint for row {row}: {} hints so far", self.hints_given);
    }

    /// Whether enough wrong guesses have been made to ask for a hint.
    pub fn hint_unlocked(&self, attempts_before_hint: usize) -> bool {
        self.incorrect_attempts >= attempts_before_hint
    }

    /// Whether all the hints for the row have been used.
    pub fn hints_exhausted(&self, hint_cap: usize) -> bool {
        self.hints_given >= hint_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_forgives_misses() {
        let mut progress = RowProgress::new();
        for _ in 0..3 {
            progress.add_miss(1);
        }
        assert!(progress.hint_unlocked(3));
        progress.add_hint(1);
        assert_eq!(progress.incorrect_attempts, 0);
        assert_eq!(progress.attempts_since_last_hint, 0);
        assert_eq!(progress.hints_given, 1);
        assert!(!progress.hint_unlocked(3));
        assert!(!progress.hints_exhausted(3));
    }

    #[test]
    fn clear_resets_everything() {
        let mut progress = RowProgress::new();
        progress.add_miss(2);
        progress.add_hint(2);
        progress.add_miss(2);
        progress.clear();
        assert_eq!(progress, RowProgress::default());
    }
}
