/*
rankings.rs

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

//! Manage the rankings of the solved games.
//!
//! The [`Rankings`] object keeps every record in the order the players submitted them, and
//! returns them sorted by time and then by number of hints.
//! See the [`crate::saver::rankings`] module that saves and restores the [`Rankings`] object.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Ranking of a solved game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingRecord {
    /// Name that the player entered.
    pub name: String,

    /// How long it took to solve the puzzle, in seconds.
    pub time: u64,

    /// Number of hints used.
    pub hints: usize,

    /// Submission timestamp, displayed with the rankings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<SystemTime>,
}

impl RankingRecord {
    /// Create a [`RankingRecord`] object stamped with the current time.
    pub fn new(name: &str, time: u64, hints: usize) -> Self {
        Self {
            name: name.to_string(),
            time,
            hints,
            when: Some(SystemTime::now()),
        }
    }

    fn key(&self) -> (u64, usize) {
        (self.time, self.hints)
    }
}

/// List of the ranking records.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Rankings {
    records: Vec<RankingRecord>,
}

impl Rankings {
    /// Create an empty [`Rankings`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its position in the sorted rankings.
    ///
    /// The returned position starts at 1 (best time). A record ties after the records with
    /// the same time and hints that were added before it.
    pub fn add(&mut self, record: RankingRecord) -> usize {
        let key: (u64, usize) = record.key();
        self.records.push(record);
        self.records.iter().filter(|r| r.key() <= key).count()
    }

    /// Return the records sorted by time, then by number of hints.
    pub fn sorted(&self) -> Vec<&RankingRecord> {
        let mut list: Vec<&RankingRecord> = self.records.iter().collect();
        // Stable sort: equal records stay in submission order
        list.sort_by_key(|r| r.key());
        list
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_time_then_hints() {
        let mut rankings = Rankings::new();
        assert_eq!(rankings.add(RankingRecord::new("ann", 90, 0)), 1);
        assert_eq!(rankings.add(RankingRecord::new("bob", 45, 2)), 1);
        assert_eq!(rankings.add(RankingRecord::new("cid", 45, 1)), 1);
        assert_eq!(rankings.add(RankingRecord::new("dee", 45, 1)), 2);
        assert_eq!(rankings.add(RankingRecord::new("eve", 300, 5)), 5);

        let names: Vec<&str> = rankings.sorted().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["cid", "dee", "bob", "ann", "eve"]);
        assert_eq!(rankings.len(), 5);
    }

    #[test]
    fn reads_records_without_timestamp() {
        let rankings: Rankings =
            serde_json::from_str(r#"[{"name": "ann", "time": 12, "hints": 3}]"#).unwrap();
        let sorted = rankings.sorted();
        assert_eq!(sorted[0].time, 12);
        assert_eq!(sorted[0].when, None);

        let json = serde_json::to_string(&rankings).unwrap();
        assert_eq!(json, r#"[{"name":"ann","time":12,"hints":3}]"#);
    }
}
