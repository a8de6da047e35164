/*
chains.rs

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

//! Word chains and the catalog they are picked from.
//!
//! A [`Chain`] is the answer key of a game: five lowercase words.
//! The [`Catalog`] is a list of chains, either the built-in one or a list loaded from a JSON
//! file containing an array of five-word arrays:
//!
//! ```json
//! [
//!     ["moon", "light", "bulb", "head", "start"],
//!     ["book", "mark", "down", "town", "hall"]
//! ]
//! ```

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::CHAIN_LEN;

/// Chains shipped with the game.
const BUILTIN_CHAINS: [[&str; CHAIN_LEN]; 10] = [
    ["moon", "light", "bulb", "head", "start"],
    ["book", "mark", "down", "town", "hall"],
    ["sun", "shine", "bright", "idea", "list"],
    ["rain", "coat", "rack", "time", "piece"],
    ["fire", "place", "mat", "chair", "lift"],
    ["snow", "ball", "game", "plan", "ahead"],
    ["tree", "house", "work", "shop", "keeper"],
    ["sea", "shore", "line", "dance", "floor"],
    ["star", "light", "year", "book", "worm"],
    ["wind", "mill", "stone", "age", "old"],
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ChainError {
    /// The chain does not have exactly five words.
    WrongLength(usize),

    /// A word is empty.
    EmptyWord(usize),

    /// A word contains something else than the letters a to z.
    InvalidCharacter(usize),

    /// A word does not fit in the grid.
    WordTooLong { index: usize, len: usize, width: usize },

    /// The catalog has no chain.
    EmptyCatalog,

    /// No chain at this index in the catalog.
    NotFound(usize),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::WrongLength(n) => write!(f, "a chain needs {CHAIN_LEN} words, not {n}"),
            ChainError::EmptyWord(i) => write!(f, "word {i} is empty"),
            ChainError::InvalidCharacter(i) => {
                write!(f, "word {i} must only use the letters a to z")
            }
            ChainError::WordTooLong { index, len, width } => write!(
                f,
                "word {index} has {len} letters but the grid is {width} columns wide"
            ),
            ChainError::EmptyCatalog => write!(f, "the catalog has no chain"),
            ChainError::NotFound(i) => write!(f, "there is no chain number {i}"),
        }
    }
}

impl Error for ChainError {}

/// Answer key of a game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    /// Create a [`Chain`] object after verifying the words against the grid width.
    ///
    /// Upper case letters are accepted and converted to lower case.
    pub fn new<S: AsRef<str>>(words: &[S], grid_width: usize) -> Result<Self, ChainError> {
        if words.len() != CHAIN_LEN {
            return Err(ChainError::WrongLength(words.len()));
        }
        let mut list: Vec<String> = Vec::with_capacity(CHAIN_LEN);
        for (index, word) in words.iter().enumerate() {
            let word: &str = word.as_ref();
            if word.is_empty() {
                return Err(ChainError::EmptyWord(index));
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ChainError::InvalidCharacter(index));
            }
            if word.len() > grid_width {
                return Err(ChainError::WordTooLong {
                    index,
                    len: word.len(),
                    width: grid_width,
                });
            }
            list.push(word.to_ascii_lowercase());
        }
        Ok(Self { words: list })
    }

    /// Return the word at the given row.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Return the words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Length of the longest word.
    pub fn longest(&self) -> usize {
        self.words.iter().map(|w| w.len()).max().unwrap_or(0)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.words.join(" > "))
    }
}

/// List of chains the games are picked from.
#[derive(Debug, Clone)]
pub struct Catalog {
    chains: Vec<Chain>,
}

impl Catalog {
    /// Create a [`Catalog`] object from already verified chains.
    pub fn new(chains: Vec<Chain>) -> Result<Self, ChainError> {
        if chains.is_empty() {
            return Err(ChainError::EmptyCatalog);
        }
        Ok(Self { chains })
    }

    /// Return the catalog shipped with the game.
    ///
    /// Chains with words longer than the grid are left out.
    pub fn builtin(grid_width: usize) -> Result<Self, ChainError> {
        let chains: Vec<Chain> = BUILTIN_CHAINS
            .iter()
            .filter_map(|words| match Chain::new(words, grid_width) {
                Ok(c) => Some(c),
                Err(error) => {
                    debug!("Skipping built-in chain {words:?}: {error}");
                    None
                }
            })
            .collect();
        Self::new(chains)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json(path: &Path, grid_width: usize) -> Result<Self, Box<dyn Error>> {
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let raw: Vec<Vec<String>> = serde_json::from_reader(reader)?;
        debug!("Loaded {} chains from {path:?}", raw.len());
        let mut chains: Vec<Chain> = Vec::with_capacity(raw.len());
        for words in &raw {
            chains.push(Chain::new(words, grid_width)?);
        }
        Ok(Self::new(chains)?)
    }

    /// Number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the catalog is empty. [`Catalog::new`] refuses empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Return the chain at the given index.
    pub fn get(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }

    /// Iterate over the chains.
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter()
    }

    /// Pick a chain uniformly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Chain {
        let i: usize = rng.random_range(0..self.chains.len());
        debug!("Picked chain {i}");
        &self.chains[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn chain_is_lowercased() {
        let chain = Chain::new(&["Moon", "LIGHT", "bulb", "head", "start"], 10).unwrap();
        assert_eq!(chain.word(0), "moon");
        assert_eq!(chain.word(1), "light");
        assert_eq!(chain.longest(), 5);
    }

    #[test]
    fn chain_validation() {
        assert_eq!(
            Chain::new(&["a", "b", "c"], 10),
            Err(ChainError::WrongLength(3))
        );
        assert_eq!(
            Chain::new(&["moon", "", "bulb", "head", "start"], 10),
            Err(ChainError::EmptyWord(1))
        );
        assert_eq!(
            Chain::new(&["moon", "li ght", "bulb", "head", "start"], 10),
            Err(ChainError::InvalidCharacter(1))
        );
        assert_eq!(
            Chain::new(&["moon", "light", "bulb", "héad", "start"], 10),
            Err(ChainError::InvalidCharacter(3))
        );
        assert_eq!(
            Chain::new(&["moon", "light", "bulb", "head", "start"], 4),
            Err(ChainError::WordTooLong {
                index: 1,
                len: 5,
                width: 4
            })
        );
    }

    #[test]
    fn builtin_catalog() {
        let catalog = Catalog::builtin(10).unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.get(0).unwrap().word(2), "bulb");

        // "bright" and "keeper" do not fit in five columns
        let narrow = Catalog::builtin(5).unwrap();
        assert_eq!(narrow.len(), 8);

        assert!(matches!(
            Catalog::builtin(2),
            Err(ChainError::EmptyCatalog)
        ));
    }

    #[test]
    fn pick_is_in_catalog() {
        let catalog = Catalog::builtin(15).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let chain = catalog.pick(&mut rng);
            assert!(catalog.iter().any(|c| c == chain));
        }
    }

    #[test]
    fn catalog_from_json() {
        let mut path = std::env::temp_dir();
        path.push(format!("wordchain-catalog-{}.json", std::process::id()));
        std::fs::write(&path, r#"[["fire", "place", "mat", "chair", "lift"]]"#).unwrap();
        let catalog = Catalog::from_json(&path, 10).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().word(3), "chair");

        std::fs::write(&path, r#"[["fire", "place"]]"#).unwrap();
        assert!(Catalog::from_json(&path, 10).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
