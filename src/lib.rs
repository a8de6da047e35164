/*
lib.rs

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

//! Wordchain: a word ladder puzzle.
//!
//! The player gets the first and the last words of a chain of five words.
//! Every word forms a compound word or a common phrase with the next one, and the player must
//! find the three words in between.
//! The first letter of every word is given, and hints reveal more letters after a few wrong
//! guesses.

pub mod application;
pub mod board;
pub mod chains;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod input;
pub mod notifier;
pub mod rankings;
pub mod row_progress;
pub mod saver;
pub mod share;
pub mod terminal;
