/*
config.rs

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

//! Application constants and game parameters.
//!
//! The [`GameConfig`] object gathers the parameters that changed between the successive
//! versions of the game (grid width, hint sizing, row order).
//! It is restored from the `settings.json` file by [`crate::saver::settings`] and can be
//! overridden from the command line.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const APPLICATION_NAME: &str = "wordchain";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Number of words in a chain.
pub const CHAIN_LEN: usize = 5;

/// Default number of columns in the grid.
pub const DEFAULT_GRID_WIDTH: usize = 10;

/// Smallest usable grid: the anchor column plus at least one editable column.
pub const MIN_GRID_WIDTH: usize = 2;

/// Default share message. `{time}` and `{hints}` are replaced by the game results.
pub const DEFAULT_SHARE_TEMPLATE: &str =
    "I solved today's Wordchain in {time} seconds with {hints} hints!";

/// Game parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns of the board, including the anchor column.
    pub grid_width: usize,

    /// Share of the letters still hidden that a hint reveals, rounded up.
    /// With `0.0`, a hint reveals exactly one letter.
    pub hint_fraction: f64,

    /// Maximum number of hints per row. A wrong guess after the last hint reveals the row
    /// and ends the game.
    pub hint_cap: usize,

    /// Number of wrong guesses before a hint can be requested.
    pub attempts_before_hint: usize,

    /// Whether the guess rows must be solved from top to bottom.
    pub strict_row_order: bool,

    /// Delay before the end of game notification.
    pub notification_delay: Duration,

    /// Share message template.
    pub share_template: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            hint_fraction: 0.33,
            hint_cap: 3,
            attempts_before_hint: 3,
            strict_row_order: false,
            notification_delay: Duration::from_secs(2),
            share_template: DEFAULT_SHARE_TEMPLATE.to_string(),
        }
    }
}

impl GameConfig {
    /// Bring out-of-range values back to something playable.
    pub fn sanitize(mut self) -> Self {
        if self.grid_width < MIN_GRID_WIDTH {
            self.grid_width = MIN_GRID_WIDTH;
        }
        if !self.hint_fraction.is_finite() || self.hint_fraction < 0.0 {
            self.hint_fraction = 0.0;
        } else if self.hint_fraction > 1.0 {
            self.hint_fraction = 1.0;
        }
        self
    }
}

/// Return the directory where the rankings and the settings are stored.
///
/// The `wordchain` directory under the platform data directory (`$XDG_DATA_HOME` or
/// `~/.local/share` on Linux, `%APPDATA%` on Windows), or under the current directory when
/// the platform has none.
pub fn user_data_dir() -> PathBuf {
    let base: PathBuf = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APPLICATION_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_values() {
        let config = GameConfig {
            grid_width: 0,
            hint_fraction: 4.0,
            ..GameConfig::default()
        }
        .sanitize();
        assert_eq!(config.grid_width, MIN_GRID_WIDTH);
        assert_eq!(config.hint_fraction, 1.0);

        let config = GameConfig {
            hint_fraction: f64::NAN,
            ..GameConfig::default()
        }
        .sanitize();
        assert_eq!(config.hint_fraction, 0.0);
    }

    #[test]
    fn data_dir_is_per_application() {
        let dir = user_data_dir();
        assert_eq!(dir.file_name().unwrap(), APPLICATION_NAME);
        if let Some(base) = dirs::data_dir() {
            assert_eq!(dir.parent().unwrap(), base.as_path());
        }
    }

    #[test]
    fn partial_settings_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"grid_width": 15}"#).unwrap();
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.hint_cap, 3);
        assert_eq!(config.share_template, DEFAULT_SHARE_TEMPLATE);
    }
}
