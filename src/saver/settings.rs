/*
settings.rs

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

//! Save and restore the game parameters.
//!
//! The `settings.json` file is a serialization of the [`GameConfig`] object. Missing fields
//! take their default value, so the file can list only the parameters to change:
//!
//! ```json
//! { "grid_width": 15, "strict_row_order": true }
//! ```

use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::GameConfig;

/// Object to save and restore the settings.
pub struct SaverSettings {
    /// Absolute path to the settings file.
    save_file: PathBuf,
}

impl SaverSettings {
    /// Create a [`SaverSettings`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the settings are stored.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("settings.json");
        debug!("Settings file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`GameConfig`] object from the settings file.
    ///
    /// Return None if the settings file does not exist.
    pub fn get_settings(&self) -> Result<Option<GameConfig>, Box<dyn Error>> {
        let reader: BufReader<File> = match File::open(&self.save_file) {
            Ok(f) => BufReader::new(f),
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let config: GameConfig = serde_json::from_reader(reader)?;
        Ok(Some(config.sanitize()))
    }

    /// Save the provided [`GameConfig`] object.
    pub fn save_settings(&self, config: &GameConfig) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn save_and_restore() {
        let mut dir = env::temp_dir();
        dir.push(format!("wordchain-settings-{}", std::process::id()));
        let saver = SaverSettings::new(dir.clone());
        assert!(saver.get_settings().unwrap().is_none());

        let config = GameConfig {
            grid_width: 15,
            strict_row_order: true,
            ..GameConfig::default()
        };
        saver.save_settings(&config).unwrap();
        assert_eq!(saver.get_settings().unwrap(), Some(config));
        let _ = fs::remove_dir_all(dir);
    }
}
