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

//! Save and restore the rankings.
//!
//! The saved object is a serialization of the [`Rankings`] object in JSON format by
//! using [`serde`]: an array of `{"name", "time", "hints", "when"}` records.

use log::{debug, warn};
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::rankings::Rankings;

/// Object to save and restore the rankings.
pub struct SaverRankings {
    /// Path to `rankings.json`.
    save_file: PathBuf,

    /// File written first and then renamed over `save_file`.
    tmp_file: PathBuf,
}

impl SaverRankings {
    /// Create a [`SaverRankings`] object for the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        let save_file: PathBuf = data_dir.join("rankings.json");
        let tmp_file: PathBuf = data_dir.join("rankings.json.tmp");
        debug!("Rankings file: {save_file:?}");
        Self {
            save_file,
            tmp_file,
        }
    }

    /// Read the rankings file.
    ///
    /// A missing file is not an error: there is nothing ranked yet.
    pub fn get_rankings(&self) -> Result<Option<Rankings>, Box<dyn Error>> {
        let reader: BufReader<File> = match File::open(&self.save_file) {
            Ok(f) => BufReader::new(f),
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let rankings: Rankings = serde_json::from_reader(reader)?;
        debug!("Read {} rankings", rankings.len());
        Ok(Some(rankings))
    }

    /// Write the rankings.
    ///
    /// The records go to a temporary file that replaces the rankings file once complete, so
    /// an interrupted save leaves the previous rankings in place.
    pub fn save_rankings(&self, rankings: &Rankings) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut writer: BufWriter<File> = BufWriter::new(File::create(&self.tmp_file)?);
        serde_json::to_writer(&mut writer, rankings)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&self.tmp_file, &self.save_file)?;
        debug!("Saved {} rankings", rankings.len());
        Ok(())
    }

    /// Delete the rankings file.
    pub fn delete_save(&self) {
        match fs::remove_file(&self.save_file) {
            Ok(()) => debug!("Deleted {:?}", self.save_file),
            Err(error) if error.kind() == ErrorKind::NotFound => (),
            Err(error) => warn!("Cannot delete {:?}: {error}", self.save_file),
        }
    }
}
