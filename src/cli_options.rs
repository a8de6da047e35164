/*
cli_options.rs

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

//! Process command-line options.
//!
//! The options override the parameters stored in the `settings.json` file.
//!
//! # Examples
//!
//! List the chains of the built-in catalog:
//!
//! ```text
//! $ wordchain --ls
//! 0 moon > light > bulb > head > start
//! 1 book > mark > down > town > hall
//! ...
//! ```
//!
//! Play the third chain on a 15 column grid, solving the rows from top to bottom:
//!
//! ```text
//! $ wordchain --chain 2 --width 15 --strict
//! ```
//!
//! Display the rankings:
//!
//! ```text
//! $ wordchain --rankings
//! ```

use clap::Parser;
use log::{LevelFilter, debug, warn};
use std::path::PathBuf;

use crate::chains::Catalog;
use crate::config::{self, COPYRIGHT_NOTICE, GameConfig};
use crate::draw;
use crate::saver::rankings::SaverRankings;
use crate::saver::settings::SaverSettings;

/// Word ladder puzzle: find the three words that link the first and the last words.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the chains of the catalog
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Index of the chain to play (see --ls). A random chain is used otherwise
    #[arg(short, long)]
    chain: Option<usize>,

    /// JSON file with the chains to play, instead of the built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Number of columns of the grid
    #[arg(short, long)]
    width: Option<usize>,

    /// Solve the rows from top to bottom
    #[arg(short, long, default_value_t = false)]
    strict: bool,

    /// Share of the hidden letters that a hint reveals (0 reveals one letter per hint)
    #[arg(long, value_name = "FRACTION")]
    hint_fraction: Option<f64>,

    /// Command that receives the shared results on its standard input (wl-copy, for example)
    #[arg(long, value_name = "COMMAND")]
    share_command: Option<String>,

    /// Directory for the rankings and the settings
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Save the resulting game parameters as the new defaults
    #[arg(long, default_value_t = false)]
    save_settings: bool,

    /// Display the rankings and exit
    #[arg(short, long, default_value_t = false)]
    rankings: bool,

    /// Delete the rankings and exit
    #[arg(long, default_value_t = false)]
    clear_rankings: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parameters for playing.
#[derive(Debug, Clone)]
pub struct Options {
    pub config: GameConfig,
    pub catalog: Catalog,

    /// Chain of the first game. A random chain is used otherwise.
    pub chain: Option<usize>,

    pub data_dir: PathBuf,
    pub share_command: Option<String>,
}

/// What to do after parsing the command line.
#[derive(Debug)]
pub enum CliAction {
    /// Exit with the given code.
    Exit(u8),

    /// Start the game.
    Play(Options),
}

/// Parse and process command-line options.
pub fn parse() -> CliAction {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();
    debug!("Command line: {args:?}");

    process(args)
}

fn process(args: Args) -> CliAction {
    let data_dir: PathBuf = args.data_dir.clone().unwrap_or_else(config::user_data_dir);

    //
    // Rankings
    //
    if args.clear_rankings {
        SaverRankings::new(data_dir).delete_save();
        println!("Rankings deleted");
        return CliAction::Exit(0);
    }
    if args.rankings {
        return match SaverRankings::new(data_dir).get_rankings() {
            Ok(Some(rankings)) => {
                let records: Vec<_> = rankings.sorted().into_iter().cloned().collect();
                print!("{}", draw::draw_rankings(&records));
                CliAction::Exit(0)
            }
            Ok(None) => {
                print!("{}", draw::draw_rankings(&[]));
                CliAction::Exit(0)
            }
            Err(error) => {
                eprintln!("Cannot read the rankings: {error}");
                CliAction::Exit(1)
            }
        };
    }

    //
    // Game parameters: settings file, then command line
    //
    let saver: SaverSettings = SaverSettings::new(data_dir.clone());
    let mut game_config: GameConfig = match saver.get_settings() {
        Ok(Some(c)) => c,
        Ok(None) => GameConfig::default(),
        Err(error) => {
            warn!("Ignoring the settings file: {error}");
            GameConfig::default()
        }
    };
    if let Some(w) = args.width {
        game_config.grid_width = w;
    }
    if let Some(f) = args.hint_fraction {
        game_config.hint_fraction = f;
    }
    if args.strict {
        game_config.strict_row_order = true;
    }
    let game_config: GameConfig = game_config.sanitize();
    if args.save_settings {
        match saver.save_settings(&game_config) {
            Ok(()) => println!("Settings saved"),
            Err(error) => eprintln!("Cannot save the settings: {error}"),
        }
    }

    //
    // Chains
    //
    let catalog: Catalog = match &args.catalog {
        Some(path) => match Catalog::from_json(path, game_config.grid_width) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("Cannot load the catalog {}: {error}", path.display());
                return CliAction::Exit(1);
            }
        },
        None => match Catalog::builtin(game_config.grid_width) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No chain fits the grid: {error}");
                return CliAction::Exit(1);
            }
        },
    };

    if args.ls {
        for (i, chain) in catalog.iter().enumerate() {
            println!("{i} {chain}");
        }
        return CliAction::Exit(0);
    }

    if let Some(i) = args.chain
        && catalog.get(i).is_none()
    {
        eprintln!(
            "Unknown chain {i}. Use --ls to list the {} available chains.",
            catalog.len()
        );
        return CliAction::Exit(1);
    }

    CliAction::Play(Options {
        config: game_config,
        catalog,
        chain: args.chain,
        data_dir,
        share_command: args.share_command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn args(extra: &[&str]) -> Args {
        let mut dir = env::temp_dir();
        dir.push(format!("wordchain-cli-{}", std::process::id()));
        let dir: String = dir.to_string_lossy().to_string();
        let mut list: Vec<&str> = vec!["wordchain", "--data-dir", &dir];
        list.extend_from_slice(extra);
        Args::parse_from(list)
    }

    #[test]
    fn overrides() {
        match process(args(&["--width", "15", "--strict", "--chain", "2"])) {
            CliAction::Play(options) => {
                assert_eq!(options.config.grid_width, 15);
                assert!(options.config.strict_row_order);
                assert_eq!(options.chain, Some(2));
                assert_eq!(options.catalog.len(), 10);
            }
            CliAction::Exit(code) => panic!("unexpected exit {code}"),
        }
    }

    #[test]
    fn unknown_chain() {
        assert!(matches!(
            process(args(&["--chain", "99"])),
            CliAction::Exit(1)
        ));
    }

    #[test]
    fn list_chains() {
        assert!(matches!(process(args(&["--ls"])), CliAction::Exit(0)));
    }
}
