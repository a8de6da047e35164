/*
terminal.rs

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

//! Terminal front end.
//!
//! Read the player input line by line, send the events to the application, and print the
//! board after every change.

use log::{debug, error};
use std::io::{self, BufRead, Write};

use crate::application::{Response, WordchainApplication};
use crate::cli_options::Options;
use crate::draw;
use crate::input;
use crate::saver::rankings::SaverRankings;
use crate::share::{CommandShare, ShareTarget};

const HELP: &str = "\
Type letters to fill the selected row, < to erase, and . or an empty line to check the word.
Commands:
  :focus ROW COL   select a cell (alias :f)
  :click ROW COL   select a cell with the mouse (alias :c)
  :hint            reveal letters of the selected row (alias :h)
  :new             start a new game (alias :n)
  :share           share the results of a solved game (alias :s)
  :rank NAME       add a solved game to the rankings (alias :r)
  :rankings        display the rankings
  :help            display this help (alias :?)
  :quit            leave the game (alias :q)
";

/// Play until the player quits or the input ends.
///
/// Return the process exit code.
pub fn run(options: Options) -> u8 {
    let share_target: Option<Box<dyn ShareTarget>> = options
        .share_command
        .as_deref()
        .and_then(CommandShare::new)
        .map(|s| Box::new(s) as Box<dyn ShareTarget>);

    let mut app: WordchainApplication = match WordchainApplication::new(
        options.config,
        options.catalog,
        Some(SaverRankings::new(options.data_dir)),
        share_target,
    ) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Cannot start the game: {e}");
            return 1;
        }
    };
    if let Some(i) = options.chain
        && let Err(e) = app.new_game(Some(i))
    {
        eprintln!("Cannot start the game: {e}");
        return 1;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match play(&mut app, stdin.lock(), stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            error!("Terminal error: {e}");
            1
        }
    }
}

/// Main loop.
pub fn play<R: BufRead, W: Write>(
    app: &mut WordchainApplication,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", draw::title())?;
    writeln!(output, "Type :help for the commands.\n")?;
    write!(output, "{}", draw::draw_board(&app.snapshot()))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line: String = line?;
        let events = match input::parse_line(&line) {
            Ok(events) => events,
            Err(e) => {
                writeln!(output, "{e}")?;
                prompt(&mut output)?;
                continue;
            }
        };

        let mut redraw: bool = false;
        for event in events {
            match app.handle(event) {
                Ok(Response::Updated(msg)) => {
                    redraw = true;
                    if let Some(msg) = msg {
                        writeln!(output, "{msg}")?;
                    }
                }
                Ok(Response::Message(msg)) => writeln!(output, "{msg}")?,
                Ok(Response::Rankings(records)) => {
                    write!(output, "{}", draw::draw_rankings(&records))?
                }
                Ok(Response::Help) => write!(output, "{HELP}")?,
                Ok(Response::Quit) => {
                    debug!("Quitting");
                    return Ok(());
                }
                Err(rejected) => {
                    // The remaining events of the line are dropped
                    writeln!(output, "{rejected}")?;
                    break;
                }
            }
        }

        if redraw {
            write!(output, "{}", draw::draw_board(&app.snapshot()))?;
        }
        if app.game().is_over()
            && let Some(n) = app.wait_notification()
        {
            writeln!(output, "\n{}\n", draw::draw_notification(&n))?;
        }
        prompt(&mut output)?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
