/*
input.rs

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

//! Player input events.
//!
//! The terminal front end reads lines and turns them into [`InputEvent`] objects:
//!
//! * letters are typed at the cursor, `<` erases, and `.` or an empty line confirms the
//!   word. `ight.` types four letters and confirms.
//! * lines that start with `:` are commands: `:focus 2 1`, `:click 2 1`, `:hint`, `:new`,
//!   `:share`, `:rank NAME`, `:rankings`, `:help`, and `:quit`.

use std::fmt;

/// Input event, as produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyChar(char),
    KeyEnter,
    KeyBackspace,
    CellFocus(usize, usize),
    CellClick(usize, usize),
    HintButtonPress,
    NewGamePress,
    ShareResultsPress,
    SubmitRankingPress(String),
    ShowRankings,
    Help,
    Quit,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The command does not exist.
    UnknownCommand(String),

    /// The command needs more arguments.
    MissingArgument(&'static str),

    /// A row or a column is not a number.
    InvalidNumber(String),

    /// The character is neither a letter nor `<` or `.`.
    InvalidCharacter(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(c) => write!(f, "unknown command :{c} (try :help)"),
            ParseError::MissingArgument(a) => write!(f, "missing {a}"),
            ParseError::InvalidNumber(n) => write!(f, "{n} is not a number"),
            ParseError::InvalidCharacter(c) => write!(f, "unexpected character {c:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_position<'a, I>(mut args: I) -> Result<(usize, usize), ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let row: &str = args.next().ok_or(ParseError::MissingArgument("row"))?;
    let col: &str = args.next().ok_or(ParseError::MissingArgument("column"))?;
    let row: usize = row
        .parse()
        .map_err(|_| ParseError::InvalidNumber(row.to_string()))?;
    let col: usize = col
        .parse()
        .map_err(|_| ParseError::InvalidNumber(col.to_string()))?;
    Ok((row, col))
}

fn parse_command(command: &str) -> Result<InputEvent, ParseError> {
    let mut words = command.split_whitespace();
    let name: &str = words.next().unwrap_or("");
    match name {
        "focus" | "f" => parse_position(words).map(|(r, c)| InputEvent::CellFocus(r, c)),
        "click" | "c" => parse_position(words).map(|(r, c)| InputEvent::CellClick(r, c)),
        "hint" | "h" => Ok(InputEvent::HintButtonPress),
        "new" | "n" => Ok(InputEvent::NewGamePress),
        "share" | "s" => Ok(InputEvent::ShareResultsPress),
        "rank" | "r" => {
            let name: String = words.collect::<Vec<&str>>().join(" ");
            if name.is_empty() {
                Err(ParseError::MissingArgument("name"))
            } else {
                Ok(InputEvent::SubmitRankingPress(name))
            }
        }
        "rankings" => Ok(InputEvent::ShowRankings),
        "help" | "?" => Ok(InputEvent::Help),
        "quit" | "q" => Ok(InputEvent::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Convert a line typed by the player into events.
pub fn parse_line(line: &str) -> Result<Vec<InputEvent>, ParseError> {
    let line: &str = line.trim();
    if line.is_empty() {
        return Ok(vec![InputEvent::KeyEnter]);
    }
    if let Some(command) = line.strip_prefix(':') {
        return parse_command(command).map(|e| vec![e]);
    }

    let mut events: Vec<InputEvent> = Vec::with_capacity(line.len());
    for c in line.chars() {
        match c {
            c if c.is_ascii_alphabetic() => events.push(InputEvent::KeyChar(c)),
            '<' => events.push(InputEvent::KeyBackspace),
            '.' => events.push(InputEvent::KeyEnter),
            c if c.is_whitespace() => (),
            c => return Err(ParseError::InvalidCharacter(c)),
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_keys() {
        assert_eq!(parse_line(""), Ok(vec![InputEvent::KeyEnter]));
        assert_eq!(
            parse_line("ab<."),
            Ok(vec![
                InputEvent::KeyChar('a'),
                InputEvent::KeyChar('b'),
                InputEvent::KeyBackspace,
                InputEvent::KeyEnter,
            ])
        );
        assert_eq!(parse_line("a1"), Err(ParseError::InvalidCharacter('1')));
    }

    #[test]
    fn commands() {
        assert_eq!(parse_line(":focus 2 3"), Ok(vec![InputEvent::CellFocus(2, 3)]));
        assert_eq!(parse_line(":c 1 9"), Ok(vec![InputEvent::CellClick(1, 9)]));
        assert_eq!(parse_line(":hint"), Ok(vec![InputEvent::HintButtonPress]));
        assert_eq!(
            parse_line(":rank Jo  Smith"),
            Ok(vec![InputEvent::SubmitRankingPress("Jo Smith".to_string())])
        );
        assert_eq!(parse_line(":rank"), Err(ParseError::MissingArgument("name")));
        assert_eq!(
            parse_line(":focus 2"),
            Err(ParseError::MissingArgument("column"))
        );
        assert_eq!(
            parse_line(":focus x 2"),
            Err(ParseError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            parse_line(":dance"),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
    }
}
