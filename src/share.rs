/*
share.rs

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

//! Share the results of a solved game.
//!
//! The message is built from a template (see [`crate::config::GameConfig::share_template`])
//! and handed to a [`ShareTarget`], such as a command that copies its input to the clipboard.
//! Without a target, or when the target fails, the message is simply shown to the player.

use formatx::formatx;
use log::{debug, warn};
use std::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::DEFAULT_SHARE_TEMPLATE;

/// Title given to the shared message, for the targets that support one.
pub const SHARE_TITLE: &str = "Wordchain Results";

/// Something that can publish the results.
pub trait ShareTarget {
    /// Publish the message.
    fn share(&self, title: &str, text: &str) -> Result<(), Box<dyn Error>>;
}

/// Share by writing the message to the standard input of a command, like `wl-copy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    /// Create a [`CommandShare`] object from a command line.
    ///
    /// The command line is split on white spaces. Return None for an empty command line.
    pub fn new(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program: String = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

impl ShareTarget for CommandShare {
    fn share(&self, title: &str, text: &str) -> Result<(), Box<dyn Error>> {
        debug!("Sharing \"{title}\" with {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(format!("{} exited with {status}", self.program).into());
        }
        Ok(())
    }
}

/// Result of sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The target published the message.
    Shared,

    /// No target could publish the message: show it to the player instead.
    Shown(String),
}

/// Build the share message.
///
/// The template uses the `{time}` and `{hints}` placeholders. An invalid template falls back
/// to the default message.
pub fn share_message(template: &str, time: u64, hints: usize) -> String {
    match formatx!(template.to_string(), time = time, hints = hints) {
        Ok(msg) => msg,
        Err(error) => {
            warn!("Invalid share template {template:?}: {error:?}");
            match formatx!(DEFAULT_SHARE_TEMPLATE.to_string(), time = time, hints = hints) {
                Ok(msg) => msg,
                Err(_) => format!("{time} {hints}"),
            }
        }
    }
}

/// Hand the message to the target, or return it for display.
pub fn share_results(target: Option<&dyn ShareTarget>, text: String) -> ShareOutcome {
    match target {
        Some(t) => match t.share(SHARE_TITLE, &text) {
            Ok(()) => ShareOutcome::Shared,
            Err(error) => {
                warn!("Cannot share the results: {error}");
                ShareOutcome::Shown(text)
            }
        },
        None => ShareOutcome::Shown(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        sent: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ShareTarget for Recorder {
        fn share(&self, _title: &str, text: &str) -> Result<(), Box<dyn Error>> {
            if self.fail {
                return Err("no share capability".into());
            }
            self.sent.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn default_message() {
        assert_eq!(
            share_message(DEFAULT_SHARE_TEMPLATE, 83, 2),
            "I solved today's Wordchain in 83 seconds with 2 hints!"
        );
        assert_eq!(
            share_message("{hints} hints, {time}s", 5, 0),
            "0 hints, 5s"
        );
    }

    #[test]
    fn fallback_to_display() {
        let ok = Recorder {
            sent: RefCell::new(Vec::new()),
            fail: false,
        };
        assert_eq!(
            share_results(Some(&ok as &dyn ShareTarget), "msg".to_string()),
            ShareOutcome::Shared
        );
        assert_eq!(ok.sent.borrow().as_slice(), ["msg"]);

        let failing = Recorder {
            sent: RefCell::new(Vec::new()),
            fail: true,
        };
        assert_eq!(
            share_results(Some(&failing as &dyn ShareTarget), "msg".to_string()),
            ShareOutcome::Shown("msg".to_string())
        );
        assert_eq!(
            share_results(None, "msg".to_string()),
            ShareOutcome::Shown("msg".to_string())
        );
    }

    #[test]
    fn command_line_split() {
        assert!(CommandShare::new("   ").is_none());
        let cmd = CommandShare::new("xclip -selection clipboard").unwrap();
        assert_eq!(cmd.program, "xclip");
        assert_eq!(cmd.args, ["-selection", "clipboard"]);
    }
}
