/*
main.rs

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

use std::process::ExitCode;

use wordchain::cli_options::{self, CliAction};
use wordchain::terminal;

fn main() -> ExitCode {
    match cli_options::parse() {
        CliAction::Exit(code) => ExitCode::from(code),
        CliAction::Play(options) => ExitCode::from(terminal::run(options)),
    }
}
