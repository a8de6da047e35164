/*
properties.rs

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

// Game invariants under random play.

use proptest::prelude::*;

use wordchain::board::Board;
use wordchain::chains::{Catalog, Chain};
use wordchain::config::GameConfig;
use wordchain::game::{Game, Rejected, hint_batch};

#[derive(Debug, Clone)]
enum Action {
    Set(usize, usize, char),
    Clear(usize, usize),
    Focus(usize, usize),
    Type(char),
    Backspace,
    Submit,
    Hint,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..6, 0usize..11, proptest::char::range('a', 'z'))
            .prop_map(|(r, c, l)| Action::Set(r, c, l)),
        (0usize..6, 0usize..11).prop_map(|(r, c)| Action::Clear(r, c)),
        (0usize..6, 0usize..11).prop_map(|(r, c)| Action::Focus(r, c)),
        proptest::char::range('a', 'z').prop_map(Action::Type),
        Just(Action::Backspace),
        Just(Action::Submit),
        Just(Action::Submit),
        Just(Action::Hint),
    ]
}

fn chain() -> impl Strategy<Value = Chain> {
    prop_oneof![
        (0usize..10).prop_map(|i| Catalog::builtin(10).unwrap().get(i).unwrap().clone()),
        proptest::collection::vec("[a-z]{1,9}", 5).prop_map(|w| Chain::new(&w, 10).unwrap()),
    ]
}

fn apply(game: &mut Game, action: &Action) -> Result<(), Rejected> {
    match *action {
        Action::Set(r, c, l) => game.set_letter(r, c, l),
        Action::Clear(r, c) => game.clear_letter(r, c),
        Action::Focus(r, c) => game.focus(r, c),
        Action::Type(l) => game.type_letter(l),
        Action::Backspace => game.backspace(),
        Action::Submit => game.submit().map(|_| ()),
        Action::Hint => game.give_hint().map(|_| ()),
    }
}

proptest! {
    #[test]
    fn anchor_rows_never_change(
        chain in chain(),
        strict in any::<bool>(),
        actions in proptest::collection::vec(action(), 0..120),
    ) {
        let config = GameConfig { strict_row_order: strict, ..GameConfig::default() };
        let mut game = Game::new(config, chain).unwrap();
        let first = game.board().row(0).to_vec();
        let last = game.board().row(4).to_vec();
        prop_assert!(game.board().is_row_permanent(0));
        prop_assert!(game.board().is_row_permanent(4));

        for a in &actions {
            let _ = apply(&mut game, a);
            prop_assert_eq!(game.board().row(0), first.as_slice());
            prop_assert_eq!(game.board().row(4), last.as_slice());
        }
    }

    #[test]
    fn permanent_cells_keep_their_letter(
        chain in chain(),
        actions in proptest::collection::vec(action(), 0..150),
    ) {
        let mut game = Game::new(GameConfig::default(), chain).unwrap();
        for a in &actions {
            let before: Board = game.board().clone();
            let _ = apply(&mut game, a);
            for row in 0..before.height() {
                for col in 0..before.width() {
                    let old = before.cell(row, col).unwrap();
                    if old.permanent {
                        let new = game.board().cell(row, col).unwrap();
                        prop_assert!(new.permanent);
                        prop_assert_eq!(new.letter, old.letter);
                    }
                }
            }
        }
    }

    #[test]
    fn rejected_operations_change_nothing(
        chain in chain(),
        actions in proptest::collection::vec(action(), 0..120),
    ) {
        let mut game = Game::new(GameConfig::default(), chain).unwrap();
        for a in &actions {
            let before = game.snapshot();
            if apply(&mut game, a).is_err() {
                prop_assert_eq!(game.snapshot(), before);
            }
        }
    }

    #[test]
    fn hints_only_reveal(
        chain in chain(),
        actions in proptest::collection::vec(action(), 0..200),
    ) {
        let mut game = Game::new(GameConfig::default(), chain).unwrap();
        let mut hints: usize = 0;
        for a in &actions {
            let editable: Vec<usize> = Board::guess_rows()
                .map(|r| game.board().editable_columns(r).len())
                .collect();
            let result = apply(&mut game, a);
            if matches!(a, Action::Hint) && result.is_ok() {
                let row = game.snapshot().active_row.unwrap();
                let now = game.board().editable_columns(row).len();
                prop_assert!(now < editable[row - 1]);
                hints += 1;
            }
            prop_assert_eq!(game.total_hint_count(), hints);
        }
    }

    #[test]
    fn hint_batch_is_bounded(remaining in 1usize..20, fraction in 0.0f64..=1.0) {
        let n = hint_batch(remaining, fraction);
        prop_assert!(n >= 1);
        prop_assert!(n <= remaining);
    }
}
