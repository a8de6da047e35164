/*
application.rs

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

//! Dispatch the player input to the game.
//!
//! The [`WordchainApplication`] object owns the game in progress, the rankings, and the
//! end of game notifier.
//! It is the only writer of the game: the presentation layer sends [`InputEvent`] objects and
//! renders the [`Snapshot`] that it gets back.

use log::{debug, info, warn};
use rand::Rng;

use crate::chains::{Catalog, Chain, ChainError};
use crate::config::GameConfig;
use crate::game::{Game, GameStatus, Rejected, Snapshot, SubmitOutcome};
use crate::input::InputEvent;
use crate::notifier::{Notification, NotificationKind, Notifier};
use crate::rankings::{RankingRecord, Rankings};
use crate::saver::rankings::SaverRankings;
use crate::share::{self, ShareOutcome, ShareTarget};

/// Result of an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The game changed. The optional message is for the player.
    Updated(Option<String>),

    /// Nothing changed, but there is a message for the player.
    Message(String),

    /// The rankings, best first.
    Rankings(Vec<RankingRecord>),

    Help,

    Quit,
}

/// Application state.
pub struct WordchainApplication {
    config: GameConfig,

    /// Chains the games are picked from.
    catalog: Catalog,

    /// The game in progress.
    game: Game,

    /// Identifier of the game in progress. Incremented for every new game.
    session: u64,

    /// Whether a notification is due for the game in progress.
    notification_pending: bool,

    /// Whether the player already added this game to the rankings.
    ranking_submitted: bool,

    rankings: Rankings,

    /// Rankings storage. No storage means that the rankings only live in memory.
    saver: Option<SaverRankings>,

    notifier: Notifier,

    /// Platform share capability, if any.
    share_target: Option<Box<dyn ShareTarget>>,
}

impl WordchainApplication {
    /// Create a [`WordchainApplication`] object and start a game with a random chain.
    pub fn new(
        config: GameConfig,
        catalog: Catalog,
        saver: Option<SaverRankings>,
        share_target: Option<Box<dyn ShareTarget>>,
    ) -> Result<Self, ChainError> {
        let config: GameConfig = config.sanitize();
        let chain: Chain = catalog.pick(&mut rand::rng()).clone();
        let game: Game = Game::new(config.clone(), chain)?;

        let rankings: Rankings = match &saver {
            Some(s) => match s.get_rankings() {
                Ok(Some(r)) => {
                    debug!("Loaded {} rankings", r.len());
                    r
                }
                Ok(None) => {
                    debug!("No saved rankings");
                    Rankings::new()
                }
                Err(error) => {
                    warn!("Error getting the rankings: {error}");
                    // Delete the file in error for trying to resolve the issue for the next start
                    s.delete_save();
                    Rankings::new()
                }
            },
            None => Rankings::new(),
        };

        Ok(Self {
            notifier: Notifier::new(config.notification_delay),
            config,
            catalog,
            game,
            session: 0,
            notification_pending: false,
            ranking_submitted: false,
            rankings,
            saver,
            share_target,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    /// Identifier of the game in progress.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Replace the game in progress.
    ///
    /// With no index, the chain is picked at random from the catalog.
    pub fn new_game(&mut self, index: Option<usize>) -> Result<(), ChainError> {
        self.new_game_with_rng(index, &mut rand::rng())
    }

    /// Same as [`WordchainApplication::new_game`] with the provided random number generator.
    pub fn new_game_with_rng<R: Rng + ?Sized>(
        &mut self,
        index: Option<usize>,
        rng: &mut R,
    ) -> Result<(), ChainError> {
        let chain: Chain = match index {
            Some(i) => self
                .catalog
                .get(i)
                .ok_or(ChainError::NotFound(i))?
                .clone(),
            None => self.catalog.pick(rng).clone(),
        };
        self.start(chain)
    }

    /// Replace the game in progress with a game for the given chain.
    pub fn start(&mut self, chain: Chain) -> Result<(), ChainError> {
        self.game = Game::new(self.config.clone(), chain)?;
        self.session += 1;
        self.notification_pending = false;
        self.ranking_submitted = false;
        debug!("Game session {}", self.session);
        Ok(())
    }

    /// Process an input event.
    ///
    /// A rejected event does not change anything.
    pub fn handle(&mut self, event: InputEvent) -> Result<Response, Rejected> {
        debug!("Event {event:?}");
        match event {
            InputEvent::KeyChar(c) => self.game.type_letter(c).map(|()| Response::Updated(None)),
            InputEvent::KeyBackspace => self.game.backspace().map(|()| Response::Updated(None)),
            InputEvent::KeyEnter => self.submit(),
            InputEvent::CellFocus(row, col) => {
                self.game.focus(row, col).map(|()| Response::Updated(None))
            }
            InputEvent::CellClick(row, col) => {
                self.game.click_cell(row, col).map(|()| Response::Updated(None))
            }
            InputEvent::HintButtonPress => {
                let hint = self.game.give_hint()?;
                let n: usize = hint.columns.len();
                let msg: String = if n == 1 {
                    "Hint: one letter revealed".to_string()
                } else {
                    format!("Hint: {n} letters revealed")
                };
                Ok(Response::Updated(Some(msg)))
            }
            InputEvent::NewGamePress => match self.new_game(None) {
                Ok(()) => Ok(Response::Updated(Some("New game".to_string()))),
                Err(error) => {
                    warn!("Cannot start a new game: {error}");
                    Ok(Response::Message(format!("Cannot start a new game: {error}")))
                }
            },
            InputEvent::ShareResultsPress => self.share(),
            InputEvent::SubmitRankingPress(name) => self.submit_ranking(&name),
            InputEvent::ShowRankings => Ok(Response::Rankings(
                self.rankings.sorted().into_iter().cloned().collect(),
            )),
            InputEvent::Help => Ok(Response::Help),
            InputEvent::Quit => Ok(Response::Quit),
        }
    }

    fn submit(&mut self) -> Result<Response, Rejected> {
        let msg: String = match self.game.submit()? {
            SubmitOutcome::Solved { row } => format!("Row {row} solved!"),
            SubmitOutcome::Missed { row, attempts } => {
                format!("Not the word for row {row} ({attempts} wrong guesses)")
            }
            SubmitOutcome::Won { .. } => {
                let time: u64 = self.game.elapsed_secs().unwrap_or(0);
                self.schedule(NotificationKind::Won {
                    time,
                    hints: self.game.total_hint_count(),
                });
                "Chain complete!".to_string()
            }
            SubmitOutcome::Revealed { row } => {
                self.schedule(NotificationKind::Lost {
                    row,
                    word: self.game.chain().word(row).to_string(),
                });
                "Out of hints: the word is revealed".to_string()
            }
        };
        Ok(Response::Updated(Some(msg)))
    }

    fn schedule(&mut self, kind: NotificationKind) {
        self.notification_pending = true;
        self.notifier.schedule(Notification {
            session: self.session,
            kind,
        });
    }

    /// Wait for the end of game notification of the game in progress.
    ///
    /// Return None immediately if no notification is due. Notifications of previous games are
    /// dropped.
    pub fn wait_notification(&mut self) -> Option<Notification> {
        while self.notification_pending {
            let n: Notification = self.notifier.recv()?;
            if let Some(n) = self.accept(n) {
                return Some(n);
            }
        }
        None
    }

    /// Return the end of game notification if it already arrived.
    pub fn poll_notification(&mut self) -> Option<Notification> {
        while let Some(n) = self.notifier.try_recv() {
            if let Some(n) = self.accept(n) {
                return Some(n);
            }
        }
        None
    }

    fn accept(&mut self, notification: Notification) -> Option<Notification> {
        if notification.session != self.session {
            debug!("Dropping notification of game {}", notification.session);
            return None;
        }
        self.notification_pending = false;
        Some(notification)
    }

    /// Share the results of the solved game.
    fn share(&self) -> Result<Response, Rejected> {
        if self.game.status() != GameStatus::Won {
            return Err(Rejected::GameNotWon);
        }
        let text: String = share::share_message(
            &self.config.share_template,
            self.game.elapsed_secs().unwrap_or(0),
            self.game.total_hint_count(),
        );
        match share::share_results(self.share_target.as_deref(), text) {
            ShareOutcome::Shared => Ok(Response::Message("Results shared".to_string())),
            ShareOutcome::Shown(text) => Ok(Response::Message(text)),
        }
    }

    /// Add the solved game to the rankings.
    fn submit_ranking(&mut self, name: &str) -> Result<Response, Rejected> {
        if self.game.status() != GameStatus::Won {
            return Err(Rejected::GameNotWon);
        }
        if self.ranking_submitted {
            return Err(Rejected::RankingAlreadySubmitted);
        }
        let name: &str = name.trim();
        if name.is_empty() {
            return Err(Rejected::EmptyName);
        }

        let record = RankingRecord::new(
            name,
            self.game.elapsed_secs().unwrap_or(0),
            self.game.total_hint_count(),
        );
        let position: usize = self.rankings.add(record);
        self.ranking_submitted = true;
        info!("{name} ranked {position}");

        if let Some(saver) = &self.saver
            && let Err(error) = saver.save_rankings(&self.rankings)
        {
            warn!("Error saving the rankings: {error}");
        }
        Ok(Response::Message(format!(
            "{name} is number {position} in the rankings"
        )))
    }
}
