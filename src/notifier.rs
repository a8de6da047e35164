/*
notifier.rs

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

//! Delayed end of game notification.
//!
//! When the game is won or lost, the board first shows the final row, and the notification
//! follows after a short delay.
//! The notification is sent from a timer thread through an [`async_channel`] channel.
//! Timers cannot be canceled: each notification carries the identifier of the game session it
//! belongs to, so that the receiver can drop the notifications of a replaced game.

use async_channel::{Receiver, Sender, TryRecvError};
use log::debug;
use std::thread;
use std::time::Duration;

/// End of game event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// The puzzle is solved.
    Won { time: u64, hints: usize },

    /// A row has been revealed after the last hint.
    Lost { row: usize, word: String },
}

/// Notification for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Game session identifier.
    pub session: u64,

    pub kind: NotificationKind,
}

/// Schedule and deliver notifications.
pub struct Notifier {
    sender: Sender<Notification>,
    receiver: Receiver<Notification>,
    delay: Duration,
}

impl Notifier {
    /// Create a [`Notifier`] object that delivers notifications after `delay`.
    pub fn new(delay: Duration) -> Self {
        let (sender, receiver) = async_channel::bounded::<Notification>(1);
        Self {
            sender,
            receiver,
            delay,
        }
    }

    /// Send the notification once the delay expires.
    pub fn schedule(&self, notification: Notification) {
        let sender: Sender<Notification> = self.sender.clone();
        let delay: Duration = self.delay;
        debug!("Notification in {delay:?}: {notification:?}");
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver only goes away with the application
            let _ = sender.send_blocking(notification);
        });
    }

    /// Wait for the next notification.
    pub fn recv(&self) -> Option<Notification> {
        self.receiver.recv_blocking().ok()
    }

    /// Return the next notification if one already arrived.
    pub fn try_recv(&self) -> Option<Notification> {
        match self.receiver.try_recv() {
            Ok(n) => Some(n),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn notification_is_delayed() {
        let notifier = Notifier::new(Duration::from_millis(50));
        let start = Instant::now();
        notifier.schedule(Notification {
            session: 3,
            kind: NotificationKind::Won { time: 12, hints: 1 },
        });
        assert_eq!(notifier.try_recv(), None);
        let n = notifier.recv().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(n.session, 3);
        assert_eq!(n.kind, NotificationKind::Won { time: 12, hints: 1 });
    }
}
