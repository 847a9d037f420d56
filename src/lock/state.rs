// chat-scroll-lock - Keeps a chat panel where you scrolled it
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use serde::Serialize;
use std::time::Instant;

/// Mutable lock bookkeeping owned by the controller.
///
/// The viewport is locked exactly when `anchor` holds a distance-from-bottom,
/// so there is no separate flag that could disagree with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockState {
    /// Distance from the bottom to hold while locked.
    pub(super) anchor: Option<i32>,
    /// When the most recent new-content notification arrived.
    pub(super) last_content_event: Option<Instant>,
    /// Set right after the controller writes the viewport so the next
    /// observation does not read that write as user scrolling.
    pub(super) suppress_next_observation: bool,
}

impl LockState {
    #[must_use]
    pub fn locked(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<i32> {
        self.anchor
    }

    #[must_use]
    pub fn last_content_event(&self) -> Option<Instant> {
        self.last_content_event
    }

    #[must_use]
    pub fn suppress_next_observation(&self) -> bool {
        self.suppress_next_observation
    }

    /// True when nothing distinguishes this state from a freshly created one.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn status(&self) -> LockStatus {
        match self.anchor {
            Some(anchor) => LockStatus::Locked { anchor },
            None => LockStatus::Unlocked,
        }
    }
}

/// Reportable view of [`LockState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LockStatus {
    Unlocked,
    Locked { anchor: i32 },
}
