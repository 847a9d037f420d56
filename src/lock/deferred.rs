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

//! Single-slot "run on next cycle" queue.
//!
//! A notification handler parks work here when it has to run after the host
//! has finished reacting to the same notification. The host loop drains the
//! slot once per turn. Scheduling again before the drain replaces the queued
//! item, so at most one task is ever outstanding.

#[derive(Debug)]
pub struct DeferredSlot<T> {
    task: Option<T>,
}

impl<T> DeferredSlot<T> {
    pub const fn new() -> Self {
        Self { task: None }
    }

    /// Queue `task` for the next drain. Returns the task it displaced, if any.
    pub fn schedule(&mut self, task: T) -> Option<T> {
        self.task.replace(task)
    }

    /// Remove and return the queued task.
    pub fn take(&mut self) -> Option<T> {
        self.task.take()
    }

    /// Drop whatever is queued.
    pub fn clear(&mut self) {
        self.task = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.task.is_some()
    }
}

impl<T> Default for DeferredSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
