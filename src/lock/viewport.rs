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

//! The scrollable region the controller reads and corrects.
//!
//! The host owns the viewport. The controller only sees it through the
//! [`Viewport`] trait and is handed `None` when the host has not built one yet.

use serde::Serialize;

/// Read/write access to a host-owned scroll region.
///
/// All quantities share one unit (pixels, rows, whatever the host measures in).
pub trait Viewport {
    /// Current scroll position, measured from the top of the content.
    fn offset(&self) -> i32;

    /// Move the scroll position. Hosts may clamp the value.
    fn set_offset(&mut self, offset: i32);

    /// Total height of all content, scrolled or not.
    fn extent(&self) -> i32;

    fn visible_height(&self) -> i32;

    /// Snapshot the three metrics at once.
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            offset: self.offset(),
            extent: self.extent(),
            visible_height: self.visible_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportMetrics {
    pub offset: i32,
    pub extent: i32,
    pub visible_height: i32,
}

impl ViewportMetrics {
    /// How far the viewport sits above the newest content. Zero at the bottom.
    #[must_use]
    pub fn distance_from_bottom(&self) -> i32 {
        self.extent
            .saturating_sub(self.visible_height)
            .saturating_sub(self.offset)
            .max(0)
    }

    /// Largest offset the content allows. Zero when everything fits.
    #[must_use]
    pub fn max_offset(&self) -> i32 {
        self.extent.saturating_sub(self.visible_height).max(0)
    }

    /// Offset that would leave the viewport `distance` above the bottom.
    ///
    /// `None` when the content is too short to honor the distance.
    #[must_use]
    pub fn offset_for_distance(&self, distance: i32) -> Option<i32> {
        let target =
            self.extent.saturating_sub(self.visible_height).saturating_sub(distance);
        (target >= 0).then_some(target)
    }
}
