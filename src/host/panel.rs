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

use crate::lock::Viewport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub author: String,
    pub text: String,
    /// Rows the line occupies once laid out.
    pub height: i32,
}

impl ChatLine {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self { author: author.into(), text: text.into(), height: 1 }
    }

    /// A line with no visible text, used to stand in for existing history.
    pub fn filler(height: i32) -> Self {
        Self { author: String::new(), text: String::new(), height }
    }
}

/// Chat message list that behaves like the renderer the lock fights against:
/// every append jumps the view to the newest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanel {
    lines: Vec<ChatLine>,
    extent: i32,
    offset: i32,
    visible_height: i32,
}

impl ChatPanel {
    pub fn new(visible_height: i32) -> Self {
        Self { lines: Vec::new(), extent: 0, offset: 0, visible_height: visible_height.max(0) }
    }

    /// Panel that already holds `extent` rows of history, scrolled to `offset`.
    pub fn with_content(visible_height: i32, extent: i32, offset: i32) -> Self {
        let mut panel = Self::new(visible_height);
        if extent > 0 {
            panel.lines.push(ChatLine::filler(extent));
            panel.extent = extent;
        }
        panel.set_offset(offset);
        panel
    }

    /// Add a line and follow it to the bottom.
    pub fn append(&mut self, line: ChatLine) {
        self.extent = self.extent.saturating_add(line.height.max(0));
        self.lines.push(line);
        self.offset = self.max_offset();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.set_offset(self.offset.saturating_add(delta));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn resize(&mut self, visible_height: i32) {
        self.visible_height = visible_height.max(0);
        self.offset = self.offset.clamp(0, self.max_offset());
    }

    /// Lines intersecting the visible rows, each paired with the viewport row
    /// its first row lands on. Rows can be negative for a line that starts
    /// above the top edge.
    pub fn visible_lines(&self) -> impl Iterator<Item = (i32, &ChatLine)> {
        let top = self.offset;
        let bottom = self.offset.saturating_add(self.visible_height);
        self.lines
            .iter()
            .scan(0i32, |y, line| {
                let start = *y;
                *y = y.saturating_add(line.height.max(0));
                Some((start, line))
            })
            .skip_while(move |(start, line)| start.saturating_add(line.height) <= top)
            .take_while(move |(start, _)| *start < bottom)
            .map(move |(start, line)| (start - top, line))
    }

    fn max_offset(&self) -> i32 {
        self.metrics().max_offset()
    }
}

impl Viewport for ChatPanel {
    fn offset(&self) -> i32 {
        self.offset
    }

    fn set_offset(&mut self, offset: i32) {
        self.offset = offset.clamp(0, self.max_offset());
    }

    fn extent(&self) -> i32 {
        self.extent
    }

    fn visible_height(&self) -> i32 {
        self.visible_height
    }
}
