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

use ratatui::style::Color;

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";

// Lock status
pub const LOCKED: Color = RUST_ORANGE;
pub const FOLLOWING: Color = Color::Green;
pub const DISABLED: Color = Color::Red;
pub const ICON_LOCKED: &str = "■";
pub const ICON_FOLLOWING: &str = "▼";
pub const ICON_DISABLED: &str = "○";

// Chat authors cycle through these so neighbouring lines are easy to tell apart
const AUTHOR_COLORS: &[Color] =
    &[Color::Cyan, Color::Magenta, Color::Yellow, Color::LightBlue, Color::LightGreen];

/// Stable color for an author name.
pub fn author_color(name: &str) -> Color {
    let hash = name.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b.into()));
    AUTHOR_COLORS[hash % AUTHOR_COLORS.len()]
}
