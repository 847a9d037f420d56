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

//! Synthetic chat traffic for the demo. Deterministic so runs are repeatable.

use super::panel::ChatLine;

const AUTHORS: &[&str] = &["ferris", "ada", "grace", "linus", "ken", "barbara", "dennis"];

const MESSAGES: &[&str] = &[
    "anyone up for a raid later?",
    "just hit level 70 on fishing",
    "lol",
    "does the bank close at reset?",
    "selling 400 oak logs, pm me",
    "brb",
    "that boss drop rate is brutal",
    "gg everyone",
    "where do I find the quest start?",
    "north of the lumber yard, past the bridge",
    "thanks!",
    "world 302 is lagging again",
    "scroll up and read what I wrote earlier",
    "who's got a spare pickaxe",
    "ty",
];

#[derive(Debug, Default)]
pub struct MessageFeed {
    produced: usize,
    paused: bool,
}

impl MessageFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next line. Authors and messages cycle at different rates
    /// so the pairing does not repeat quickly.
    pub fn next_line(&mut self) -> ChatLine {
        let n = self.produced;
        self.produced += 1;
        let author = AUTHORS[n % AUTHORS.len()];
        let text = MESSAGES[(n * 7 + 3) % MESSAGES.len()];
        ChatLine::new(author, text)
    }

    #[must_use]
    pub fn produced(&self) -> usize {
        self.produced
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_single_row_and_counted() {
        let mut feed = MessageFeed::new();
        for _ in 0..20 {
            assert_eq!(feed.next_line().height, 1);
        }
        assert_eq!(feed.produced(), 20);
    }

    #[test]
    fn feed_is_deterministic() {
        let mut a = MessageFeed::new();
        let mut b = MessageFeed::new();
        for _ in 0..10 {
            assert_eq!(a.next_line(), b.next_line());
        }
    }

    #[test]
    fn pause_toggles() {
        let mut feed = MessageFeed::new();
        feed.toggle_pause();
        assert!(feed.is_paused());
        feed.toggle_pause();
        assert!(!feed.is_paused());
    }
}
