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

mod keys;

use crate::config::{LockPolicy, SettingsStore};
use crate::host::{Host, HostEvent, MessageFeed};
use crate::lock::Transition;
use crossterm::event::EventStream;
use futures::StreamExt;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Cadence of the host's periodic tick notification.
const TICK_INTERVAL: Duration = Duration::from_millis(50);
/// Cadence of the pre-render notification and redraw.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    pub host: Host,
    pub feed: MessageFeed,
    pub settings: SettingsStore,
    pub message_interval: Duration,
    pub should_quit: bool,
    /// Most recent transition worth showing (skips and no-ops are filtered out).
    pub last_transition: Option<Transition>,
    /// One-line feedback for the footer, e.g. after saving settings.
    pub notice: Option<String>,
}

impl App {
    /// Run one host loop turn and remember what the controller did.
    pub fn dispatch(&mut self, event: HostEvent) {
        for transition in self.host.dispatch(event) {
            if !matches!(transition, Transition::Skipped { .. } | Transition::Unchanged) {
                self.last_transition = Some(transition);
            }
        }
    }

    /// Rows a page scroll moves by.
    #[must_use]
    pub fn page_size(&self) -> i32 {
        use crate::lock::Viewport as _;
        self.host.panel().map_or(1, |panel| (panel.visible_height() - 1).max(1))
    }
}

pub fn create_app(settings: SettingsStore, enabled: bool, message_interval: Duration) -> App {
    App {
        host: Host::new(LockPolicy::default(), enabled),
        feed: MessageFeed::new(),
        settings,
        message_interval,
        should_quit: false,
        last_transition: None,
        notice: None,
    }
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture for wheel scrolling (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let mut events = EventStream::new();
    let mut ticks = tokio::time::interval(TICK_INTERVAL);
    let mut messages = tokio::time::interval(app.message_interval);
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    for interval in [&mut ticks, &mut messages, &mut frames] {
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    }

    // Each branch is one host loop turn; none of them run concurrently.
    let result: anyhow::Result<()> = loop {
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                keys::handle_terminal_event(app, &event);
            }
            _ = ticks.tick() => {
                app.dispatch(HostEvent::Tick);
            }
            _ = messages.tick() => {
                if !app.feed.is_paused() {
                    let line = app.feed.next_line();
                    app.dispatch(HostEvent::Message(line));
                }
            }
            _ = frames.tick() => {
                app.dispatch(HostEvent::PreRender);
                if let Err(err) = terminal.draw(|f| crate::ui::render(f, app)) {
                    break Err(err.into());
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    app.dispatch(HostEvent::Stop);

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    result
}
