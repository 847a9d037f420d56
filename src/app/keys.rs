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

use super::App;
use crate::config::Settings;
use crate::host::HostEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

const MOUSE_SCROLL_LINES: i32 = 3;

pub(super) fn handle_terminal_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => app.dispatch(HostEvent::ScrollBy(-MOUSE_SCROLL_LINES)),
            MouseEventKind::ScrollDown => app.dispatch(HostEvent::ScrollBy(MOUSE_SCROLL_LINES)),
            _ => {}
        },
        // Resize is picked up by the next render
        _ => {}
    }
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(HostEvent::ScrollBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(HostEvent::ScrollBy(1)),
        KeyCode::PageUp => {
            let page = app.page_size();
            app.dispatch(HostEvent::ScrollBy(-page));
        }
        KeyCode::PageDown => {
            let page = app.page_size();
            app.dispatch(HostEvent::ScrollBy(page));
        }
        KeyCode::Home | KeyCode::Char('g') => app.dispatch(HostEvent::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => app.dispatch(HostEvent::ScrollToBottom),
        KeyCode::Char('e') => toggle_enabled(app),
        KeyCode::Char('p') => {
            app.feed.toggle_pause();
            app.notice =
                Some(if app.feed.is_paused() { "feed paused" } else { "feed resumed" }.to_owned());
        }
        _ => {}
    }
}

/// Flip the lock on or off for this session and persist the choice.
fn toggle_enabled(app: &mut App) {
    let enabled = !app.host.enabled();
    app.dispatch(HostEvent::SetEnabled(enabled));
    let label = if enabled { "scroll lock on" } else { "scroll lock off" };
    app.notice = Some(match app.settings.save(Settings { enabled }) {
        Ok(()) => format!("{label} (saved)"),
        Err(err) => format!("{label} ({})", err.user_message()),
    });
}
