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

mod chat;
mod header;
pub mod theme;

use crate::app::App;
use crate::host::{ChatPanel, HostEvent};
use crate::lock::Viewport;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const FOOTER_PAD: u16 = 2;
const KEY_HINTS: &str = "j/k scroll  PgUp/PgDn page  Home/End  e toggle lock  p pause  q quit";

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header_area, header_sep, body, footer_sep, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    sync_panel_height(app, body.height);

    header::render(frame, header_area, app);
    render_separator(frame, header_sep);
    chat::render(frame, body, app);
    render_separator(frame, footer_sep);
    render_footer(frame, footer, app);
}

/// The chat panel is built on the first frame and follows terminal resizes.
fn sync_panel_height(app: &mut App, rows: u16) {
    let rows = i32::from(rows);
    match app.host.panel() {
        None => app.dispatch(HostEvent::PanelOpened(ChatPanel::new(rows))),
        Some(panel) if panel.visible_height() != rows => app.dispatch(HostEvent::Resize(rows)),
        Some(_) => {}
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let line = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Span::styled(line, Style::default().fg(theme::DIM))),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };
    let mut spans = vec![Span::styled(KEY_HINTS, Style::default().fg(theme::DIM))];
    if let Some(notice) = app.notice.as_deref() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(notice, Style::default().fg(theme::RUST_ORANGE)));
    }
    spans.push(Span::styled(
        format!("   {} lines", app.feed.produced()),
        Style::default().fg(theme::DIM),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_app;
    use crate::config::SettingsStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    #[test]
    fn first_frame_opens_panel_sized_to_body() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let mut app = create_app(store, true, Duration::from_millis(500));
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal.draw(|f| render(f, &mut app)).unwrap();
        // 20 rows minus header, footer and two separators
        assert_eq!(app.host.panel().map(Viewport::visible_height), Some(16));

        terminal.backend_mut().resize(60, 12);
        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert_eq!(app.host.panel().map(Viewport::visible_height), Some(8));
    }

    #[test]
    fn renders_visible_chat_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let mut app = create_app(store, true, Duration::from_millis(500));
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
        for _ in 0..3 {
            let line = app.feed.next_line();
            app.dispatch(HostEvent::Message(line));
        }
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text: String =
            terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("ferris: "));
        assert!(text.contains("following"));
    }
}
