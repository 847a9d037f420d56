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

use crate::app::App;
use crate::lock::{LockStatus, Transition, Viewport};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HEADER_PAD: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + HEADER_PAD,
        y: area.y,
        width: area.width.saturating_sub(HEADER_PAD * 2),
        height: area.height,
    };

    let sep = Span::styled("  \u{2502}  ", Style::default().fg(theme::DIM));
    let (icon, label, color) = status_label(app);

    let mut spans = vec![
        Span::styled(
            "scroll-lock",
            Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(format!("{icon} {label}"), Style::default().fg(color)),
    ];

    if let Some(panel) = app.host.panel() {
        let metrics = panel.metrics();
        spans.push(sep.clone());
        spans.push(Span::styled(
            format!(
                "offset {} / {}  distance {}",
                metrics.offset,
                metrics.max_offset(),
                metrics.distance_from_bottom()
            ),
            Style::default().fg(theme::DIM),
        ));
    }

    if let Some(transition) = app.last_transition {
        spans.push(sep);
        spans.push(Span::styled(
            format!("last: {}", describe(transition)),
            Style::default().fg(theme::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}

fn status_label(app: &App) -> (&'static str, String, ratatui::style::Color) {
    if !app.host.enabled() {
        return (theme::ICON_DISABLED, "disabled".to_owned(), theme::DISABLED);
    }
    match app.host.status() {
        LockStatus::Locked { anchor } => {
            (theme::ICON_LOCKED, format!("locked {anchor} above bottom"), theme::LOCKED)
        }
        LockStatus::Unlocked => (theme::ICON_FOLLOWING, "following".to_owned(), theme::FOLLOWING),
    }
}

fn describe(transition: Transition) -> String {
    match transition {
        Transition::Locked { anchor } => format!("locked at {anchor}"),
        Transition::Unlocked => "unlocked".to_owned(),
        Transition::AnchorMoved { from, to } => format!("anchor {from} -> {to}"),
        Transition::Reasserted { from, to } => format!("held {from} -> {to}"),
        Transition::Scheduled => "hold queued".to_owned(),
        Transition::Reset => "reset".to_owned(),
        Transition::Skipped { reason } => format!("skipped ({reason:?})"),
        Transition::Unchanged => "unchanged".to_owned(),
    }
}
