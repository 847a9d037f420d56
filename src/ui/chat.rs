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
use crate::host::ChatLine;
use crate::lock::Viewport;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(panel) = app.host.panel() else {
        return;
    };

    let text_area = Rect { width: area.width.saturating_sub(1), ..area };
    for (row, line) in panel.visible_lines() {
        // Tall lines only come from replayed history; draw their first row when visible.
        let Ok(row) = u16::try_from(row) else {
            continue;
        };
        if row >= text_area.height {
            break;
        }
        let line_area = Rect { y: text_area.y + row, height: 1, ..text_area };
        frame.render_widget(Paragraph::new(chat_line(line)), line_area);
    }

    let metrics = panel.metrics();
    let max_offset = usize::try_from(metrics.max_offset()).unwrap_or(0);
    if max_offset > 0 {
        let position = usize::try_from(metrics.offset).unwrap_or(0);
        let mut state = ScrollbarState::new(max_offset).position(position);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

fn chat_line(line: &ChatLine) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            line.author.as_str(),
            Style::default().fg(theme::author_color(&line.author)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(": ", Style::default().fg(theme::DIM)),
        Span::raw(line.text.as_str()),
    ])
}
