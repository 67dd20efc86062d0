//! Bottom status bar — key hints and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use archguide_core::SectionId;

use crate::app::{App, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" 1-6/Tab:section", theme::muted()));
    if app.selected_section() == SectionId::Security {
        spans.push(Span::styled(" j/k:layer Enter:toggle", theme::muted()));
    } else {
        spans.push(Span::styled(" j/k:scroll", theme::muted()));
    }
    spans.push(Span::styled(" PgUp/PgDn q:quit", theme::muted()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
