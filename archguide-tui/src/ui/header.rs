//! Banner — title and subtitle above the tab strip.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use archguide_core::Screen;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}", screen.title), theme::banner_title())),
        Line::from(Span::styled(format!(" {}", screen.subtitle), theme::banner_subtitle())),
    ];
    let para = Paragraph::new(lines).style(theme::banner_subtitle());
    f.render_widget(para, area);
}
