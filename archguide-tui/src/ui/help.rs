//! Help overlay — key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::panel_title());

    let mut lines: Vec<Line> = key_bindings_help()
        .into_iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(format!("  {keys:>24}  "), theme::accent()),
                Span::styled(desc, theme::muted()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", theme::muted())));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
