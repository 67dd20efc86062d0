//! Guidance note below the section body.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use archguide_core::Screen;

use crate::theme;
use crate::ui::body::wrap;

/// Rows needed to show the note at `width` columns, capped at `max_text`
/// lines of text plus the title and top border.
pub fn height(screen: &Screen, width: u16, max_text: usize) -> u16 {
    let text_rows = wrap(screen.footer_text, usize::from(width.saturating_sub(2))).len();
    (text_rows.min(max_text) + 2) as u16
}

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("! ", theme::warning()),
        Span::styled(screen.footer_title, theme::heading()),
    ])];
    lines.extend(
        wrap(screen.footer_text, usize::from(inner.width.saturating_sub(2)))
            .into_iter()
            .map(|l| Line::from(Span::styled(format!("  {l}"), theme::text_secondary()))),
    );
    f.render_widget(Paragraph::new(lines), inner);
}
