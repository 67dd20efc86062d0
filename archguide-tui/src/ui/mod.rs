//! Top-level UI layout — banner, tab strip, section panel, guidance, status bar.

pub mod body;
pub mod footer;
pub mod header;
pub mod help;
pub mod hit_map;
pub mod status_bar;
pub mod tabs;

pub use hit_map::HitMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};

use archguide_core::{Action, Screen};

use crate::app::App;
use crate::theme;

/// Draw the entire UI and return the clickable regions it produced.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let screen = app.screen();
    let mut hits = HitMap::default();

    let area = f.area();
    let footer_height = footer::height(&screen, area.width, 3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(f, chunks[0], &screen);
    tabs::render(f, chunks[1], &screen, &mut hits);
    draw_section(f, chunks[2], app, &screen, &mut hits);
    footer::render(f, chunks[3], &screen);
    status_bar::render(f, chunks[4], app);

    if app.show_help {
        help::render(f, area);
    }

    hits
}

/// Draw the selected section inside a bordered panel titled with its heading.
fn draw_section(f: &mut Frame, area: Rect, app: &App, screen: &Screen, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {} ", screen.heading))
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let body = body::build(screen, inner.width, app.layer_focus());
    let height = usize::from(inner.height);
    hits.body_height = height;
    hits.body_rows = body.lines.len();
    hits.layer_rows = body.layer_rows.iter().map(|(row, _)| *row).collect();

    let scroll = app.scroll().min(hits.max_scroll());
    for &(row, index) in &body.layer_rows {
        if row >= scroll && row < scroll + height {
            let y = inner.y + (row - scroll) as u16;
            hits.push(
                Rect::new(inner.x, y, inner.width, 1),
                Action::ToggleLayer(index),
            );
        }
    }

    let para = Paragraph::new(body.lines).scroll((scroll as u16, 0));
    f.render_widget(para, inner);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
