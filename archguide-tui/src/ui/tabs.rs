//! Tab strip — one label per section, in declaration order.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use archguide_core::view::TabView;
use archguide_core::Screen;

use crate::theme;
use crate::ui::HitMap;

const DIVIDER: &str = "│";

/// Label text for every tab. Falls back to short labels when the full
/// titles do not fit in `width` columns.
pub fn labels(tabs: &[TabView], width: u16) -> Vec<String> {
    let full: Vec<String> = tabs
        .iter()
        .enumerate()
        .map(|(i, t)| format!(" {} {} ", i + 1, t.title))
        .collect();
    if strip_width(&full) <= usize::from(width) {
        return full;
    }
    tabs.iter()
        .enumerate()
        .map(|(i, t)| format!(" {} {} ", i + 1, t.id.short_label()))
        .collect()
}

fn strip_width(labels: &[String]) -> usize {
    let text: usize = labels.iter().map(|l| l.chars().count()).sum();
    text + labels.len().saturating_sub(1)
}

pub fn render(f: &mut Frame, area: Rect, screen: &Screen, hits: &mut HitMap) {
    let labels = labels(&screen.tabs, area.width);
    let mut spans: Vec<Span> = Vec::new();
    let mut x = area.x;

    for (i, (tab, label)) in screen.tabs.iter().zip(labels).enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, theme::muted()));
            x = x.saturating_add(1);
        }
        let w = label.chars().count() as u16;
        let rect = Rect::new(x, area.y, w, 1).intersection(area);
        hits.push(rect, tab.action());
        spans.push(Span::styled(label, theme::tab(tab.highlighted)));
        x = x.saturating_add(w);
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use archguide_core::{render, ContentStore, ViewState};

    #[test]
    fn full_titles_when_wide() {
        let screen = render(ContentStore::builtin(), &ViewState::default());
        let labels = labels(&screen.tabs, 200);
        assert_eq!(labels[0], " 1 Architecture Overview ");
        assert_eq!(labels[5], " 6 Implementation Stack ");
    }

    #[test]
    fn short_labels_when_narrow() {
        let screen = render(ContentStore::builtin(), &ViewState::default());
        let labels = labels(&screen.tabs, 80);
        assert_eq!(labels[1], " 2 Security ");
        assert!(strip_width(&labels) <= 80);
    }
}
