//! Section body — turns the screen's blocks into pre-wrapped lines.
//!
//! Lines are wrapped here rather than by the paragraph widget so that every
//! line maps to exactly one terminal row; the hit map relies on that to
//! place layer headers.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use archguide_core::view::{Block, Card, LayerView, ListBlock, ListStyle};
use archguide_core::Screen;

use crate::theme;

/// Wrapped body lines plus the row of each security layer header.
pub struct BodyLines {
    pub lines: Vec<Line<'static>>,
    /// `(row, layer index)` for every accordion header.
    pub layer_rows: Vec<(usize, usize)>,
}

/// Build the body for `screen` at `width` columns. `focus` marks the layer
/// under the keyboard cursor.
pub fn build(screen: &Screen, width: u16, focus: Option<usize>) -> BodyLines {
    let mut out = Writer {
        lines: Vec::new(),
        width: usize::from(width).max(8),
    };
    let mut layer_rows = Vec::new();

    for (i, block) in screen.body.iter().enumerate() {
        let accordion = matches!(block, Block::Accordion(_));
        if i > 0 && !accordion {
            out.blank();
        }
        match block {
            Block::Heading(title) => out.line(Line::from(Span::styled(*title, theme::heading()))),
            Block::List(list) => out.list(list, 0),
            Block::KeyValues { title, pairs } => {
                out.line(Line::from(Span::styled(*title, theme::heading())));
                let key_width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
                for (key, value) in pairs {
                    let prefix = vec![Span::styled(
                        format!("  {key:<key_width$}  "),
                        theme::accent_bold(),
                    )];
                    out.wrapped(prefix, key_width + 4, value, theme::text_secondary());
                }
            }
            Block::LayerRows { title, rows } => {
                out.line(Line::from(Span::styled(*title, theme::heading())));
                let name_width = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
                for (name, components) in rows {
                    let prefix = vec![Span::styled(
                        format!("  {name:<name_width$}  "),
                        theme::text(),
                    )];
                    out.wrapped(prefix, name_width + 4, &components.join(" • "), theme::muted());
                }
            }
            Block::Card(card) => out.card(card),
            Block::Accordion(layer) => {
                layer_rows.push((out.lines.len(), layer.index));
                out.layer(layer, focus == Some(layer.index));
            }
        }
    }

    BodyLines {
        lines: out.lines,
        layer_rows,
    }
}

struct Writer {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl Writer {
    fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Emit `text` after `prefix`, wrapping with a hanging indent of
    /// `indent` columns.
    fn wrapped(&mut self, prefix: Vec<Span<'static>>, indent: usize, text: &str, style: Style) {
        let avail = self.width.saturating_sub(indent).max(4);
        let mut chunks = wrap(text, avail).into_iter();
        let first = chunks.next().unwrap_or_default();
        let mut spans = prefix;
        spans.push(Span::styled(first, style));
        self.lines.push(Line::from(spans));
        for chunk in chunks {
            self.lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(chunk, style),
            ]));
        }
    }

    fn list(&mut self, list: &ListBlock, indent: usize) {
        let pad = " ".repeat(indent);
        let (bar, item_style) = match list.tone {
            Some(tone) => ("▌ ", theme::tone(tone)),
            None => ("", theme::text_secondary()),
        };
        let bar_style = list.tone.map(theme::tone).unwrap_or_default();
        let lead = indent + bar.chars().count();

        if let Some(title) = list.title {
            let title_style = match list.tone {
                Some(tone) => theme::tone(tone).add_modifier(Modifier::BOLD),
                None if indent > 0 => theme::text(),
                None => theme::heading(),
            };
            self.lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(bar, bar_style),
                Span::styled(title, title_style),
            ]));
        }

        if list.style == ListStyle::Chips {
            self.chips(&list.items, &pad, bar, bar_style);
            return;
        }

        let marker = match list.style {
            ListStyle::Checks => "✓ ",
            ListStyle::Bullets => "• ",
            ListStyle::Plain | ListStyle::Chips => "  ",
        };
        for item in &list.items {
            let prefix = vec![
                Span::raw(pad.clone()),
                Span::styled(bar, bar_style),
                Span::styled(marker, item_style),
            ];
            self.wrapped(prefix, lead + 2, item, item_style);
        }
    }

    /// Lay chips out left to right, breaking before a chip that would overflow.
    fn chips(&mut self, items: &[&'static str], pad: &str, bar: &'static str, bar_style: Style) {
        let lead = pad.chars().count() + bar.chars().count();
        let mut spans: Vec<Span<'static>> =
            vec![Span::raw(pad.to_string()), Span::styled(bar, bar_style)];
        let mut used = lead;
        for item in items {
            let chip = format!("[{item}]");
            let w = chip.chars().count();
            if used > lead && used + 1 + w > self.width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans = vec![Span::raw(pad.to_string()), Span::styled(bar, bar_style)];
                used = lead;
            }
            if used > lead {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(chip, theme::chip()));
            used += w;
        }
        self.lines.push(Line::from(spans));
    }

    fn card(&mut self, card: &Card) {
        self.lines.push(Line::from(vec![
            Span::styled("■ ", theme::accent()),
            Span::styled(card.title, theme::heading()),
        ]));
        for (label, value) in &card.fields {
            let label = format!("{label}: ");
            let indent = 2 + label.chars().count();
            let prefix = vec![Span::raw("  "), Span::styled(label, theme::text())];
            self.wrapped(prefix, indent, value, theme::text_secondary());
        }
        for list in &card.lists {
            self.list(list, 2);
        }
    }

    fn layer(&mut self, layer: &LayerView, focused: bool) {
        let cursor = if focused { "›" } else { " " };
        let header_style = theme::layer_header(focused);
        let used = 3 + layer.name.chars().count();
        let gap = self.width.saturating_sub(used + 1).max(1);
        self.lines.push(Line::from(vec![
            Span::styled(cursor, theme::accent_bold()),
            Span::styled("◆ ", theme::negative()),
            Span::styled(layer.name, header_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(layer.marker(), theme::muted()),
        ]));
        for list in &layer.lists {
            self.list(list, 4);
        }
    }
}

/// Greedy word wrap on character count. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use archguide_core::{render, ContentStore, SectionId, ViewState};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(section: SectionId, expanded: Option<usize>) -> Screen {
        render(
            ContentStore::builtin(),
            &ViewState {
                selected_section: section,
                expanded_layer: expanded,
            },
        )
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("alpha beta gamma", 10), ["alpha beta", "gamma"]);
        assert_eq!(wrap("", 10), [""]);
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn collapsed_security_is_one_row_per_layer() {
        let body = build(&screen(SectionId::Security, None), 60, None);
        assert_eq!(body.lines.len(), 4);
        assert_eq!(body.layer_rows, [(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(text_of(&body.lines[1]).contains("API Security"));
        assert!(text_of(&body.lines[1]).trim_end().ends_with('+'));
    }

    #[test]
    fn expanded_layer_pushes_later_headers_down() {
        let body = build(&screen(SectionId::Security, Some(0)), 80, Some(0));
        let rows: Vec<usize> = body.layer_rows.iter().map(|(r, _)| *r).collect();
        assert_eq!(rows[0], 0);
        assert!(rows[1] > 1);
        let header = text_of(&body.lines[0]);
        assert!(header.starts_with('›'));
        assert!(header.trim_end().ends_with('−'));
        let all: String = body.lines.iter().map(text_of).collect::<Vec<_>>().join("\n");
        assert!(all.contains("[Keycloak (OAuth2/OIDC)]"));
        assert!(all.contains("• mTLS between services"));
        assert!(!all.contains("Kong with rate limiting"));
    }

    #[test]
    fn narrow_width_wraps_long_values() {
        let body = build(&screen(SectionId::Implementation, None), 40, None);
        for line in &body.lines {
            assert!(line.width() <= 40, "{:?} is wider than 40", text_of(line));
        }
    }

    #[test]
    fn overview_lists_stack_pairs() {
        let body = build(&screen(SectionId::Overview, None), 100, None);
        let all: Vec<String> = body.lines.iter().map(text_of).collect();
        assert!(all.iter().any(|l| l.contains("Orchestration") && l.contains("Kubernetes (K8s)")));
        assert!(all.iter().any(|l| l.contains("✓ Zero Trust Security model")));
        assert!(body.layer_rows.is_empty());
    }
}
