//! Application state — single-owner, main-thread only.
//!
//! Wraps the [`ViewController`] with the bits of state a terminal needs on
//! top of the two view transitions: a keyboard focus cursor over the
//! security layers, body scroll, the last frame's hit map and a status line.

use tracing::{debug, info};

use archguide_core::{render, Action, ContentStore, Screen, SectionId, ViewController, ViewState};

use crate::ui::HitMap;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Top-level application state.
pub struct App<'a> {
    controller: ViewController<'a>,
    pub running: bool,
    /// Security layer under the keyboard cursor.
    layer_cursor: usize,
    /// First visible body row.
    scroll: usize,
    /// Regions drawn by the last frame.
    pub hit_map: HitMap,
    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl App<'static> {
    /// App over the compiled-in content.
    pub fn builtin() -> Self {
        App::new(ContentStore::builtin())
    }
}

impl<'a> App<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self {
            controller: ViewController::new(store),
            running: true,
            layer_cursor: 0,
            scroll: 0,
            hit_map: HitMap::default(),
            show_help: false,
            status_message: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn selected_section(&self) -> SectionId {
        self.controller.selected_section()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Build the visual tree for the current state.
    pub fn screen(&self) -> Screen {
        render(self.controller.store(), self.controller.state())
    }

    /// Focused layer, only while the security section is shown.
    pub fn layer_focus(&self) -> Option<usize> {
        (self.selected_section() == SectionId::Security).then_some(self.layer_cursor)
    }

    fn layer_count(&self) -> usize {
        self.controller.store().security_layers().len()
    }

    /// Apply an input event. Selecting a section also resets the
    /// terminal-only cursor and scroll; toggling moves focus to the layer.
    pub fn apply(&mut self, action: Action) {
        self.controller.apply(action);
        match action {
            Action::SelectSection(_) => {
                self.layer_cursor = 0;
                self.scroll = 0;
            }
            Action::ToggleLayer(index) => {
                self.layer_cursor = index;
            }
        }
        self.status_message = None;
    }

    pub fn select_section(&mut self, id: SectionId) {
        self.apply(Action::SelectSection(id));
    }

    pub fn next_section(&mut self) {
        self.select_section(self.selected_section().next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.selected_section().prev());
    }

    pub fn focus_next_layer(&mut self) {
        if self.layer_focus().is_none() {
            return;
        }
        if self.layer_cursor + 1 < self.layer_count() {
            self.layer_cursor += 1;
        }
        self.ensure_layer_visible();
    }

    pub fn focus_prev_layer(&mut self) {
        if self.layer_focus().is_none() {
            return;
        }
        self.layer_cursor = self.layer_cursor.saturating_sub(1);
        self.ensure_layer_visible();
    }

    /// Toggle the layer under the cursor.
    pub fn toggle_focused_layer(&mut self) {
        match self.controller.try_toggle_layer(self.layer_cursor) {
            Ok(()) => {
                self.status_message = None;
                self.ensure_layer_visible();
            }
            Err(err) => self.set_warning(err.to_string()),
        }
    }

    /// Resolve a click against the last frame's regions. A region whose
    /// action the current screen no longer offers is ignored.
    pub fn click(&mut self, column: u16, row: u16) {
        match self.hit_map.action_at(column, row) {
            Some(action) if self.screen().actions().contains(&action) => {
                debug!(column, row, ?action, "click");
                self.apply(action);
            }
            Some(action) => debug!(column, row, ?action, "stale click region"),
            None => debug!(column, row, "click outside any region"),
        }
    }

    /// Keep the regions a frame just drew. Collapsing a layer can shorten
    /// the body, so scroll is pulled back inside the new frame.
    pub fn frame_drawn(&mut self, hits: HitMap) {
        self.hit_map = hits;
        self.scroll = self.scroll.min(self.hit_map.max_scroll());
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = (self.scroll + rows).min(self.hit_map.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn page_height(&self) -> usize {
        self.hit_map.body_height.max(1)
    }

    /// Scroll so the focused layer header is inside the body viewport.
    fn ensure_layer_visible(&mut self) {
        let Some(&row) = self.hit_map.layer_rows.get(self.layer_cursor) else {
            return;
        };
        let height = self.page_height();
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn starts_on_overview() {
        let app = App::builtin();
        assert!(app.running);
        assert_eq!(app.selected_section(), SectionId::Overview);
        assert_eq!(app.state().expanded_layer, None);
        assert_eq!(app.layer_focus(), None);
    }

    #[test]
    fn section_cycle_wraps() {
        let mut app = App::builtin();
        app.prev_section();
        assert_eq!(app.selected_section(), SectionId::Implementation);
        app.next_section();
        app.next_section();
        assert_eq!(app.selected_section(), SectionId::Security);
    }

    #[test]
    fn focus_clamps_to_layers() {
        let mut app = App::builtin();
        app.select_section(SectionId::Security);
        for _ in 0..10 {
            app.focus_next_layer();
        }
        assert_eq!(app.layer_focus(), Some(3));
        for _ in 0..10 {
            app.focus_prev_layer();
        }
        assert_eq!(app.layer_focus(), Some(0));
    }

    #[test]
    fn toggle_focused_layer_outside_security_warns() {
        let mut app = App::builtin();
        app.toggle_focused_layer();
        assert_eq!(app.state().expanded_layer, None);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("security"));
    }

    #[test]
    fn select_resets_cursor_and_scroll() {
        let mut app = App::builtin();
        app.hit_map.body_height = 5;
        app.hit_map.body_rows = 40;
        app.select_section(SectionId::Security);
        app.focus_next_layer();
        app.toggle_focused_layer();
        app.scroll_down(7);
        assert_eq!(app.scroll(), 7);

        app.select_section(SectionId::Security);
        assert_eq!(app.layer_focus(), Some(0));
        assert_eq!(app.scroll(), 0);
        assert_eq!(app.state().expanded_layer, None);
    }

    #[test]
    fn scroll_is_bounded_by_last_frame() {
        let mut app = App::builtin();
        app.hit_map.body_height = 10;
        app.hit_map.body_rows = 14;
        app.scroll_down(100);
        assert_eq!(app.scroll(), 4);
        app.scroll_up(100);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn stale_layer_region_is_ignored() {
        let mut app = App::builtin();
        app.hit_map.push(Rect::new(1, 6, 40, 1), Action::ToggleLayer(2));
        app.click(5, 6);
        assert_eq!(app.selected_section(), SectionId::Overview);
        assert_eq!(app.state().expanded_layer, None);

        app.select_section(SectionId::Security);
        app.click(5, 6);
        assert_eq!(app.state().expanded_layer, Some(2));
    }

    #[test]
    fn new_frame_clamps_scroll() {
        let mut app = App::builtin();
        app.hit_map.body_height = 10;
        app.hit_map.body_rows = 40;
        app.scroll_down(25);
        let mut shorter = HitMap::default();
        shorter.body_height = 10;
        shorter.body_rows = 18;
        app.frame_drawn(shorter);
        assert_eq!(app.scroll(), 8);
    }

    #[test]
    fn focus_scrolls_header_into_view() {
        let mut app = App::builtin();
        app.select_section(SectionId::Security);
        app.hit_map.body_height = 3;
        app.hit_map.body_rows = 30;
        app.hit_map.layer_rows = vec![0, 8, 16, 24];

        app.focus_next_layer();
        assert_eq!(app.scroll(), 6);
        app.focus_next_layer();
        assert_eq!(app.scroll(), 14);
        app.focus_prev_layer();
        app.focus_prev_layer();
        assert_eq!(app.scroll(), 0);
    }
}
