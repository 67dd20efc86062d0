//! Clickable regions recorded while drawing a frame.
//!
//! Mouse input is resolved only against regions the last frame drew, so a
//! click can never name a tab or layer that is not on screen.

use ratatui::layout::{Position, Rect};

use archguide_core::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
    /// Inner height of the body panel.
    pub body_height: usize,
    /// Total number of body rows before scrolling.
    pub body_rows: usize,
    /// Unscrolled body row of each security layer header, by layer index.
    pub layer_rows: Vec<usize>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    pub fn regions(&self) -> &[(Rect, Action)] {
        &self.regions
    }

    /// The action under a terminal cell, if any.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, action)| *action)
    }

    /// Largest useful scroll offset for the body.
    pub fn max_scroll(&self) -> usize {
        self.body_rows.saturating_sub(self.body_height)
    }

    /// The on-screen rectangle of the first region emitting `action`.
    pub fn area_of(&self, action: Action) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(rect, _)| *rect)
    }
}
