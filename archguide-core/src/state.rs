//! View state and the two transitions that mutate it.
//!
//! `ViewState` is the only mutable object in the viewer. It is owned by a
//! [`ViewController`], lives for the session and is never persisted.

use tracing::{debug, warn};

use crate::content::ContentStore;
use crate::error::ViewError;
use crate::section::SectionId;

/// Current UI selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_section: SectionId,
    /// Expanded security layer. Only meaningful while the security section
    /// is selected; every section selection resets it.
    pub expanded_layer: Option<usize>,
}

impl ViewState {
    pub fn is_layer_expanded(&self, index: usize) -> bool {
        self.expanded_layer == Some(index)
    }
}

/// The closed set of input events the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectSection(SectionId),
    ToggleLayer(usize),
}

/// Owns the [`ViewState`] and applies transitions against a content store.
#[derive(Debug, Clone)]
pub struct ViewController<'a> {
    store: &'a ContentStore,
    state: ViewState,
}

impl<'a> ViewController<'a> {
    /// Start a session with the default state (overview, nothing expanded).
    pub fn new(store: &'a ContentStore) -> Self {
        Self {
            store,
            state: ViewState::default(),
        }
    }

    pub fn store(&self) -> &'a ContentStore {
        self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected_section(&self) -> SectionId {
        self.state.selected_section
    }

    pub fn expanded_layer(&self) -> Option<usize> {
        self.state.expanded_layer
    }

    /// Select a section. Always collapses the security accordion, even when
    /// `id` is already selected.
    pub fn select_section(&mut self, id: SectionId) {
        debug!(from = %self.state.selected_section, to = %id, "select section");
        self.state.selected_section = id;
        self.state.expanded_layer = None;
    }

    /// Exclusive accordion toggle: collapse `index` if it is open, otherwise
    /// open it and close whatever was open.
    ///
    /// Callers must only pass indices enumerated from the security section
    /// while it is selected. Violations are bugs and trip a debug assertion.
    pub fn toggle_layer(&mut self, index: usize) {
        debug_assert_eq!(
            self.state.selected_section,
            SectionId::Security,
            "toggle_layer outside the security section"
        );
        debug_assert!(
            index < self.store.security_layers().len(),
            "security layer {index} out of range"
        );
        self.state.expanded_layer = if self.state.expanded_layer == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, expanded = ?self.state.expanded_layer, "toggle layer");
    }

    /// Checked variant of [`toggle_layer`](Self::toggle_layer). Leaves the
    /// state untouched on error.
    pub fn try_toggle_layer(&mut self, index: usize) -> Result<(), ViewError> {
        if self.state.selected_section != SectionId::Security {
            warn!(index, section = %self.state.selected_section, "layer toggle rejected");
            return Err(ViewError::LayerOutsideSecurity(self.state.selected_section));
        }
        let len = self.store.security_layers().len();
        if index >= len {
            warn!(index, len, "layer toggle rejected");
            return Err(ViewError::LayerOutOfRange { index, len });
        }
        self.toggle_layer(index);
        Ok(())
    }

    /// Dispatch an input event to its transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectSection(id) => self.select_section(id),
            Action::ToggleLayer(index) => self.toggle_layer(index),
        }
    }
}
