//! archguide core — content store, view state machine and renderer.
//!
//! This crate contains everything that is not terminal-specific:
//! - The compiled-in reference content, one payload shape per section
//! - `ViewState` and the two transitions (select section, toggle layer)
//! - A pure renderer producing a backend-independent `Screen`

pub mod content;
pub mod error;
pub mod section;
pub mod state;
pub mod view;

pub use content::ContentStore;
pub use error::ViewError;
pub use section::SectionId;
pub use state::{Action, ViewController, ViewState};
pub use view::{render, Screen};

#[cfg(test)]
mod tests {
    use super::*;

    /// The content store is shared by reference across the UI; keep it thread-safe.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ContentStore>();
        require_sync::<ContentStore>();
        require_send::<ViewState>();
        require_sync::<ViewState>();
        require_send::<Screen>();
        require_sync::<Screen>();
    }
}
