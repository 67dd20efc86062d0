//! archguide TUI — terminal viewer for the architecture guide
//!
//! Draws the content store as:
//! - A banner and a tab strip with one tab per section
//! - The selected section's body, with the security layers as an accordion
//! - An implementation guidance note and a status bar
//!
//! Keyboard and mouse input both map onto the two view transitions.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::{ViewerArgs, ViewerConfig};
pub use theme::Theme;
