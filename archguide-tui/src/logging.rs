//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The terminal owns stdout and stderr while the UI is up, so all log output
//! goes to a file.
//!
//! # Log Levels
//!
//! - `warn`: Rejected transitions
//! - `info`: Session start and end
//! - `debug`: Every state transition and click
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ViewerConfig;

/// Install the global subscriber writing to `config.log_file`.
pub fn init_logging(config: &ViewerConfig) -> Result<()> {
    let file = open_log_file(&config.log_file)?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter(config.log_level))
        .with(layer)
        .try_init()
        .context("logging already initialised")?;
    Ok(())
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}
