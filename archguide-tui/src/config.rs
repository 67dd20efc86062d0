//! Command-line configuration.
//!
//! The content itself is compiled in; only logging and input options are
//! configurable.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use archguide_core::SectionId;

#[derive(Debug, Parser)]
#[command(
    name = "archguide",
    version,
    about = "Enterprise microservices architecture guide in the terminal"
)]
pub struct ViewerArgs {
    /// Log file. Defaults to <cache dir>/archguide/archguide.log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace. RUST_LOG overrides it.
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    /// Do not capture the mouse (keeps terminal text selection working).
    #[arg(long, default_value_t = false)]
    pub no_mouse: bool,

    /// Section shown at startup: overview, security, scalability,
    /// compliance, maintainability or implementation.
    #[arg(long, default_value_t = SectionId::Overview)]
    pub section: SectionId,
}

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub log_file: PathBuf,
    pub log_level: Level,
    pub mouse: bool,
    pub start_section: SectionId,
}

impl From<ViewerArgs> for ViewerConfig {
    fn from(args: ViewerArgs) -> Self {
        Self {
            log_file: args.log_file.unwrap_or_else(default_log_path),
            log_level: args.log_level,
            mouse: !args.no_mouse,
            start_section: args.section,
        }
    }
}

/// `<cache dir>/archguide/archguide.log`, or `./archguide.log` when the
/// platform has no cache directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("archguide"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("archguide.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ViewerArgs::try_parse_from(["archguide"]).unwrap();
        let config = ViewerConfig::from(args);
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.mouse);
        assert!(config.log_file.ends_with("archguide.log"));
        assert_eq!(config.start_section, SectionId::Overview);
    }

    #[test]
    fn start_section_by_slug() {
        let args = ViewerArgs::try_parse_from(["archguide", "--section", "Security"]).unwrap();
        assert_eq!(ViewerConfig::from(args).start_section, SectionId::Security);

        let err = ViewerArgs::try_parse_from(["archguide", "--section", "pricing"]).unwrap_err();
        assert!(err.to_string().contains("unknown section"));
    }

    #[test]
    fn explicit_flags() {
        let args = ViewerArgs::try_parse_from([
            "archguide",
            "--log-file",
            "/tmp/viewer.log",
            "--log-level",
            "debug",
            "--no-mouse",
        ])
        .unwrap();
        let config = ViewerConfig::from(args);
        assert_eq!(config.log_file, PathBuf::from("/tmp/viewer.log"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.mouse);
    }

    #[test]
    fn bad_level_rejected() {
        assert!(ViewerArgs::try_parse_from(["archguide", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        ViewerArgs::command().debug_assert();
    }
}
