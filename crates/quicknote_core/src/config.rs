//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve logging settings for hosts that do not pass them explicitly
//!   (CLI, desktop test harnesses).
//!
//! # Invariants
//! - Resolution never fails; invalid levels fall back to the build default.
//! - Blank directory values mean "logging disabled".

use crate::logging::{default_log_level, init_logging, parse_level};
use log::warn;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "QUICKNOTE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "QUICKNOTE_LOG_DIR";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized log level (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// Absolute log directory. `None` keeps logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads settings from `QUICKNOTE_LOG_LEVEL` and `QUICKNOTE_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
            std::env::var(LOG_DIR_ENV).ok().as_deref(),
        )
    }

    fn from_values(level: Option<&str>, dir: Option<&str>) -> Self {
        let log_level = level
            .and_then(|raw| parse_level(raw).ok())
            .unwrap_or_else(default_log_level);
        let log_dir = dir
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { log_level, log_dir }
    }

    /// Starts logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when no directory is set.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = self.log_dir.as_ref() else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", dir.display()))?;
        init_logging(self.log_level, dir)?;
        warn_if_debug_in_release(self.log_level);
        Ok(true)
    }
}

fn warn_if_debug_in_release(level: &str) {
    if !cfg!(debug_assertions) && matches!(level, "trace" | "debug") {
        warn!("event=config_check module=config status=warn level={level} build_mode=release");
    }
}
