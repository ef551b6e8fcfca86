//! # Configuration
//!
//! Settings are loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `ATHLETICK_PREFS_FILE`, `ATHLETICK_HISTORY_LIMIT`,
//!    `ATHLETICK_LOG_LEVEL`, `ATHLETICK_LOG_DIR`.
//! 2. **Config file**: `athletick.toml` in the OS config directory (via the
//!    `directories` crate), or a path given explicitly.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `prefs_file` | `<config dir>/preferences.json` | User preferences JSON |
//! | `history_limit` | `100` | Undoable steps kept per session |
//! | `log_level` | `warn` | trace, debug, info, warn or error |
//! | `log_dir` | unset (stderr) | Directory for rotating log files |
//!
//! The team data file itself is a user preference (`athletick_file_path`),
//! not a config key, so it can be changed from within the application.

use crate::error::Result;
use crate::model::DEFAULT_MAX_HISTORY;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "athletick.toml";
const PREFS_FILE_NAME: &str = "preferences.json";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AthletickConfig {
    /// Where user preferences are stored.
    #[config(env = "ATHLETICK_PREFS_FILE")]
    pub prefs_file: Option<PathBuf>,

    /// How many undoable steps are kept.
    #[config(default = 100, env = "ATHLETICK_HISTORY_LIMIT")]
    pub history_limit: usize,

    #[config(default = "warn", env = "ATHLETICK_LOG_LEVEL")]
    pub log_level: String,

    /// Log to rotating files in this directory instead of stderr.
    #[config(env = "ATHLETICK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Default for AthletickConfig {
    fn default() -> Self {
        Self {
            prefs_file: None,
            history_limit: DEFAULT_MAX_HISTORY,
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl AthletickConfig {
    /// Loads from the environment and `file`; a missing file is not an error.
    pub fn load_from(file: &Path) -> Result<Self> {
        let config = Self::builder().env().file(file).load()?;
        Ok(config)
    }

    /// Loads from the environment and the default config file, if there is one.
    pub fn load() -> Result<Self> {
        match default_config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE_NAME)),
            None => Ok(Self::builder().env().load()?),
        }
    }

    /// The configured prefs file, else the default location, else the working directory.
    pub fn prefs_file(&self) -> PathBuf {
        self.prefs_file
            .clone()
            .or_else(|| default_config_dir().map(|dir| dir.join(PREFS_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(PREFS_FILE_NAME))
    }
}

/// The OS config directory for athletick, when the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "athletick").map(|dirs| dirs.config_dir().to_path_buf())
}
