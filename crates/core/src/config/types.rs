use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    /// Force debug-level console logging.
    #[serde(default)]
    pub debug: bool,
    /// Show user notifications for routine events (errors are always shown).
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Folders whose notes are managed by mdpubs. Supports `~` and `$VARS`.
    #[serde(default)]
    pub watched_folders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notifications() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Watched folders with `~` and variables expanded.
    pub watched_folders: Vec<PathBuf>,
    pub debug: bool,
    pub notifications: bool,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    /// Settings used when no configuration file is available.
    fn default() -> Self {
        Self {
            active_profile: "default".to_string(),
            watched_folders: Vec::new(),
            debug: false,
            notifications: default_notifications(),
            logging: LoggingConfig::default(),
        }
    }
}
