use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use crate::files::{FileAccess, LocalFiles};
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand '{0}': home directory or variable not available")]
    NoHome(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        let resolved = Self::resolve_profile(&active, prof, &cf)?;
        tracing::debug!(
            profile = %resolved.active_profile,
            watched = resolved.watched_folders.len(),
            "loaded config from {}",
            path.display()
        );
        Ok(resolved)
    }

    /// Load the config if one exists, falling back to defaults when the file
    /// is missing. Other errors (bad TOML, unknown profile) are still returned.
    pub fn load_or_default(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        match Self::load(config_path, profile_override) {
            Err(ConfigError::NotFound(_)) => Ok(ResolvedConfig::default()),
            other => other,
        }
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        cf: &ConfigFile,
    ) -> Result<ResolvedConfig, ConfigError> {
        let watched_folders = prof
            .watched_folders
            .iter()
            .map(|dir| expand_path(dir))
            .collect::<Result<Vec<_>, _>>()?;

        // Resolve log file path if present
        let mut logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        if cf.debug {
            logging.level = "debug".to_string();
        }

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            watched_folders,
            debug: cf.debug,
            notifications: cf.notifications,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdpubs").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdpubs").join("config.toml")
}

pub(crate) fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    LocalFiles.expand_path(input).map_err(|_| ConfigError::NoHome(input.to_string()))
}
