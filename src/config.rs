use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{Result, VerifyxError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:60157/api/todo";
pub const DEFAULT_LOGS_DIR: &str = "logs";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings of the Todo API module
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TodoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Contents of `verifyx.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory receiving the daily execution journals
    pub logs_dir: PathBuf,
    pub todo: TodoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
            todo: TodoConfig::default(),
        }
    }
}

/// Values that take priority over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub logs_dir: Option<PathBuf>,
}

impl Overrides {
    /// Read `VERIFYX_BASE_URL` and `VERIFYX_LOGS_DIR`
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VERIFYX_BASE_URL").ok(),
            logs_dir: std::env::var("VERIFYX_LOGS_DIR").ok().map(PathBuf::from),
        }
    }

    /// Fill unset values from `fallback`
    pub fn or(self, fallback: Overrides) -> Self {
        Self {
            base_url: self.base_url.or(fallback.base_url),
            logs_dir: self.logs_dir.or(fallback.logs_dir),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    const CONFIG_FILE: &'static str = "verifyx.toml";

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            VerifyxError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Locate a config file.
    ///
    /// Lookup order:
    /// 1. the current directory and its parents
    /// 2. the user config directory ~/.config/verifyx/
    pub fn find_config_file() -> Option<PathBuf> {
        Self::find_in_current_dir().or_else(Self::find_in_user_dir)
    }

    fn find_in_current_dir() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    fn find_in_user_dir() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let config_path = home.join(".config").join("verifyx").join(Self::CONFIG_FILE);
        config_path.exists().then_some(config_path)
    }

    /// Load the effective configuration.
    ///
    /// An explicit path must exist and parse. A discovered file that fails to
    /// parse is also an error; no file at all means defaults.
    pub fn load(explicit: Option<&Path>, overrides: Overrides) -> Result<Config> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                Self::load_from_path(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, overrides);
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn apply_overrides(config: &mut Config, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url {
            config.todo.base_url = base_url;
        }
        if let Some(logs_dir) = overrides.logs_dir {
            config.logs_dir = logs_dir;
        }
    }

    pub fn validate(config: &Config) -> Result<()> {
        let url = url::Url::parse(&config.todo.base_url)
            .map_err(|e| VerifyxError::InvalidUrl(format!("{}: {}", config.todo.base_url, e)))?;

        if url.cannot_be_a_base() {
            return Err(VerifyxError::InvalidUrl(config.todo.base_url.clone()));
        }
        if config.todo.timeout_secs == 0 {
            warn!("todo.timeout_secs is 0, requests will time out immediately");
        }
        Ok(())
    }
}
