//! Startup configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON config file,
//! then the environment and command-line flags. The config file lives in the
//! XDG-compliant config directory (`~/.config/wxdash/config.json` on Linux)
//! unless `--config` names another path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{parse_view_arg, Cli, CliError};
use crate::data::DEFAULT_BASE_URL;
use crate::state::ForecastView;

/// Location shown when none is configured
pub const DEFAULT_LOCATION: &str = "Minsk";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur while assembling the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`ConfigFile`]
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No API key in flags, environment, or config file
    #[error("No API key configured. Pass --api-key, set WXDASH_API_KEY, or add \"api_key\" to the config file")]
    MissingApiKey,

    /// A view name in the config file or flags is invalid
    #[error(transparent)]
    Cli(#[from] CliError),
}

/// Contents of the optional JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub location: Option<String>,
    pub base_url: Option<String>,
    pub view: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Default config file path, or `None` if there is no home directory
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "wxdash")?;
        Some(project_dirs.config_dir().join("config.json"))
    }

    /// Loads the config file at `path`.
    ///
    /// A missing file is not an error and yields the empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved configuration the application starts with
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub api_key: String,
    /// Location fetched on startup
    pub location: String,
    pub base_url: String,
    pub view: ForecastView,
    pub timeout: Duration,
}

impl StartupConfig {
    /// Reads the config file named by the CLI (or the default one) and
    /// layers the CLI on top of it.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match cli.config.clone().or_else(ConfigFile::default_path) {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(cli, file)
    }

    /// Layers CLI values over config file values over defaults.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    /// * `file` - Contents of the config file
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with every setting resolved
    /// * `Err(ConfigError)` if no API key is available or a view is invalid
    pub fn resolve(cli: &Cli, file: ConfigFile) -> Result<Self, ConfigError> {
        let api_key = non_blank(cli.api_key.clone())
            .or_else(|| non_blank(file.api_key))
            .ok_or(ConfigError::MissingApiKey)?;

        let location = non_blank(cli.location.clone())
            .or_else(|| non_blank(file.location))
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let base_url = non_blank(cli.base_url.clone())
            .or_else(|| non_blank(file.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let view = match cli.view.as_deref().or(file.view.as_deref()) {
            Some(name) => parse_view_arg(name)?,
            None => ForecastView::default(),
        };

        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(StartupConfig {
            api_key,
            location,
            base_url,
            view,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
