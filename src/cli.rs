//! Command-line interface parsing for wxdash
//!
//! This module handles parsing of CLI arguments using clap. Flags override the
//! config file, see [`crate::config`].

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::state::ForecastView;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified view name is not recognized
    #[error("Invalid view: '{0}'. Valid views: daily, hourly")]
    InvalidView(String),
}

/// wxdash - current conditions, daily and hourly forecasts in the terminal
#[derive(Parser, Debug)]
#[command(name = "wxdash")]
#[command(about = "Terminal weather dashboard backed by the Visual Crossing timeline API")]
#[command(version)]
pub struct Cli {
    /// Location to show on startup, e.g. "Minsk" or "Vancouver, BC"
    #[arg(value_name = "LOCATION")]
    pub location: Option<String>,

    /// Visual Crossing API key
    #[arg(long, env = "WXDASH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the timeline endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Forecast view to open with
    ///
    /// Valid views: daily, hourly
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,

    /// Timeout for forecast requests, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to a JSON config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file. Nothing is logged when omitted
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging verbosity. Allowed values are 'trace', 'debug', 'info', 'warn', and 'error'
    /// (case insensitive)
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

/// Parses a view string argument into a ForecastView.
///
/// # Arguments
/// * `s` - The view string from CLI or config
///
/// # Returns
/// * `Ok(ForecastView)` if the string matches a valid view
/// * `Err(CliError::InvalidView)` if the string doesn't match
pub fn parse_view_arg(s: &str) -> Result<ForecastView, CliError> {
    ForecastView::from_str(s).ok_or_else(|| CliError::InvalidView(s.to_string()))
}
