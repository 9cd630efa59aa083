//! Configuration management for EasyAI Itinerary.
//!
//! Configuration is resolved with the following priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`EASYAI_*`)
//! 3. Config file (`$XDG_CONFIG_HOME/easyai/config.toml`)
//! 4. Default values
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! travel_endpoint = "/query"
//! email_endpoint = "/send_email"
//! timeout_secs = 120
//!
//! [email]
//! recipients = ["user@example.com"]
//! subject = "Our trip"
//!
//! [display]
//! theme = "dark"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    display::Theme,
    error::{ItineraryError, Result, ResultExt},
    validation::validate_api_settings,
};

const CONFIG_PREFIX: &str = "easyai";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding [`ApiSettings::base_url`].
pub const ENV_API_URL: &str = "EASYAI_API_URL";
/// Environment variable overriding [`ApiSettings::travel_endpoint`].
pub const ENV_TRAVEL_ENDPOINT: &str = "EASYAI_TRAVEL_ENDPOINT";
/// Environment variable overriding [`ApiSettings::email_endpoint`].
pub const ENV_EMAIL_ENDPOINT: &str = "EASYAI_EMAIL_ENDPOINT";
/// Environment variable overriding [`ApiSettings::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "EASYAI_TIMEOUT_SECS";
/// Environment variable overriding [`DisplaySettings::theme`].
pub const ENV_THEME: &str = "EASYAI_THEME";

/// Location of the travel and email APIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL shared by both APIs
    pub base_url: String,

    /// Path of the travel-plan endpoint, starting with `/`
    pub travel_endpoint: String,

    /// Path of the email-delivery endpoint, starting with `/`
    pub email_endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            travel_endpoint: "/query".to_string(),
            email_endpoint: "/send_email".to_string(),
            timeout_secs: 120,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the travel-plan endpoint.
    pub fn travel_url(&self) -> String {
        join_url(&self.base_url, &self.travel_endpoint)
    }

    /// Full URL of the email-delivery endpoint.
    pub fn email_url(&self) -> String {
        join_url(&self.base_url, &self.email_endpoint)
    }
}

fn join_url(base: &str, endpoint: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), endpoint)
}

/// Defaults for email delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Recipients used when none are given on the command line
    pub recipients: Vec<String>,

    /// Subject used when none is given on the command line; derived from
    /// the question when absent
    pub subject: Option<String>,

    /// Message body; the built-in greeting is used when absent or blank
    pub body: Option<String>,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            recipients: vec!["user@example.com".to_string()],
            subject: None,
            body: None,
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub theme: Theme,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSettings,
    pub email: EmailSettings,
    pub display: DisplaySettings,
}

impl Config {
    /// Load configuration from `path`, or from the XDG config location when
    /// no path is given.
    ///
    /// An explicit path must exist. A missing file at the XDG location yields
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_config_path() {
                Some(path) => Self::load_from_file(&path),
                None => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| ItineraryError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&contents)
            .config_context(format!("Failed to parse config {}", path.display()))
    }

    /// Existing config file under `$XDG_CONFIG_HOME/easyai/`, if any.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Apply `EASYAI_*` environment variable overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(endpoint) = lookup(ENV_TRAVEL_ENDPOINT) {
            self.api.travel_endpoint = endpoint;
        }
        if let Some(endpoint) = lookup(ENV_EMAIL_ENDPOINT) {
            self.api.email_endpoint = endpoint;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = secs.trim().parse().map_err(|_| {
                ItineraryError::Configuration {
                    message: format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got '{secs}'"),
                }
            })?;
        }
        if let Some(theme) = lookup(ENV_THEME) {
            self.display.theme = theme
                .parse()
                .map_err(|message| ItineraryError::Configuration { message })?;
        }
        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, api_url: Option<String>, theme: Option<Theme>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(theme) = theme {
            self.display.theme = theme;
        }
        self
    }

    /// Check the API settings.
    pub fn validate(&self) -> Result<()> {
        validate_api_settings(&self.api)?;
        Ok(())
    }
}
