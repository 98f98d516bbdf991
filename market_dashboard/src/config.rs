//! Runtime configuration for the dashboard.
//!
//! Read from a TOML file when one is supplied, with environment-variable
//! overrides. Every field has a default so the dashboard works with no
//! configuration at all.

use std::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::errors::Error;

/// Environment variable that overrides the configured user agent.
pub const USER_AGENT_ENV: &str = "DASHBOARD_USER_AGENT";

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
const DEFAULT_REQUESTS_PER_SECOND: u32 = 4;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Dashboard configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User agent sent with every outgoing HTTP request. Yahoo's endpoints
    /// reject the reqwest default.
    pub user_agent: String,

    /// Upper bound on outgoing requests per second, enforced by the
    /// provider's rate limiter.
    pub requests_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, then applies environment
    /// overrides.
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let mut config: Config =
            toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(agent) = get_env_var(USER_AGENT_ENV) {
            self.user_agent = agent;
        }
    }
}
