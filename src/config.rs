//! Runtime configuration.
//!
//! Defaults are overridden best-effort from the environment; values that do
//! not parse are ignored and the default is kept. Ignored values are handed
//! back to the caller, since logging is not set up yet when config loads.
//!
//! Supported:
//! - VITALCHECK_LOG_MODE = "stderr" | "file"
//! - VITALCHECK_LOG_FILE = path used when the mode is "file"
//! - VITALCHECK_LOG (or RUST_LOG) = tracing filter directive

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_LOG_FILE: &str = "vitalcheck.log";
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log mode {0:?} (expected \"stderr\" or \"file\")")]
    InvalidLogMode(String),
}

/// Where log output goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Standard error, leaving stdout for command output
    #[default]
    Stderr,
    /// Append to `AppConfig::log_file`
    File,
}

impl FromStr for LogMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            other => Err(ConfigError::InvalidLogMode(other.to_string())),
        }
    }
}

/// An environment value that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub error: ConfigError,
}

impl std::fmt::Display for RejectedSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.error)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config overrides from the process environment.
    ///
    /// Returns the config together with every value that was ignored, so
    /// the caller can report them once logging is up.
    #[must_use]
    pub fn from_env_or_default() -> (Self, Vec<RejectedSetting>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config overrides from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<RejectedSetting>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();

        if let Some(v) = lookup("VITALCHECK_LOG_MODE") {
            match v.parse::<LogMode>() {
                Ok(mode) => cfg.log_mode = mode,
                Err(error) => rejected.push(RejectedSetting {
                    key: "VITALCHECK_LOG_MODE",
                    error,
                }),
            }
        }

        if let Some(v) = lookup("VITALCHECK_LOG_FILE") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.log_file = PathBuf::from(v);
            }
        }

        if let Some(v) = lookup("VITALCHECK_LOG").or_else(|| lookup("RUST_LOG")) {
            let v = v.trim();
            if !v.is_empty() {
                cfg.log_filter = v.to_string();
            }
        }

        (cfg, rejected)
    }
}
