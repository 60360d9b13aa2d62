//! Configuration
//!
//! `stepline.toml` plus `STEPLINE_*` environment overrides. The file is found
//! via `--config`, then `STEPLINE_CONFIG`, then `./stepline.toml`; without
//! any of them the defaults apply.

use chrono::TimeDelta;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stepline_flow::ProjectionOptions;
use stepline_observe::LogFormat;
use thiserror::Error;

pub const CONFIG_ENV: &str = "STEPLINE_CONFIG";
pub const INTERVAL_ENV: &str = "STEPLINE_SYNTHETIC_INTERVAL_HOURS";
pub const LOG_ENV: &str = "STEPLINE_LOG";
const DEFAULT_FILE: &str = "stepline.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub projection: ProjectionSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionSection {
    /// Spacing of synthetic dates on completed steps
    pub synthetic_interval_hours: i64,
}

impl Default for ProjectionSection {
    fn default() -> Self {
        Self {
            synthetic_interval_hours: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Used when `RUST_LOG` is unset
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    pub fn load_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_FILE);
                local.exists().then_some(local)
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(hours) = env(INTERVAL_ENV) {
            self.projection.synthetic_interval_hours = hours.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{INTERVAL_ENV} must be a whole number, got `{hours}`"))
            })?;
        }
        if let Some(filter) = env(LOG_ENV) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hours = self.projection.synthetic_interval_hours;
        if hours <= 0 || TimeDelta::try_hours(hours).is_none() {
            return Err(ConfigError::Invalid(format!(
                "projection.synthetic_interval_hours must be positive, got {hours}"
            )));
        }
        Ok(())
    }

    pub fn projection_options(&self) -> ProjectionOptions {
        let interval = TimeDelta::try_hours(self.projection.synthetic_interval_hours)
            .unwrap_or_else(|| ProjectionOptions::default().synthetic_interval);
        ProjectionOptions::new().with_synthetic_interval(interval)
    }
}
