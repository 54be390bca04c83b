//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section is optional; omitted values take their defaults.
//!
//! # Example
//!
//! ```no_run
//! use edgescan::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::polymarket::PolymarketConfig;
use crate::application::scanner::DetectionConfig;
use crate::application::watch::WatchConfig;
use crate::error::{ConfigError, Result};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Detection thresholds and enabled strategies.
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Continuous watch settings.
    #[serde(default)]
    pub watch: WatchConfig,

    /// Market data source.
    #[serde(default)]
    pub polymarket: PolymarketConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub min_edge: Option<Decimal>,
    pub scan_interval_secs: Option<u64>,
    pub market_limit: Option<usize>,
}

impl Config {
    /// Parse and validate TOML content.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML and a config error for
    /// invalid values.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path`, or the default path if none is given.
    ///
    /// A missing file at the default path yields the defaults; an explicit
    /// path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides and re-validate.
    ///
    /// # Errors
    ///
    /// Returns a config error if an override is out of range.
    #[allow(clippy::result_large_err)]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(min_edge) = overrides.min_edge {
            self.detection.min_edge = min_edge;
        }
        if let Some(secs) = overrides.scan_interval_secs {
            self.watch.scan_interval_secs = secs;
        }
        if let Some(limit) = overrides.market_limit {
            self.polymarket.market_limit = limit;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first config error found.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.watch.validate()?;
        self.polymarket.validate()?;
        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[allow(clippy::result_large_err)]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
