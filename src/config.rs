//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to the venue defaults (10% fee, 850-share budget,
//! best-over-range search).

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::spread::SpreadConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub spread: SpreadConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Batch scan settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Markets with fewer bins are skipped before searching.
    #[serde(default = "default_min_bins")]
    pub min_bins: usize,
}

const fn default_min_bins() -> usize {
    2
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_bins: default_min_bins(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges that the TOML types cannot express.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let fee = self.spread.fee_rate.value();
        if fee < Decimal::ZERO || fee >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "fee_rate",
                reason: format!("must be in [0, 1), got {fee}"),
            }
            .into());
        }
        if self.spread.max_shares == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_shares",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.scan.min_bins < 2 {
            return Err(ConfigError::InvalidValue {
                field: "min_bins",
                reason: format!("must be at least 2, got {}", self.scan.min_bins),
            }
            .into());
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
            _ => {
                fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
        }
    }
}
