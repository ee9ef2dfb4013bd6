use miette::Diagnostic;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors reading a market snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("market {market_id} not found in snapshot")]
    MarketNotFound { market_id: String },

    #[error("market {market_id} is invalid: {source}")]
    InvalidMarket {
        market_id: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(
        code(nospread::config),
        help("check the [logging], [spread] and [scan] sections of your config file")
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(nospread::domain))]
    Domain(#[from] DomainError),

    #[error(transparent)]
    #[diagnostic(
        code(nospread::snapshot),
        help("snapshots list [[markets]] tables, each with [[markets.bins]] entries")
    )]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, Error>;
