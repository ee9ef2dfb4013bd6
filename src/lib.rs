//! Nospread - guaranteed-profit No-share allocation for prediction markets.
//!
//! In a market of mutually exclusive bins where exactly one resolves "Yes",
//! holding "No" shares in every bin pays out on all bins but one. When the No
//! asks are cheap enough, a well-chosen allocation locks in a profit
//! whichever bin wins, even after the venue's commission.
//!
//! # Modules
//!
//! - [`domain`] - Bins, markets, money types and domain errors
//! - [`domain::spread`] - Risk model, proportional allocation, spread search,
//!   hedge quotes and batch scans
//! - [`config`] - Configuration loading from TOML files
//! - [`snapshot`] - Local market snapshot files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use nospread::domain::spread::{score_payoffs, SpreadSearch};
//! use rust_decimal_macros::dec;
//!
//! let prices = [dec!(0.40), dec!(0.45), dec!(0.20)];
//! let spread = SpreadSearch::default().run(&prices)?;
//! let profile = score_payoffs(&spread.allocation, &prices, Default::default())?;
//!
//! assert_eq!(profile.guaranteed_profit, spread.guaranteed_profit);
//! # Ok::<(), nospread::domain::DomainError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod snapshot;
