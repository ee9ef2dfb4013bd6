//! Domain errors for spread evaluation.
//!
//! Every core operation either succeeds completely or fails synchronously
//! with one of these variants. None of them are retryable: each one points at
//! a caller bug or at a market with nothing left to trade.
//!
//! # Examples
//!
//! ```
//! use nospread::domain::error::DomainError;
//! use nospread::domain::spread::score_payoffs;
//! use nospread::domain::FeeRate;
//! use rust_decimal_macros::dec;
//!
//! let result = score_payoffs(&[1, 2], &[dec!(0.40)], FeeRate::default());
//! assert_eq!(
//!     result.unwrap_err(),
//!     DomainError::ShapeMismatch { allocation: 2, prices: 1 }
//! );
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when inputs violate the core's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Allocation and price vectors must be index-aligned.
    #[error("allocation has {allocation} entries but there are {prices} prices")]
    ShapeMismatch {
        /// Length of the allocation vector.
        allocation: usize,
        /// Length of the price vector.
        prices: usize,
    },

    /// A bin index does not exist in the market.
    #[error("bin index {index} is out of range for {len} bins")]
    IndexOutOfRange {
        /// The requested bin index.
        index: usize,
        /// Number of bins available.
        len: usize,
    },

    /// Every bin is priced out, so no weighting can be computed.
    #[error("every bin is priced at 1, no No position is available")]
    DegenerateMarket,

    /// Allocation needs at least two bins.
    #[error("market has {count} bin(s), at least 2 are required")]
    TooFewBins {
        /// Number of bins supplied.
        count: usize,
    },

    /// A proportional share count does not fit the share counter.
    #[error("share count for bin {index} overflows")]
    ShareOverflow {
        /// Index of the bin whose allocation overflowed.
        index: usize,
    },

    /// The share budget must be positive.
    #[error("share budget must be positive")]
    ZeroShares,

    /// No prices live in [0, 1].
    #[error("bin {index} has price {price}, expected a value in [0, 1]")]
    PriceOutOfRange {
        /// Index of the offending bin.
        index: usize,
        /// The invalid price.
        price: Decimal,
    },

    /// Markets must have at least one bin.
    #[error("bins cannot be empty")]
    EmptyBins,
}
