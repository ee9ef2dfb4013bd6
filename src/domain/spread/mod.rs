//! Guaranteed-profit allocation across mutually exclusive bins.
//!
//! Buying "No" in every bin of a market where exactly one bin resolves "Yes"
//! pays out on all bins but one. When the No asks are cheap enough, a suitable
//! share allocation locks in a profit whichever bin wins, net of the venue
//! fee.
//!
//! - [`risk`] - Scenario payoffs and the guaranteed (worst-case) profit
//! - [`allocation`] - Closed-form proportional allocation for a share ceiling
//! - [`search`] - Single-shot or exhaustive search over share ceilings
//! - [`hedge`] - Cost of hedging a Yes buy with No on every other bin
//! - [`scan`] - Batch search over many markets
//! - [`ratio`] - Yes price ratios between two markets with matching bins
//!
//! # Example
//!
//! ```
//! use nospread::domain::spread::{find_best_spread, SearchMode};
//! use nospread::domain::FeeRate;
//! use rust_decimal_macros::dec;
//!
//! let prices = [dec!(0.40), dec!(0.45), dec!(0.20)];
//! let spread = find_best_spread(&prices, 850, SearchMode::BestOverRange, FeeRate::default())?;
//!
//! assert_eq!(spread.allocation, vec![831, 826, 849]);
//! assert_eq!(spread.guaranteed_profit, dec!(687.750));
//! # Ok::<(), nospread::domain::error::DomainError>(())
//! ```

pub mod allocation;
pub mod hedge;
pub mod ratio;
pub mod risk;
pub mod scan;
pub mod search;

pub use allocation::{proportional_allocation, weight};
pub use hedge::{hedge_quote, HedgeQuote};
pub use ratio::{yes_price_ratios, BinRatio, MIN_RATIO_YES_PRICE};
pub use risk::{profit_if_bin_wins, score_payoffs, PayoffProfile};
pub use scan::{edge_sum, scan_markets, ScanHit, ScanReport};
pub use search::{find_best_spread, SearchMode, Spread, SpreadConfig, SpreadSearch};
