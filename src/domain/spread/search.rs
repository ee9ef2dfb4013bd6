//! Share-ceiling search for the best guaranteed profit.
//!
//! Flooring each bin's proportional share count makes guaranteed profit a
//! non-monotonic step function of the ceiling, so the best-over-range mode
//! scans every integer ceiling from the budget down to 1 instead of assuming
//! a smooth optimum.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, trace};

use super::allocation::proportional_allocation;
use super::risk::score_payoffs;
use crate::domain::error::DomainError;
use crate::domain::money::{round_money, Allocation, FeeRate, Price, Shares};

/// How hard to look for a spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Evaluate once at the full budget and return the result unfiltered.
    ///
    /// The allocation may exceed the budget in some bins.
    FirstFit,
    /// Sweep every ceiling from the budget down to 1 and keep the feasible
    /// candidate with the strictly greatest guaranteed profit.
    #[default]
    BestOverRange,
}

impl SearchMode {
    /// Stable identifier used in config and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestOverRange => "best_over_range",
        }
    }
}

/// An allocation together with the profit it locks in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    /// Shares to buy per bin, aligned with the input prices.
    pub allocation: Allocation,
    /// Worst-case profit of `allocation`, rounded to three decimals.
    pub guaranteed_profit: Decimal,
    /// Ceiling the allocation was produced at; `None` for the zero fallback.
    pub ceiling: Option<Shares>,
}

impl Spread {
    /// The empty spread returned when nothing profitable was found.
    pub fn empty(bins: usize) -> Self {
        Self {
            allocation: vec![0; bins],
            guaranteed_profit: Decimal::ZERO,
            ceiling: None,
        }
    }

    /// Whether the spread locks in a strictly positive profit.
    pub fn is_profitable(&self) -> bool {
        self.guaranteed_profit > Decimal::ZERO
    }

    /// Total number of shares across all bins.
    pub fn total_shares(&self) -> u64 {
        self.allocation.iter().map(|&s| u64::from(s)).sum()
    }

    /// Capital committed at the given prices.
    pub fn capital(&self, prices: &[Price]) -> Decimal {
        self.allocation
            .iter()
            .zip(prices)
            .map(|(&shares, &price)| Decimal::from(shares) * price)
            .sum()
    }
}

/// Find the allocation that maximises guaranteed profit under `max_shares`.
///
/// # Errors
///
/// - [`DomainError::TooFewBins`] for fewer than two bins.
/// - [`DomainError::ZeroShares`] when `max_shares` is 0.
/// - [`DomainError::DegenerateMarket`] when every bin is priced at 1.
/// - [`DomainError::ShareOverflow`] in first-fit mode when the single
///   allocation does not fit the share counter.
pub fn find_best_spread(
    prices: &[Price],
    max_shares: Shares,
    mode: SearchMode,
    fee_rate: FeeRate,
) -> Result<Spread, DomainError> {
    if prices.len() < 2 {
        return Err(DomainError::TooFewBins {
            count: prices.len(),
        });
    }
    if max_shares == 0 {
        return Err(DomainError::ZeroShares);
    }

    let spread = match mode {
        SearchMode::FirstFit => first_fit(prices, max_shares, fee_rate)?,
        SearchMode::BestOverRange => best_over_range(prices, max_shares, fee_rate)?,
    };

    debug!(
        bins = prices.len(),
        max_shares,
        mode = mode.as_str(),
        ceiling = ?spread.ceiling,
        profit = %spread.guaranteed_profit,
        "spread search finished"
    );

    Ok(spread)
}

fn first_fit(prices: &[Price], max_shares: Shares, fee_rate: FeeRate) -> Result<Spread, DomainError> {
    let allocation = proportional_allocation(prices, max_shares, fee_rate)?;
    let profile = score_payoffs(&allocation, prices, fee_rate)?;

    Ok(Spread {
        allocation,
        guaranteed_profit: round_money(profile.guaranteed_profit),
        ceiling: Some(max_shares),
    })
}

fn best_over_range(
    prices: &[Price],
    max_shares: Shares,
    fee_rate: FeeRate,
) -> Result<Spread, DomainError> {
    let mut best = Spread::empty(prices.len());

    for ceiling in (1..=max_shares).rev() {
        let allocation = match proportional_allocation(prices, ceiling, fee_rate) {
            Ok(allocation) => allocation,
            // An overflowing count is far beyond the budget anyway.
            Err(DomainError::ShareOverflow { .. }) => continue,
            Err(e) => return Err(e),
        };

        if allocation.iter().any(|&shares| shares > max_shares) {
            continue;
        }

        let profit = score_payoffs(&allocation, prices, fee_rate)?.guaranteed_profit;
        if profit > best.guaranteed_profit {
            trace!(ceiling, profit = %profit, "new best spread");
            best = Spread {
                allocation,
                guaranteed_profit: round_money(profit),
                ceiling: Some(ceiling),
            };
        }
    }

    Ok(best)
}

/// Configuration for a reusable spread search.
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadConfig {
    /// Venue commission on realized profit.
    #[serde(default)]
    pub fee_rate: FeeRate,

    /// Default per-bin share budget.
    #[serde(default = "default_max_shares")]
    pub max_shares: Shares,

    /// Default search mode.
    #[serde(default)]
    pub mode: SearchMode,
}

fn default_max_shares() -> Shares {
    850
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            fee_rate: FeeRate::default(),
            max_shares: default_max_shares(),
            mode: SearchMode::default(),
        }
    }
}

/// A spread search bound to a fee rate and default budget.
#[derive(Debug, Clone, Default)]
pub struct SpreadSearch {
    config: SpreadConfig,
}

impl SpreadSearch {
    /// Create a new search with the given configuration.
    pub fn new(config: SpreadConfig) -> Self {
        Self { config }
    }

    /// Get the search configuration.
    pub fn config(&self) -> &SpreadConfig {
        &self.config
    }

    /// Search with the configured budget and mode.
    pub fn run(&self, prices: &[Price]) -> Result<Spread, DomainError> {
        self.run_with(prices, self.config.max_shares, self.config.mode)
    }

    /// Search with an explicit budget and mode, keeping the configured fee.
    pub fn run_with(
        &self,
        prices: &[Price],
        max_shares: Shares,
        mode: SearchMode,
    ) -> Result<Spread, DomainError> {
        find_best_spread(prices, max_shares, mode, self.config.fee_rate)
    }
}
