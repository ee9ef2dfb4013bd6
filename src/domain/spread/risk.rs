//! Scenario payoffs for a No-share allocation.
//!
//! Exactly one bin resolves Yes. In the scenario where bin `i` wins, the No
//! shares held in `i` expire worthless (the stake is lost) while every other
//! bin's No shares redeem at 1 and pay out net of the venue fee.
//!
//! Values are rounded to three decimals after each combination step, not only
//! at the end, so repeated summation never drifts below the venue's price
//! granularity.

use rust_decimal::Decimal;

use crate::domain::error::DomainError;
use crate::domain::money::{round_money, FeeRate, Price, Shares};

/// Per-scenario profit and loss for one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffProfile {
    /// Net P&L if the bin at the same index resolves Yes.
    pub scenario_payoffs: Vec<Decimal>,
    /// Minimum over `scenario_payoffs`: the profit locked in whichever bin
    /// wins.
    pub guaranteed_profit: Decimal,
}

impl PayoffProfile {
    /// Index of the scenario that produces the guaranteed profit.
    ///
    /// Ties resolve to the lowest index. `None` for an empty profile.
    pub fn worst_scenario(&self) -> Option<usize> {
        self.scenario_payoffs
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(i, _)| i)
    }
}

/// Score an allocation against every possible winning bin.
///
/// # Errors
///
/// Returns [`DomainError::ShapeMismatch`] when `allocation` and `prices` have
/// different lengths.
pub fn score_payoffs(
    allocation: &[Shares],
    prices: &[Price],
    fee_rate: FeeRate,
) -> Result<PayoffProfile, DomainError> {
    let scenario_payoffs = scenario_payoffs(allocation, prices, fee_rate)?;
    let guaranteed_profit = scenario_payoffs
        .iter()
        .copied()
        .min()
        .unwrap_or(Decimal::ZERO);

    Ok(PayoffProfile {
        scenario_payoffs,
        guaranteed_profit,
    })
}

/// Value of a position in the scenario where `bin` wins, measured against the
/// 1-unit payout of that bin's Yes share: `1 - scenario_payoff[bin]`.
///
/// Used to price a "buy Yes on one bin, hedge No on the rest" position.
///
/// # Errors
///
/// Returns [`DomainError::ShapeMismatch`] for misaligned inputs and
/// [`DomainError::IndexOutOfRange`] when `bin` is not a valid index.
pub fn profit_if_bin_wins(
    allocation: &[Shares],
    prices: &[Price],
    fee_rate: FeeRate,
    bin: usize,
) -> Result<Decimal, DomainError> {
    let payoffs = scenario_payoffs(allocation, prices, fee_rate)?;
    let payoff = payoffs.get(bin).ok_or(DomainError::IndexOutOfRange {
        index: bin,
        len: payoffs.len(),
    })?;
    Ok(Decimal::ONE - payoff)
}

fn scenario_payoffs(
    allocation: &[Shares],
    prices: &[Price],
    fee_rate: FeeRate,
) -> Result<Vec<Decimal>, DomainError> {
    if allocation.len() != prices.len() {
        return Err(DomainError::ShapeMismatch {
            allocation: allocation.len(),
            prices: prices.len(),
        });
    }

    let stakes: Vec<Decimal> = allocation
        .iter()
        .zip(prices)
        .map(|(&shares, &price)| Decimal::from(shares) * price)
        .collect();

    let if_no: Vec<Decimal> = allocation
        .iter()
        .zip(&stakes)
        .map(|(&shares, &stake)| round_money(fee_rate.net_of_fee(Decimal::from(shares) - stake)))
        .collect();

    let total_if_no: Decimal = if_no.iter().sum();

    Ok(stakes
        .iter()
        .zip(&if_no)
        .map(|(&stake, &no)| round_money(-stake + (total_if_no - no)))
        .collect())
}
