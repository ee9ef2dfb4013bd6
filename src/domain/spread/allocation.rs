//! Closed-form proportional allocation.
//!
//! Scenario payoffs are equalised when each bin's share count is
//! proportional to `weight(p) = 1 / (1 - (1 - p) * fee)`, scaled so the
//! costliest tradable bin commits `share_ceiling` worth of capital. Cheaper
//! bins keep more of their gain after the fee, so they carry a larger weight
//! and receive more shares.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::error::DomainError;
use crate::domain::money::{Allocation, FeeRate, Price, Shares};

/// Proportionality weight of a bin priced at `price`.
///
/// Returns `None` for a priced-out bin (`price == 1`), which never takes part
/// in the proportion.
pub fn weight(price: Price, fee_rate: FeeRate) -> Option<Decimal> {
    if price == Decimal::ONE {
        return None;
    }
    Decimal::ONE.checked_div(fee_denominator(price, fee_rate))
}

/// Allocate shares across bins in proportion to their weights.
///
/// Entries for bins priced at exactly 1 are always 0. The ceiling bounds the
/// costliest bin's committed capital, not the total: the result can exceed
/// `share_ceiling` in any single bin.
///
/// # Errors
///
/// Returns [`DomainError::DegenerateMarket`] when no bin is priced below 1,
/// or when every tradable bin is free so the multiplier is undefined.
/// Returns [`DomainError::ShareOverflow`] when a bin's share count does not
/// fit in [`Shares`].
pub fn proportional_allocation(
    prices: &[Price],
    share_ceiling: Shares,
    fee_rate: FeeRate,
) -> Result<Allocation, DomainError> {
    let costliest = prices
        .iter()
        .copied()
        .filter(|&p| p != Decimal::ONE)
        .max()
        .ok_or(DomainError::DegenerateMarket)?;

    if costliest.is_zero() {
        return Err(DomainError::DegenerateMarket);
    }

    // (ceiling / p_max) / weight(p_max) * weight(p), folded into a single
    // quotient so the costliest bin floors to exactly ceiling / p_max.
    let scaled_ceiling = Decimal::from(share_ceiling) * fee_denominator(costliest, fee_rate);

    prices
        .iter()
        .enumerate()
        .map(|(index, &price)| {
            if price == Decimal::ONE {
                return Ok(0);
            }
            let divisor = costliest * fee_denominator(price, fee_rate);
            scaled_ceiling
                .checked_div(divisor)
                .and_then(|shares| shares.floor().to_u32())
                .ok_or(DomainError::ShareOverflow { index })
        })
        .collect()
}

fn fee_denominator(price: Price, fee_rate: FeeRate) -> Decimal {
    Decimal::ONE - (Decimal::ONE - price) * fee_rate.value()
}
