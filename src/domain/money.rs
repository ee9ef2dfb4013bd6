//! Monetary and quantity types.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fmt;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Number of shares held in a single bin.
pub type Shares = u32;

/// One share count per bin, index-aligned with the market's prices.
pub type Allocation = Vec<Shares>;

/// Round a monetary value to three decimals, a fraction of a cent.
///
/// Half-way cases go to the even neighbour.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointNearestEven)
}

/// Commission the venue takes on realized net trading profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FeeRate(Decimal);

impl FeeRate {
    /// The venue's standard 10% commission.
    pub const STANDARD: FeeRate = FeeRate(dec!(0.10));

    /// Wrap a raw fee fraction (e.g. `0.10` for 10%).
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    /// The fee as a fraction of profit.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Net amount kept from a gross gain once the fee is deducted.
    pub fn net_of_fee(self, gain: Decimal) -> Decimal {
        gain - self.0 * gain
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
