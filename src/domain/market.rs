//! Market-related domain types.
//!
//! - [`Bin`] - One mutually exclusive contract outcome
//! - [`Market`] - An ordered set of bins, exactly one of which resolves Yes

use std::result::Result;

use rust_decimal::Decimal;

use super::error::DomainError;
use super::ids::MarketId;
use super::money::Price;

/// A single outcome contract within a market.
///
/// `no_price` is the ask for one "No" share. A price of exactly 1 marks the
/// bin as priced out: it never receives an allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    name: String,
    no_price: Price,
    yes_price: Option<Price>,
}

impl Bin {
    /// Create a new bin from its No ask.
    pub fn new(name: impl Into<String>, no_price: Price) -> Self {
        Self {
            name: name.into(),
            no_price,
            yes_price: None,
        }
    }

    /// Attach the Yes ask for this bin.
    #[must_use]
    pub fn with_yes_price(mut self, yes_price: Price) -> Self {
        self.yes_price = Some(yes_price);
        self
    }

    /// Get the name of this bin.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask price of one No share.
    #[must_use]
    pub const fn no_price(&self) -> Price {
        self.no_price
    }

    /// Ask price of one Yes share, when quoted.
    #[must_use]
    pub const fn yes_price(&self) -> Option<Price> {
        self.yes_price
    }

    /// Whether a No position can still be bought below par.
    #[must_use]
    pub fn is_tradable(&self) -> bool {
        self.no_price != Decimal::ONE
    }
}

/// A prediction market made of mutually exclusive, collectively exhaustive
/// bins.
///
/// Bin order carries no meaning beyond keeping prices and allocations
/// index-aligned.
#[derive(Debug, Clone)]
pub struct Market {
    market_id: MarketId,
    name: String,
    bins: Vec<Bin>,
}

impl Market {
    /// Create a new market with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `bins` must not be empty
    /// - every No and Yes price must lie in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        market_id: MarketId,
        name: impl Into<String>,
        bins: Vec<Bin>,
    ) -> Result<Self, DomainError> {
        if bins.is_empty() {
            return Err(DomainError::EmptyBins);
        }

        for (index, bin) in bins.iter().enumerate() {
            let prices = std::iter::once(bin.no_price).chain(bin.yes_price);
            for price in prices {
                if price < Decimal::ZERO || price > Decimal::ONE {
                    return Err(DomainError::PriceOutOfRange { index, price });
                }
            }
        }

        Ok(Self {
            market_id,
            name: name.into(),
            bins,
        })
    }

    /// Get the market ID.
    #[must_use]
    pub const fn market_id(&self) -> &MarketId {
        &self.market_id
    }

    /// Get the market name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all bins in order.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Get the number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Whether an arbitrage allocation is possible at all (2+ bins).
    #[must_use]
    pub fn is_multi_bin(&self) -> bool {
        self.bins.len() >= 2
    }

    /// No asks in bin order.
    #[must_use]
    pub fn no_prices(&self) -> Vec<Price> {
        self.bins.iter().map(Bin::no_price).collect()
    }

    /// Yes asks in bin order, with unquoted bins reported as zero.
    #[must_use]
    pub fn yes_prices(&self) -> Vec<Price> {
        self.bins
            .iter()
            .map(|b| b.yes_price.unwrap_or(Decimal::ZERO))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn three_bins() -> Vec<Bin> {
        vec![
            Bin::new("A", dec!(0.40)).with_yes_price(dec!(0.62)),
            Bin::new("B", dec!(0.45)),
            Bin::new("C", dec!(1.0)),
        ]
    }

    #[test]
    fn try_new_accepts_valid_market() {
        let market = Market::try_new(MarketId::from("m"), "Who wins?", three_bins()).unwrap();

        assert_eq!(market.bin_count(), 3);
        assert!(market.is_multi_bin());
        assert_eq!(market.name(), "Who wins?");
        assert_eq!(market.no_prices(), vec![dec!(0.40), dec!(0.45), dec!(1.0)]);
        assert_eq!(market.yes_prices(), vec![dec!(0.62), dec!(0), dec!(0)]);
    }

    #[test]
    fn try_new_rejects_empty_bins() {
        let result = Market::try_new(MarketId::from("m"), "Empty?", vec![]);
        assert!(matches!(result, Err(DomainError::EmptyBins)));
    }

    #[test]
    fn try_new_rejects_price_above_one() {
        let bins = vec![Bin::new("A", dec!(0.40)), Bin::new("B", dec!(1.01))];
        let result = Market::try_new(MarketId::from("m"), "Bad?", bins);
        assert_eq!(
            result.unwrap_err(),
            DomainError::PriceOutOfRange {
                index: 1,
                price: dec!(1.01)
            }
        );
    }

    #[test]
    fn try_new_rejects_negative_yes_price() {
        let bins = vec![Bin::new("A", dec!(0.40)).with_yes_price(dec!(-0.1))];
        let result = Market::try_new(MarketId::from("m"), "Bad?", bins);
        assert!(matches!(
            result,
            Err(DomainError::PriceOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn priced_out_bin_is_not_tradable() {
        assert!(!Bin::new("C", dec!(1)).is_tradable());
        assert!(!Bin::new("C", dec!(1.00)).is_tradable());
        assert!(Bin::new("A", dec!(0.99)).is_tradable());
    }

    #[test]
    fn single_bin_market_is_not_multi_bin() {
        let market =
            Market::try_new(MarketId::from("m"), "Solo?", vec![Bin::new("A", dec!(0.5))]).unwrap();
        assert!(!market.is_multi_bin());
    }
}
