//! Single-position value: buy Yes on one bin, hedge with No on the rest.

use rust_decimal::Decimal;

use super::risk::profit_if_bin_wins;
use crate::domain::error::DomainError;
use crate::domain::market::Market;
use crate::domain::money::{Allocation, FeeRate, Price};

/// Cost comparison between a Yes buy and its No hedge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgeQuote {
    /// Bin the Yes share is bought on.
    pub bin: usize,
    /// Yes ask of that bin (zero when unquoted).
    pub yes_price: Price,
    /// One No share on every other tradable bin.
    pub hedge_allocation: Allocation,
    /// Value of the hedge in the scenario where `bin` wins.
    pub hedge_cost: Decimal,
}

impl HedgeQuote {
    /// Whether the hedge costs less than buying Yes outright.
    pub fn hedge_is_cheaper(&self) -> bool {
        self.hedge_cost < self.yes_price
    }
}

/// Quote the hedge for `bin`, or for the bin with the highest Yes price when
/// `bin` is `None`.
///
/// # Errors
///
/// Returns [`DomainError::TooFewBins`] for single-bin markets and
/// [`DomainError::IndexOutOfRange`] for a bin the market does not have.
pub fn hedge_quote(
    market: &Market,
    bin: Option<usize>,
    fee_rate: FeeRate,
) -> Result<HedgeQuote, DomainError> {
    if !market.is_multi_bin() {
        return Err(DomainError::TooFewBins {
            count: market.bin_count(),
        });
    }

    let yes_prices = market.yes_prices();
    let bin = match bin {
        Some(bin) => bin,
        None => favourite(&yes_prices),
    };
    let yes_price = *yes_prices.get(bin).ok_or(DomainError::IndexOutOfRange {
        index: bin,
        len: yes_prices.len(),
    })?;

    let hedge_allocation: Allocation = market
        .bins()
        .iter()
        .enumerate()
        .map(|(i, b)| u32::from(i != bin && b.is_tradable()))
        .collect();

    let hedge_cost = profit_if_bin_wins(&hedge_allocation, &market.no_prices(), fee_rate, bin)?;

    Ok(HedgeQuote {
        bin,
        yes_price,
        hedge_allocation,
        hedge_cost,
    })
}

/// First bin holding the highest Yes price.
fn favourite(yes_prices: &[Price]) -> usize {
    let mut best = 0;
    for (i, &price) in yes_prices.iter().enumerate() {
        if price > yes_prices[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::Bin;
    use crate::domain::MarketId;
    use rust_decimal_macros::dec;

    fn market() -> Market {
        Market::try_new(
            MarketId::from("m"),
            "Who wins?",
            vec![
                Bin::new("A", dec!(0.62)).with_yes_price(dec!(0.40)),
                Bin::new("B", dec!(0.45)).with_yes_price(dec!(0.57)),
                Bin::new("C", dec!(0.97)).with_yes_price(dec!(0.57)),
                Bin::new("D", dec!(1)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_favourite_bin() {
        let quote = hedge_quote(&market(), None, FeeRate::default()).unwrap();

        assert_eq!(quote.bin, 1);
        assert_eq!(quote.yes_price, dec!(0.57));
        assert_eq!(quote.hedge_allocation, vec![1, 0, 1, 0]);
        // 1 - (0.342 + 0.027 - 0)
        assert_eq!(quote.hedge_cost, dec!(0.631));
        assert!(!quote.hedge_is_cheaper());
    }

    #[test]
    fn explicit_bin_is_honoured() {
        let quote = hedge_quote(&market(), Some(0), FeeRate::default()).unwrap();

        assert_eq!(quote.bin, 0);
        assert_eq!(quote.hedge_allocation, vec![0, 1, 1, 0]);
        // 1 - (0.495 + 0.027)
        assert_eq!(quote.hedge_cost, dec!(0.478));
        assert!(!quote.hedge_is_cheaper());
    }

    #[test]
    fn rejects_unknown_bin() {
        let err = hedge_quote(&market(), Some(4), FeeRate::default()).unwrap_err();
        assert_eq!(err, DomainError::IndexOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn rejects_single_bin_market() {
        let solo = Market::try_new(MarketId::from("s"), "Solo?", vec![Bin::new("A", dec!(0.3))])
            .unwrap();
        let err = hedge_quote(&solo, None, FeeRate::default()).unwrap_err();
        assert_eq!(err, DomainError::TooFewBins { count: 1 });
    }

    #[test]
    fn favourite_prefers_first_on_ties() {
        assert_eq!(favourite(&[dec!(0.2), dec!(0.5), dec!(0.5)]), 1);
        assert_eq!(favourite(&[dec!(0), dec!(0)]), 0);
    }
}
