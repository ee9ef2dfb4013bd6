//! Cross-market Yes price ratios for bins that share a name.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::market::Market;

/// Yes asks below this are too thin to compare.
pub const MIN_RATIO_YES_PRICE: Decimal = dec!(0.02);

/// One bin's Yes ask in a market relative to the same-named bin elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinRatio {
    pub name: String,
    /// `yes / other_yes`, in whole percent, truncated.
    pub percent: Decimal,
}

/// Divide each Yes ask in `market` by the Yes ask of the bin with the same
/// name in `other`.
///
/// Bins are skipped when their Yes ask is missing or below
/// [`MIN_RATIO_YES_PRICE`], when `other` has no bin of that name, or when the
/// other bin's Yes ask is missing or zero. Output follows `market`'s bin
/// order.
pub fn yes_price_ratios(market: &Market, other: &Market) -> Vec<BinRatio> {
    market
        .bins()
        .iter()
        .filter_map(|bin| {
            let yes = bin.yes_price().filter(|&p| p >= MIN_RATIO_YES_PRICE)?;
            let other_yes = other
                .bins()
                .iter()
                .find(|b| b.name() == bin.name())?
                .yes_price()?;
            let ratio = yes.checked_div(other_yes)?;
            Some(BinRatio {
                name: bin.name().to_string(),
                percent: (ratio * Decimal::ONE_HUNDRED).trunc(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::Bin;
    use crate::domain::MarketId;

    fn market(id: &str, bins: Vec<Bin>) -> Market {
        Market::try_new(MarketId::from(id), id, bins).unwrap()
    }

    #[test]
    fn divides_matching_bins() {
        let primary = market(
            "a",
            vec![
                Bin::new("Red", dec!(0.5)).with_yes_price(dec!(0.30)),
                Bin::new("Blue", dec!(0.5)).with_yes_price(dec!(0.45)),
            ],
        );
        let other = market(
            "b",
            vec![
                Bin::new("Blue", dec!(0.5)).with_yes_price(dec!(0.60)),
                Bin::new("Red", dec!(0.5)).with_yes_price(dec!(0.40)),
            ],
        );

        let ratios = yes_price_ratios(&primary, &other);

        assert_eq!(
            ratios,
            vec![
                BinRatio {
                    name: "Red".into(),
                    percent: dec!(75),
                },
                BinRatio {
                    name: "Blue".into(),
                    percent: dec!(75),
                },
            ]
        );
    }

    #[test]
    fn truncates_to_whole_percent() {
        let primary = market("a", vec![Bin::new("X", dec!(0.5)).with_yes_price(dec!(0.10))]);
        let other = market("b", vec![Bin::new("X", dec!(0.5)).with_yes_price(dec!(0.30))]);

        assert_eq!(yes_price_ratios(&primary, &other)[0].percent, dec!(33));
    }

    #[test]
    fn ratio_can_exceed_one_hundred() {
        let primary = market("a", vec![Bin::new("X", dec!(0.5)).with_yes_price(dec!(0.50))]);
        let other = market("b", vec![Bin::new("X", dec!(0.5)).with_yes_price(dec!(0.20))]);

        assert_eq!(yes_price_ratios(&primary, &other)[0].percent, dec!(250));
    }

    #[test]
    fn skips_thin_unmatched_and_unquoted_bins() {
        let primary = market(
            "a",
            vec![
                Bin::new("Thin", dec!(0.99)).with_yes_price(dec!(0.01)),
                Bin::new("Edge", dec!(0.98)).with_yes_price(dec!(0.02)),
                Bin::new("Lonely", dec!(0.5)).with_yes_price(dec!(0.50)),
                Bin::new("Unquoted", dec!(1)),
                Bin::new("Free", dec!(0.5)).with_yes_price(dec!(0.50)),
            ],
        );
        let other = market(
            "b",
            vec![
                Bin::new("Thin", dec!(0.5)).with_yes_price(dec!(0.50)),
                Bin::new("Edge", dec!(0.5)).with_yes_price(dec!(0.04)),
                Bin::new("Unquoted", dec!(0.5)).with_yes_price(dec!(0.50)),
                Bin::new("Free", dec!(1)).with_yes_price(dec!(0)),
            ],
        );

        let ratios = yes_price_ratios(&primary, &other);

        assert_eq!(
            ratios,
            vec![BinRatio {
                name: "Edge".into(),
                percent: dec!(50),
            }]
        );
    }
}
