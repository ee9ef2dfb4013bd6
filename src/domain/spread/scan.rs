//! Batch search for negative-risk markets.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use super::search::{SearchMode, Spread, SpreadSearch};
use crate::domain::error::DomainError;
use crate::domain::ids::MarketId;
use crate::domain::market::Market;
use crate::domain::money::{Price, Shares};

/// Sum of `1 - p` over all No prices, rounded to cents.
///
/// A quick read of how much raw edge a market holds before fees.
pub fn edge_sum(prices: &[Price]) -> Decimal {
    prices
        .iter()
        .map(|&p| Decimal::ONE - p)
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// A market whose best spread locks in a positive profit.
#[derive(Debug, Clone)]
pub struct ScanHit {
    pub market_id: MarketId,
    pub name: String,
    pub edge_sum: Decimal,
    pub spread: Spread,
}

/// Outcome of scanning a batch of markets.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Profitable markets, in input order.
    pub hits: Vec<ScanHit>,
    /// Markets that were searched.
    pub scanned: usize,
    /// Markets skipped as single-bin or fully priced out.
    pub skipped: usize,
}

/// Run the spread search over every multi-bin market.
///
/// Degenerate and single-bin markets are counted and skipped. Any other
/// domain error aborts the scan.
pub fn scan_markets(
    markets: &[Market],
    search: &SpreadSearch,
    max_shares: Shares,
    mode: SearchMode,
) -> Result<ScanReport, DomainError> {
    let mut report = ScanReport::default();

    for market in markets {
        let prices = market.no_prices();
        let spread = match search.run_with(&prices, max_shares, mode) {
            Ok(spread) => spread,
            Err(DomainError::DegenerateMarket | DomainError::TooFewBins { .. }) => {
                debug!(market_id = %market.market_id(), "skipping market without tradable bins");
                report.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        report.scanned += 1;

        if spread.is_profitable() {
            report.hits.push(ScanHit {
                market_id: market.market_id().clone(),
                name: market.name().to_string(),
                edge_sum: edge_sum(&prices),
                spread,
            });
        }
    }

    info!(
        scanned = report.scanned,
        skipped = report.skipped,
        hits = report.hits.len(),
        "market scan complete"
    );

    Ok(report)
}
