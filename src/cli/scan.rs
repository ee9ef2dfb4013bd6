//! Handler for the `scan` command.

use tabled::{Table, Tabled};

use crate::cli::{output, ScanArgs};
use crate::config::Config;
use crate::domain::spread::{scan_markets, SpreadSearch};
use crate::domain::Market;
use crate::error::Result;
use crate::snapshot::Snapshot;

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "1 - No sum")]
    edge_sum: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Spread")]
    spread: String,
}

/// Execute the scan command.
pub fn execute(config: &Config, args: &ScanArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    let (max_shares, mode) = args.search.resolve(config);

    let eligible: Vec<Market> = snapshot
        .markets()
        .iter()
        .filter(|m| m.bin_count() >= config.scan.min_bins)
        .cloned()
        .collect();
    let too_small = snapshot.markets().len() - eligible.len();

    let search = SpreadSearch::new(config.spread.clone());
    let mut report = scan_markets(&eligible, &search, max_shares, mode)?;
    report.skipped += too_small;

    output::section(&format!(
        "There are {} markets with negative risk",
        report.hits.len()
    ));
    output::key_value("Scanned", report.scanned);
    output::key_value("Skipped", report.skipped);

    if report.hits.is_empty() {
        return Ok(());
    }
    println!();

    if args.compact {
        for hit in &report.hits {
            output::note(&format!(
                "Market {} ({} / {})",
                hit.market_id,
                hit.edge_sum,
                output::money(hit.spread.guaranteed_profit)
            ));
        }
        return Ok(());
    }

    let rows: Vec<HitRow> = report
        .hits
        .iter()
        .map(|hit| HitRow {
            market: hit.market_id.to_string(),
            name: hit.name.clone(),
            edge_sum: hit.edge_sum.to_string(),
            profit: output::money(hit.spread.guaranteed_profit),
            spread: output::shares_list(&hit.spread.allocation),
        })
        .collect();

    for line in Table::new(rows).to_string().lines() {
        println!("  {line}");
    }

    Ok(())
}
