//! Handler for the `optimize` command.

use tabled::{Table, Tabled};
use tracing::info;

use crate::cli::{check_prices, output, OptimizeArgs};
use crate::config::Config;
use crate::domain::spread::{edge_sum, score_payoffs, SearchMode, SpreadSearch};
use crate::error::Result;

#[derive(Tabled)]
struct BinRow {
    #[tabled(rename = "Bin")]
    bin: String,
    #[tabled(rename = "No ask")]
    price: String,
    #[tabled(rename = "Shares")]
    shares: u32,
    #[tabled(rename = "P&L if wins")]
    payoff: String,
}

/// Execute the optimize command.
pub fn execute(config: &Config, args: &OptimizeArgs) -> Result<()> {
    check_prices(&args.prices)?;
    let (max_shares, mode) = args.search.resolve(config);
    let search = SpreadSearch::new(config.spread.clone());

    info!(bins = args.prices.len(), max_shares, mode = mode.as_str(), "optimizing spread");
    let spread = search.run_with(&args.prices, max_shares, mode)?;
    let profile = score_payoffs(&spread.allocation, &args.prices, config.spread.fee_rate)?;

    output::section("Spread");
    output::key_value("Fee", config.spread.fee_rate);
    output::key_value("Max shares", max_shares);
    output::key_value("Mode", mode.as_str());
    output::key_value("1 - No sum", edge_sum(&args.prices));

    if spread.is_profitable() {
        output::ok("Negative risk found");
    } else {
        output::warn(&format!("No negative risk available at {max_shares} shares"));
        // The sweep's fallback is the empty spread; nothing more to show.
        if mode == SearchMode::BestOverRange {
            return Ok(());
        }
    }

    output::key_value("Profit", output::money(spread.guaranteed_profit));
    output::key_value("Capital", output::money(spread.capital(&args.prices)));
    output::key_value("Ideal spread", output::shares_list(&spread.allocation));

    let rows: Vec<BinRow> = args
        .prices
        .iter()
        .zip(&spread.allocation)
        .zip(&profile.scenario_payoffs)
        .enumerate()
        .map(|(i, ((price, &shares), &payoff))| BinRow {
            bin: format!("B{}", i + 1),
            price: price.to_string(),
            shares,
            payoff: output::money(payoff),
        })
        .collect();

    println!();
    for line in Table::new(rows).to_string().lines() {
        println!("  {line}");
    }

    Ok(())
}
