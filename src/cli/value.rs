//! Handler for the `value` command.

use crate::cli::{output, ValueArgs};
use crate::config::Config;
use crate::domain::spread::hedge_quote;
use crate::error::Result;
use crate::snapshot::Snapshot;

/// Execute the value command.
pub fn execute(config: &Config, args: &ValueArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    let market = snapshot.market(&args.market)?;
    let quote = hedge_quote(market, args.bin, config.spread.fee_rate)?;

    let bin_name = market.bins()[quote.bin].name();
    let label = if bin_name.is_empty() {
        format!("B{}", quote.bin + 1)
    } else {
        format!("B{} ({bin_name})", quote.bin + 1)
    };

    output::section(&format!("Value buy for \"{}\"", market.name()));
    output::key_value("Bin", &label);
    output::note(&format!(
        "Buying {label} Yes costs {}",
        output::cents(quote.yes_price)
    ));
    output::note(&format!(
        "Buying No on everything else would cost {}",
        output::cents(quote.hedge_cost)
    ));

    if quote.hedge_is_cheaper() {
        output::ok("Hedge is cheaper than the Yes ask");
    }

    Ok(())
}
