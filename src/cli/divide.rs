//! Handler for the `divide` command.

use crate::cli::{output, DivideArgs};
use crate::domain::spread::yes_price_ratios;
use crate::error::Result;
use crate::snapshot::Snapshot;

/// Execute the divide command.
pub fn execute(args: &DivideArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    let market = snapshot.market(&args.market)?;
    let other = snapshot.market(&args.other)?;

    let ratios = yes_price_ratios(market, other);

    output::section(&format!(
        "Yes prices of \"{}\" relative to \"{}\"",
        market.name(),
        other.name()
    ));
    if ratios.is_empty() {
        output::warn("No bins with a common name and a comparable Yes price");
        return Ok(());
    }

    for ratio in &ratios {
        output::note(&format!("{}: {}%", ratio.name, ratio.percent));
    }

    Ok(())
}
