//! Handler for the `bins` command.

use tabled::{Table, Tabled};

use crate::cli::{output, BinsArgs};
use crate::domain::Bin;
use crate::error::Result;
use crate::snapshot::Snapshot;

/// Unquoted bins named before the rest are summarised as a count.
const NAMED_UNQUOTED: usize = 2;

#[derive(Tabled)]
struct BinRow {
    #[tabled(rename = "Bin")]
    name: String,
    #[tabled(rename = "Yes")]
    yes: String,
    #[tabled(rename = "No")]
    no: String,
}

/// Execute the bins command.
pub fn execute(args: &BinsArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    let market = snapshot.market(&args.market)?;

    let (quoted, unquoted): (Vec<&Bin>, Vec<&Bin>) =
        market.bins().iter().partition(|b| b.is_tradable());

    output::section(&format!("Market bins for \"{}\"", market.name()));

    if !quoted.is_empty() {
        let rows: Vec<BinRow> = quoted
            .iter()
            .map(|bin| BinRow {
                name: bin.name().to_string(),
                yes: bin.yes_price().map_or_else(|| "-".to_string(), output::cents),
                no: output::cents(bin.no_price()),
            })
            .collect();
        for line in Table::new(rows).to_string().lines() {
            println!("  {line}");
        }
    }

    let names: Vec<&str> = unquoted.iter().map(|b| b.name()).collect();
    if let Some(line) = unquoted_summary(&names) {
        output::note(&line);
    }

    Ok(())
}

/// Summarise bins with nothing to buy as `X, Y and N more @ 0`.
fn unquoted_summary(names: &[&str]) -> Option<String> {
    match names {
        [] => None,
        [only] => Some(format!("{only} @ 0")),
        [first, second] => Some(format!("{first} and {second} @ 0")),
        _ => {
            let named = names[..NAMED_UNQUOTED].join(", ");
            let rest = names.len() - NAMED_UNQUOTED;
            Some(format!("{named} and {rest} more @ 0"))
        }
    }
}
