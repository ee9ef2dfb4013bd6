//! Handler for the `risk` command.

use crate::cli::{check_prices, output, RiskArgs};
use crate::config::Config;
use crate::domain::spread::{profit_if_bin_wins, score_payoffs};
use crate::error::Result;

/// Execute the risk command.
pub fn execute(config: &Config, args: &RiskArgs) -> Result<()> {
    check_prices(&args.prices)?;
    let fee_rate = config.spread.fee_rate;
    let profile = score_payoffs(&args.shares, &args.prices, fee_rate)?;

    output::section("Scenario payoffs");
    for (i, payoff) in profile.scenario_payoffs.iter().enumerate() {
        output::key_value(&format!("B{} wins", i + 1), output::money(*payoff));
    }

    output::section("Summary");
    output::key_value("Guaranteed", output::money(profile.guaranteed_profit));
    if let Some(worst) = profile.worst_scenario() {
        output::key_value("Worst case", format!("B{} wins", worst + 1));
    }

    if let Some(bin) = args.bin {
        let value = profit_if_bin_wins(&args.shares, &args.prices, fee_rate, bin)?;
        output::key_value(&format!("1 - B{} P&L", bin + 1), value);
    }

    Ok(())
}
