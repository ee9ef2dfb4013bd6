//! Handler for the `config` command group.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config) -> Result<()> {
    output::section("Effective Configuration");
    if path.exists() {
        output::key_value("File", path.display());
    } else {
        output::key_value("File", "(defaults)");
    }

    output::section("Spread");
    output::key_value("Fee", config.spread.fee_rate);
    output::key_value("Max shares", config.spread.max_shares);
    output::key_value("Mode", config.spread.mode.as_str());

    output::section("Scan");
    output::key_value("Min bins", config.scan.min_bins);

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::ok(&format!("{} is valid", path.display()));
    Ok(())
}
