//! Command-line interface definitions.

pub mod bins;
pub mod config;
pub mod divide;
pub mod optimize;
pub mod output;
pub mod risk;
pub mod scan;
pub mod value;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::spread::SearchMode;
use crate::domain::{Bin, Market, MarketId, Shares};
use crate::error::Result;

/// Nospread - guaranteed-profit No-share allocation for multi-bin markets.
#[derive(Parser, Debug)]
#[command(name = "nospread")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the share allocation with the best guaranteed profit
    Optimize(OptimizeArgs),

    /// Score a given allocation under every winning bin
    Risk(RiskArgs),

    /// Compare buying Yes on one bin against hedging No on the rest
    Value(ValueArgs),

    /// Search every market in a snapshot for negative risk
    Scan(ScanArgs),

    /// List a market's bins with their Yes and No asks
    Bins(BinsArgs),

    /// Compare Yes prices of same-named bins across two markets
    Divide(DivideArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `nospread config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Budget and mode overrides shared by searching commands.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Maximum shares per bin (overrides config)
    #[arg(short, long)]
    pub max_shares: Option<Shares>,

    /// Evaluate only at the budget instead of sweeping every ceiling
    #[arg(long)]
    pub first_fit: bool,
}

impl SearchArgs {
    /// Resolve budget and mode against the loaded config.
    pub fn resolve(&self, config: &Config) -> (Shares, SearchMode) {
        let max_shares = self.max_shares.unwrap_or(config.spread.max_shares);
        let mode = if self.first_fit {
            SearchMode::FirstFit
        } else {
            config.spread.mode
        };
        (max_shares, mode)
    }
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Comma-separated No asks, one per bin (use 1 for unquoted bins)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub prices: Vec<Decimal>,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Arguments for the `risk` subcommand.
#[derive(Parser, Debug)]
pub struct RiskArgs {
    /// Comma-separated No asks, one per bin
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub prices: Vec<Decimal>,

    /// Comma-separated share counts, aligned with --prices
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub shares: Vec<Shares>,

    /// Also report the position value if this bin (0-based) wins
    #[arg(short, long)]
    pub bin: Option<usize>,
}

/// Arguments for the `value` subcommand.
#[derive(Parser, Debug)]
pub struct ValueArgs {
    /// Path to market snapshot file
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Market ID within the snapshot
    #[arg(short, long)]
    pub market: String,

    /// Bin (0-based) to buy Yes on; defaults to the highest Yes price
    #[arg(short, long)]
    pub bin: Option<usize>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to market snapshot file
    #[arg(short, long)]
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Print one line per market instead of a table
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `bins` subcommand.
#[derive(Parser, Debug)]
pub struct BinsArgs {
    /// Path to market snapshot file
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Market ID within the snapshot
    #[arg(short, long)]
    pub market: String,
}

/// Arguments for the `divide` subcommand.
#[derive(Parser, Debug)]
pub struct DivideArgs {
    /// Path to market snapshot file
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Market whose Yes prices are divided
    #[arg(short, long)]
    pub market: String,

    /// Market supplying the divisors
    #[arg(short, long)]
    pub other: String,
}

impl Cli {
    /// Load configuration and apply global overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(&self.config)?;
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
        Ok(config)
    }
}

/// Reject prices outside [0, 1] before they reach the allocator.
pub fn check_prices(prices: &[Decimal]) -> Result<()> {
    let bins = prices.iter().map(|&p| Bin::new("", p)).collect();
    Market::try_new(MarketId::from("command-line"), "", bins)?;
    Ok(())
}

/// Dispatch a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    config.init_logging();

    match &cli.command {
        Commands::Optimize(args) => optimize::execute(&config, args),
        Commands::Risk(args) => risk::execute(&config, args),
        Commands::Value(args) => value::execute(&config, args),
        Commands::Scan(args) => scan::execute(&config, args),
        Commands::Bins(args) => bins::execute(args),
        Commands::Divide(args) => divide::execute(args),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, &config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
