//! Local market snapshot files.
//!
//! A snapshot is a TOML file listing markets and their bins, exported by
//! whatever collects quotes from the venue. This is the boundary where a
//! missing No quote becomes a price of 1 (nothing left to buy); the domain
//! never sees an absent price.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Bin, Market, MarketId, Price};
use crate::error::{Result, SnapshotError};

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    markets: Vec<MarketRow>,
}

#[derive(Debug, Deserialize)]
struct MarketRow {
    id: MarketId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    bins: Vec<BinRow>,
}

#[derive(Debug, Deserialize)]
struct BinRow {
    #[serde(default)]
    name: String,
    no_price: Option<Price>,
    yes_price: Option<Price>,
}

impl BinRow {
    fn into_bin(self) -> Bin {
        let bin = Bin::new(self.name, self.no_price.unwrap_or(Decimal::ONE));
        match self.yes_price {
            Some(yes) => bin.with_yes_price(yes),
            None => bin,
        }
    }
}

/// Parsed snapshot contents.
#[derive(Debug, Clone)]
pub struct Snapshot {
    markets: Vec<Market>,
}

impl Snapshot {
    /// Read and validate a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse snapshot TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let file: SnapshotFile = toml::from_str(content).map_err(SnapshotError::Parse)?;

        let markets = file
            .markets
            .into_iter()
            .map(|row| {
                let bins = row.bins.into_iter().map(BinRow::into_bin).collect();
                Market::try_new(row.id.clone(), row.name, bins).map_err(|source| {
                    SnapshotError::InvalidMarket {
                        market_id: row.id.to_string(),
                        source,
                    }
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { markets })
    }

    /// All markets in file order.
    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    /// Look up a market by ID.
    pub fn market(&self, id: &str) -> Result<&Market> {
        self.markets
            .iter()
            .find(|m| m.market_id().as_str() == id)
            .ok_or_else(|| {
                SnapshotError::MarketNotFound {
                    market_id: id.to_string(),
                }
                .into()
            })
    }
}
