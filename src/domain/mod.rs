//! Exchange-agnostic domain logic.

pub mod error;
mod ids;
mod market;
mod money;

pub mod spread;

// Core domain types
pub use error::DomainError;
pub use ids::MarketId;
pub use market::{Bin, Market};
pub use money::{round_money, Allocation, FeeRate, Price, Shares};
