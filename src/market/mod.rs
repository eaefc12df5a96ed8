//! The market simulation engine.
//!
//! A fixed roster of independent stochastic price processes advanced in
//! lockstep, coupled only through the global stability scalar.

pub mod engine;
pub mod roster;
pub mod types;

pub use engine::{stability_at, FindError, MarketEngine};
pub use roster::create_market;
pub use types::{update_asset, Asset, AssetId, AssetSnapshot};
