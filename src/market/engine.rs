//! Market engine: the stability curve and lockstep cycle advancement.
//!
//! The engine owns the asset roster and the run's seeded random stream. One
//! `tick()` is one cycle: stability is computed once from the cycle counter,
//! every asset updates against that same scalar, and the clock advances by
//! exactly 1. No asset's update reads another asset's state, so iterating in
//! roster order gives simultaneous-update semantics.

use super::types::{update_asset, Asset, AssetId, AssetSnapshot};
use crate::constants::STABILITY_LOG_SCALE;
use rand::rngs::StdRng;
use std::fmt;

/// Why an asset lookup for trading failed. The two cases get different
/// player-facing messages, so they stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindError {
    /// No asset with this id exists on the exchange.
    Unknown(AssetId),
    /// The asset exists but has collapsed and is no longer tradable.
    Delisted(AssetId),
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "no asset #{} on the exchange", id),
            Self::Delisted(id) => write!(f, "asset #{} is delisted", id),
        }
    }
}

impl std::error::Error for FindError {}

/// Global market stability in [0, 1] for a given cycle.
///
/// Logarithmic decay: fast early collapse, long low-stability tail. Pure and
/// deterministic; recomputed on demand, never stored. Exactly 1.0 at cycle 0
/// and exactly 0.0 once `cycle >= total_cycles`.
pub fn stability_at(cycle: u32, total_cycles: u32) -> f64 {
    if total_cycles == 0 {
        return 0.0;
    }
    let t = cycle as f64 / total_cycles as f64;
    (1.0 - (1.0 + STABILITY_LOG_SCALE * t).log10()).clamp(0.0, 1.0)
}

/// The whole exchange: fixed asset roster, logical clock, seeded randomness.
pub struct MarketEngine {
    assets: Vec<Asset>,
    cycle: u32,
    total_cycles: u32,
    rng: StdRng,
}

impl MarketEngine {
    /// Assemble an engine from already-built assets. Use
    /// [`super::roster::create_market`] for the standard roster.
    pub fn new(assets: Vec<Asset>, total_cycles: u32, rng: StdRng) -> Self {
        Self {
            assets,
            cycle: 0,
            total_cycles,
            rng,
        }
    }

    /// Advance the whole market by exactly one cycle.
    pub fn tick(&mut self) {
        let stability = self.stability();
        for asset in &mut self.assets {
            update_asset(asset, stability, &mut self.rng);
        }
        self.cycle += 1;
    }

    /// Current cycle index (0 before the first tick).
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Cycle budget for this run.
    pub fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    /// Stability for the current cycle. Safe to call any number of times.
    pub fn stability(&self) -> f64 {
        stability_at(self.cycle, self.total_cycles)
    }

    /// True once the cycle budget is exhausted.
    pub fn collapsed(&self) -> bool {
        self.cycle >= self.total_cycles
    }

    /// Ordered read-only snapshots of every asset, for rendering and
    /// mark-to-market valuation.
    pub fn snapshot(&self) -> Vec<AssetSnapshot> {
        self.assets.iter().map(Asset::snapshot).collect()
    }

    /// Look up a tradable asset by id. Unknown and delisted ids are rejected
    /// distinctly so trade handlers can explain which happened.
    pub fn find(&self, id: AssetId) -> Result<&Asset, FindError> {
        match self.assets.iter().find(|a| a.id == id) {
            None => Err(FindError::Unknown(id)),
            Some(a) if a.delisted => Err(FindError::Delisted(id)),
            Some(a) => Ok(a),
        }
    }

    /// True when every asset on the exchange has been delisted.
    pub fn all_delisted(&self) -> bool {
        self.assets.iter().all(|a| a.delisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::roster::create_market;

    #[test]
    fn test_stability_endpoints() {
        assert_eq!(stability_at(0, 100), 1.0);
        assert_eq!(stability_at(100, 100), 0.0);
        assert_eq!(stability_at(250, 100), 0.0);
    }

    #[test]
    fn test_stability_in_unit_interval() {
        for cycle in 0..=100 {
            let s = stability_at(cycle, 100);
            assert!((0.0..=1.0).contains(&s), "stability {} at cycle {}", s, cycle);
        }
    }

    #[test]
    fn test_stability_monotone_non_increasing() {
        let mut prev = stability_at(0, 100);
        for cycle in 1..=100 {
            let s = stability_at(cycle, 100);
            assert!(s <= prev, "stability rose at cycle {}", cycle);
            prev = s;
        }
    }

    #[test]
    fn test_stability_zero_budget_is_collapsed() {
        assert_eq!(stability_at(0, 0), 0.0);
        assert_eq!(stability_at(5, 0), 0.0);
    }

    #[test]
    fn test_tick_increments_cycle_by_one() {
        let mut engine = create_market(Some(1));
        assert_eq!(engine.cycle(), 0);
        engine.tick();
        assert_eq!(engine.cycle(), 1);
        engine.tick();
        assert_eq!(engine.cycle(), 2);
    }

    #[test]
    fn test_find_unknown_id() {
        let engine = create_market(Some(1));
        assert!(matches!(
            engine.find(AssetId(999)),
            Err(FindError::Unknown(AssetId(999)))
        ));
    }

    #[test]
    fn test_find_known_id() {
        let engine = create_market(Some(1));
        let asset = engine.find(AssetId(1)).expect("roster starts with asset 1");
        assert_eq!(asset.name, "Helios Corp.");
    }

    #[test]
    fn test_collapsed_after_budget() {
        let mut engine = create_market(Some(1));
        assert!(!engine.collapsed());
        for _ in 0..engine.total_cycles() {
            engine.tick();
        }
        assert!(engine.collapsed());
        assert_eq!(engine.stability(), 0.0);
    }
}
