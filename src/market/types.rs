//! Asset price process data structures.
//!
//! Each tradable asset is an independent stochastic price series driven by the
//! global stability scalar. The update law lives here; lockstep advancement
//! and the stability curve live in [`super::engine`].

use crate::constants::{
    BURST_CHANCE, BURST_MAX, BURST_MIN, BURST_STABILITY_THRESHOLD, DEFAULT_RESILIENCE,
    DELIST_FLOOR, SPARKLINE_WINDOW, TREND_BASE_WEIGHT, TREND_CLAMP, TREND_STABILITY_WEIGHT,
    TREND_WALK_STEP,
};
use rand::Rng;
use std::fmt;

/// Opaque numeric asset identifier, stable for the lifetime of a run.
///
/// Commands refer to assets by this number; all lookups go through
/// [`super::engine::MarketEngine::find`], never through name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(pub u32);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tradable asset: its fixed tuning parameters and mutable price state.
#[derive(Debug, Clone)]
pub struct Asset {
    pub id: AssetId,
    pub name: &'static str,
    /// Current price, always >= 0.
    pub price: f64,
    /// Amplitude of the per-cycle uniform fluctuation. Fixed at creation; 0 is
    /// legal and makes the asset pure deterministic drift.
    pub volatility: f64,
    /// How strongly the asset resists a collapsing market. Always positive;
    /// non-positive roster values are coerced to [`DEFAULT_RESILIENCE`].
    pub resilience: f64,
    /// Signed drift bias. Random-walks a little each cycle so runs of up and
    /// down stay organic instead of perfectly linear.
    pub trend: f64,
    /// Signed delta from the previous price. Display-only, recomputed every
    /// update.
    pub last_change: f64,
    /// Append-only price record, seeded with the base price. One entry per
    /// update, delisted or not, so every asset's series has equal length.
    pub history: Vec<f64>,
    /// One-way latch: once the price collapses through [`DELIST_FLOOR`] the
    /// asset is dead: price pinned at 0 and excluded from trading.
    pub delisted: bool,
}

impl Asset {
    /// Create an asset at its base price.
    ///
    /// `trend` is the starting drift bias, drawn by the caller from the
    /// engine's seeded stream so creation stays reproducible.
    pub fn new(
        id: AssetId,
        name: &'static str,
        base_price: f64,
        volatility: f64,
        resilience: f64,
        trend: f64,
    ) -> Self {
        let resilience = if resilience > 0.0 {
            resilience
        } else {
            DEFAULT_RESILIENCE
        };

        Self {
            id,
            name,
            price: base_price,
            volatility,
            resilience,
            trend,
            last_change: 0.0,
            history: vec![base_price],
            delisted: false,
        }
    }

    /// Read-only view for rendering: current state plus the trailing history
    /// window.
    pub fn snapshot(&self) -> AssetSnapshot {
        let start = self.history.len().saturating_sub(SPARKLINE_WINDOW);
        AssetSnapshot {
            id: self.id,
            name: self.name,
            price: self.price,
            last_change: self.last_change,
            delisted: self.delisted,
            history: self.history[start..].to_vec(),
        }
    }
}

/// Advance one asset by one cycle under the given stability.
///
/// The whole update law lives in this one function: it reads nothing but the
/// record, the stability scalar, and the random stream, so it is testable in
/// isolation and assets cannot observe each other. Delisted assets stay
/// pinned at 0 and consume no randomness; they still append to `history` so
/// all series stay the same length.
pub fn update_asset(asset: &mut Asset, stability: f64, rng: &mut impl Rng) {
    if asset.delisted {
        asset.price = 0.0;
        asset.last_change = 0.0;
        asset.history.push(0.0);
        return;
    }

    let stability = stability.clamp(0.0, 1.0);
    let prev = asset.price;

    // Decay grows quadratically as stability falls, damped by resilience.
    let decay = (1.0 - stability).powi(2) / asset.resilience;

    // Directional drift fades as the market destabilises.
    let trend_force = asset.trend * (TREND_BASE_WEIGHT + TREND_STABILITY_WEIGHT * stability);

    let fluctuation = if asset.volatility > 0.0 {
        rng.gen_range(-asset.volatility..=asset.volatility)
    } else {
        0.0
    };

    // Rare rally: keeps a dying market from flatlining monotonically.
    let burst = if stability < BURST_STABILITY_THRESHOLD && rng.gen_bool(BURST_CHANCE) {
        rng.gen_range(BURST_MIN..=BURST_MAX)
    } else {
        0.0
    };

    let delta = trend_force - decay + fluctuation + burst;
    asset.price = (asset.price * (1.0 + delta)).max(0.0);

    if asset.price <= DELIST_FLOOR {
        asset.price = 0.0;
        asset.delisted = true;
    }

    asset.last_change = asset.price - prev;
    asset.history.push(asset.price);

    // Walk the bias after the delta so this cycle used the configured value.
    asset.trend = (asset.trend + rng.gen_range(-TREND_WALK_STEP..=TREND_WALK_STEP))
        .clamp(-TREND_CLAMP, TREND_CLAMP);
}

/// Immutable per-asset view handed to the renderer and the player's
/// mark-to-market math. Carries only the trailing history window.
#[derive(Debug, Clone)]
pub struct AssetSnapshot {
    pub id: AssetId,
    pub name: &'static str,
    pub price: f64,
    pub last_change: f64,
    pub delisted: bool,
    pub history: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_asset() -> Asset {
        Asset::new(AssetId(1), "Test Corp.", 1000.0, 0.02, 1.0, 0.0)
    }

    #[test]
    fn test_new_seeds_history_with_base_price() {
        let asset = test_asset();
        assert_eq!(asset.history, vec![1000.0]);
        assert_eq!(asset.last_change, 0.0);
        assert!(!asset.delisted);
    }

    #[test]
    fn test_non_positive_resilience_coerced() {
        let zero = Asset::new(AssetId(1), "A", 100.0, 0.0, 0.0, 0.0);
        let negative = Asset::new(AssetId(2), "B", 100.0, 0.0, -3.0, 0.0);
        assert_eq!(zero.resilience, DEFAULT_RESILIENCE);
        assert_eq!(negative.resilience, DEFAULT_RESILIENCE);
    }

    #[test]
    fn test_update_at_full_stability_with_no_noise_is_inert() {
        // Worked example: zero volatility, zero trend, stability 1.0.
        // Decay is (1-1)^2 = 0, trend force is 0, no fluctuation, no burst.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut asset = Asset::new(AssetId(1), "Helios Corp.", 8000.0, 0.0, 1.2, 0.0);

        update_asset(&mut asset, 1.0, &mut rng);

        assert_eq!(asset.price, 8000.0);
        assert_eq!(asset.last_change, 0.0);
        assert_eq!(asset.history, vec![8000.0, 8000.0]);
    }

    #[test]
    fn test_update_at_zero_stability_decays() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut asset = Asset::new(AssetId(1), "A", 1000.0, 0.0, 1.0, 0.0);

        // decay = 1.0, so the price multiplier bottoms out at 0 (burst aside).
        update_asset(&mut asset, 0.0, &mut rng);

        assert!(asset.price < 1000.0);
        assert!(asset.price >= 0.0);
    }

    #[test]
    fn test_price_never_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut asset = Asset::new(AssetId(1), "A", 50.0, 0.3, 0.2, -0.05);
        for i in 0..200 {
            let stability = 1.0 - (i as f64 / 200.0);
            update_asset(&mut asset, stability, &mut rng);
            assert!(asset.price >= 0.0, "price went negative at step {}", i);
        }
    }

    #[test]
    fn test_delist_latch_pins_price_and_keeps_appending() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut asset = Asset::new(AssetId(1), "A", 1.0, 0.0, 0.5, 0.0);

        // Heavy decay at stability 0 collapses a 1-lux asset through the floor.
        update_asset(&mut asset, 0.0, &mut rng);
        assert!(asset.delisted);
        assert_eq!(asset.price, 0.0);

        let len_before = asset.history.len();
        for _ in 0..5 {
            update_asset(&mut asset, 0.7, &mut rng);
            assert!(asset.delisted);
            assert_eq!(asset.price, 0.0);
            assert_eq!(asset.last_change, 0.0);
        }
        assert_eq!(asset.history.len(), len_before + 5);
    }

    #[test]
    fn test_delisted_update_consumes_no_randomness() {
        let mut asset = test_asset();
        asset.delisted = true;

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        update_asset(&mut asset, 0.5, &mut rng);

        // The stream is untouched iff a fresh generator still agrees.
        let mut fresh = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
    }

    #[test]
    fn test_zero_volatility_draws_no_fluctuation() {
        // With volatility 0, trend 0 and stability 1.0 the only rng use is the
        // trend walk, so two different seeds must produce the same price.
        let mut a = Asset::new(AssetId(1), "A", 500.0, 0.0, 1.0, 0.0);
        let mut b = a.clone();
        update_asset(&mut a, 1.0, &mut ChaCha8Rng::seed_from_u64(1));
        update_asset(&mut b, 1.0, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a.price, b.price);
        assert_eq!(a.price, 500.0);
    }

    #[test]
    fn test_trend_walk_stays_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut asset = Asset::new(AssetId(1), "A", 10_000.0, 0.01, 2.0, TREND_CLAMP);
        for _ in 0..500 {
            update_asset(&mut asset, 1.0, &mut rng);
            assert!(asset.trend.abs() <= TREND_CLAMP + 1e-12);
        }
    }

    #[test]
    fn test_history_grows_one_entry_per_update() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut asset = test_asset();
        for n in 1..=50 {
            update_asset(&mut asset, 0.9, &mut rng);
            assert_eq!(asset.history.len(), n + 1);
        }
    }

    #[test]
    fn test_snapshot_window_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut asset = test_asset();

        // Shorter than the window: everything is included.
        update_asset(&mut asset, 1.0, &mut rng);
        assert_eq!(asset.snapshot().history.len(), 2);

        for _ in 0..40 {
            update_asset(&mut asset, 1.0, &mut rng);
        }
        let snap = asset.snapshot();
        assert_eq!(snap.history.len(), SPARKLINE_WINDOW);
        assert_eq!(*snap.history.last().unwrap(), asset.price);
    }
}
