//! The fixed asset roster and market construction.

use super::engine::MarketEngine;
use super::types::{Asset, AssetId};
use crate::constants::{TOTAL_CYCLES, TREND_START_RANGE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Static roster entry: everything about an asset except its run-specific
/// starting trend, which is drawn from the engine's seeded stream.
struct AssetSpec {
    id: u32,
    name: &'static str,
    base_price: f64,
    volatility: f64,
    resilience: f64,
}

/// The eleven assets traded on the exchange. Membership is fixed for a run;
/// nothing is listed or removed after creation (delisting only pins prices).
const ROSTER: [AssetSpec; 11] = [
    AssetSpec { id: 1, name: "Helios Corp.", base_price: 8000.0, volatility: 0.02, resilience: 1.2 },
    AssetSpec { id: 2, name: "MacroHard", base_price: 1111.0, volatility: 0.01, resilience: 1.0 },
    AssetSpec { id: 3, name: "Michaelsoft Binbows", base_price: 2422.0, volatility: 0.05, resilience: 0.6 },
    AssetSpec { id: 4, name: "Ionic Compound Manufacturers", base_price: 3500.0, volatility: 0.03, resilience: 1.0 },
    AssetSpec { id: 5, name: "ClosedAI", base_price: 10_000.0, volatility: 0.30, resilience: 0.4 },
    AssetSpec { id: 6, name: "Photonic Semiconductors Limited", base_price: 4200.0, volatility: 0.06, resilience: 1.1 },
    AssetSpec { id: 7, name: "Super Earth Warbonds", base_price: 6969.0, volatility: 0.04, resilience: 1.4 },
    AssetSpec { id: 8, name: "Lithium Mining Associates", base_price: 5000.0, volatility: 0.20, resilience: 0.7 },
    AssetSpec { id: 9, name: "Tux", base_price: 10.0, volatility: 0.01, resilience: 2.5 },
    AssetSpec { id: 10, name: "Richard Bored Private Reserve", base_price: 1000.0, volatility: 0.10, resilience: 0.9 },
    AssetSpec { id: 11, name: "FICSIT, Inc.", base_price: 4242.0, volatility: 0.10, resilience: 0.8 },
];

/// Build the standard market. A fixed `seed` reproduces the entire run
/// bit-for-bit, starting trends included; `None` seeds from OS entropy.
pub fn create_market(seed: Option<u64>) -> MarketEngine {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let assets = ROSTER
        .iter()
        .map(|spec| {
            let trend = rng.gen_range(-TREND_START_RANGE..=TREND_START_RANGE);
            Asset::new(
                AssetId(spec.id),
                spec.name,
                spec.base_price,
                spec.volatility,
                spec.resilience,
                trend,
            )
        })
        .collect();

    MarketEngine::new(assets, TOTAL_CYCLES, rng)
}
