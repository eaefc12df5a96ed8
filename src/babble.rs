//! Exchange-floor flavor text, rotated by market mood.

/// Lines for a calm market (stability >= 0.66).
const CALM_LINES: [&str; 8] = [
    "Ticker lattice nominal. Trade while it lasts.",
    "Arbitrage drones report green across the board.",
    "Liquidity reservoirs holding at capacity.",
    "Exchange uptime 99.97%. The other 0.03% is classified.",
    "Clearing house hums along. Suspiciously well.",
    "Brokers calm. Coffee supplies stable.",
    "Index beacons steady on all eleven listings.",
    "Settlement queue empty. Enjoy the quiet.",
];

/// Lines for a wobbling market (0.33 <= stability < 0.66).
const WOBBLING_LINES: [&str; 8] = [
    "Volatility dampeners running hot.",
    "Hedge subroutines requesting backup.",
    "Margin klaxons test-firing. Probably a test.",
    "Liquidity reservoirs down to the sediment.",
    "Brokers sweating through their pressure suits.",
    "Settlement queue backing up past the airlock.",
    "Index beacons flickering. Engineering shrugs.",
    "Someone shorted the oxygen futures again.",
];

/// Lines for a critical market (stability < 0.33).
const CRITICAL_LINES: [&str; 8] = [
    "Clearing house on fire. Literally, this time.",
    "Sell orders outnumber atoms in the habitat ring.",
    "Ticker lattice shedding glyphs. Avert your eyes.",
    "Brokers evacuating to the escape pods.",
    "Margin calls echoing down empty corridors.",
    "The index beacon is a smoking crater.",
    "Liquidity not found. Please contact your administrator.",
    "Entropy wins again. It always does.",
];

/// Pick the flavor line for the current cycle and stability band.
/// Deterministic in the cycle index so the line only changes when time does.
pub fn line(stability: f64, cycle: u32) -> &'static str {
    let bank: &[&'static str] = if stability >= 0.66 {
        &CALM_LINES
    } else if stability >= 0.33 {
        &WOBBLING_LINES
    } else {
        &CRITICAL_LINES
    };
    bank[(cycle as usize).wrapping_mul(7) % bank.len()]
}
