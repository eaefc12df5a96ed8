//! Shared tuning constants for the colony economy and the market engine.
//!
//! All balance numbers live here. Change once, test everywhere.

// =============================================================================
// ECONOMY
// =============================================================================

/// Starting currency balance (lux).
pub const START_LUX: f64 = 10_000.0;

/// Price of the habitat that wins the run.
pub const HAB_COST: f64 = 50_000.0;

/// Price of one supply unit.
pub const SUPPLY_COST: f64 = 500.0;

/// Supply units at the start of a run.
pub const SUPPLY_START: u32 = 5;

/// Supply units consumed per advanced cycle.
pub const SUPPLY_CONSUMPTION: u32 = 1;

// =============================================================================
// MARKET LIFETIME
// =============================================================================

/// Total cycles before the market collapses outright.
pub const TOTAL_CYCLES: u32 = 100;

/// Scale factor inside the logarithmic stability curve.
/// stability(t) = 1 - log10(1 + STABILITY_LOG_SCALE * t), clamped to [0, 1].
/// With 9.0 the curve is exactly 1.0 at cycle 0 and exactly 0.0 at the final cycle.
pub const STABILITY_LOG_SCALE: f64 = 9.0;

// =============================================================================
// ASSET UPDATE LAW
// =============================================================================

/// Price at or below which an asset is delisted (pinned to 0, untradable).
pub const DELIST_FLOOR: f64 = 0.5;

/// Substitute resilience for roster rows with a non-positive value.
pub const DEFAULT_RESILIENCE: f64 = 1.0;

/// Starting trend bias is drawn uniformly from ±this at market creation.
pub const TREND_START_RANGE: f64 = 0.05;

/// Per-cycle trend random-walk step (uniform ±this).
pub const TREND_WALK_STEP: f64 = 0.005;

/// Trend bias never leaves ±this.
pub const TREND_CLAMP: f64 = 0.08;

/// Trend influence blend: force = trend * (BASE + STABILITY_WEIGHT * stability).
/// Full influence at stability 1.0, muted (but nonzero) in a chaotic market.
pub const TREND_BASE_WEIGHT: f64 = 0.3;
pub const TREND_STABILITY_WEIGHT: f64 = 0.7;

/// Below this stability, rare recovery bursts become possible.
pub const BURST_STABILITY_THRESHOLD: f64 = 0.5;

/// Per-cycle burst probability (when eligible).
pub const BURST_CHANCE: f64 = 0.04;

/// Burst magnitude range (fractional, positive).
pub const BURST_MIN: f64 = 0.05;
pub const BURST_MAX: f64 = 0.25;

// =============================================================================
// RENDERING
// =============================================================================

/// Trailing history points shown in a sparkline.
pub const SPARKLINE_WINDOW: usize = 10;

/// Histories whose value range is below this render as flat.
pub const FLAT_EPSILON: f64 = 1e-9;

/// Minimum absolute slope for a sparkline to count as trending at all.
pub const TREND_SLOPE_FLOOR: f64 = 0.1;
