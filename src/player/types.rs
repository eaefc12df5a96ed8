//! Player (colonist) state.

use crate::constants::{START_LUX, SUPPLY_START};
use crate::market::AssetId;
use std::collections::BTreeMap;

/// The colonist: currency, positions, and life support.
///
/// Holdings never contain zero-quantity entries; selling a position down to
/// nothing removes it. The ordered map keeps portfolio rendering stable.
#[derive(Debug, Clone)]
pub struct Player {
    /// Currency balance in lux.
    pub lux: f64,
    /// Owned shares per asset id. Quantity is always > 0.
    pub holdings: BTreeMap<AssetId, u64>,
    /// Supply units left. One is consumed per advanced cycle.
    pub supplies: u32,
    /// False once supplies run out; the run is over.
    pub alive: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            lux: START_LUX,
            holdings: BTreeMap::new(),
            supplies: SUPPLY_START,
            alive: true,
        }
    }

    /// Shares owned of one asset (0 when no position).
    pub fn owned(&self, id: AssetId) -> u64 {
        self.holdings.get(&id).copied().unwrap_or(0)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
