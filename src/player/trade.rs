//! Trade bookkeeping: buy, sell, supplies, valuation.
//!
//! Every operation either applies completely or rejects without touching any
//! state. Asset availability (unknown/delisted) is checked upstream by
//! [`crate::market::MarketEngine::find`]; these functions only see live
//! prices.

use super::types::Player;
use crate::constants::{SUPPLY_COST, SUPPLY_CONSUMPTION};
use crate::market::{AssetId, AssetSnapshot};
use std::fmt;

/// Why a trade was rejected. All recoverable; nothing is mutated on error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeError {
    /// Quantity of zero shares (or supply units).
    ZeroQuantity,
    /// The order costs more lux than the player has.
    InsufficientFunds { needed: f64, available: f64 },
    /// Selling more shares than the position holds.
    InsufficientHoldings { requested: u64, owned: u64 },
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuantity => write!(f, "quantity must be at least 1"),
            Self::InsufficientFunds { needed, available } => {
                write!(f, "need {:.2} lux, have {:.2}", needed, available)
            }
            Self::InsufficientHoldings { requested, owned } => {
                write!(f, "tried to sell {} shares, own {}", requested, owned)
            }
        }
    }
}

impl std::error::Error for TradeError {}

/// Buy `qty` shares at `price` each. Returns the total cost on success.
pub fn buy(player: &mut Player, id: AssetId, price: f64, qty: u64) -> Result<f64, TradeError> {
    if qty == 0 {
        return Err(TradeError::ZeroQuantity);
    }
    let cost = price * qty as f64;
    if cost > player.lux {
        return Err(TradeError::InsufficientFunds {
            needed: cost,
            available: player.lux,
        });
    }
    player.lux -= cost;
    *player.holdings.entry(id).or_insert(0) += qty;
    Ok(cost)
}

/// Sell `qty` shares at `price` each. Returns the proceeds on success.
/// Selling a position down to zero removes the holdings entry.
pub fn sell(player: &mut Player, id: AssetId, price: f64, qty: u64) -> Result<f64, TradeError> {
    if qty == 0 {
        return Err(TradeError::ZeroQuantity);
    }
    let owned = player.owned(id);
    if qty > owned {
        return Err(TradeError::InsufficientHoldings {
            requested: qty,
            owned,
        });
    }
    let proceeds = price * qty as f64;
    player.lux += proceeds;
    if qty == owned {
        player.holdings.remove(&id);
    } else if let Some(held) = player.holdings.get_mut(&id) {
        *held -= qty;
    }
    Ok(proceeds)
}

/// Buy `qty` supply units at the fixed supply price. Returns the total cost.
pub fn buy_supplies(player: &mut Player, qty: u32) -> Result<f64, TradeError> {
    if qty == 0 {
        return Err(TradeError::ZeroQuantity);
    }
    let cost = SUPPLY_COST * qty as f64;
    if cost > player.lux {
        return Err(TradeError::InsufficientFunds {
            needed: cost,
            available: player.lux,
        });
    }
    player.lux -= cost;
    player.supplies += qty;
    Ok(cost)
}

/// Consume one cycle's worth of supplies. Sets `alive = false` when they run
/// out.
pub fn consume_supplies(player: &mut Player) {
    player.supplies = player.supplies.saturating_sub(SUPPLY_CONSUMPTION);
    if player.supplies == 0 {
        player.alive = false;
    }
}

/// Lux plus holdings marked to the given snapshot. Delisted assets price at 0
/// in the snapshot already, so they contribute nothing.
pub fn net_worth(player: &Player, snapshot: &[AssetSnapshot]) -> f64 {
    let positions: f64 = snapshot
        .iter()
        .map(|s| s.price * player.owned(s.id) as f64)
        .sum();
    player.lux + positions
}
