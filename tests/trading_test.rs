//! Trade bookkeeping properties: exact debits/credits, rejection without
//! mutation, and position lifecycle.

use feld::constants::{START_LUX, SUPPLY_COST, SUPPLY_START};
use feld::market::{create_market, AssetId};
use feld::player::{trade, Player, TradeError};

#[test]
fn buying_debits_exactly_price_times_quantity() {
    let mut player = Player::new();
    let engine = create_market(Some(3));
    // MacroHard opens at 1111, comfortably affordable twice over.
    let snap = &engine.snapshot()[1];

    let qty = 2u64;
    let cost = trade::buy(&mut player, snap.id, snap.price, qty).unwrap();

    assert_eq!(cost, snap.price * qty as f64);
    assert_eq!(player.lux, START_LUX - cost);
    assert_eq!(player.owned(snap.id), qty);
}

#[test]
fn unaffordable_buy_is_rejected_without_mutation() {
    let mut player = Player::new();
    let err = trade::buy(&mut player, AssetId(5), 10_000.0, 3).unwrap_err();

    assert_eq!(
        err,
        TradeError::InsufficientFunds {
            needed: 30_000.0,
            available: START_LUX
        }
    );
    assert_eq!(player.lux, START_LUX);
    assert!(player.holdings.is_empty());
}

#[test]
fn selling_everything_removes_the_position_entry() {
    let mut player = Player::new();
    trade::buy(&mut player, AssetId(2), 100.0, 7).unwrap();
    trade::sell(&mut player, AssetId(2), 90.0, 7).unwrap();

    assert!(!player.holdings.contains_key(&AssetId(2)));
    assert_eq!(player.lux, START_LUX - 700.0 + 630.0);
}

#[test]
fn partial_sell_keeps_the_remainder() {
    let mut player = Player::new();
    trade::buy(&mut player, AssetId(2), 100.0, 7).unwrap();
    trade::sell(&mut player, AssetId(2), 100.0, 3).unwrap();
    assert_eq!(player.owned(AssetId(2)), 4);
}

#[test]
fn overselling_is_rejected_without_mutation() {
    let mut player = Player::new();
    trade::buy(&mut player, AssetId(2), 100.0, 2).unwrap();
    let lux_before = player.lux;

    let err = trade::sell(&mut player, AssetId(2), 100.0, 5).unwrap_err();
    assert_eq!(
        err,
        TradeError::InsufficientHoldings {
            requested: 5,
            owned: 2
        }
    );
    assert_eq!(player.lux, lux_before);
    assert_eq!(player.owned(AssetId(2)), 2);
}

#[test]
fn selling_an_asset_never_owned_is_rejected() {
    let mut player = Player::new();
    assert_eq!(
        trade::sell(&mut player, AssetId(9), 5.0, 1),
        Err(TradeError::InsufficientHoldings {
            requested: 1,
            owned: 0
        })
    );
}

#[test]
fn zero_quantity_trades_are_rejected() {
    let mut player = Player::new();
    assert_eq!(
        trade::buy(&mut player, AssetId(1), 100.0, 0),
        Err(TradeError::ZeroQuantity)
    );
    assert_eq!(
        trade::sell(&mut player, AssetId(1), 100.0, 0),
        Err(TradeError::ZeroQuantity)
    );
    assert_eq!(
        trade::buy_supplies(&mut player, 0),
        Err(TradeError::ZeroQuantity)
    );
}

#[test]
fn supply_purchases_use_the_fixed_price() {
    let mut player = Player::new();
    let cost = trade::buy_supplies(&mut player, 3).unwrap();
    assert_eq!(cost, SUPPLY_COST * 3.0);
    assert_eq!(player.supplies, SUPPLY_START + 3);
    assert_eq!(player.lux, START_LUX - cost);
}

#[test]
fn net_worth_marks_delisted_positions_to_zero() {
    let mut player = Player::new();
    let mut engine = create_market(Some(23));

    // Buy one share of everything we can afford a single share of.
    for snap in engine.snapshot() {
        if snap.price <= player.lux {
            trade::buy(&mut player, snap.id, snap.price, 1).unwrap();
        }
    }

    // Collapse the market completely.
    for _ in 0..engine.total_cycles() {
        engine.tick();
    }

    let snapshot = engine.snapshot();
    let worth = trade::net_worth(&player, &snapshot);
    let live_value: f64 = snapshot
        .iter()
        .filter(|s| !s.delisted)
        .map(|s| s.price * player.owned(s.id) as f64)
        .sum();

    assert!((worth - (player.lux + live_value)).abs() < 1e-9);
}
