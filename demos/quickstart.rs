//! Example: scoring one price series under several constraint sets.
//!
//! Run with:
//! `cargo run --example quickstart`

use trade_dp::{compute_max_profit, Strategy, TradeConfig};

fn main() {
    let prices = [3, 3, 5, 0, 0, 3, 1, 4, 2, 8, 1, 6];

    let configs = [
        ("one trade", TradeConfig::new(Some(1), 0, 0)),
        ("two trades", TradeConfig::new(Some(2), 0, 0)),
        ("unbounded", TradeConfig::new(None, 0, 0)),
        ("unbounded, cooldown", TradeConfig::new(None, 1, 0)),
        ("unbounded, fee 2", TradeConfig::new(None, 0, 2)),
        ("two trades, cooldown, fee 1", TradeConfig::new(Some(2), 1, 1)),
        ("negative fee", TradeConfig::new(None, 0, -1)),
    ];

    println!("prices: {prices:?}");
    for (label, config) in configs {
        match config {
            Ok(config) => {
                let strategy = Strategy::select(prices.len(), &config);
                let profit = compute_max_profit(&prices, &config);
                println!("{label:<28} strategy={:<9} profit={profit}", strategy.label());
            }
            Err(err) => println!("{label:<28} rejected: {err}"),
        }
    }
}
