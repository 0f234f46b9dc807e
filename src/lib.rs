//! Multi-transaction trading profit via rolling-frontier dynamic programming
//!
//! Given a sequence of prices, this crate computes the largest total profit
//! any sequence of non-overlapping buy/sell pairs can earn under three
//! constraints: a cap on the number of transactions, an optional one-day
//! cooldown after every sell, and an optional fee per transaction.
//!
//! ## Core idea
//! 1. Model each constraint set as a *layered* DP: one layer per day, a
//!    small frontier of "best profit per position state" per layer.
//! 2. Implement the [`LayeredProblem`] trait for that recurrence.
//! 3. Let [`ProfitEngine`] roll the frontier forward, keeping O(k) memory
//!    for a budget of `k` no matter how many days there are.
//!
//! Impossible states are a tagged [`Reach::Unreachable`] rather than an
//! `i64::MIN` sentinel, and profits accumulate in `i128`, so extreme prices
//! cannot wrap into plausible-looking answers.
//!
//! ## Quick start
//! ```
//! use trade_dp::{compute_max_profit, max_profit, TradeConfig};
//!
//! let prices = [3, 3, 5, 0, 0, 3, 1, 4];
//! assert_eq!(max_profit(&prices, Some(2), 0, 0), Ok(6));
//!
//! let config = TradeConfig::builder().fee(2).build().unwrap();
//! assert_eq!(compute_max_profit(&[1, 3, 2, 8, 4, 9], &config), 8);
//! ```
//!
//! ## Strategies
//! [`Strategy::select`] picks one of:
//! - a sum-of-rises fast path when the budget cannot bind and nothing is
//!   charged,
//! - a single-level cell machine for cooldown/fee with an unbounded budget,
//! - a per-level machine for a binding budget of `k < n / 2` transactions.
//!
//! The `problems` module holds the recurrences; they are exact and agree on
//! every input where more than one applies.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod optimizer;
pub mod problems;
pub mod strategy;
pub mod traits;
pub mod utils;
pub mod value;

pub use crate::builder::TradeConfigBuilder;
pub use crate::config::{Budget, Cooldown, TradeConfig};
pub use crate::engine::ProfitEngine;
pub use crate::error::{ConfigIssue, ProfitError};
pub use crate::optimizer::{compute_max_profit, max_profit, max_profit_batch};
pub use crate::strategy::Strategy;
pub use crate::traits::LayeredProblem;
pub use crate::value::{Price, Profit, Reach};
