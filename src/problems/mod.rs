//! Strategy implementations for the profit engine.
//!
//! - [`greedy`]   : unbounded budget, no friction; sum of every rise.
//! - [`bounded`]  : at most `k` transactions, one cell set per budget level.
//! - [`friction`] : unbounded budget with a cooldown and/or fee.
//!
//! [`cells`] holds the per-level position cells and transitions that
//! `bounded` and `friction` share.

pub mod bounded;
pub mod cells;
pub mod friction;
pub mod greedy;
