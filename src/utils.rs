//! Small numeric helpers shared by the engine and strategies.

use crate::value::{Price, Profit};

/// Block size for grouping `num_layers` layers: ⌈√T⌉, at least 1.
///
/// Used by [`crate::engine::ProfitEngine::new`] to size trace blocks.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Budget levels `k, k-1, …, 1`, the only order in which the rolling
/// bounded-k frontier may be updated in place.
///
/// Level `j` buys out of level `j - 1`; sweeping high to low guarantees that
/// read still sees the previous day's value.
#[inline]
pub fn budget_sweep(levels: usize) -> impl Iterator<Item = usize> {
    (1..=levels).rev()
}

/// Signed day-to-day move `to - from`, widened so it cannot wrap.
#[inline]
pub fn price_delta(from: Price, to: Price) -> Profit {
    Profit::from(to) - Profit::from(from)
}
