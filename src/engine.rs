//! Generic rolling-frontier DP engine.
//!
//! The engine walks the layers of a [`LayeredProblem`] left to right while
//! keeping exactly one frontier alive, so memory is O(W) regardless of the
//! number of trading days. Layers are processed in blocks of ≈√T. Blocks
//! carry no state of their own: with the `tracing` feature each one gets a
//! span and a progress event reporting the best realised profit so far.

use crate::traits::LayeredProblem;
use crate::utils::default_block_size;
use crate::value::Profit;

/// Rolling-frontier engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use trade_dp::{problems::bounded::BoundedProblem, ProfitEngine, TradeConfig};
///
/// let prices = [3, 3, 5, 0, 0, 3, 1, 4];
/// let config = TradeConfig::new(Some(2), 0, 0).unwrap();
/// let engine = ProfitEngine::new(BoundedProblem::new(&prices, 2, &config));
/// assert_eq!(engine.run(), 6);
/// ```
pub struct ProfitEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> ProfitEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let b = default_block_size(t).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Run every layer and return the optimal profit.
    pub fn run(&self) -> Profit {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "profit_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = if t == 0 { 0 } else { t.div_ceil(b) };

        let mut frontier = self.problem.init_frontier();
        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("advance_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.advance_range(start, end, &mut frontier);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                days = end,
                profit_so_far = %self.problem.extract_profit(&frontier),
                "block finished"
            );
        }

        let profit = self.problem.extract_profit(&frontier);
        #[cfg(feature = "tracing")]
        tracing::debug!(profit = %profit, blocks = num_blocks, "profit run finished");
        profit
    }

    fn advance_range(&self, start: usize, end: usize, frontier: &mut P::Frontier) {
        for layer in start..end {
            self.problem.advance(layer, frontier);
        }
    }
}
