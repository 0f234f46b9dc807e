//! Core trait for the layered trading recurrences.
//!
//! Every DP strategy in [`crate::problems`] is a *layered* program: one layer
//! per trading day, and a bounded-width frontier holding the best profit of
//! each position state at the end of that day. Implement [`LayeredProblem`]
//! for a struct that captures the instance (prices plus constraints) and let
//! [`ProfitEngine`](crate::engine::ProfitEngine) drive it.
//!
//! The engine only ever keeps one frontier alive, so implementations should
//! update it in place through [`LayeredProblem::advance`].

use crate::value::Profit;

/// A fixed trading-DP instance.
///
/// Semantics:
/// - There are `T = num_layers()` layers, one per price.
/// - `init_frontier()` describes the position before the first price.
/// - `advance(i, frontier)` turns the frontier at the end of day `i - 1`
///   into the frontier at the end of day `i`.
/// - After `T` advances, `extract_profit` reads the answer.
pub trait LayeredProblem {
    /// DP values for every state on one layer.
    type Frontier: Clone;

    /// Number of layers (trading days) `T`.
    fn num_layers(&self) -> usize;

    /// Frontier before day 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Apply day `layer` to `frontier` in place.
    ///
    /// Requirements:
    /// - every transition must read the value the source state held at the
    ///   end of the previous day, never a value already advanced to `layer`;
    /// - must run in O(W) extra space, where W is the frontier width.
    fn advance(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Pure form of [`advance`](Self::advance): returns the next frontier and
    /// leaves the input untouched.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier {
        let mut next = frontier.clone();
        self.advance(layer, &mut next);
        next
    }

    /// Best final profit readable from the frontier at layer `T`.
    ///
    /// Only non-holding states count: a position still open at the end has
    /// no realised profit.
    fn extract_profit(&self, frontier_t: &Self::Frontier) -> Profit;
}
