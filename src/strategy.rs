//! Strategy selection.
//!
//! All strategies answer the same question and agree on every input; the
//! choice only decides how much state has to be carried per day.

use crate::config::{Budget, TradeConfig};
use crate::engine::ProfitEngine;
use crate::problems::{bounded::BoundedProblem, friction::FrictionProblem, greedy::sum_of_rises};
use crate::value::{Price, Profit};

/// Concrete evaluation plan for one price sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Fewer than two prices, or a zero budget: nothing can be traded.
    Idle,
    /// Budget cannot bind and nothing is charged: sum of rises.
    Greedy,
    /// Budget cannot bind, but a cooldown or fee changes the transitions.
    Friction,
    /// Budget binds: one cell set per budget level.
    Bounded { levels: usize },
}

impl Strategy {
    /// Pick the cheapest exact strategy for `days` prices under `config`.
    pub fn select(days: usize, config: &TradeConfig) -> Self {
        let budget = config.budget();
        if days <= 1 || budget == Budget::Limited(0) {
            return Strategy::Idle;
        }
        match budget {
            Budget::Limited(levels) if !budget.saturates(days) => Strategy::Bounded { levels },
            _ if config.is_frictionless() => Strategy::Greedy,
            _ => Strategy::Friction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Idle => "idle",
            Strategy::Greedy => "greedy",
            Strategy::Friction => "friction",
            Strategy::Bounded { .. } => "bounded",
        }
    }

    /// Run this strategy. `config` supplies cooldown and fee.
    pub fn evaluate(self, prices: &[Price], config: &TradeConfig) -> Profit {
        match self {
            Strategy::Idle => 0,
            Strategy::Greedy => sum_of_rises(prices),
            Strategy::Friction => ProfitEngine::new(FrictionProblem::new(prices, config)).run(),
            Strategy::Bounded { levels } => {
                ProfitEngine::new(BoundedProblem::new(prices, levels, config)).run()
            }
        }
    }
}
