//! At-most-`k`-transactions recurrence as a layered problem.
//!
//! The frontier keeps one [`Cells`] set per budget level `j ∈ 0..=k`, where
//! level `j` means "at most `j` buys so far". A buy moves from level `j - 1`
//! to level `j`; a sell stays on the level it was bought on. Level 0 can
//! never hold and stays at [`Cells::START`] forever.
//!
//! Per day the levels are updated in place from `k` down to 1
//! ([`budget_sweep`]). Level `j` reads `flat[j - 1]`, which at that point has
//! not been touched yet and therefore still holds yesterday's value.
//!
//! A cooldown and/or fee configured on the [`TradeConfig`] is applied inside
//! every level with the same transition substitutions the unbounded
//! [`friction`](crate::problems::friction) problem uses.

use crate::config::{Cooldown, TradeConfig};
use crate::problems::cells::Cells;
use crate::traits::LayeredProblem;
use crate::utils::budget_sweep;
use crate::value::{Price, Profit};

/// Bounded-budget DP instance.
#[derive(Clone, Debug)]
pub struct BoundedProblem<'a> {
    prices: &'a [Price],
    levels: usize,
    cooldown: Cooldown,
    fee: Price,
}

/// Cells for every budget level on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetFrontier {
    /// Indexed by budget level; `levels[0]` is the no-trade level.
    pub levels: Vec<Cells>,
}

impl BudgetFrontier {
    /// Cells at budget level `j`.
    pub fn level(&self, j: usize) -> &Cells {
        &self.levels[j]
    }
}

impl<'a> BoundedProblem<'a> {
    /// `levels` is the transaction budget `k`; cooldown and fee come from
    /// `config`, whose own budget is ignored here.
    pub fn new(prices: &'a [Price], levels: usize, config: &TradeConfig) -> Self {
        Self {
            prices,
            levels,
            cooldown: config.cooldown(),
            fee: config.fee(),
        }
    }

    /// Plain at-most-`k` problem without cooldown or fee.
    pub fn frictionless(prices: &'a [Price], levels: usize) -> Self {
        Self::new(prices, levels, &TradeConfig::default())
    }
}

impl LayeredProblem for BoundedProblem<'_> {
    type Frontier = BudgetFrontier;

    fn num_layers(&self) -> usize {
        self.prices.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        BudgetFrontier {
            levels: vec![Cells::START; self.levels + 1],
        }
    }

    fn advance(&self, layer: usize, frontier: &mut Self::Frontier) {
        let price = self.prices[layer];
        let cells = &mut frontier.levels;
        for j in budget_sweep(self.levels) {
            let funded_by = cells[j - 1].flat;
            cells[j].step(funded_by, price, self.fee, self.cooldown);
        }
    }

    fn extract_profit(&self, frontier_t: &Self::Frontier) -> Profit {
        frontier_t.levels[self.levels].realised().value().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProfitEngine;
    use crate::value::Reach;

    fn run(prices: &[Price], k: usize) -> Profit {
        ProfitEngine::new(BoundedProblem::frictionless(prices, k)).run()
    }

    #[test]
    fn single_transaction() {
        assert_eq!(run(&[7, 1, 5, 3, 6, 4], 1), 5);
        assert_eq!(run(&[7, 6, 4, 3, 1], 1), 0);
    }

    #[test]
    fn two_transactions() {
        assert_eq!(run(&[3, 3, 5, 0, 0, 3, 1, 4], 2), 6);
        assert_eq!(run(&[1, 2, 3, 4, 5], 2), 4);
        assert_eq!(run(&[3, 2, 6, 5, 0, 3], 2), 7);
    }

    #[test]
    fn zero_budget_never_trades() {
        assert_eq!(run(&[1, 100], 0), 0);
        let problem = BoundedProblem::frictionless(&[1, 100], 0);
        assert_eq!(problem.init_frontier().levels.len(), 1);
    }

    #[test]
    fn level_zero_never_holds() {
        let prices = [5, 1, 9, 2, 8];
        let problem = BoundedProblem::frictionless(&prices, 2);
        let mut frontier = problem.init_frontier();
        for layer in 0..prices.len() {
            problem.advance(layer, &mut frontier);
            assert_eq!(*frontier.level(0), Cells::START);
        }
    }

    #[test]
    fn in_place_advance_matches_pure_step() {
        let prices = [2, 9, 1, 7, 3, 8, 0, 6];
        let config = TradeConfig::new(Some(3), 1, 1).unwrap();
        let problem = BoundedProblem::new(&prices, 3, &config);
        let mut rolling = problem.init_frontier();
        for layer in 0..prices.len() {
            let expected = pure_step(&problem, layer, &rolling);
            problem.advance(layer, &mut rolling);
            assert_eq!(rolling, expected, "diverged on day {layer}");
        }
    }

    /// Double-buffered reference: every read comes from `prev`.
    fn pure_step(problem: &BoundedProblem<'_>, layer: usize, prev: &BudgetFrontier) -> BudgetFrontier {
        let price = problem.prices[layer];
        let mut next = prev.clone();
        for j in 1..=problem.levels {
            let mut cells = prev.levels[j];
            cells.step(prev.levels[j - 1].flat, price, problem.fee, problem.cooldown);
            next.levels[j] = cells;
        }
        next
    }

    #[test]
    fn ascending_sweep_leaks_same_day_values() {
        // Updating low levels first lets level 2 buy with money level 1
        // only earned by selling today; with a one-day cooldown that is a
        // trade the rules forbid.
        let prices = [1, 5, 1, 5];
        let config = TradeConfig::new(Some(2), 1, 0).unwrap();
        let problem = BoundedProblem::new(&prices, 2, &config);
        let mut leaky = problem.init_frontier();
        for &price in &prices {
            for j in 1..=2 {
                let funded_by = leaky.levels[j - 1].flat;
                leaky.levels[j].step(funded_by, price, 0, Cooldown::OneDay);
            }
        }
        let honest = ProfitEngine::new(problem.clone()).run();
        assert_eq!(honest, 4);
        // Sell at 5 on day 1, illegally rebuy at 1 on day 2, sell at 5 again.
        assert_eq!(leaky.levels[2].realised(), Reach::Value(8));
    }
}
