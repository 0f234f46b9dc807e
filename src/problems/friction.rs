//! Unbounded budget with a cooldown and/or a per-transaction fee.
//!
//! Once the budget no longer binds, the per-level table collapses to a
//! single [`Cells`] set that funds its own buys. Only the transitions differ
//! from the frictionless case:
//!
//! - fee: `holding = max(holding, flat - price - fee)`;
//! - one-day cooldown: a sell first lands in `cooling`, so the `flat` value
//!   a buy reads is the non-holding profit from two days earlier.

use crate::config::{Cooldown, TradeConfig};
use crate::problems::cells::Cells;
use crate::traits::LayeredProblem;
use crate::value::{Price, Profit};

#[derive(Clone, Debug)]
pub struct FrictionProblem<'a> {
    prices: &'a [Price],
    cooldown: Cooldown,
    fee: Price,
}

impl<'a> FrictionProblem<'a> {
    /// Takes cooldown and fee from `config`; its budget is treated as
    /// unbounded.
    pub fn new(prices: &'a [Price], config: &TradeConfig) -> Self {
        Self {
            prices,
            cooldown: config.cooldown(),
            fee: config.fee(),
        }
    }
}

impl LayeredProblem for FrictionProblem<'_> {
    type Frontier = Cells;

    fn num_layers(&self) -> usize {
        self.prices.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        Cells::START
    }

    fn advance(&self, layer: usize, frontier: &mut Self::Frontier) {
        let funded_by = frontier.flat;
        frontier.step(funded_by, self.prices[layer], self.fee, self.cooldown);
    }

    fn extract_profit(&self, frontier_t: &Self::Frontier) -> Profit {
        frontier_t.realised().value().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProfitEngine;

    fn run(prices: &[Price], cooldown_days: u32, fee: i64) -> Profit {
        let config = TradeConfig::new(None, cooldown_days, fee).unwrap();
        ProfitEngine::new(FrictionProblem::new(prices, &config)).run()
    }

    #[test]
    fn cooldown_skips_a_day() {
        assert_eq!(run(&[1, 2, 3, 0, 2], 1, 0), 3);
        assert_eq!(run(&[1], 1, 0), 0);
        assert_eq!(run(&[1, 2, 4], 1, 0), 3);
    }

    #[test]
    fn fee_is_charged_per_transaction() {
        assert_eq!(run(&[1, 3, 2, 8, 4, 9], 0, 2), 8);
        assert_eq!(run(&[1, 3, 7, 5, 10, 3], 0, 3), 6);
    }

    #[test]
    fn fee_can_wipe_out_every_trade() {
        assert_eq!(run(&[1, 3, 2, 4], 0, 5), 0);
    }

    #[test]
    fn without_friction_matches_sum_of_rises() {
        let prices = [7, 1, 5, 3, 6, 4];
        assert_eq!(run(&prices, 0, 0), crate::problems::greedy::sum_of_rises(&prices));
    }

    #[test]
    fn cooldown_and_fee_combine() {
        // Two trades (1->5, 1->5) need a buy the day after a sell; one long
        // trade pays the fee once.
        assert_eq!(run(&[1, 5, 1, 5], 1, 1), 3);
        assert_eq!(run(&[1, 5, 1, 5], 0, 1), 6);
    }
}
