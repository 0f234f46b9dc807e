use proptest::prelude::*;
use trade_dp::{compute_max_profit, problems::greedy::sum_of_rises, Price, Profit, TradeConfig};

fn profit(prices: &[Price], k: Option<i64>, cooldown: u32, fee: i64) -> Profit {
    compute_max_profit(prices, &TradeConfig::new(k, cooldown, fee).unwrap())
}

/// Best `prices[j] - prices[i]` over `i < j`, floored at zero.
fn single_trade(prices: &[Price]) -> Profit {
    let mut best = 0;
    let mut lowest: Option<Profit> = None;
    for &p in prices {
        let p = Profit::from(p);
        if let Some(low) = lowest {
            best = best.max(p - low);
        }
        lowest = Some(lowest.map_or(p, |low| low.min(p)));
    }
    best
}

fn prices_strategy() -> impl Strategy<Value = Vec<Price>> {
    prop::collection::vec(-1_000i64..1_000, 0..40)
}

proptest! {
    #[test]
    fn one_transaction_is_best_single_trade(prices in prices_strategy()) {
        prop_assert_eq!(profit(&prices, Some(1), 0, 0), single_trade(&prices));
    }

    #[test]
    fn unbounded_is_sum_of_rises(prices in prices_strategy()) {
        let rises: Profit = prices
            .windows(2)
            .map(|w| (Profit::from(w[1]) - Profit::from(w[0])).max(0))
            .sum();
        prop_assert_eq!(profit(&prices, None, 0, 0), rises);
        prop_assert_eq!(sum_of_rises(&prices), rises);
    }

    #[test]
    fn profit_never_drops_with_more_budget(
        prices in prices_strategy(),
        cooldown in 0u32..2,
        fee in 0i64..20,
    ) {
        let mut prev = 0;
        for k in 0..=(prices.len() as i64 / 2 + 2) {
            let current = profit(&prices, Some(k), cooldown, fee);
            prop_assert!(current >= prev, "k={} gave {} < {}", k, current, prev);
            prev = current;
        }
        prop_assert_eq!(prev, profit(&prices, None, cooldown, fee));
    }

    #[test]
    fn profit_never_rises_with_fee(
        prices in prices_strategy(),
        k in prop::option::of(0i64..6),
        cooldown in 0u32..2,
    ) {
        let mut prev = profit(&prices, k, cooldown, 0);
        for fee in 1..30 {
            let current = profit(&prices, k, cooldown, fee);
            prop_assert!(current <= prev, "fee={} gave {} > {}", fee, current, prev);
            prev = current;
        }
    }

    #[test]
    fn cooldown_never_helps(prices in prices_strategy(), k in prop::option::of(0i64..6), fee in 0i64..10) {
        prop_assert!(profit(&prices, k, 1, fee) <= profit(&prices, k, 0, fee));
    }

    #[test]
    fn large_budget_saturates(prices in prices_strategy(), extra in 0i64..4) {
        let k = (prices.len() as i64 + 1) / 2 + extra;
        prop_assert_eq!(profit(&prices, Some(k), 0, 0), profit(&prices, None, 0, 0));
    }

    #[test]
    fn profit_is_never_negative(
        prices in prices_strategy(),
        k in prop::option::of(0i64..6),
        cooldown in 0u32..2,
        fee in 0i64..50,
    ) {
        prop_assert!(profit(&prices, k, cooldown, fee) >= 0);
    }
}
