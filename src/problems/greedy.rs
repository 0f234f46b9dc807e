//! Unbounded, frictionless fast path.
//!
//! With no limit on transactions and nothing charged per trade, every
//! positive day-to-day move can be captured by holding across it, and no
//! negative move ever has to be. The optimum is the sum of the rises.

use crate::utils::price_delta;
use crate::value::{Price, Profit};

/// Sum of every positive `prices[i + 1] - prices[i]`. Zero for fewer than
/// two prices.
pub fn sum_of_rises(prices: &[Price]) -> Profit {
    prices
        .windows(2)
        .map(|w| price_delta(w[0], w[1]))
        .filter(|&d| d > 0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sequences_earn_nothing() {
        assert_eq!(sum_of_rises(&[]), 0);
        assert_eq!(sum_of_rises(&[42]), 0);
    }

    #[test]
    fn collects_only_rises() {
        assert_eq!(sum_of_rises(&[7, 1, 5, 3, 6, 4]), 7);
        assert_eq!(sum_of_rises(&[1, 2, 3, 4, 5]), 4);
        assert_eq!(sum_of_rises(&[5, 4, 3, 2, 1]), 0);
    }

    #[test]
    fn handles_negative_and_extreme_prices() {
        assert_eq!(sum_of_rises(&[-3, -1, -4, 0]), 6);
        let swing = [Price::MIN, Price::MAX, Price::MIN, Price::MAX];
        let one = Profit::from(Price::MAX) - Profit::from(Price::MIN);
        assert_eq!(sum_of_rises(&swing), 2 * one);
    }
}
