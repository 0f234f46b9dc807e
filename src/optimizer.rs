//! Public entry points.

use crate::config::TradeConfig;
use crate::error::ProfitError;
use crate::strategy::Strategy;
use crate::value::{Price, Profit};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maximum profit for `prices` under raw, unvalidated parameters.
///
/// `max_transactions = None` means unbounded. The configuration is validated
/// before any price is read.
///
/// ```
/// use trade_dp::max_profit;
///
/// assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4], Some(1), 0, 0), Ok(5));
/// assert_eq!(max_profit(&[1, 2, 3, 0, 2], None, 1, 0), Ok(3));
/// assert!(max_profit(&[1, 2], Some(-1), 0, 0).is_err());
/// ```
pub fn max_profit(
    prices: &[Price],
    max_transactions: Option<i64>,
    cooldown_days: u32,
    fee: i64,
) -> Result<Profit, ProfitError> {
    let config = TradeConfig::new(max_transactions, cooldown_days, fee)?;
    Ok(compute_max_profit(prices, &config))
}

/// Maximum profit for `prices` under an already validated configuration.
/// Never negative: not trading is always allowed.
pub fn compute_max_profit(prices: &[Price], config: &TradeConfig) -> Profit {
    let strategy = Strategy::select(prices.len(), config);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        strategy = strategy.label(),
        days = prices.len(),
        budget = ?config.budget(),
        cooldown = config.cooldown().days(),
        fee = config.fee(),
        "selected profit strategy"
    );
    strategy.evaluate(prices, config)
}

/// Score many independent price sequences under one configuration.
///
/// Results are in input order. With the `parallel` feature the sequences are
/// spread over the rayon pool; each call shares nothing, so the output is
/// identical either way.
pub fn max_profit_batch<S>(series: &[S], config: &TradeConfig) -> Vec<Profit>
where
    S: AsRef<[Price]> + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("profit_batch", sequences = series.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    {
        series
            .par_iter()
            .map(|prices| compute_max_profit(prices.as_ref(), config))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        series
            .iter()
            .map(|prices| compute_max_profit(prices.as_ref(), config))
            .collect()
    }
}
