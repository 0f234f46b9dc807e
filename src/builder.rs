use crate::config::TradeConfig;
use crate::error::ProfitError;

/// Fluent construction of a [`TradeConfig`].
///
/// Values are stored raw and validated together in [`build`](Self::build),
/// so the first invalid field is reported regardless of call order.
#[derive(Clone, Copy, Debug, Default)]
pub struct TradeConfigBuilder {
    max_transactions: Option<i64>,
    cooldown_days: u32,
    fee: i64,
}

impl TradeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn max_transactions(mut self, k: i64) -> Self {
        self.max_transactions = Some(k);
        self
    }
    pub fn unbounded(mut self) -> Self {
        self.max_transactions = None;
        self
    }
    pub fn cooldown_days(mut self, days: u32) -> Self {
        self.cooldown_days = days;
        self
    }
    pub fn fee(mut self, fee: i64) -> Self {
        self.fee = fee;
        self
    }
    pub fn build(self) -> Result<TradeConfig, ProfitError> {
        TradeConfig::new(self.max_transactions, self.cooldown_days, self.fee)
    }
}
