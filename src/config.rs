//! Validated trading constraints.
//!
//! A [`TradeConfig`] can only be obtained through [`TradeConfig::new`] or
//! [`TradeConfigBuilder`](crate::builder::TradeConfigBuilder), both of which
//! reject malformed values instead of clamping them.

use crate::builder::TradeConfigBuilder;
use crate::error::{ConfigIssue, ProfitError};
use crate::value::Price;

/// Upper bound on completed buy/sell pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Budget {
    Limited(usize),
    #[default]
    Unbounded,
}

impl Budget {
    /// Whether this budget can never bind on a sequence of `days` prices.
    ///
    /// At most `days / 2` disjoint pairs fit in `days` prices, so any larger
    /// budget behaves exactly like [`Budget::Unbounded`].
    #[inline]
    pub fn saturates(self, days: usize) -> bool {
        match self {
            Budget::Unbounded => true,
            Budget::Limited(k) => k >= days / 2,
        }
    }
}

/// Mandatory idle time after a sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cooldown {
    #[default]
    None,
    /// No buy on the day right after a sell.
    OneDay,
}

impl Cooldown {
    pub fn from_days(days: u32) -> Result<Self, ConfigIssue> {
        match days {
            0 => Ok(Cooldown::None),
            1 => Ok(Cooldown::OneDay),
            other => Err(ConfigIssue::UnsupportedCooldown(other)),
        }
    }

    #[inline]
    pub fn days(self) -> u32 {
        match self {
            Cooldown::None => 0,
            Cooldown::OneDay => 1,
        }
    }
}

/// Validated constraint set for one optimisation.
///
/// `Default` is the unconstrained market: unbounded budget, no cooldown,
/// no fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TradeConfig {
    budget: Budget,
    cooldown: Cooldown,
    fee: Price,
}

impl TradeConfig {
    /// Validate raw parameters. `None` for `max_transactions` means unbounded.
    pub fn new(
        max_transactions: Option<i64>,
        cooldown_days: u32,
        fee: i64,
    ) -> Result<Self, ProfitError> {
        let budget = match max_transactions {
            None => Budget::Unbounded,
            Some(k) if k < 0 => return Err(ConfigIssue::NegativeBudget(k).into()),
            // usize narrower than i64 only on 32-bit targets; any budget that
            // large already saturates every sequence that fits in memory.
            Some(k) => Budget::Limited(usize::try_from(k).unwrap_or(usize::MAX)),
        };
        let cooldown = Cooldown::from_days(cooldown_days)?;
        if fee < 0 {
            return Err(ConfigIssue::NegativeFee(fee).into());
        }
        Ok(Self {
            budget,
            cooldown,
            fee,
        })
    }

    /// Start a fluent builder with default (unconstrained) settings.
    pub fn builder() -> TradeConfigBuilder {
        TradeConfigBuilder::default()
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn cooldown(&self) -> Cooldown {
        self.cooldown
    }

    pub fn fee(&self) -> Price {
        self.fee
    }

    /// True when neither a cooldown nor a fee alters the transitions.
    #[inline]
    pub fn is_frictionless(&self) -> bool {
        self.cooldown == Cooldown::None && self.fee == 0
    }
}
