//! Position cells for one budget level and their daily transitions.

use crate::config::Cooldown;
use crate::value::{Price, Reach};

/// Best profit per stance at the end of a day, for one budget level.
///
/// - `flat`: not holding and free to buy.
/// - `cooling`: sold today; only reachable when a cooldown is configured,
///   and becomes `flat` tomorrow.
/// - `holding`: one unit bought and not yet sold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cells {
    pub flat: Reach,
    pub cooling: Reach,
    pub holding: Reach,
}

impl Cells {
    /// Before day 0: nothing earned, nothing held.
    pub const START: Cells = Cells {
        flat: Reach::ZERO,
        cooling: Reach::Unreachable,
        holding: Reach::Unreachable,
    };

    /// Advance this level by one day at `price`.
    ///
    /// `buy_source` is the previous day's `flat` value of the level a buy is
    /// funded from: the level below for a bounded budget, this same level
    /// when the budget is unbounded. With a one-day cooldown that value is
    /// the non-holding profit from two days ago, because a sell lands in
    /// `cooling` first.
    #[inline]
    pub fn step(&mut self, buy_source: Reach, price: Price, fee: Price, cooldown: Cooldown) {
        let Cells {
            flat,
            cooling,
            holding,
        } = *self;
        match cooldown {
            Cooldown::None => {
                self.flat = flat.max(holding.sell_at(price));
            }
            Cooldown::OneDay => {
                self.flat = flat.max(cooling);
                self.cooling = holding.sell_at(price);
            }
        }
        self.holding = holding.max(buy_source.buy_at(price, fee));
    }

    /// Best profit with no open position.
    #[inline]
    pub fn realised(&self) -> Reach {
        self.flat.max(self.cooling)
    }
}
