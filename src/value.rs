//! Price and profit scalars, plus the tagged cell value used in DP frontiers.
//!
//! Prices are `i64`; every accumulated quantity is widened to `i128` so that
//! no combination of prices and fees over a realistic sequence can wrap.
//! Impossible states are carried as [`Reach::Unreachable`] instead of an
//! arithmetic sentinel such as `i64::MIN`, so "negative infinity minus a
//! price" is never computed.

use std::fmt;

/// A single observed price. May be zero or negative.
pub type Price = i64;

/// Accumulated profit. Twice as wide as [`Price`].
pub type Profit = i128;

/// Value of one DP cell: either unreachable, or the best profit seen so far.
///
/// The derived ordering places `Unreachable` below every `Value`, which is
/// exactly the "negative infinity" semantics the recurrences need for `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reach {
    Unreachable,
    Value(Profit),
}

impl Reach {
    /// Flat position with nothing earned yet.
    pub const ZERO: Reach = Reach::Value(0);

    /// Shift a reachable value by `delta`; unreachable stays unreachable.
    ///
    /// # Panics
    /// Panics if the shifted value leaves the `i128` range. With `i64`
    /// inputs that needs more than 2^63 days of extreme prices, so hitting it
    /// means a transition is broken.
    #[inline]
    #[must_use]
    pub fn shifted(self, delta: Profit) -> Reach {
        match self {
            Reach::Unreachable => Reach::Unreachable,
            Reach::Value(v) => Reach::Value(
                v.checked_add(delta)
                    .expect("profit accumulator overflowed i128"),
            ),
        }
    }

    /// Value after selling one unit at `price`.
    #[inline]
    #[must_use]
    pub fn sell_at(self, price: Price) -> Reach {
        self.shifted(Profit::from(price))
    }

    /// Value after buying one unit at `price` and paying `fee`.
    #[inline]
    #[must_use]
    pub fn buy_at(self, price: Price, fee: Price) -> Reach {
        self.shifted(-(Profit::from(price) + Profit::from(fee)))
    }

    /// The profit held by a reachable cell.
    #[inline]
    pub fn value(self) -> Option<Profit> {
        match self {
            Reach::Unreachable => None,
            Reach::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reach::Unreachable => f.write_str("-inf"),
            Reach::Value(v) => write!(f, "{v}"),
        }
    }
}
