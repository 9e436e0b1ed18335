use crate::error::OptimizerError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A non-negative monetary value, at most [`Money::MAX`].
///
/// Wraps `rust_decimal::Decimal` so that order values, budgets and discounts
/// stay exact through the whole allocation. Negative or oversized values are
/// rejected on construction and on deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// Largest accepted amount. Keeps percentage maths and budget sums far
    /// from `Decimal`'s overflow range.
    pub const MAX: Decimal = dec!(1000000000000000000);

    pub fn new(value: Decimal) -> Result<Self, OptimizerError> {
        if value < Decimal::ZERO {
            Err(OptimizerError::ValidationError(format!(
                "Monetary value must not be negative, got {value}"
            )))
        } else if value > Self::MAX {
            Err(OptimizerError::ValidationError(format!(
                "Monetary value must not exceed {}, got {value}",
                Self::MAX
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtracts `rhs`, returning `None` when the result would be negative.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        if self >= rhs {
            Some(Self(self.0 - rhs.0))
        } else {
            None
        }
    }

    /// Rounds half away from zero to two decimal places, with the scale fixed at two.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }
}

impl TryFrom<Decimal> for Money {
    type Error = OptimizerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

// Callers must only subtract amounts they have already compared.
impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(self >= rhs, "money subtraction went negative");
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert!(*self >= rhs, "money subtraction went negative");
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A whole-number percentage between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, OptimizerError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(OptimizerError::ValidationError(format!(
                "Discount must be between 0 and 100, got {value}"
            )))
        }
    }

    /// Builds a percentage in const context, capping at 100.
    pub const fn saturating(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Applies the percentage to `amount`. Never exceeds `amount`.
    ///
    /// Amounts are capped at [`Money::MAX`], so the product cannot overflow;
    /// the checked path only matters for values built around that cap.
    pub fn of(&self, amount: Money) -> Money {
        amount
            .0
            .checked_mul(Decimal::from(self.0))
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .map(Money)
            .unwrap_or(amount)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Input files carry discounts either as integers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercent {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match RawPercent::deserialize(deserializer)? {
            RawPercent::Number(n) => n,
            RawPercent::Text(text) => text.trim().parse::<u64>().map_err(|e| {
                D::Error::custom(format!("invalid discount {text:?}: {e}"))
            })?,
        };
        u8::try_from(raw)
            .ok()
            .and_then(|value| Percent::new(value).ok())
            .ok_or_else(|| {
                D::Error::custom(format!("discount must be between 0 and 100, got {raw}"))
            })
    }
}
