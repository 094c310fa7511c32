use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Minor units per major unit for the two-digit currencies the engine handles.
pub const MINOR_PER_MAJOR: i64 = 100;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only currencies with two minor digits are supported by allocation.
    pub fn is_supported(&self) -> bool {
        minor_units_for(self.as_str()) == 2
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// A monetary amount stored as an exact count of minor units (cents).
///
/// The representable range is symmetric: `i64::MIN` cents is never produced by
/// parsing or checked arithmetic. Operators saturate at the range bounds; the
/// allocation and aggregation paths use the `checked_*` forms and report overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::in_range(self.0.checked_add(rhs.0))
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::in_range(self.0.checked_sub(rhs.0))
    }

    /// Sums `amounts`, or `None` when the total leaves the representable range.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }

    fn in_range(cents: Option<i64>) -> Option<Self> {
        cents.filter(|value| *value != i64::MIN).map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts a decimal major-unit value, rounding half away from zero to cents.
    pub fn from_decimal(value: Decimal) -> Result<Self, LedgerError> {
        let cents = value
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|scaled| scaled.to_i64());
        Self::in_range(cents)
            .ok_or_else(|| LedgerError::Invalid(format!("amount {value} is out of range")))
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Divides by `divisor`, rounding half away from zero. `divisor` must be non-zero.
    pub fn div_round(self, divisor: i64) -> Self {
        Self(round_div(self.0, divisor))
    }

    /// Applies a percentage, rounding half away from zero to cents.
    pub fn percent_of(self, percent: Decimal) -> Option<Self> {
        let scaled = Decimal::from(self.0)
            .checked_mul(percent)?
            .checked_div(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self::in_range(scaled.to_i64())
    }
}

/// Integer division rounding half away from zero.
fn round_div(numerator: i64, divisor: i64) -> i64 {
    let quotient = numerator / divisor;
    let remainder = numerator % divisor;
    if remainder.abs() * 2 >= divisor.abs() {
        let same_sign = (numerator < 0) == (divisor < 0);
        if same_sign {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_major = MINOR_PER_MAJOR as u64;
        write!(f, "{sign}{}.{:02}", abs / per_major, abs % per_major)
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|err| LedgerError::Invalid(format!("`{s}` is not an amount: {err}")))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.to_decimal()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
