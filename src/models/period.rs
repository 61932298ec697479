//! Recurrence periods expressed as occurrences per year.
//!
//! A [`Period`] is the denominator used everywhere amounts are normalized:
//! 12 means monthly, 52 weekly, 1 yearly. It is never zero, so dividing by a
//! period cannot fail.

use std::fmt;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};

const fn known(n: u32) -> Period {
    match NonZeroU32::new(n) {
        Some(v) => Period(v),
        None => panic!("period constants must be non-zero"),
    }
}

/// How many times per year an amount recurs.
///
/// # Example
///
/// ```
/// use interview_finance::models::Period;
///
/// let monthly = Period::new(12).unwrap();
/// assert_eq!(monthly, Period::MONTHLY);
/// assert!(Period::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Period(NonZeroU32);

impl Period {
    /// Once a year.
    pub const YEARLY: Period = known(1);
    /// Once every three months.
    pub const QUARTERLY: Period = known(4);
    /// Once a month.
    pub const MONTHLY: Period = known(12);
    /// Twice a month.
    pub const TWICE_MONTHLY: Period = known(24);
    /// Once every two weeks.
    pub const BIWEEKLY: Period = known(26);
    /// Once a week.
    pub const WEEKLY: Period = known(52);

    /// Creates a period, rejecting zero.
    pub fn new(times_per_year: u32) -> FinanceResult<Self> {
        NonZeroU32::new(times_per_year)
            .map(Period)
            .ok_or(FinanceError::InvalidPeriod {
                period: times_per_year,
            })
    }

    /// Returns the raw number of occurrences per year.
    pub fn times_per_year(self) -> u32 {
        self.0.get()
    }

    /// Returns the period as a decimal for use in amount arithmetic.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0.get())
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::YEARLY
    }
}

impl TryFrom<u32> for Period {
    type Error = FinanceError;

    fn try_from(value: u32) -> FinanceResult<Self> {
        Period::new(value)
    }
}

impl From<Period> for u32 {
    fn from(period: Period) -> Self {
        period.times_per_year()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
