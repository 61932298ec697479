//! The recurring-amount fields shared by incomes, jobs and assets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{normalize, normalize_hourly};

use super::Period;

/// A value paid `period` times a year, either fixed or computed from an
/// hourly rate.
///
/// `V` is the type of the fixed value: [`Decimal`] for incomes and jobs,
/// `Option<Decimal>` for assets whose value may be unanswered. Records embed
/// this with `#[serde(flatten)]`, so the fields sit at the record's top level.
///
/// # Example
///
/// ```
/// use interview_finance::models::{Period, PeriodicValue};
/// use rust_decimal::Decimal;
///
/// let shifts: PeriodicValue = PeriodicValue::hourly(Decimal::new(15, 0), Decimal::new(40, 0), Period::WEEKLY);
/// assert_eq!(shifts.amount(Period::MONTHLY), Decimal::new(2600, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodicValue<V = Decimal> {
    /// Fixed amount each period. Ignored when `is_hourly` is set.
    #[serde(default)]
    pub value: V,
    /// Occurrences per year.
    #[serde(default)]
    pub period: Period,
    /// Whether the amount is computed from an hourly rate.
    #[serde(default)]
    pub is_hourly: bool,
    /// Pay per hour, for hourly amounts.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Hours worked each period, for hourly amounts.
    #[serde(default)]
    pub hours_per_period: Decimal,
}

impl<V: Default> PeriodicValue<V> {
    /// An amount of `value` each period.
    pub fn fixed(value: V, period: Period) -> Self {
        Self {
            value,
            period,
            ..Self::default()
        }
    }

    /// An amount of `hourly_rate × hours_per_period` each period.
    pub fn hourly(hourly_rate: Decimal, hours_per_period: Decimal, period: Period) -> Self {
        Self {
            period,
            is_hourly: true,
            hourly_rate,
            hours_per_period,
            ..Self::default()
        }
    }
}

impl<V> PeriodicValue<V> {
    /// Hours worked over `period_to_use`.
    pub fn normalized_hours(&self, period_to_use: Period) -> Decimal {
        normalize(self.hours_per_period, self.period, period_to_use)
    }

    fn scale(&self, value: Decimal, period_to_use: Period) -> Decimal {
        if self.is_hourly {
            normalize_hourly(
                self.hourly_rate,
                self.hours_per_period,
                self.period,
                period_to_use,
            )
        } else {
            normalize(value, self.period, period_to_use)
        }
    }
}

impl PeriodicValue<Decimal> {
    /// The amount over `period_to_use`.
    pub fn amount(&self, period_to_use: Period) -> Decimal {
        self.scale(self.value, period_to_use)
    }
}

impl PeriodicValue<Option<Decimal>> {
    /// The amount over `period_to_use`, or zero while the value is unanswered.
    pub fn amount(&self, period_to_use: Period) -> Decimal {
        self.value
            .map_or(Decimal::ZERO, |value| self.scale(value, period_to_use))
    }
}
