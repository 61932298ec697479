//! Job model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::normalize;

use super::{Period, PeriodicRecord, PeriodicValue, Tagged};

/// A job paid either per pay period or by the hour.
///
/// Non-hourly jobs may record both a gross `value` and a `net` take-home
/// amount per period.
///
/// # Example
///
/// ```
/// use interview_finance::models::{Job, Period};
/// use rust_decimal::Decimal;
///
/// let mut job = Job::salaried("wages", Decimal::new(3000, 0), Period::MONTHLY);
/// job.net = Decimal::new(2400, 0);
/// assert_eq!(job.gross_amount(Period::YEARLY), Decimal::new(36000, 0));
/// assert_eq!(job.net_amount(Period::YEARLY), Decimal::new(28800, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    /// Income type code, usually `"wages"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who holds the job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Gross pay and recurrence.
    #[serde(flatten)]
    pub periodic: PeriodicValue,
    /// Net pay each period after deductions.
    #[serde(default)]
    pub net: Decimal,
    /// Employer name.
    #[serde(default)]
    pub employer: String,
    /// Employer street address.
    #[serde(default)]
    pub employer_address: String,
    /// Employer phone number.
    #[serde(default)]
    pub employer_phone: String,
}

impl Job {
    /// Creates a job paid a fixed gross amount each period.
    pub fn salaried(kind: impl Into<String>, value: Decimal, period: Period) -> Self {
        Self {
            kind: Some(kind.into()),
            periodic: PeriodicValue::fixed(value, period),
            ..Self::default()
        }
    }

    /// Creates a job paid by the hour.
    pub fn hourly(
        kind: impl Into<String>,
        hourly_rate: Decimal,
        hours_per_period: Decimal,
        period: Period,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            periodic: PeriodicValue::hourly(hourly_rate, hours_per_period, period),
            ..Self::default()
        }
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Returns the amount earned over `period_to_use`.
    pub fn amount(&self, period_to_use: Period) -> Decimal {
        self.periodic.amount(period_to_use)
    }

    /// Gross pay over `period_to_use`. Same as [`Job::amount`].
    pub fn gross_amount(&self, period_to_use: Period) -> Decimal {
        self.amount(period_to_use)
    }

    /// Net pay over `period_to_use`, scaled from `net`.
    pub fn net_amount(&self, period_to_use: Period) -> Decimal {
        normalize(self.net, self.periodic.period, period_to_use)
    }

    /// Hours worked over `period_to_use`.
    pub fn normalized_hours(&self, period_to_use: Period) -> Decimal {
        self.periodic.normalized_hours(period_to_use)
    }

    /// Employer contact line for forms: `"name: address, phone"`.
    pub fn name_address_phone(&self) -> String {
        format!(
            "{}: {}, {}",
            self.employer, self.employer_address, self.employer_phone
        )
    }
}

impl Tagged for Job {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl PeriodicRecord for Job {
    fn period(&self) -> Period {
        self.periodic.period
    }

    fn value(&self) -> Option<Decimal> {
        Some(self.periodic.value)
    }

    fn amount(&self, period_to_use: Period) -> Decimal {
        Job::amount(self, period_to_use)
    }
}
