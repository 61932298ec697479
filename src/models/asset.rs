//! Asset model.
//!
//! Assets reuse the periodic income arithmetic (rental income from real
//! estate, interest on savings) but the value may not have been answered yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Period, PeriodicRecord, PeriodicValue, Tagged};

/// Something the household owns, optionally producing periodic income.
///
/// An asset with no `value` reports an amount of zero.
///
/// # Example
///
/// ```
/// use interview_finance::models::{Asset, Period};
/// use rust_decimal::Decimal;
///
/// let car = Asset::of_kind("vehicle");
/// assert_eq!(car.amount(Period::MONTHLY), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Asset type code (e.g. `"savings"`, `"real estate"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who owns the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Income produced and its recurrence. The value may be unanswered.
    #[serde(flatten)]
    pub periodic: PeriodicValue<Option<Decimal>>,
    /// Current market value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<Decimal>,
    /// Outstanding balance (e.g. a mortgage against real estate).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

impl Asset {
    /// Creates an asset of the given type with nothing else answered.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Creates an asset producing `value` each period.
    pub fn new(kind: impl Into<String>, value: Decimal, period: Period) -> Self {
        Self {
            kind: Some(kind.into()),
            periodic: PeriodicValue::fixed(Some(value), period),
            ..Self::default()
        }
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Returns the amount over `period_to_use`, or zero if no value is set.
    pub fn amount(&self, period_to_use: Period) -> Decimal {
        self.periodic.amount(period_to_use)
    }
}

impl Tagged for Asset {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl PeriodicRecord for Asset {
    fn period(&self) -> Period {
        self.periodic.period
    }

    fn value(&self) -> Option<Decimal> {
        self.periodic.value
    }

    fn amount(&self, period_to_use: Period) -> Decimal {
        Asset::amount(self, period_to_use)
    }

    fn market_value(&self) -> Option<Decimal> {
        self.market_value
    }

    fn balance(&self) -> Option<Decimal> {
        self.balance
    }
}
