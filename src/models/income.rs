//! Income model.
//!
//! An [`Income`] is a recurring amount, either a fixed value per period or an
//! hourly rate times hours worked per period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Period, PeriodicRecord, PeriodicValue, Tagged};

/// A source of recurring income.
///
/// # Example
///
/// ```
/// use interview_finance::models::{Income, Period};
/// use rust_decimal::Decimal;
///
/// let pension = Income::new("pension", Decimal::new(1200, 0), Period::MONTHLY);
/// assert_eq!(pension.amount(Period::YEARLY), Decimal::new(14400, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Income {
    /// Income type code (e.g. `"wages"`, `"SSI"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who receives the income.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Amount and recurrence.
    #[serde(flatten)]
    pub periodic: PeriodicValue,
}

impl Income {
    /// Creates a fixed-value income of the given type.
    pub fn new(kind: impl Into<String>, value: Decimal, period: Period) -> Self {
        Self {
            kind: Some(kind.into()),
            owner: None,
            periodic: PeriodicValue::fixed(value, period),
        }
    }

    /// Creates an hourly income of the given type.
    pub fn hourly(
        kind: impl Into<String>,
        hourly_rate: Decimal,
        hours_per_period: Decimal,
        period: Period,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            owner: None,
            periodic: PeriodicValue::hourly(hourly_rate, hours_per_period, period),
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
}

impl Tagged for Income {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl PeriodicRecord for Income {
    fn period(&self) -> Period {
        self.periodic.period
    }

    fn value(&self) -> Option<Decimal> {
        Some(self.periodic.value)
    }

    fn amount(&self, period_to_use: Period) -> Decimal {
        Income::amount(self, period_to_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_income_weekly_to_yearly() {
        let income = Income::new("child support", dec("75"), Period::WEEKLY);
        assert_eq!(income.amount(Period::YEARLY), dec("3900"));
    }

    #[test]
    fn test_hourly_income_ignores_value() {
        let mut income = Income::hourly("wages", dec("15"), dec("40"), Period::WEEKLY);
        income.periodic.value = dec("999");
        assert_eq!(income.amount(Period::MONTHLY), dec("2600"));
    }

    #[test]
    fn test_deserialize_with_type_and_owner() {
        let json = r#"{
            "type": "SSDI",
            "owner": "client",
            "value": "850.00",
            "period": 12
        }"#;
        let income: Income = serde_json::from_str(json).unwrap();
        assert_eq!(income.kind.as_deref(), Some("SSDI"));
        assert_eq!(income.owner.as_deref(), Some("client"));
        assert_eq!(income.periodic.period, Period::MONTHLY);
        assert!(!income.periodic.is_hourly);
    }

    #[test]
    fn test_deserialize_without_type_or_owner() {
        let income: Income = serde_json::from_str(r#"{"value": "10", "period": 52}"#).unwrap();
        assert_eq!(income.kind, None);
        assert_eq!(income.owner, None);
        assert_eq!(Tagged::kind(&income), None);
    }

    #[test]
    fn test_deserialize_rejects_zero_period() {
        let result: Result<Income, _> = serde_json::from_str(r#"{"value": "10", "period": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let income = Income::new("rent", dec("500"), Period::MONTHLY).with_owner("client");
        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(json["type"], "rent");
        assert_eq!(json["owner"], "client");
        assert_eq!(json["period"], 12);
        assert_eq!(json["value"], "500");
        assert!(json.get("periodic").is_none());
    }

    #[test]
    fn test_trait_amount_matches_inherent() {
        let income = Income::new("pension", dec("1000"), Period::QUARTERLY);
        assert_eq!(
            PeriodicRecord::amount(&income, Period::MONTHLY),
            income.amount(Period::MONTHLY)
        );
        assert_eq!(PeriodicRecord::value(&income), Some(dec("1000")));
    }
}
