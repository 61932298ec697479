//! Lists of recurring amounts: incomes, jobs and assets.

use std::ops::{Deref, DerefMut};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::debug;

use crate::calculation::saturating_sum;
use crate::error::FinanceResult;
use crate::models::{Asset, Income, Job, Period, PeriodicRecord};

use super::{RecordList, Selection};

/// A filterable list of periodic records.
///
/// Totals are normalized to a caller-chosen period. A `period_to_use` of zero
/// always totals to zero.
///
/// # Example
///
/// ```
/// use interview_finance::lists::{IncomeList, Selection};
/// use interview_finance::models::{Income, Period};
/// use rust_decimal::Decimal;
///
/// let list = IncomeList::from(vec![
///     Income::new("wages", Decimal::new(500, 0), Period::WEEKLY).with_owner("client"),
///     Income::new("SSI", Decimal::new(900, 0), Period::MONTHLY).with_owner("child"),
/// ]);
///
/// assert_eq!(list.total(1, Selection::all()), Decimal::new(36800, 0));
/// assert_eq!(list.total(12, "SSI"), Decimal::new(900, 0));
/// assert_eq!(list.total(0, Selection::all()), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct PeriodicList<T> {
    records: RecordList<T>,
}

/// A list of income sources.
pub type IncomeList = PeriodicList<Income>;
/// A list of jobs with gross and net totals.
pub type JobList = PeriodicList<Job>;
/// A list of assets; assets with no value count as zero.
pub type AssetList = PeriodicList<Asset>;

/// One row of the case-management export.
///
/// `amount` is written as a JSON number with exactly the digits of the stored
/// value, never via `f64`.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "type")]
    kind: Option<&'a str>,
    frequency: u32,
    amount: Option<Box<RawValue>>,
}

fn exact_number(value: Decimal) -> serde_json::Result<Box<RawValue>> {
    RawValue::from_string(value.to_string())
}

impl<T> PeriodicList<T> {
    /// Creates an empty, ungathered list.
    pub fn new() -> Self {
        Self {
            records: RecordList::new(),
        }
    }
}

impl<T: PeriodicRecord> PeriodicList<T> {
    /// Total of `amount(period_to_use)` over the selected records.
    pub fn total<'s>(&'s self, period_to_use: u32, selection: impl Into<Selection<'s>>) -> Decimal {
        self.sum_normalized("total", period_to_use, selection.into(), |item, period| {
            item.amount(period)
        })
    }

    /// A new list holding only the selected records, in their original order.
    ///
    /// Used to slot a fixed number of entries into predefined form fields.
    pub fn matches<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Self
    where
        T: Clone,
    {
        Self {
            records: self.records.filtered(selection),
        }
    }

    /// Total market value of the selected records. Missing values count as zero.
    pub fn market_value_total<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Decimal {
        saturating_sum(
            self.records
                .selected(selection)
                .filter_map(|item| item.market_value()),
        )
    }

    /// Total outstanding balance of the selected records. Missing balances count as zero.
    pub fn balance_total<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Decimal {
        self.records.warn_if_ungathered("balance_total");
        saturating_sum(
            self.records
                .selected(selection)
                .filter_map(|item| item.balance()),
        )
    }

    /// Serializes the list for the case-management API.
    ///
    /// Each record becomes `{"type", "frequency", "amount"}` where `frequency`
    /// is the native period and `amount` the raw per-period value, written
    /// digit for digit.
    ///
    /// ```
    /// use interview_finance::lists::IncomeList;
    /// use interview_finance::models::{Income, Period};
    /// use rust_decimal::Decimal;
    ///
    /// let list = IncomeList::from(vec![Income::new("SSI", Decimal::new(900, 0), Period::MONTHLY)]);
    /// let json: serde_json::Value = serde_json::from_str(&list.to_json()?)?;
    /// assert_eq!(json[0]["type"], "SSI");
    /// assert_eq!(json[0]["frequency"], 12);
    /// assert_eq!(json[0]["amount"].as_f64(), Some(900.0));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_json(&self) -> FinanceResult<String> {
        let mut rows = Vec::with_capacity(self.records.len());
        for item in self.records.iter() {
            rows.push(ExportRow {
                kind: item.kind(),
                frequency: item.period().times_per_year(),
                amount: item.value().map(exact_number).transpose()?,
            });
        }
        Ok(serde_json::to_string(&rows)?)
    }

    fn sum_normalized<F>(
        &self,
        operation: &'static str,
        period_to_use: u32,
        selection: Selection<'_>,
        amount: F,
    ) -> Decimal
    where
        F: Fn(&T, Period) -> Decimal,
    {
        self.records.warn_if_ungathered(operation);
        let Ok(period) = Period::new(period_to_use) else {
            return Decimal::ZERO;
        };
        let total = saturating_sum(
            self.records
                .selected(selection)
                .map(|item| amount(item, period)),
        );
        debug!(
            operation,
            period_to_use,
            items = self.records.len(),
            total = %total,
            "Totalled periodic list"
        );
        total
    }
}

impl PeriodicList<Job> {
    /// Total gross pay over `period_to_use`.
    pub fn gross_total<'s>(
        &'s self,
        period_to_use: u32,
        selection: impl Into<Selection<'s>>,
    ) -> Decimal {
        self.sum_normalized("gross_total", period_to_use, selection.into(), |job, period| {
            job.gross_amount(period)
        })
    }

    /// Total net pay over `period_to_use`.
    pub fn net_total<'s>(&'s self, period_to_use: u32, selection: impl Into<Selection<'s>>) -> Decimal {
        self.sum_normalized("net_total", period_to_use, selection.into(), |job, period| {
            job.net_amount(period)
        })
    }
}

impl<T> Default for PeriodicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for PeriodicList<T> {
    type Target = RecordList<T>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<T> DerefMut for PeriodicList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.records
    }
}

impl<T> From<Vec<T>> for PeriodicList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            records: RecordList::from(items),
        }
    }
}

impl<T> FromIterator<T> for PeriodicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PeriodicList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
