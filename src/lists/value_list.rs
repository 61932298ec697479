//! Lists of one-off values: plain values, vehicles, debts and ledgers.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::saturating_sum;
use crate::models::{Debt, DebtCategory, LedgerEntry, SignedRecord, SimpleValue, Vehicle};

use super::{RecordList, Selection};

/// A filterable list of signed values.
///
/// # Example
///
/// ```
/// use interview_finance::lists::ValueList;
/// use interview_finance::models::{SimpleValue, TransactionType};
/// use rust_decimal::Decimal;
///
/// let expenses = ValueList::from(vec![
///     SimpleValue::new("Rent", Decimal::new(950, 0)),
///     SimpleValue::new("Utilities", Decimal::new(120, 0)),
/// ]);
/// assert_eq!(expenses.total("Rent"), Decimal::new(950, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct ValueList<T> {
    records: RecordList<T>,
}

/// A list of plain values.
pub type SimpleValueList = ValueList<SimpleValue>;
/// A list of vehicles.
pub type VehicleList = ValueList<Vehicle>;
/// A list of debts.
pub type DebtList = ValueList<Debt>;
/// A dated ledger with running totals.
pub type Ledger = ValueList<LedgerEntry>;

impl<T> ValueList<T> {
    /// Creates an empty, ungathered list.
    pub fn new() -> Self {
        Self {
            records: RecordList::new(),
        }
    }
}

impl<T: SignedRecord> ValueList<T> {
    /// Total of the signed amounts of the selected records.
    pub fn total<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Decimal {
        self.records.warn_if_ungathered("total");
        let total = saturating_sum(self.records.selected(selection).map(|item| item.amount()));
        debug!(items = self.records.len(), total = %total, "Totalled value list");
        total
    }

    /// A new list holding only the selected records, in their original order.
    pub fn matches<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Self
    where
        T: Clone,
    {
        Self {
            records: self.records.filtered(selection),
        }
    }
}

impl ValueList<Debt> {
    /// Total of debts in `category` or any category beneath it.
    ///
    /// ```
    /// use interview_finance::lists::DebtList;
    /// use interview_finance::models::{Debt, DebtCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let debts = DebtList::from(vec![
    ///     Debt::new(DebtCategory::CreditCard, Decimal::new(800, 0)),
    ///     Debt::new(DebtCategory::PaydayLoan, Decimal::new(300, 0)),
    ///     Debt::new(DebtCategory::CouncilTax, Decimal::new(450, 0)),
    /// ]);
    /// assert_eq!(debts.total_in_category(DebtCategory::Loans), Decimal::new(1100, 0));
    /// ```
    pub fn total_in_category(&self, category: DebtCategory) -> Decimal {
        self.records.warn_if_ungathered("total_in_category");
        saturating_sum(
            self.records
                .iter()
                .filter(|debt| debt.category.is_within(category))
                .map(Debt::amount),
        )
    }

    /// The distinct categories present.
    pub fn categories(&self) -> BTreeSet<DebtCategory> {
        self.records.iter().map(|debt| debt.category).collect()
    }
}

impl ValueList<LedgerEntry> {
    /// Sorts entries by date and assigns each a running total.
    ///
    /// Entries sharing a date keep their relative order. Each running total
    /// includes the entry itself.
    pub fn calculate(&mut self) {
        let entries = self.records.items_mut();
        entries.sort_by_key(|entry| entry.date);

        let mut running_total = Decimal::ZERO;
        for entry in entries.iter_mut() {
            running_total = running_total.saturating_add(entry.amount());
            entry.running_total = Some(running_total);
        }
        debug!(
            entries = entries.len(),
            balance = %running_total,
            "Calculated ledger running totals"
        );
    }

    /// The final running total, or zero for an empty ledger.
    ///
    /// Only meaningful after [`ValueList::calculate`].
    pub fn balance(&self) -> Decimal {
        self.records
            .as_slice()
            .last()
            .and_then(|entry| entry.running_total)
            .unwrap_or(Decimal::ZERO)
    }
}

impl<T> Default for ValueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ValueList<T> {
    type Target = RecordList<T>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<T> DerefMut for ValueList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.records
    }
}

impl<T> From<Vec<T>> for ValueList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            records: RecordList::from(items),
        }
    }
}

impl<T> FromIterator<T> for ValueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ValueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
