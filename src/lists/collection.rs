//! Ordered record storage shared by every list type.
//!
//! Population is explicit: a list built from a `Vec` is complete, while a list
//! created with [`RecordList::new`] stays ungathered until
//! [`RecordList::ensure_gathered`] or [`RecordList::mark_gathered`] is called.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::FinanceResult;
use crate::models::Tagged;

use super::Selection;

/// An ordered sequence of records with a gathered flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct RecordList<T> {
    items: Vec<T>,
    gathered: bool,
}

impl<T> RecordList<T> {
    /// Creates an empty, ungathered list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            gathered: false,
        }
    }

    /// Whether every item has been collected.
    pub fn is_gathered(&self) -> bool {
        self.gathered
    }

    /// Declares the list complete as it stands.
    pub fn mark_gathered(&mut self) {
        self.gathered = true;
    }

    /// Collects items from `source` once.
    ///
    /// The source is not called if the list is already gathered. Items it
    /// returns are appended after any pushed so far.
    ///
    /// # Example
    ///
    /// ```
    /// use interview_finance::lists::IncomeList;
    /// use interview_finance::models::{Income, Period};
    /// use rust_decimal::Decimal;
    ///
    /// let mut list = IncomeList::new();
    /// list.ensure_gathered(|| Ok(vec![Income::new("SSI", Decimal::new(900, 0), Period::MONTHLY)]))?;
    /// list.ensure_gathered(|| unreachable!())?;
    /// assert_eq!(list.len(), 1);
    /// # Ok::<(), interview_finance::error::FinanceError>(())
    /// ```
    pub fn ensure_gathered<F>(&mut self, source: F) -> FinanceResult<()>
    where
        F: FnOnce() -> FinanceResult<Vec<T>>,
    {
        if self.gathered {
            return Ok(());
        }
        let gathered = source()?;
        info!(
            existing = self.items.len(),
            gathered = gathered.len(),
            "Gathered list items"
        );
        self.items.extend(gathered);
        self.gathered = true;
        Ok(())
    }

    /// Appends a record.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the record at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes every record. The gathered flag is left unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The record at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The records as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub(crate) fn warn_if_ungathered(&self, operation: &'static str) {
        if !self.gathered {
            warn!(
                operation,
                items = self.items.len(),
                "Aggregating a list that has not been gathered"
            );
        }
    }
}

impl<T: Tagged> RecordList<T> {
    /// Iterates over the records accepted by `selection`.
    pub fn selected<'s>(
        &'s self,
        selection: impl Into<Selection<'s>>,
    ) -> impl Iterator<Item = &'s T> + 's {
        let selection = selection.into();
        self.items.iter().filter(move |item| selection.accepts(*item))
    }

    /// The distinct type tags present. Untyped records are skipped.
    pub fn types(&self) -> BTreeSet<String> {
        self.items
            .iter()
            .filter_map(|item| item.kind())
            .map(str::to_string)
            .collect()
    }

    /// The distinct owners among records accepted by `selection`.
    ///
    /// Records without an owner are skipped.
    pub fn owners<'s>(&'s self, selection: impl Into<Selection<'s>>) -> BTreeSet<String> {
        self.selected(selection)
            .filter_map(|item| item.owner())
            .map(str::to_string)
            .collect()
    }
}

impl<T: Tagged + Clone> RecordList<T> {
    /// A new, gathered list of the records accepted by `selection`, in order.
    pub fn filtered<'s>(&'s self, selection: impl Into<Selection<'s>>) -> Self {
        self.selected(selection).cloned().collect()
    }
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            gathered: true,
        }
    }
}

impl<T> From<RecordList<T>> for Vec<T> {
    fn from(list: RecordList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for RecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for RecordList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
