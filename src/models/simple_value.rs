//! One-off values: plain amounts, vehicles and ledger entries.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{SignedRecord, Tagged};

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out. Amounts are negated.
    Expense,
    /// Any other tag supplied by the interview.
    #[serde(other)]
    Other,
}

impl TransactionType {
    /// Applies the ledger sign convention to `value`.
    ///
    /// Only [`TransactionType::Expense`] flips the sign.
    pub fn sign(transaction_type: Option<TransactionType>, value: Decimal) -> Decimal {
        match transaction_type {
            Some(TransactionType::Expense) => -value,
            _ => value,
        }
    }
}

/// A single value stored in a list, optionally signed as a transaction.
///
/// # Example
///
/// ```
/// use interview_finance::models::{SimpleValue, TransactionType};
/// use rust_decimal::Decimal;
///
/// let utilities = SimpleValue::new("Utilities", Decimal::new(120, 0))
///     .with_transaction_type(TransactionType::Expense);
/// assert_eq!(utilities.amount(), Decimal::new(-120, 0));
/// assert_eq!(utilities.to_string(), "-120");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleValue {
    /// Type code.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who the value belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The unsigned amount.
    #[serde(default)]
    pub value: Decimal,
    /// Optional transaction direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

impl SimpleValue {
    /// Creates a value of the given type.
    pub fn new(kind: impl Into<String>, value: Decimal) -> Self {
        Self {
            kind: Some(kind.into()),
            value,
            ..Self::default()
        }
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the transaction direction.
    pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// The value, negated for expenses.
    pub fn amount(&self) -> Decimal {
        TransactionType::sign(self.transaction_type, self.value)
    }
}

impl fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

impl Tagged for SimpleValue {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl SignedRecord for SimpleValue {
    fn amount(&self) -> Decimal {
        SimpleValue::amount(self)
    }
}

/// A vehicle owned by the household.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vehicle {
    /// Type code.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who owns the vehicle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Current value.
    #[serde(default)]
    pub value: Decimal,
    /// Optional transaction direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Model year.
    #[serde(default)]
    pub year: i32,
    /// Manufacturer.
    #[serde(default)]
    pub make: String,
    /// Model name.
    #[serde(default)]
    pub model: String,
}

impl Vehicle {
    /// Creates a vehicle with the given description and value.
    pub fn new(year: i32, make: impl Into<String>, model: impl Into<String>, value: Decimal) -> Self {
        Self {
            year,
            make: make.into(),
            model: model.into(),
            value,
            ..Self::default()
        }
    }

    /// The value, negated for expenses.
    pub fn amount(&self) -> Decimal {
        TransactionType::sign(self.transaction_type, self.value)
    }

    /// Description line for forms.
    ///
    /// ```
    /// use interview_finance::models::Vehicle;
    /// use rust_decimal::Decimal;
    ///
    /// let car = Vehicle::new(2014, "Honda", "Civic", Decimal::new(6500, 0));
    /// assert_eq!(car.year_make_model(), "2014 / Honda / Civic");
    /// ```
    pub fn year_make_model(&self) -> String {
        format!("{} / {} / {}", self.year, self.make, self.model)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

impl Tagged for Vehicle {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl SignedRecord for Vehicle {
    fn amount(&self) -> Decimal {
        Vehicle::amount(self)
    }
}

/// A dated transaction in a ledger.
///
/// `running_total` is filled in by [`crate::lists::ValueList::calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Type code.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Whose account the entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The unsigned amount.
    #[serde(default)]
    pub value: Decimal,
    /// Optional transaction direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Date of the transaction.
    pub date: NaiveDate,
    /// Balance after this entry, once calculated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_total: Option<Decimal>,
}

impl LedgerEntry {
    /// Creates an incoming entry.
    pub fn credit(date: NaiveDate, value: Decimal) -> Self {
        Self::with_type(date, value, TransactionType::Income)
    }

    /// Creates an outgoing entry. `value` is given unsigned.
    pub fn debit(date: NaiveDate, value: Decimal) -> Self {
        Self::with_type(date, value, TransactionType::Expense)
    }

    fn with_type(date: NaiveDate, value: Decimal, transaction_type: TransactionType) -> Self {
        Self {
            kind: None,
            owner: None,
            value,
            transaction_type: Some(transaction_type),
            date,
            running_total: None,
        }
    }

    /// The value, negated for expenses.
    pub fn amount(&self) -> Decimal {
        TransactionType::sign(self.transaction_type, self.value)
    }
}

impl Tagged for LedgerEntry {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl SignedRecord for LedgerEntry {
    fn amount(&self) -> Decimal {
        LedgerEntry::amount(self)
    }
}
