//! Traits shared by the record types so lists can filter and total them.

use rust_decimal::Decimal;

use super::Period;

/// A record that may carry a type tag and an owner.
///
/// Both are optional: interview answers arrive incrementally, and a record
/// without a type is treated as uncategorized rather than as an error.
pub trait Tagged {
    /// The type tag (e.g. `"wages"`), if one has been set.
    fn kind(&self) -> Option<&str>;

    /// The owner (e.g. `"spouse"`), if one has been set.
    fn owner(&self) -> Option<&str>;
}

/// A record whose amount recurs a number of times per year.
pub trait PeriodicRecord: Tagged {
    /// The native period of the record.
    fn period(&self) -> Period;

    /// The raw per-period value as entered, if any.
    fn value(&self) -> Option<Decimal>;

    /// The amount normalized to `period_to_use`.
    fn amount(&self, period_to_use: Period) -> Decimal;

    /// Market value, for records that track one.
    fn market_value(&self) -> Option<Decimal> {
        None
    }

    /// Outstanding balance, for records that track one.
    fn balance(&self) -> Option<Decimal> {
        None
    }
}

/// A one-off record with a signed amount.
pub trait SignedRecord: Tagged {
    /// The amount, negative for expenses.
    fn amount(&self) -> Decimal;
}
