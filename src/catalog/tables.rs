//! Ordered `(code, label)` tables for multiple-choice questions.

use serde::{Deserialize, Serialize};

/// One choice in a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Stable code stored on records.
    pub code: String,
    /// Text shown to the user.
    pub label: String,
}

/// An ordered set of choices for a dropdown.
///
/// # Example
///
/// ```
/// use interview_finance::catalog::asset_types;
///
/// let table = asset_types();
/// assert_eq!(table.label_for("checking"), Some("Checking Account"));
/// assert_eq!(table.codes().first().copied(), Some("savings"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    /// Builds a table from `(code, label)` pairs, keeping their order.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(code, label)| LookupEntry {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    /// Just the codes, in order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    /// Just the labels, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// The label for `code`.
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
    }

    /// Whether `code` is one of the choices.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Number of choices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no choices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn extended(mut self, other: LookupTable) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

/// Asset types.
pub fn asset_types() -> LookupTable {
    LookupTable::from_pairs([
        ("savings", "Savings Account"),
        ("stocks", "Stocks"),
        ("trust", "Trust Fund"),
        ("checking", "Checking Account"),
        ("vehicle", "Cars"),
        ("real estate", "Real Estate"),
        ("other", "Other Asset"),
    ])
}

/// Income types, with wages first followed by [`non_wage_income_types`].
pub fn income_types() -> LookupTable {
    LookupTable::from_pairs([("wages", "A job or self-employment")])
        .extended(non_wage_income_types())
}

/// Income types other than wages.
pub fn non_wage_income_types() -> LookupTable {
    LookupTable::from_pairs([
        ("SSR", "Social Security Retirement Benefits"),
        ("SSDI", "Social Security Disability Benefits"),
        ("SSI", "Supplemental Security Income (SSI)"),
        ("pension", "Pension"),
        ("TAFDC", "TAFDC"),
        ("public assistance", "Other public assistance"),
        ("SNAP", "Food Stamps (SNAP)"),
        ("rent", "Income from real estate (rent, etc)"),
        ("room and board", "Room and/or Board Payments"),
        ("child support", "Child Support"),
        ("alimony", "Alimony"),
        ("other support", "Other Support"),
        ("other", "Other"),
    ])
}

/// Household expense types.
pub fn expense_types() -> LookupTable {
    LookupTable::from_pairs([
        ("Rent", "Rent"),
        ("Mortgage", "Mortgage"),
        ("Food & Non-Alcoholic Drinks", "Food & Non-Alcoholic Drinks"),
        ("Alcoholic drink, tobacco &carcotics", "Alcoholic drink, tobacco & narcotics"),
        ("Utilities", "Utilities"),
        ("Fuel & Power", "Fuel & Power"),
        ("Clothing & Footwear", "Clothing & Footwear"),
        ("Credit Card Payments", "Credit Card Payments"),
        ("Hotels & Restaurants", "Hotels & Restaurants"),
        ("Transport", "Transport"),
        ("Communication", "Communication"),
        ("Education", "Education"),
        ("Health", "Health"),
        ("Auto", "Car operation and maintenance"),
        ("Loan payments", "Loan, credit, or lay-away payments"),
        ("Support", "Support to someone not in household"),
        ("Other", "Other"),
    ])
}

/// Debt categories, using their serialized codes.
pub fn debt_types() -> LookupTable {
    use crate::models::DebtCategory;

    LookupTable::from_pairs(
        DebtCategory::ALL
            .iter()
            .map(|category| (category.code(), category.label())),
    )
}
