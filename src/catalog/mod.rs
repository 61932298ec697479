//! Static choice lists for the interview.
//!
//! This module provides the lookup tables behind income, asset, expense and
//! debt pickers, labels for income periods, and year ranges. Tables can be
//! overridden from a YAML file with [`CatalogLoader`].
//!
//! # Example
//!
//! ```
//! use interview_finance::catalog::{income_types, period_label};
//!
//! assert_eq!(income_types().label_for("SNAP"), Some("Food Stamps (SNAP)"));
//! assert_eq!(period_label("26"), "once every two weeks");
//! ```

mod loader;
mod periods;
mod tables;
mod years;

pub use loader::{CatalogLoader, Catalogs};
pub use periods::{describe_period, income_periods, period_label};
pub use tables::{
    LookupEntry, LookupTable, asset_types, debt_types, expense_types, income_types,
    non_wage_income_types,
};
pub use years::{YearOrder, recent_years, recent_years_from};
