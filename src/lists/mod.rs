//! Typed list containers that filter and total records.
//!
//! [`PeriodicList`] holds recurring amounts and normalizes totals to a chosen
//! period; [`ValueList`] holds one-off signed values. Both dereference to
//! [`RecordList`] for storage, population and tag enumeration.

mod collection;
mod periodic_list;
mod selection;
mod value_list;

pub use collection::RecordList;
pub use periodic_list::{AssetList, IncomeList, JobList, PeriodicList};
pub use selection::{KindFilter, OwnerFilter, Selection};
pub use value_list::{DebtList, Ledger, SimpleValueList, ValueList, VehicleList};
