//! Financial records collected during an interview.
//!
//! Records are plain data: the interview creates them as questions are
//! answered and the list containers in [`crate::lists`] total them.

mod asset;
mod debt;
mod income;
mod job;
mod period;
mod periodic_value;
mod record;
mod simple_value;

pub use asset::Asset;
pub use debt::{Debt, DebtCategory};
pub use income::Income;
pub use job::Job;
pub use period::Period;
pub use periodic_value::PeriodicValue;
pub use record::{PeriodicRecord, SignedRecord, Tagged};
pub use simple_value::{LedgerEntry, SimpleValue, TransactionType, Vehicle};
