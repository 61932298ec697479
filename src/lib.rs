//! Financial records for legal-aid interviews.
//!
//! This crate models the income, jobs, assets, debts, vehicles and ledgers a
//! client describes during an interview, and totals them in whatever period a
//! form asks for (weekly, monthly, yearly).

#![warn(missing_docs)]

pub mod calculation;
pub mod catalog;
pub mod error;
pub mod lists;
pub mod models;
