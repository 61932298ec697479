//! Calculation logic for the interview finance model.
//!
//! This module contains the period normalization arithmetic shared by every
//! record type.

mod normalization;

pub use normalization::{normalize, normalize_hourly, saturating_sum};
