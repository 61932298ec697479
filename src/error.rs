//! Error types for the interview finance model.
//!
//! Most lookups in this crate fall back silently (an asset with no value is
//! worth zero, an unknown period gets a generic label). The errors below cover
//! the cases where continuing would produce wrong numbers or lost data.

use thiserror::Error;

/// The main error type for the interview finance model.
///
/// # Example
///
/// ```
/// use interview_finance::error::FinanceError;
///
/// let error = FinanceError::CatalogNotFound {
///     path: "/missing/catalogs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/catalogs.yaml");
/// ```
#[derive(Debug, Error)]
pub enum FinanceError {
    /// A period of zero occurrences per year was supplied.
    #[error("Invalid period {period}: must be at least once per year")]
    InvalidPeriod {
        /// The rejected period value.
        period: u32,
    },

    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A list could not be serialized for export.
    #[error("Serialization error: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },

    /// The caller-supplied source failed while gathering list items.
    #[error("Failed to gather list items: {message}")]
    GatherFailed {
        /// A description of why gathering failed.
        message: String,
    },
}

/// A type alias for Results that return FinanceError.
pub type FinanceResult<T> = Result<T, FinanceError>;

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::Serialization {
            message: err.to_string(),
        }
    }
}
