//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading lookup tables
//! from a YAML file, so a deployment can relabel choices without a rebuild.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{FinanceError, FinanceResult};

use super::tables::{
    LookupTable, asset_types, debt_types, expense_types, income_types, non_wage_income_types,
};

/// The full set of lookup tables used by the interview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalogs {
    /// Income type choices.
    #[serde(default = "income_types")]
    pub income_types: LookupTable,
    /// Income type choices excluding wages.
    #[serde(default = "non_wage_income_types")]
    pub non_wage_income_types: LookupTable,
    /// Asset type choices.
    #[serde(default = "asset_types")]
    pub asset_types: LookupTable,
    /// Expense type choices.
    #[serde(default = "expense_types")]
    pub expense_types: LookupTable,
    /// Debt category choices.
    #[serde(default = "debt_types")]
    pub debt_types: LookupTable,
}

impl Catalogs {
    /// The tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            income_types: income_types(),
            non_wage_income_types: non_wage_income_types(),
            asset_types: asset_types(),
            expense_types: expense_types(),
            debt_types: debt_types(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Loads and provides access to lookup tables.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── catalogs.yaml   # any subset of the tables; the rest use built-ins
/// ```
///
/// # Example
///
/// ```no_run
/// use interview_finance::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config")?;
/// println!("{:?}", loader.catalogs().asset_types.labels());
/// # Ok::<(), interview_finance::error::FinanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    catalogs: Catalogs,
}

impl CatalogLoader {
    /// Loads `catalogs.yaml` from the specified directory.
    ///
    /// Returns `CatalogNotFound` if the file is missing and
    /// `CatalogParseError` if it is not valid YAML of the expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> FinanceResult<Self> {
        let file = path.as_ref().join("catalogs.yaml");
        let catalogs = Self::load_yaml::<Catalogs>(&file)?;
        info!(
            path = %file.display(),
            income_types = catalogs.income_types.len(),
            asset_types = catalogs.asset_types.len(),
            expense_types = catalogs.expense_types.len(),
            "Loaded catalogs"
        );
        Ok(Self { catalogs })
    }

    /// A loader holding only the built-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> FinanceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| FinanceError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| FinanceError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tables.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Looks up a table by name, e.g. `"asset_types"`.
    pub fn table(&self, name: &str) -> Option<&LookupTable> {
        match name {
            "income_types" => Some(&self.catalogs.income_types),
            "non_wage_income_types" => Some(&self.catalogs.non_wage_income_types),
            "asset_types" => Some(&self.catalogs.asset_types),
            "expense_types" => Some(&self.catalogs.expense_types),
            "debt_types" => Some(&self.catalogs.debt_types),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_shipped_catalogs_match_builtin() {
        let loader = CatalogLoader::load(config_path());
        assert!(loader.is_ok(), "Failed to load catalogs: {:?}", loader.err());
        assert_eq!(loader.unwrap().catalogs(), &Catalogs::builtin());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match CatalogLoader::load("/nonexistent/path") {
            Err(FinanceError::CatalogNotFound { path }) => {
                assert!(path.contains("catalogs.yaml"));
            }
            other => panic!("Expected CatalogNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file_falls_back_to_builtin() {
        let yaml = "asset_types:\n  - code: crypto\n    label: Cryptocurrency\n";
        let catalogs: Catalogs = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalogs.asset_types.codes(), vec!["crypto"]);
        assert_eq!(catalogs.income_types, income_types());
        assert_eq!(catalogs.debt_types, debt_types());
    }

    #[test]
    fn test_malformed_table_is_parse_error() {
        let result: Result<Catalogs, _> = serde_yaml::from_str("asset_types: 12\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_table_by_name() {
        let loader = CatalogLoader::builtin();
        assert_eq!(
            loader.table("non_wage_income_types").map(LookupTable::len),
            Some(13)
        );
        assert!(loader.table("vehicle_types").is_none());
    }
}
