//! Static university catalog, loaded once and shared read-only by every scoring call.

mod parser;

use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::chances::domain::University;

const BUNDLED_CATALOG: &str = include_str!("../../data/universities.json");

/// Errors raised while loading catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: column `{column}` has invalid value '{value}'")]
    InvalidCell {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("unsupported catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
    #[error("duplicate university id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    universities: Vec<University>,
}

impl Catalog {
    pub fn new(universities: Vec<University>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for university in &universities {
            if !seen.insert(university.id.as_str()) {
                return Err(CatalogError::DuplicateId(university.id.clone()));
            }
        }

        Ok(Self { universities })
    }

    /// Dataset compiled into the crate, used when no catalog path is configured.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let universities: Vec<University> = serde_json::from_reader(reader)?;
        Self::new(universities)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(parser::parse_universities(reader)?)
    }

    /// Load by extension: `.json` or `.csv`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        info!(path = %path.display(), universities = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn get(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|university| university.id == id)
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Distinct countries in alphabetical order.
    pub fn countries(&self) -> Vec<String> {
        self.universities
            .iter()
            .map(|university| university.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
