use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// One line of the label table: an image path relative to the dataset root and its class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetRow {
    pub path: String,
    pub class: String,
}

impl DatasetRow {
    pub fn new(path: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            class: class.into(),
        }
    }

    /// The path column is trimmed before it is joined onto the root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.path.trim())
    }
}

/// Read-only, positionally indexed table of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&DatasetRow, DomainError> {
        self.rows.get(index).ok_or(DomainError::RowOutOfRange {
            index,
            len: self.rows.len(),
        })
    }
}

impl FromIterator<DatasetRow> for Dataset {
    fn from_iter<T: IntoIterator<Item = DatasetRow>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
