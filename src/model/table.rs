//! The generic intermediate table shared by all loaders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Row/column table extracted from a single artifact, before any column
/// canonicalization.
///
/// Column names are kept exactly as seen (original case, duplicates
/// allowed); cells are raw strings with `None` marking fields absent from a
/// ragged or short row. A table is scoped to one parse call and never
/// cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl GenericTable {
    /// Build a table from an explicit header row and positional cell rows.
    ///
    /// Cells beyond the header width are dropped; short rows leave their
    /// trailing columns absent.
    #[must_use]
    pub fn from_rows(columns: Vec<String>, raw_rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = raw_rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table from per-row key/value records.
    ///
    /// Column names are the union of record keys in first-seen order. The
    /// XML dialect extractors produce rows this way since each component
    /// element can carry a different set of custom fields.
    #[must_use]
    pub fn from_records(records: Vec<Vec<(String, Option<String>)>>) -> Self {
        let mut index: IndexMap<String, usize> = IndexMap::new();
        for record in &records {
            for (key, _) in record {
                let next = index.len();
                index.entry(key.clone()).or_insert(next);
            }
        }

        let width = index.len();
        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = vec![None; width];
                for (key, value) in record {
                    if let Some(&position) = index.get(&key) {
                        row[position] = value;
                    }
                }
                row
            })
            .collect();

        let columns = index.into_keys().collect();
        Self { columns, rows }
    }

    /// Column names in as-seen order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, each aligned positionally to [`Self::columns`].
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Whether the table holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
