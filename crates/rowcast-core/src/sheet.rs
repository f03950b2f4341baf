use serde::{Deserialize, Serialize};

use crate::row::Row;

/// A named, ordered list of rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name (displayed in tab)
    pub name: String,
    #[serde(default)]
    rows: Vec<Row>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Append an empty row and return it for writing
    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn max_col(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }
}
