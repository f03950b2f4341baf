use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellValue};
use crate::writer::RowWriter;

/// A dense, ordered row of cells
///
/// Columns are 0-indexed. Addressing a column past the end pads the row with
/// empty cells so every position up to it exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a row from existing cells
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of cells, including padding cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a column
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Get the value at a column (returns Empty for missing cells)
    pub fn value(&self, col: usize) -> &CellValue {
        self.cells
            .get(col)
            .map(|c| c.value())
            .unwrap_or(&CellValue::Empty)
    }

    /// Iterate over the cells in column order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Clone out the cell values in column order
    pub fn values(&self) -> Vec<CellValue> {
        self.cells.iter().map(|c| c.value.clone()).collect()
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Serialize the row to a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a row from a JSON array
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl RowWriter for Row {
    type Cell = Cell;

    fn append_cell(&mut self) -> &mut Cell {
        self.cells.push(Cell::default());
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    fn cell_at(&mut self, col: usize) -> &mut Cell {
        if col >= self.cells.len() {
            self.cells.resize_with(col + 1, Cell::default);
        }
        &mut self.cells[col]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
