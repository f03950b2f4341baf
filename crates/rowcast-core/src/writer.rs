//! Write contracts between the projection engine and a row store.
//!
//! Any row type can be a projection target as long as it can append a cell
//! and hand out a cell at an explicit column. [`Row`](crate::Row) is the
//! in-memory implementation shipped with this crate.

use chrono::NaiveDateTime;

/// A native value accepted by [`CellWriter::set_value`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    DateTime(NaiveDateTime),
}

/// Typed setters on a single cell. Each call replaces the previous value.
pub trait CellWriter {
    /// Store a native value (text, number, or date-time)
    fn set_value(&mut self, value: Scalar<'_>);

    /// Store text
    fn set_string(&mut self, value: &str);

    /// Store a boolean
    fn set_bool(&mut self, value: bool);
}

/// Cell access on a row
pub trait RowWriter {
    type Cell: CellWriter;

    /// Append a new empty cell after the last one and return it
    fn append_cell(&mut self) -> &mut Self::Cell;

    /// Return the cell at `col`, creating empty cells up to it if needed
    fn cell_at(&mut self, col: usize) -> &mut Self::Cell;
}

impl<R: RowWriter + ?Sized> RowWriter for &mut R {
    type Cell = R::Cell;

    fn append_cell(&mut self) -> &mut Self::Cell {
        (**self).append_cell()
    }

    fn cell_at(&mut self, col: usize) -> &mut Self::Cell {
        (**self).cell_at(col)
    }
}
