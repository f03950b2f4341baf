pub mod cell;
pub mod row;
pub mod sheet;
pub mod writer;

pub use cell::{Cell, CellValue};
pub use row::Row;
pub use sheet::Sheet;
pub use writer::{CellWriter, RowWriter, Scalar};
