//! Projects runtime values into spreadsheet rows.
//!
//! Sequences are appended one cell per element; records are written field by
//! field at the column named by each field's tag. Both go through the same
//! dispatch chain, which decides from a value's runtime capabilities how
//! it lands in a cell.
//!
//! ```
//! use rowcast::project_sequence;
//! use rowcast_core::{CellValue, Row};
//!
//! let mut row = Row::new();
//! assert_eq!(project_sequence(&mut row, &vec![1, 2, 3], -1), 3);
//! assert_eq!(row.value(2), &CellValue::Integer(3));
//! ```

mod macros;

pub mod config;
pub mod dispatch;
pub mod error;
pub mod nullable;
pub mod projector;
pub mod reflect;
pub mod tag;

mod record;
mod sequence;

pub use config::ProjectorConfig;
pub use dispatch::{dispatch, DispatchMode, Outcome, Placement, Rule};
pub use error::ProjectError;
pub use nullable::{
    NullBool, NullFloat64, NullInt32, NullInt64, NullString, Nullable, NullableScalar,
    OptionalScalar,
};
pub use projector::{project_record, project_sequence, Projector, RowProjectExt, NOT_A_SEQUENCE};
pub use reflect::{Field, Kind, Record, Reflect, Sequence};
pub use tag::{FieldDescriptor, TagError, SKIP_MARKER};
