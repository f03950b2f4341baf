//! Type dispatch: turns one value into at most one cell write.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. exact date-time type, written as a native date-time
//! 2. human-readable values, written as their rendered text
//! 3. nullable wrappers (text, bool, int, float): the cell is cleared to
//!    empty text, then overwritten with the inner value when valid
//! 4. the underlying kind: text and signed/float scalars natively, bools
//!    through the boolean setter, boxed values unwrapped (sequence only)
//!
//! Anything else is unsupported and writes nothing. A date-time is also
//! displayable, so the order of 1 and 2 decides how it lands in the cell.

use rowcast_core::{CellWriter, RowWriter, Scalar};
use tracing::trace;

use crate::nullable::OptionalScalar;
use crate::reflect::{Kind, Reflect};

/// Where the cell for a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Append a new cell to the row
    Append,
    /// Fetch or create the cell at a column
    Column(usize),
}

/// Which façade is dispatching. The two differ in what they recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Unwraps boxed values; ignores 32-bit nullable integers
    Sequence,
    /// Recognizes 32-bit nullable integers; treats boxed scalars as unsupported
    Record,
}

/// The rule that produced a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Temporal,
    Display,
    Nullable,
    Native,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written(Rule),
    Unsupported,
}

impl Outcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Outcome::Written(_))
    }
}

fn target<R: RowWriter + ?Sized>(row: &mut R, placement: Placement) -> &mut R::Cell {
    match placement {
        Placement::Append => row.append_cell(),
        Placement::Column(col) => row.cell_at(col),
    }
}

/// Run the rule chain for one value
pub fn dispatch<R: RowWriter + ?Sized>(
    row: &mut R,
    value: &dyn Reflect,
    placement: Placement,
    mode: DispatchMode,
) -> Outcome {
    let outcome = dispatch_inner(row, value, placement, mode);
    trace!(
        type_name = value.type_name(),
        ?placement,
        ?outcome,
        "dispatched value"
    );
    outcome
}

fn dispatch_inner<R: RowWriter + ?Sized>(
    row: &mut R,
    value: &dyn Reflect,
    placement: Placement,
    mode: DispatchMode,
) -> Outcome {
    if let Some(dt) = value.as_temporal() {
        target(row, placement).set_value(Scalar::DateTime(dt));
        return Outcome::Written(Rule::Temporal);
    }

    if let Some(display) = value.as_display() {
        let text = display.to_string();
        target(row, placement).set_string(&text);
        return Outcome::Written(Rule::Display);
    }

    if let Some(optional) = value.as_nullable() {
        let recognized = match optional {
            OptionalScalar::NarrowInt(_) => mode == DispatchMode::Record,
            _ => true,
        };
        if recognized {
            write_optional(target(row, placement), optional);
            return Outcome::Written(Rule::Nullable);
        }
    }

    match value.kind() {
        Kind::Text(s) => {
            target(row, placement).set_value(Scalar::Text(s));
            Outcome::Written(Rule::Native)
        }
        Kind::Int(i) => {
            target(row, placement).set_value(Scalar::Integer(i));
            Outcome::Written(Rule::Native)
        }
        Kind::Float(f) => {
            target(row, placement).set_value(Scalar::Float(f));
            Outcome::Written(Rule::Native)
        }
        Kind::Bool(b) => {
            target(row, placement).set_bool(b);
            Outcome::Written(Rule::Boolean)
        }
        Kind::Boxed(inner) if mode == DispatchMode::Sequence => {
            dispatch_inner(row, inner, placement, mode)
        }
        _ => Outcome::Unsupported,
    }
}

fn write_optional<C: CellWriter + ?Sized>(cell: &mut C, optional: OptionalScalar<'_>) {
    cell.set_string("");
    match optional {
        OptionalScalar::Text(Some(s)) => cell.set_value(Scalar::Text(s)),
        OptionalScalar::Bool(Some(b)) => cell.set_bool(b),
        OptionalScalar::Int(Some(i)) => cell.set_value(Scalar::Integer(i)),
        OptionalScalar::NarrowInt(Some(i)) => cell.set_value(Scalar::Integer(i64::from(i))),
        OptionalScalar::Float(Some(f)) => cell.set_value(Scalar::Float(f)),
        _ => {}
    }
}
