use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::writer::{CellWriter, Scalar};

/// Format used when a date-time value is rendered as text
pub const DATETIME_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents the raw value stored in a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Integer(i64),
    Text(String),
    Boolean(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as an integer (floats only when they have no fraction)
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Some(*n as i64),
            CellValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Integer(i) => i.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::DateTime(dt) => dt.format(DATETIME_TEXT_FORMAT).to_string(),
        }
    }

    /// Try to get the value as a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Number(n) => Some(*n != 0.0),
            CellValue::Integer(i) => Some(*i != 0),
            CellValue::Text(s) => match s.to_uppercase().as_str() {
                "TRUE" | "YES" | "1" => Some(true),
                "FALSE" | "NO" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get the date-time if this is a native date-time value
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Name of the variant, used in logs and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::Integer(_) => "integer",
            CellValue::Text(_) => "text",
            CellValue::Boolean(_) => "boolean",
            CellValue::DateTime(_) => "datetime",
        }
    }
}

impl From<Scalar<'_>> for CellValue {
    fn from(scalar: Scalar<'_>) -> Self {
        match scalar {
            Scalar::Text(s) => CellValue::Text(s.to_string()),
            Scalar::Integer(i) => CellValue::Integer(i),
            Scalar::Float(f) => CellValue::Number(f),
            Scalar::DateTime(dt) => CellValue::DateTime(dt),
        }
    }
}

/// A single slot in a [`Row`](crate::Row)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: CellValue,
}

impl Cell {
    /// Create a new cell holding a value
    pub fn new(value: CellValue) -> Self {
        Cell { value }
    }

    /// Create a cell with a number value
    pub fn number(value: f64) -> Self {
        Cell::new(CellValue::Number(value))
    }

    /// Create a cell with an integer value
    pub fn integer(value: i64) -> Self {
        Cell::new(CellValue::Integer(value))
    }

    /// Create a cell with a text value
    pub fn text(value: impl Into<String>) -> Self {
        Cell::new(CellValue::Text(value.into()))
    }

    /// Create a cell with a boolean value
    pub fn boolean(value: bool) -> Self {
        Cell::new(CellValue::Boolean(value))
    }

    /// Create a cell with a date-time value
    pub fn datetime(value: NaiveDateTime) -> Self {
        Cell::new(CellValue::DateTime(value))
    }

    /// Get the stored value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Check if the cell holds nothing
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl CellWriter for Cell {
    fn set_value(&mut self, value: Scalar<'_>) {
        self.value = value.into();
    }

    fn set_string(&mut self, value: &str) {
        self.value = CellValue::Text(value.to_string());
    }

    fn set_bool(&mut self, value: bool) {
        self.value = CellValue::Boolean(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_value_as_number() {
        assert_eq!(CellValue::Number(42.0).as_number(), Some(42.0));
        assert_eq!(CellValue::Integer(7).as_number(), Some(7.0));
        assert_eq!(CellValue::Boolean(true).as_number(), Some(1.0));
        assert_eq!(CellValue::Text("123".to_string()).as_number(), Some(123.0));
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn test_cell_value_as_text() {
        assert_eq!(CellValue::Number(42.0).as_text(), "42");
        assert_eq!(CellValue::Number(42.5).as_text(), "42.5");
        assert_eq!(CellValue::Integer(-3).as_text(), "-3");
        assert_eq!(CellValue::Boolean(true).as_text(), "TRUE");
        assert_eq!(CellValue::Text("hello".to_string()).as_text(), "hello");

        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).as_text(), "2024-02-29 13:05:00");
    }

    #[test]
    fn test_cell_value_as_integer() {
        assert_eq!(CellValue::Integer(30).as_integer(), Some(30));
        assert_eq!(CellValue::Number(4.0).as_integer(), Some(4));
        assert_eq!(CellValue::Number(4.5).as_integer(), None);
        assert_eq!(CellValue::Boolean(true).as_integer(), None);
    }

    #[test]
    fn test_cell_writer_last_write_wins() {
        let mut cell = Cell::default();
        cell.set_string("");
        cell.set_value(Scalar::Integer(12));
        assert_eq!(cell.value, CellValue::Integer(12));

        cell.set_bool(false);
        assert_eq!(cell.value, CellValue::Boolean(false));
    }

    #[test]
    fn test_cell_creation() {
        let dt = NaiveDate::from_ymd_opt(2001, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Cell::datetime(dt).value().as_datetime(), Some(dt));
        assert_eq!(Cell::number(1.5).value().type_name(), "number");
        assert_eq!(Cell::boolean(true).value().as_boolean(), Some(true));
        assert_eq!(Cell::text("hi").value().type_name(), "text");
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_cell_serde() {
        let cell = Cell::integer(5);
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"value":{"type":"Integer","value":5}}"#);

        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
