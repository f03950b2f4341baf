use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tag that excludes a field from record projection
pub const SKIP_MARKER: &str = "-";

/// Parsed column tag of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldDescriptor {
    /// Leave the field out of the row
    Skip,
    /// Write the field at this 0-indexed column
    Column(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag is empty")]
    Empty,
    #[error("`{0}` is neither a column index nor the skip marker")]
    Malformed(String),
}

impl FieldDescriptor {
    /// Parse a tag against a custom skip marker
    pub fn parse(tag: &str, skip_marker: &str) -> Result<Self, TagError> {
        if tag == skip_marker {
            return Ok(FieldDescriptor::Skip);
        }
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        tag.parse::<usize>()
            .map(FieldDescriptor::Column)
            .map_err(|_| TagError::Malformed(tag.to_string()))
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            FieldDescriptor::Skip => None,
            FieldDescriptor::Column(col) => Some(*col),
        }
    }
}

impl FromStr for FieldDescriptor {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldDescriptor::parse(s, SKIP_MARKER)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDescriptor::Skip => write!(f, "{}", SKIP_MARKER),
            FieldDescriptor::Column(col) => write!(f, "{}", col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column() {
        assert_eq!("0".parse::<FieldDescriptor>(), Ok(FieldDescriptor::Column(0)));
        assert_eq!("17".parse::<FieldDescriptor>(), Ok(FieldDescriptor::Column(17)));
        assert_eq!("17".parse::<FieldDescriptor>().unwrap().column(), Some(17));
    }

    #[test]
    fn test_parse_skip() {
        assert_eq!("-".parse::<FieldDescriptor>(), Ok(FieldDescriptor::Skip));
        assert_eq!(FieldDescriptor::Skip.column(), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<FieldDescriptor>(), Err(TagError::Empty));
        assert_eq!(
            "xyz".parse::<FieldDescriptor>(),
            Err(TagError::Malformed("xyz".to_string()))
        );
        assert!("-1".parse::<FieldDescriptor>().is_err());
        assert!("1.5".parse::<FieldDescriptor>().is_err());
        assert!(" 2".parse::<FieldDescriptor>().is_err());
    }

    #[test]
    fn test_custom_skip_marker() {
        assert_eq!(FieldDescriptor::parse("skip", "skip"), Ok(FieldDescriptor::Skip));
        assert_eq!(
            FieldDescriptor::parse("-", "skip"),
            Err(TagError::Malformed("-".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldDescriptor::Column(3).to_string(), "3");
        assert_eq!(FieldDescriptor::Skip.to_string(), "-");
    }
}
