use thiserror::Error;

use crate::tag::TagError;

/// Errors returned by the projectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("not a sequence: {type_name}")]
    NotSequence { type_name: &'static str },

    #[error("not a record: {type_name}")]
    NotRecord { type_name: &'static str },

    #[error("invalid tag on field `{field}`: {source}")]
    InvalidTag {
        field: &'static str,
        #[source]
        source: TagError,
    },

    /// Only returned in strict mode
    #[error("unsupported value at position {position}: {type_name}")]
    Unsupported {
        position: usize,
        type_name: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProjectError {
    /// True for errors caused by the shape of the source value
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            ProjectError::NotSequence { .. } | ProjectError::NotRecord { .. }
        )
    }
}
