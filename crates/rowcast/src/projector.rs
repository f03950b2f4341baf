use rowcast_core::RowWriter;

use crate::config::ProjectorConfig;
use crate::error::ProjectError;
use crate::reflect::Reflect;
use crate::{record, sequence};

/// Returned by [`project_sequence`] when the source is not a sequence
pub const NOT_A_SEQUENCE: i64 = -1;

/// Runs sequence and record projections with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// A projector that fails on unsupported values
    pub fn strict() -> Self {
        Self::new(ProjectorConfig::default().with_strict(true))
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Append one cell per element of `source`, visiting at most `limit`
    /// elements (all of them when `limit` is negative, none when zero).
    pub fn sequence<R: RowWriter + ?Sized>(
        &self,
        row: &mut R,
        source: &dyn Reflect,
        limit: i64,
    ) -> Result<usize, ProjectError> {
        sequence::project(row, source, limit, &self.config)
    }

    /// Write the fields of `source` at their tagged columns, considering at
    /// most `limit` declared fields.
    pub fn record<R: RowWriter + ?Sized>(
        &self,
        row: &mut R,
        source: &dyn Reflect,
        limit: i64,
    ) -> Result<usize, ProjectError> {
        record::project(row, source, limit, &self.config)
    }
}

/// Project a sequence into `row` with the default configuration.
///
/// Returns the number of positions visited, or [`NOT_A_SEQUENCE`] when
/// `source` is not a sequence.
pub fn project_sequence<R: RowWriter + ?Sized>(row: &mut R, source: &dyn Reflect, limit: i64) -> i64 {
    match sequence::project(row, source, limit, &ProjectorConfig::default()) {
        Ok(n) => n as i64,
        Err(_) => NOT_A_SEQUENCE,
    }
}

/// Project a record into `row` with the default configuration.
pub fn project_record<R: RowWriter + ?Sized>(
    row: &mut R,
    source: &dyn Reflect,
    limit: i64,
) -> Result<usize, ProjectError> {
    record::project(row, source, limit, &ProjectorConfig::default())
}

/// Method-style projection on any row
pub trait RowProjectExt: RowWriter {
    /// See [`project_sequence`]
    fn write_slice(&mut self, source: &dyn Reflect, limit: i64) -> i64 {
        project_sequence(self, source, limit)
    }

    /// See [`project_record`]
    fn write_struct(&mut self, source: &dyn Reflect, limit: i64) -> Result<usize, ProjectError> {
        project_record(self, source, limit)
    }
}

impl<R: RowWriter + ?Sized> RowProjectExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use rowcast_core::{CellValue, Row};

    #[test]
    fn test_sentinel_for_non_sequence() {
        let mut row = Row::new();
        assert_eq!(project_sequence(&mut row, &"not a list", -1), NOT_A_SEQUENCE);
        assert!(row.is_empty());
    }

    #[test]
    fn test_zero_limit_checked_before_shape() {
        let mut row = Row::new();
        assert_eq!(project_sequence(&mut row, &"not a list", 0), 0);
        assert_eq!(project_record(&mut row, &5i32, 0), Ok(0));
        assert!(row.is_empty());
    }

    #[test]
    fn test_row_ext() {
        let mut row = Row::new();
        assert_eq!(row.write_slice(&vec![1.5, 2.5], -1), 2);
        assert_eq!(row.values(), vec![CellValue::Number(1.5), CellValue::Number(2.5)]);

        let err = row.write_struct(&vec![1], -1).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_strict_projector() {
        let projector = Projector::strict();
        assert!(projector.config().strict);

        let mut row = Row::new();
        let err = projector.sequence(&mut row, &vec![1u64], -1).unwrap_err();
        assert!(matches!(err, ProjectError::Unsupported { position: 0, .. }));

        // the sentinel entry point never fails on unsupported values
        assert_eq!(project_sequence(&mut row, &vec![1u64], -1), 1);
        assert!(row.is_empty());
    }

    #[test]
    fn test_projector_reports_shape() {
        let projector = Projector::default();
        let mut row = Row::new();
        let err = projector.sequence(&mut row, &true, -1).unwrap_err();
        assert_eq!(err, ProjectError::NotSequence { type_name: "bool" });
    }
}
