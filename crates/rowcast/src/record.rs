use rowcast_core::RowWriter;
use tracing::{debug, warn};

use crate::config::ProjectorConfig;
use crate::dispatch::{dispatch, DispatchMode, Outcome, Placement};
use crate::error::ProjectError;
use crate::reflect::{Kind, Reflect};
use crate::sequence::resolve_limit;
use crate::tag::FieldDescriptor;

/// Write each field at the column its tag names, in declaration order.
///
/// Returns the number of fields that produced a write. Skipped and
/// unsupported fields are not counted. A bad tag aborts the call; cells
/// written for earlier fields stay in the row.
pub(crate) fn project<R: RowWriter + ?Sized>(
    row: &mut R,
    source: &dyn Reflect,
    limit: i64,
    config: &ProjectorConfig,
) -> Result<usize, ProjectError> {
    if limit == 0 {
        return Ok(0);
    }

    let Kind::Record(record) = source.kind() else {
        return Err(ProjectError::NotRecord {
            type_name: source.type_name(),
        });
    };

    let fields = record.fields();
    let n = resolve_limit(fields.len(), limit);
    debug!(type_name = source.type_name(), fields = fields.len(), limit, n, "projecting record");

    let mut written = 0;
    for (position, field) in fields.iter().take(n).enumerate() {
        let descriptor = FieldDescriptor::parse(field.tag, &config.skip_marker).map_err(|source| {
            warn!(field = field.name, tag = field.tag, %source, "invalid column tag");
            ProjectError::InvalidTag {
                field: field.name,
                source,
            }
        })?;

        let col = match descriptor {
            FieldDescriptor::Skip => continue,
            FieldDescriptor::Column(col) => col,
        };

        match dispatch(row, field.value, Placement::Column(col), DispatchMode::Record) {
            Outcome::Written(_) => written += 1,
            Outcome::Unsupported => {
                let type_name = field.value.type_name();
                if config.strict {
                    return Err(ProjectError::Unsupported {
                        position,
                        type_name,
                    });
                }
                debug!(field = field.name, type_name, "skipping unsupported field");
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_record;
    use crate::nullable::{NullInt32, NullString};
    use crate::tag::TagError;
    use rowcast_core::{CellValue, Row};

    struct Order {
        id: i64,
        note: NullString,
        qty: NullInt32,
        tags: Vec<String>,
        paid: bool,
    }

    impl_record!(Order {
        id => "0",
        note => "2",
        qty => "1",
        tags => "3",
        paid => "4",
    });

    struct Broken {
        first: String,
        second: String,
        third: String,
    }

    impl_record!(Broken {
        first => "1",
        second => "oops",
        third => "0",
    });

    fn order() -> Order {
        Order {
            id: 7,
            note: NullString::null(),
            qty: NullInt32::new(3),
            tags: vec!["a".to_string()],
            paid: true,
        }
    }

    #[test]
    fn test_columns_follow_tags() {
        let mut row = Row::new();
        let written = project(&mut row, &order(), -1, &ProjectorConfig::default()).unwrap();

        // `tags` is a sequence, which has no cell representation
        assert_eq!(written, 4);
        assert_eq!(row.value(0), &CellValue::Integer(7));
        assert_eq!(row.value(1), &CellValue::Integer(3));
        assert_eq!(row.value(2), &CellValue::Text(String::new()));
        assert!(row.value(3).is_empty());
        assert_eq!(row.value(4), &CellValue::Boolean(true));
    }

    #[test]
    fn test_limit_counts_declared_fields() {
        let mut row = Row::new();
        let written = project(&mut row, &order(), 2, &ProjectorConfig::default()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(row.len(), 3);
        assert!(row.value(1).is_empty());
    }

    #[test]
    fn test_invalid_tag_keeps_earlier_writes() {
        let value = Broken {
            first: "one".to_string(),
            second: "two".to_string(),
            third: "three".to_string(),
        };
        let mut row = Row::new();
        let err = project(&mut row, &value, -1, &ProjectorConfig::default()).unwrap_err();

        assert_eq!(
            err,
            ProjectError::InvalidTag {
                field: "second",
                source: TagError::Malformed("oops".to_string()),
            }
        );
        assert_eq!(row.value(1).as_text(), "one");
        assert!(row.value(0).is_empty());
    }

    #[test]
    fn test_strict_mode_reports_unsupported_field() {
        let mut row = Row::new();
        let config = ProjectorConfig::default().with_strict(true);
        let err = project(&mut row, &order(), -1, &config).unwrap_err();

        assert!(matches!(err, ProjectError::Unsupported { position: 3, .. }));
    }

    #[test]
    fn test_custom_skip_marker() {
        let config = ProjectorConfig {
            skip_marker: "oops".to_string(),
            ..ProjectorConfig::default()
        };
        let value = Broken {
            first: "one".to_string(),
            second: "two".to_string(),
            third: "three".to_string(),
        };
        let mut row = Row::new();
        let written = project(&mut row, &value, -1, &config).unwrap();

        assert_eq!(written, 2);
        assert_eq!(row.values(), vec![
            CellValue::Text("three".to_string()),
            CellValue::Text("one".to_string()),
        ]);
    }

    #[test]
    fn test_not_a_record() {
        let mut row = Row::new();
        let err = project(&mut row, &vec![1, 2], -1, &ProjectorConfig::default()).unwrap_err();
        assert!(matches!(err, ProjectError::NotRecord { .. }));
    }
}
