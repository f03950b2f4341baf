use rowcast_core::RowWriter;
use tracing::debug;

use crate::config::ProjectorConfig;
use crate::dispatch::{dispatch, DispatchMode, Outcome, Placement};
use crate::error::ProjectError;
use crate::reflect::{Kind, Reflect};

/// Number of positions to visit: everything for a negative limit, otherwise
/// at most `limit`.
pub(crate) fn resolve_limit(len: usize, limit: i64) -> usize {
    match usize::try_from(limit) {
        Ok(limit) => limit.min(len),
        Err(_) => len,
    }
}

/// Append one cell per element, in order. Returns the number of positions
/// visited; unsupported elements take a position but write nothing.
pub(crate) fn project<R: RowWriter + ?Sized>(
    row: &mut R,
    source: &dyn Reflect,
    limit: i64,
    config: &ProjectorConfig,
) -> Result<usize, ProjectError> {
    if limit == 0 {
        return Ok(0);
    }

    let Kind::Sequence(seq) = source.kind() else {
        return Err(ProjectError::NotSequence {
            type_name: source.type_name(),
        });
    };

    let n = resolve_limit(seq.len(), limit);
    debug!(type_name = source.type_name(), len = seq.len(), limit, n, "projecting sequence");

    for position in 0..n {
        let outcome = match seq.get(position) {
            Some(value) => dispatch(row, value, Placement::Append, DispatchMode::Sequence),
            None => Outcome::Unsupported,
        };

        if outcome == Outcome::Unsupported {
            let type_name = seq.get(position).map_or("<missing>", |v| v.type_name());
            if config.strict {
                return Err(ProjectError::Unsupported {
                    position,
                    type_name,
                });
            }
            debug!(position, type_name, "skipping unsupported element");
        }
    }

    Ok(n)
}
