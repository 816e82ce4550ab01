//! Validation of caller-supplied counts.

use tracing::warn;

use crate::calculator::NumError;
use crate::constants::MAX_INTERVALS;
use crate::notice::Notice;

/// Accept `raw` as a subinterval count.
///
/// # Errors
///
/// `NumError::InvalidInput` when `raw <= 0` or `raw > MAX_INTERVALS`.
pub fn parse_intervals(raw: i64) -> Result<u64, NumError> {
    if raw <= 0 {
        return Err(NumError::InvalidInput(format!(
            "interval count must be at least 1, got {raw}"
        )));
    }
    let n = raw.unsigned_abs();
    if n > MAX_INTERVALS {
        return Err(NumError::InvalidInput(format!(
            "interval count must be at most {MAX_INTERVALS}, got {n}"
        )));
    }
    Ok(n)
}

/// Resolve `raw` to a usable worker count.
///
/// Zero or negative counts become a single worker, reported through the
/// returned notice rather than an error. Counts too large for memory are
/// rejected later, when the reducer reserves its worker table.
#[must_use]
pub fn resolve_workers(raw: i64) -> (usize, Option<Notice>) {
    if raw <= 0 {
        warn!(requested = raw, "invalid worker count, using 1 worker");
        return (1, Some(Notice::WorkerCountCorrected { requested: raw }));
    }
    let count = usize::try_from(raw).unwrap_or(usize::MAX);
    (count, None)
}
