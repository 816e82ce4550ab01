//! Contiguous near-equal partitioning of an iteration range.

use std::ops::Range;

/// Half-open interval `[start, end)` of iteration indices owned by one worker.
///
/// A range may be empty (`start == end`) when there are more workers than
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkRange {
    /// First index (inclusive).
    pub start: u64,
    /// Last index (exclusive).
    pub end: u64,
}

impl WorkRange {
    /// Create a range. `end` must not precede `start`.
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "range end {end} precedes start {start}");
        Self { start, end }
    }

    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range holds no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The indices as a standard range.
    #[must_use]
    pub fn indices(&self) -> Range<u64> {
        self.start..self.end
    }
}

/// Lazily yields the ranges of [`partition`] in ascending rank order.
///
/// Each range is computed from its rank alone, so no storage proportional
/// to the worker count is needed.
#[derive(Debug, Clone)]
pub struct Ranges {
    base: u64,
    remainder: u64,
    count: u64,
    next_rank: u64,
    start: u64,
}

impl Iterator for Ranges {
    type Item = WorkRange;

    fn next(&mut self) -> Option<WorkRange> {
        if self.next_rank == self.count {
            return None;
        }
        let extra = u64::from(self.next_rank < self.remainder);
        let end = self.start + self.base + extra;
        let range = WorkRange::new(self.start, end);
        self.start = end;
        self.next_rank += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.count - self.next_rank).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Ranges {}

/// Iterate over the `workers` contiguous ranges covering `[0, total)`.
///
/// A worker count of zero is treated as one.
#[must_use]
pub fn ranges(total: u64, workers: usize) -> Ranges {
    let count = workers.max(1) as u64;
    Ranges {
        base: total / count,
        remainder: total % count,
        count,
        next_rank: 0,
        start: 0,
    }
}

/// Split `[0, total)` into exactly `workers` contiguous ranges.
///
/// The first `total % workers` ranges hold one index more than the rest, so
/// sizes differ by at most one. Each range starts where the previous one
/// ended. A worker count of zero is treated as one.
///
/// # Example
/// ```
/// use numpar_core::partition::partition;
///
/// let ranges: Vec<_> = partition(10, 4).iter().map(|r| (r.start, r.end)).collect();
/// assert_eq!(ranges, [(0, 3), (3, 6), (6, 8), (8, 10)]);
/// ```
#[must_use]
pub fn partition(total: u64, workers: usize) -> Vec<WorkRange> {
    ranges(total, workers).collect()
}
