//! The midpoint rule: step width, integrand, and range kernels.

use std::fmt;

use crate::partition::WorkRange;

/// Integration step width `h = 1/n`.
///
/// Computed once per call and shared read-only by every worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepWidth(f64);

impl StepWidth {
    /// Step width for `intervals` subintervals of `[0, 1]`.
    #[must_use]
    pub fn for_intervals(intervals: u64) -> Self {
        debug_assert!(intervals > 0);
        Self(1.0 / intervals as f64)
    }

    /// The width as a plain number.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Midpoint of subinterval `index`: `h * (index + 0.5)`.
    #[inline]
    #[must_use]
    pub fn midpoint(self, index: u64) -> f64 {
        self.0 * (index as f64 + 0.5)
    }
}

/// `f(x) = 4 / (1 + x²)`, whose integral over `[0, 1]` is π.
#[inline]
#[must_use]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Unscaled sum of the integrand at the midpoints of `range`.
///
/// Scaling by the step width is left to the caller so that it happens once
/// per reduction.
#[must_use]
pub fn midpoint_sum(range: WorkRange, step: StepWidth) -> f64 {
    let mut sum = 0.0;
    for i in range.indices() {
        sum += integrand(step.midpoint(i));
    }
    sum
}

/// Everything one worker needs, moved into it at spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerTask {
    /// Worker index, also the position of its result in the reduction.
    pub rank: usize,
    /// Indices this worker owns.
    pub range: WorkRange,
    /// Shared step width.
    pub step: StepWidth,
}

/// A worker that finished without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFailure(pub String);

impl fmt::Display for WorkerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for WorkerFailure {}

/// Per-worker accumulation over an assigned range.
pub trait RangeKernel: Send + Sync {
    /// Compute the worker's partial result for `task`.
    fn accumulate(&self, task: &WorkerTask) -> Result<f64, WorkerFailure>;
}

/// Production kernel: the unscaled midpoint sum of `4 / (1 + x²)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MidpointKernel;

impl RangeKernel for MidpointKernel {
    fn accumulate(&self, task: &WorkerTask) -> Result<f64, WorkerFailure> {
        Ok(midpoint_sum(task.range, task.step))
    }
}
