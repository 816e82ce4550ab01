//! Single-pass reference implementation of the midpoint rule.

use tracing::debug;

use crate::calculator::{Approximation, NumError, PiCalculator};
use crate::input::parse_intervals;
use crate::integrand::{midpoint_sum, StepWidth};
use crate::options::Options;
use crate::partition::WorkRange;

/// Approximate π on the calling thread.
///
/// # Example
/// ```
/// let pi = numpar_core::compute_pi_sequential(1_000).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-6);
/// ```
pub fn compute_pi_sequential(intervals: i64) -> Result<f64, NumError> {
    let n = parse_intervals(intervals)?;
    let step = StepWidth::for_intervals(n);
    let value = step.get() * midpoint_sum(WorkRange::new(0, n), step);
    debug!(intervals = n, value, "sequential pass complete");
    Ok(value)
}

/// `PiCalculator` that ignores the thread options and runs in one pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialMidpoint;

impl SequentialMidpoint {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PiCalculator for SequentialMidpoint {
    fn calculate(&self, intervals: i64, _opts: &Options) -> Result<Approximation, NumError> {
        compute_pi_sequential(intervals).map(Approximation::plain)
    }

    fn name(&self) -> &str {
        "SequentialMidpoint"
    }
}
