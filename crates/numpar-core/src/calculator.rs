//! The calculator trait, its result type, and the crate error.
//!
//! `PiCalculator` is the public trait consumed by orchestration. It is
//! implemented by `ParallelMidpoint` (the partitioned reducer) and
//! `SequentialMidpoint` (the single-pass reference).

use std::io;

use crate::notice::Notice;
use crate::options::Options;
use crate::reducer::WorkerReport;

/// Error type for numpar computations.
#[derive(Debug, thiserror::Error)]
pub enum NumError {
    /// Input rejected before any work began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A worker thread could not be created.
    #[error("could not start worker {rank}: {source}")]
    Resource {
        /// Rank of the worker that could not be started.
        rank: usize,
        /// The underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The requested Fibonacci terms do not fit in a `u64`.
    #[error("{0} Fibonacci terms overflow u64 (at most 94 fit)")]
    Overflow(usize),

    /// A worker whose result cannot be replaced failed.
    #[error("worker failed: {0}")]
    Worker(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different calculators don't agree.
    #[error("result mismatch between calculators")]
    Mismatch,
}

/// A finished approximation together with the notices raised while
/// computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximation {
    /// The approximated value.
    pub value: f64,
    /// Number of workers that took part.
    pub workers: usize,
    /// Per-worker ranges and partial sums in ascending rank order. Empty
    /// for sequential runs.
    pub reports: Vec<WorkerReport>,
    /// Non-fatal conditions, in the order they were raised.
    pub notices: Vec<Notice>,
}

impl Approximation {
    /// An approximation produced without workers or notices.
    #[must_use]
    pub fn plain(value: f64) -> Self {
        Self {
            value,
            workers: 1,
            reports: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Absolute distance from the given reference.
    #[must_use]
    pub fn abs_error(&self, reference: f64) -> f64 {
        (self.value - reference).abs()
    }

    /// Whether any worker's contribution was lost.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.notices.iter().any(Notice::is_degrading)
    }
}

/// Public trait for π calculators, consumed by orchestration.
pub trait PiCalculator: Send + Sync {
    /// Approximate π with `intervals` midpoint samples.
    ///
    /// `intervals` is taken as given by the caller and validated here.
    fn calculate(&self, intervals: i64, opts: &Options) -> Result<Approximation, NumError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_error_display() {
        let err = NumError::InvalidInput("n must be positive".into());
        assert_eq!(err.to_string(), "invalid input: n must be positive");

        let err = NumError::Resource {
            rank: 3,
            source: io::Error::new(io::ErrorKind::OutOfMemory, "no threads left"),
        };
        assert_eq!(err.to_string(), "could not start worker 3: no threads left");

        assert_eq!(
            NumError::Overflow(100).to_string(),
            "100 Fibonacci terms overflow u64 (at most 94 fit)"
        );
    }

    #[test]
    fn resource_error_keeps_source() {
        use std::error::Error;

        let err = NumError::Resource {
            rank: 0,
            source: io::Error::new(io::ErrorKind::WouldBlock, "again"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn approximation_degradation() {
        let mut approx = Approximation::plain(3.0);
        assert!(!approx.is_degraded());
        approx.notices.push(Notice::WorkerCountCorrected { requested: 0 });
        assert!(!approx.is_degraded());
        approx.notices.push(Notice::WorkerFailed {
            rank: 1,
            reason: "boom".into(),
        });
        assert!(approx.is_degraded());
    }

    #[test]
    fn approximation_abs_error() {
        let approx = Approximation::plain(3.25);
        assert!((approx.abs_error(3.0) - 0.25).abs() < f64::EPSILON);
    }
}
