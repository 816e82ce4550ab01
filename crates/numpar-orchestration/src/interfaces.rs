//! Orchestration interfaces.

use std::time::Duration;

use numpar_core::calculator::{Approximation, NumError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful approximation.
    fn present_result(
        &self,
        algorithm: &str,
        intervals: i64,
        approximation: &Approximation,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// The approximation or a structured error.
    pub outcome: Result<Approximation, NumError>,
    /// Wall-clock duration of the call.
    pub duration: Duration,
}

impl CalculationResult {
    /// The approximated value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|a| a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_result_value() {
        let ok = CalculationResult {
            algorithm: "ParallelMidpoint".into(),
            outcome: Ok(Approximation::plain(3.25)),
            duration: Duration::from_millis(100),
        };
        assert_eq!(ok.value(), Some(3.25));

        let err = CalculationResult {
            algorithm: "ParallelMidpoint".into(),
            outcome: Err(NumError::InvalidInput("n".into())),
            duration: Duration::ZERO,
        };
        assert_eq!(err.value(), None);
    }
}
