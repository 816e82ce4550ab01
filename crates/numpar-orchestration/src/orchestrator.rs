//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use numpar_core::calculator::{NumError, PiCalculator};
use numpar_core::options::Options;

use crate::interfaces::CalculationResult;

/// Execute every calculator in turn with the same inputs.
///
/// Calculators run one after another on the calling thread so that the
/// parallel one has the machine to itself while it is being timed.
pub fn execute_calculations(
    calculators: &[Arc<dyn PiCalculator>],
    intervals: i64,
    opts: &Options,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.calculate(intervals, opts);
            let duration = start.elapsed();
            debug!(algorithm = calc.name(), ?duration, ok = outcome.is_ok(), "calculation finished");

            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that all successful results agree within `tolerance` (relative).
///
/// # Errors
///
/// `NumError::Calculation` if no result succeeded, `NumError::Mismatch` if
/// two successful values differ by more than `tolerance`.
pub fn analyze_comparison_results(
    results: &[CalculationResult],
    tolerance: f64,
) -> Result<(), NumError> {
    let values: Vec<f64> = results.iter().filter_map(CalculationResult::value).collect();

    let Some(&first) = values.first() else {
        return Err(NumError::Calculation("no valid results".into()));
    };

    for &value in &values[1..] {
        let relative = ((value - first) / first).abs();
        if !relative.is_finite() || relative > tolerance {
            return Err(NumError::Mismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use numpar_core::calculator::Approximation;
    use numpar_core::constants::{COMPARISON_TOLERANCE, PI_REFERENCE};
    use numpar_core::notice::Notice;
    use numpar_core::reducer::ParallelMidpoint;
    use numpar_core::sequential::SequentialMidpoint;

    fn ok(algorithm: &str, value: f64) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Ok(Approximation::plain(value)),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(algorithm: &str) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Err(NumError::Calculation("failed".into())),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let calc: Arc<dyn PiCalculator> = Arc::new(ParallelMidpoint::new());
        let results = execute_calculations(&[calc], 1_000_000, &Options::with_threads(4));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "ParallelMidpoint");
        let value = results[0].value().unwrap();
        assert!((value - PI_REFERENCE).abs() < 1e-6);
    }

    #[test]
    fn execute_both_calculators_agree() {
        let parallel: Arc<dyn PiCalculator> = Arc::new(ParallelMidpoint::new());
        let sequential: Arc<dyn PiCalculator> = Arc::new(SequentialMidpoint::new());
        let results =
            execute_calculations(&[parallel, sequential], 500_000, &Options::with_threads(8));
        assert_eq!(results.len(), 2);
        assert!(analyze_comparison_results(&results, COMPARISON_TOLERANCE).is_ok());
    }

    #[test]
    fn execute_invalid_intervals() {
        let calc: Arc<dyn PiCalculator> = Arc::new(ParallelMidpoint::new());
        let results = execute_calculations(&[calc], 0, &Options::with_threads(4));
        assert!(matches!(results[0].outcome, Err(NumError::InvalidInput(_))));
    }

    #[test]
    fn execute_keeps_correction_notice() {
        let calc: Arc<dyn PiCalculator> = Arc::new(ParallelMidpoint::new());
        let results = execute_calculations(&[calc], 1_000, &Options::with_threads(-2));
        let approx = results[0].outcome.as_ref().unwrap();
        assert_eq!(approx.notices, [Notice::WorkerCountCorrected { requested: -2 }]);
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("A", 3.2), ok("B", 3.2)];
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn analyze_within_tolerance() {
        let results = vec![ok("A", 3.0), ok("B", 3.0 * (1.0 + 1e-12))];
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", 3.1), ok("B", 3.2)];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(NumError::Mismatch)
        ));
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![failed("A")];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(NumError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[], 1e-9),
            Err(NumError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![ok("A", 3.2), failed("B"), ok("C", 3.2)];
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![ok("A", 3.2), ok("B", 3.2), ok("C", 3.3)];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(NumError::Mismatch)
        ));
    }

    #[test]
    fn analyze_nan_is_mismatch() {
        let results = vec![ok("A", 3.2), ok("B", f64::NAN)];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(NumError::Mismatch)
        ));
    }
}
