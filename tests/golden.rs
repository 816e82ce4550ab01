//! Golden file integration tests.
//!
//! Reads tests/testdata/pi_reference.json and checks the sequential and
//! parallel calculators against known midpoint-rule values.

use std::sync::Arc;

use serde::Deserialize;

use numpar_core::calculator::PiCalculator;
use numpar_core::constants::PI_REFERENCE;
use numpar_core::options::{Options, SpawnPolicy};
use numpar_core::reducer::{ParallelMidpoint, ParallelReducer};
use numpar_core::sequential::{compute_pi_sequential, SequentialMidpoint};
use numpar_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    intervals: i64,
    threads: i64,
    expected: String,
    abs_error: String,
}

impl Scenario {
    fn expected(&self) -> f64 {
        self.expected.parse().expect("expected is not a float")
    }

    fn abs_error(&self) -> f64 {
        self.abs_error.parse().expect("abs_error is not a float")
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/pi_reference.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_not_empty() {
    assert!(!load_golden_data().scenarios.is_empty());
}

#[test]
fn sequential_matches_golden_bits() {
    for s in load_golden_data().scenarios {
        let value = compute_pi_sequential(s.intervals).unwrap();
        assert_eq!(
            value.to_bits(),
            s.expected().to_bits(),
            "n={}: got {value}, expected {}",
            s.intervals,
            s.expected
        );
    }
}

#[test]
fn parallel_matches_golden_values() {
    for s in load_golden_data().scenarios {
        let approx = ParallelMidpoint::new()
            .calculate(s.intervals, &Options::with_threads(s.threads))
            .unwrap();
        let expected = s.expected();
        assert!(
            ((approx.value - expected) / expected).abs() < 1e-12,
            "n={} H={}: got {}, expected {expected}",
            s.intervals,
            s.threads,
            approx.value
        );
        assert_eq!(approx.reports.len(), usize::try_from(s.threads).unwrap());
    }
}

#[test]
fn golden_errors_are_consistent() {
    for s in load_golden_data().scenarios {
        let error = (s.expected() - PI_REFERENCE).abs();
        assert!((error - s.abs_error()).abs() < 1e-15, "n={}", s.intervals);
    }
}

#[test]
fn inline_policy_matches_golden_values() {
    for s in load_golden_data().scenarios {
        let reduction = ParallelReducer::new()
            .with_policy(SpawnPolicy::RunInline)
            .reduce(s.intervals, s.threads)
            .unwrap();
        assert!((reduction.value - s.expected()).abs() < 1e-12);
    }
}

#[test]
fn orchestrated_comparison_passes() {
    let calculators: Vec<Arc<dyn PiCalculator>> =
        vec![Arc::new(ParallelMidpoint::new()), Arc::new(SequentialMidpoint::new())];
    for s in load_golden_data().scenarios {
        let results = execute_calculations(&calculators, s.intervals, &Options::with_threads(s.threads));
        assert!(analyze_comparison_results(&results, 1e-12).is_ok(), "n={}", s.intervals);
    }
}
