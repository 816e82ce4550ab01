//! CLI result presenter.

use std::time::Duration;

use numpar_core::calculator::Approximation;
use numpar_core::constants::PI_REFERENCE;
use numpar_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_count, format_duration, format_sequence, format_value};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render the lines for one approximation.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        intervals: i64,
        approximation: &Approximation,
        duration: Duration,
        details: bool,
    ) -> Vec<String> {
        if self.quiet {
            return vec![format_value(approximation.value)];
        }

        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("n (intervals): {}", format_count(intervals)),
            format!("H (workers): {}", approximation.workers),
            format!("pi ≈ {}", format_value(approximation.value)),
            format!(
                "Absolute error: {}",
                format_value(approximation.abs_error(PI_REFERENCE))
            ),
            format!("Duration: {}", format_duration(duration)),
        ];

        if approximation.is_degraded() {
            lines.push("Result is degraded: at least one worker contributed nothing".to_string());
        }

        if details || self.verbose {
            for report in &approximation.reports {
                let shown = report
                    .partial
                    .map_or_else(|| "none".to_string(), |p| format!("{p:.6}"));
                lines.push(format!(
                    "  worker {} [{}, {}): partial sum {shown}",
                    report.rank, report.range.start, report.range.end
                ));
            }
            for notice in &approximation.notices {
                lines.push(format!("  notice: {notice}"));
            }
        }

        lines
    }

    /// Render the comparison table.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }

        let mut lines = vec![String::new(), "Comparison Results:".to_string(), format!("{:-<60}", "")];
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            lines.push(format!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            ));
        }
        lines
    }

    /// Print a Fibonacci sequence.
    pub fn present_sequence(&self, terms: &[u64]) {
        if self.quiet {
            println!("{}", format_sequence(terms));
            return;
        }
        println!("Fibonacci terms: {}", terms.len());
        println!("{}", format_sequence(terms));
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        intervals: i64,
        approximation: &Approximation,
        duration: Duration,
        details: bool,
    ) {
        for line in self.render_result(algorithm, intervals, approximation, duration, details) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        for line in self.render_comparison(results) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
