//! # numpar-orchestration
//!
//! Calculator selection, timed execution, and cross-validation of results.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
