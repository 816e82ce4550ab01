//! # numpar-core
//!
//! Fixed-thread-count parallel midpoint integration of π.
//!
//! The iteration range `[0, n)` is split into near-equal contiguous blocks,
//! one per worker. Each worker sums `4 / (1 + x²)` over its block with no
//! shared mutable state, and the reducer joins all workers in rank order
//! before scaling the total by the step width once. A sequential reference
//! and a single-worker Fibonacci generator live alongside.

pub mod calculator;
pub mod constants;
pub mod fibonacci;
pub mod input;
pub mod integrand;
pub mod notice;
pub mod options;
pub mod partition;
pub mod reducer;
pub mod registry;
pub mod sequential;
pub mod spawner;

// Re-exports
pub use calculator::{Approximation, NumError, PiCalculator};
pub use constants::{exit_codes, COMPARISON_TOLERANCE, MAX_FIB_TERMS, MAX_INTERVALS, PI_REFERENCE};
pub use fibonacci::generate_sequence;
pub use notice::Notice;
pub use options::{Options, SpawnPolicy};
pub use partition::{partition, WorkRange};
pub use reducer::{compute_pi_parallel, ParallelMidpoint, ParallelReducer, Reduction, WorkerReport};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use sequential::{compute_pi_sequential, SequentialMidpoint};
