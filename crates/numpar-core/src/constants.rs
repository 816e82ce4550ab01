//! Reference values, limits, and exit codes.

/// Reference value of π the approximations are compared against.
pub const PI_REFERENCE: f64 = std::f64::consts::PI;

/// Largest accepted interval count (2^53).
///
/// Above this, `i as f64` stops being exact and neighbouring midpoints
/// collapse onto the same sample.
pub const MAX_INTERVALS: u64 = 1 << 53;

/// Maximum number of Fibonacci terms whose values fit in a `u64`.
/// F(93) = 12200160415121876738 is the last one.
pub const MAX_FIB_TERMS: usize = 94;

/// Relative tolerance used when cross-validating calculators.
pub const COMPARISON_TOLERANCE: f64 = 1e-9;

/// Name prefix for spawned worker threads.
pub const WORKER_THREAD_PREFIX: &str = "numpar-worker";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including rejected input.
    pub const ERROR_GENERIC: i32 = 1;
    /// Workers could not be created.
    pub const ERROR_RESOURCE: i32 = 2;
    /// Calculator results did not agree during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
