//! Fibonacci sequence generation on a single worker thread.
//!
//! Convention: F(0) = 0, F(1) = 1, F(2) = 1, F(3) = 2, ...

use std::thread;

use tracing::debug;

use crate::calculator::NumError;
use crate::constants::{MAX_FIB_TERMS, WORKER_THREAD_PREFIX};

/// Lazy iterator over the Fibonacci numbers that fit in a `u64`.
///
/// Ends after F(93) instead of overflowing.
///
/// # Example
/// ```
/// use numpar_core::fibonacci::FibSequence;
/// let fibs: Vec<u64> = FibSequence::new().take(7).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibSequence {
    next: Option<u64>,
    after: Option<u64>,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Some(0),
            after: Some(1),
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        let following = self.after.and_then(|b| current.checked_add(b));
        self.next = self.after;
        self.after = following;
        Some(current)
    }
}

/// Generate the first `terms` Fibonacci numbers on one worker thread.
///
/// The buffer is built by the worker and moved back to the caller at join.
///
/// # Errors
///
/// - `NumError::Overflow` if `terms > 94`.
/// - `NumError::Resource` if the worker cannot be started.
/// - `NumError::Worker` if the worker panics.
pub fn generate_sequence(terms: usize) -> Result<Vec<u64>, NumError> {
    if terms > MAX_FIB_TERMS {
        return Err(NumError::Overflow(terms));
    }

    let handle = thread::Builder::new()
        .name(format!("{WORKER_THREAD_PREFIX}-fib"))
        .spawn(move || FibSequence::new().take(terms).collect::<Vec<u64>>())
        .map_err(|source| NumError::Resource { rank: 0, source })?;
    debug!(terms, "fibonacci worker started");

    let sequence = handle
        .join()
        .map_err(|_| NumError::Worker("fibonacci worker panicked".into()))?;
    debug!(terms = sequence.len(), "fibonacci worker joined");
    Ok(sequence)
}
