//! Worker creation.

use std::io;
use std::thread::{self, JoinHandle};

use crate::constants::WORKER_THREAD_PREFIX;
use crate::integrand::WorkerFailure;

/// What a worker hands back at join.
pub type PartialOutcome = Result<f64, WorkerFailure>;

/// A unit of work ready to run on a fresh worker.
pub type WorkerJob = Box<dyn FnOnce() -> PartialOutcome + Send + 'static>;

/// Creates one worker per job.
pub trait WorkerSpawner: Send + Sync {
    /// Start `job` as worker `rank`.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the worker cannot be created. The job is
    /// dropped without running in that case.
    fn spawn(&self, rank: usize, job: WorkerJob) -> io::Result<JoinHandle<PartialOutcome>>;
}

/// Spawns each worker as a named OS thread.
#[derive(Debug, Default, Clone)]
pub struct OsThreadSpawner {
    stack_size: Option<usize>,
}

impl OsThreadSpawner {
    /// Spawner using the platform's default stack size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawner with an explicit stack size (`None` = platform default).
    #[must_use]
    pub fn with_stack_size(stack_size: Option<usize>) -> Self {
        Self { stack_size }
    }
}

impl WorkerSpawner for OsThreadSpawner {
    fn spawn(&self, rank: usize, job: WorkerJob) -> io::Result<JoinHandle<PartialOutcome>> {
        let mut builder = thread::Builder::new().name(format!("{WORKER_THREAD_PREFIX}-{rank}"));
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }
        builder.spawn(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_thread_is_named() {
        let spawner = OsThreadSpawner::new();
        let handle = spawner
            .spawn(
                7,
                Box::new(|| {
                    let name = thread::current().name().map(str::to_owned);
                    assert_eq!(name.as_deref(), Some("numpar-worker-7"));
                    Ok(1.5)
                }),
            )
            .unwrap();
        assert_eq!(handle.join().unwrap(), Ok(1.5));
    }

    #[test]
    fn custom_stack_size_runs() {
        let spawner = OsThreadSpawner::with_stack_size(Some(256 * 1024));
        let handle = spawner.spawn(0, Box::new(|| Ok(2.0))).unwrap();
        assert_eq!(handle.join().unwrap(), Ok(2.0));
    }
}
