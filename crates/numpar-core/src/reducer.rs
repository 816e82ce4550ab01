//! Parallel reducer: one worker per range, join in rank order, sum once.
//!
//! Workers share nothing mutable. Each owns its `WorkerTask` and a local
//! accumulator, and hands its partial result back by value at join. The
//! join loop is the only synchronization point, and no partial is read
//! before its worker has terminated.
//!
//! The final sum runs in ascending rank order, so a fixed worker count
//! reproduces the same bits. Different worker counts group the additions
//! differently; floating-point addition is not associative, so those
//! results agree only to within rounding error.

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{debug, info, warn};

use crate::calculator::{Approximation, NumError, PiCalculator};
use crate::input::{parse_intervals, resolve_workers};
use crate::integrand::{MidpointKernel, RangeKernel, StepWidth, WorkerFailure, WorkerTask};
use crate::notice::Notice;
use crate::options::{Options, SpawnPolicy};
use crate::partition::{ranges, WorkRange};
use crate::spawner::{OsThreadSpawner, PartialOutcome, WorkerSpawner};

/// What one worker contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReport {
    /// Worker index.
    pub rank: usize,
    /// Indices it owned.
    pub range: WorkRange,
    /// Its unscaled partial sum, or `None` if it produced nothing.
    pub partial: Option<f64>,
}

/// Outcome of one parallel reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// `step * Σ partials`.
    pub value: f64,
    /// Step width the workers sampled with.
    pub step: StepWidth,
    /// One report per worker, in ascending rank order.
    pub workers: Vec<WorkerReport>,
    /// Non-fatal conditions raised during the call.
    pub notices: Vec<Notice>,
}

impl From<Reduction> for Approximation {
    fn from(reduction: Reduction) -> Self {
        Self {
            value: reduction.value,
            workers: reduction.workers.len(),
            reports: reduction.workers,
            notices: reduction.notices,
        }
    }
}

enum SlotState {
    Running(JoinHandle<PartialOutcome>),
    Finished(PartialOutcome),
}

/// A worker's task paired with the place its result will come from.
struct WorkerSlot {
    task: WorkerTask,
    state: SlotState,
}

/// Runs the partitioned integration on freshly spawned workers.
pub struct ParallelReducer {
    kernel: Arc<dyn RangeKernel>,
    spawner: Arc<dyn WorkerSpawner>,
    policy: SpawnPolicy,
}

impl ParallelReducer {
    /// Reducer with the midpoint kernel, OS threads, and the abort policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kernel: Arc::new(MidpointKernel),
            spawner: Arc::new(OsThreadSpawner::new()),
            policy: SpawnPolicy::Abort,
        }
    }

    /// Reducer configured from calculation options.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self {
            spawner: Arc::new(OsThreadSpawner::with_stack_size(opts.stack_size)),
            policy: opts.spawn_policy,
            ..Self::new()
        }
    }

    /// Replace the per-worker kernel.
    #[must_use]
    pub fn with_kernel(mut self, kernel: Arc<dyn RangeKernel>) -> Self {
        self.kernel = kernel;
        self
    }

    /// Replace the worker spawner.
    #[must_use]
    pub fn with_spawner(mut self, spawner: Arc<dyn WorkerSpawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Replace the spawn failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SpawnPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Approximate π with `intervals` subintervals split across `threads`
    /// workers.
    ///
    /// # Errors
    ///
    /// - `NumError::InvalidInput` if `intervals <= 0`; no worker is started.
    /// - `NumError::Resource` if the worker table cannot be allocated for
    ///   `threads` workers, or if a worker cannot be created under
    ///   `SpawnPolicy::Abort`. Workers already started are joined first.
    pub fn reduce(&self, intervals: i64, threads: i64) -> Result<Reduction, NumError> {
        let n = parse_intervals(intervals)?;
        let (workers, correction) = resolve_workers(threads);
        let mut notices: Vec<Notice> = correction.into_iter().collect();

        let step = StepWidth::for_intervals(n);
        let slots = self.start_workers(n, workers, step, &mut notices)?;
        let reports = join_workers(slots, &mut notices);

        let sum: f64 = reports.iter().filter_map(|r| r.partial).sum();
        let value = step.get() * sum;
        info!(intervals = n, workers, value, "parallel reduction complete");

        Ok(Reduction {
            value,
            step,
            workers: reports,
            notices,
        })
    }

    fn start_workers(
        &self,
        n: u64,
        workers: usize,
        step: StepWidth,
        notices: &mut Vec<Notice>,
    ) -> Result<Vec<WorkerSlot>, NumError> {
        let mut slots: Vec<WorkerSlot> = Vec::new();
        if let Err(err) = slots.try_reserve_exact(workers) {
            warn!(workers, error = %err, "worker table could not be allocated");
            return Err(NumError::Resource {
                rank: 0,
                source: io::Error::new(io::ErrorKind::OutOfMemory, err),
            });
        }

        for (rank, range) in ranges(n, workers).enumerate() {
            let task = WorkerTask { rank, range, step };
            let kernel = Arc::clone(&self.kernel);

            match self.spawner.spawn(rank, Box::new(move || kernel.accumulate(&task))) {
                Ok(handle) => {
                    debug!(rank, start = range.start, end = range.end, "worker started");
                    slots.push(WorkerSlot {
                        task,
                        state: SlotState::Running(handle),
                    });
                }
                Err(source) => match self.policy {
                    SpawnPolicy::Abort => {
                        warn!(
                            rank,
                            started = slots.len(),
                            error = %source,
                            "worker could not be started, joining started workers"
                        );
                        join_abandoned(slots);
                        return Err(NumError::Resource { rank, source });
                    }
                    SpawnPolicy::RunInline => {
                        warn!(rank, error = %source, "worker could not be started, running inline");
                        notices.push(Notice::RanInline {
                            rank,
                            reason: source.to_string(),
                        });
                        let outcome = run_inline(self.kernel.as_ref(), &task);
                        slots.push(WorkerSlot {
                            task,
                            state: SlotState::Finished(outcome),
                        });
                    }
                },
            }
        }

        Ok(slots)
    }
}

impl Default for ParallelReducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for every started worker, discarding results.
fn join_abandoned(slots: Vec<WorkerSlot>) {
    for slot in slots {
        if let SlotState::Running(handle) = slot.state {
            let joined = handle.join().is_ok();
            debug!(rank = slot.task.rank, joined, "abandoned worker joined");
        }
    }
}

/// Join all workers in ascending rank order.
fn join_workers(slots: Vec<WorkerSlot>, notices: &mut Vec<Notice>) -> Vec<WorkerReport> {
    slots
        .into_iter()
        .map(|slot| {
            let WorkerTask { rank, range, .. } = slot.task;
            let outcome = match slot.state {
                SlotState::Running(handle) => handle
                    .join()
                    .unwrap_or_else(|payload| Err(panic_failure(payload.as_ref()))),
                SlotState::Finished(outcome) => outcome,
            };

            let partial = match outcome {
                Ok(partial) => {
                    debug!(rank, partial, "worker joined");
                    Some(partial)
                }
                Err(failure) => {
                    warn!(rank, reason = %failure, "worker produced no result, counting its range as zero");
                    notices.push(Notice::WorkerFailed {
                        rank,
                        reason: failure.0,
                    });
                    None
                }
            };

            WorkerReport {
                rank,
                range,
                partial,
            }
        })
        .collect()
}

fn run_inline(kernel: &dyn RangeKernel, task: &WorkerTask) -> PartialOutcome {
    panic::catch_unwind(AssertUnwindSafe(|| kernel.accumulate(task)))
        .unwrap_or_else(|payload| Err(panic_failure(payload.as_ref())))
}

fn panic_failure(payload: &(dyn Any + Send)) -> WorkerFailure {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    WorkerFailure(format!("worker panicked: {message}"))
}

/// Approximate π on `threads` workers and return just the value.
///
/// Degraded results (a worker that produced nothing) are still returned;
/// use [`ParallelReducer::reduce`] to see the notices.
///
/// # Example
/// ```
/// let pi = numpar_core::compute_pi_parallel(1, 1).unwrap();
/// assert!((pi - 3.2).abs() < 1e-15);
/// ```
pub fn compute_pi_parallel(intervals: i64, threads: i64) -> Result<f64, NumError> {
    ParallelReducer::new()
        .reduce(intervals, threads)
        .map(|reduction| reduction.value)
}

/// `PiCalculator` backed by the parallel reducer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelMidpoint;

impl ParallelMidpoint {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PiCalculator for ParallelMidpoint {
    fn calculate(&self, intervals: i64, opts: &Options) -> Result<Approximation, NumError> {
        ParallelReducer::from_options(opts)
            .reduce(intervals, opts.threads)
            .map(Approximation::from)
    }

    fn name(&self) -> &str {
        "ParallelMidpoint"
    }
}
