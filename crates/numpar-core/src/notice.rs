//! Non-fatal conditions surfaced to the caller alongside a result.

use std::fmt;

/// A warning-level condition that did not stop the computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A worker count of zero or less was replaced by a single worker.
    WorkerCountCorrected {
        /// The count the caller asked for.
        requested: i64,
    },
    /// A worker produced no value; its range contributed zero.
    WorkerFailed {
        /// Rank of the failed worker.
        rank: usize,
        /// Why the worker produced nothing.
        reason: String,
    },
    /// A worker thread could not be created and its range was evaluated
    /// on the calling thread instead.
    RanInline {
        /// Rank whose thread was refused.
        rank: usize,
        /// The spawn error.
        reason: String,
    },
}

impl Notice {
    /// Whether this notice means the result under-counts part of the domain.
    #[must_use]
    pub fn is_degrading(&self) -> bool {
        matches!(self, Self::WorkerFailed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerCountCorrected { requested } => {
                write!(f, "invalid worker count ({requested}), using 1 worker")
            }
            Self::WorkerFailed { rank, reason } => {
                write!(f, "worker {rank} produced no result ({reason}); its range counts as zero")
            }
            Self::RanInline { rank, reason } => {
                write!(f, "worker {rank} could not be started ({reason}); ran its range inline")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_worker_count() {
        let notice = Notice::WorkerCountCorrected { requested: -3 };
        assert_eq!(notice.to_string(), "invalid worker count (-3), using 1 worker");
        assert!(!notice.is_degrading());
    }

    #[test]
    fn worker_failure_degrades() {
        let notice = Notice::WorkerFailed {
            rank: 2,
            reason: "panicked".into(),
        };
        assert!(notice.is_degrading());
        assert!(notice.to_string().starts_with("worker 2"));
    }
}
