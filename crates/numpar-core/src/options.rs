//! Calculation options.

/// What the reducer does when a worker thread cannot be created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Join the workers already started, then fail the whole call.
    #[default]
    Abort,
    /// Evaluate the refused range on the calling thread and continue.
    RunInline,
}

/// Options for a π calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Requested worker count. Values of zero or less become one worker.
    pub threads: i64,
    /// Behaviour when a worker thread cannot be created.
    pub spawn_policy: SpawnPolicy,
    /// Worker stack size in bytes (`None` = platform default).
    pub stack_size: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: 1,
            spawn_policy: SpawnPolicy::Abort,
            stack_size: None,
        }
    }
}

impl Options {
    /// Options for `threads` workers with everything else defaulted.
    #[must_use]
    pub fn with_threads(threads: i64) -> Self {
        Self {
            threads,
            ..Self::default()
        }
    }

    /// Normalize options, treating a zero stack size as "platform default".
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.stack_size == Some(0) {
            self.stack_size = None;
        }
        self
    }
}
