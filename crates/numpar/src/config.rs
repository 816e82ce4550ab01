//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use numpar_core::options::{Options, SpawnPolicy};

/// What to do when a worker thread cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpawnFailure {
    /// Join started workers and fail.
    Abort,
    /// Run the refused range on the main thread.
    Inline,
}

impl From<SpawnFailure> for SpawnPolicy {
    fn from(value: SpawnFailure) -> Self {
        match value {
            SpawnFailure::Abort => Self::Abort,
            SpawnFailure::Inline => Self::RunInline,
        }
    }
}

/// numpar: approximate pi by parallel midpoint integration of 4/(1+x²).
#[derive(Parser, Debug)]
#[command(name = "numpar", version, about)]
pub struct AppConfig {
    /// Number of worker threads (values <= 0 fall back to 1).
    #[arg(
        short,
        long,
        default_value = "4",
        env = "NUMPAR_THREADS",
        allow_negative_numbers = true
    )]
    pub threads: i64,

    /// Number of integration subintervals.
    #[arg(
        short = 'n',
        long,
        default_value = "2000000000",
        env = "NUMPAR_INTERVALS",
        allow_negative_numbers = true
    )]
    pub intervals: i64,

    /// Calculator to use: parallel, sequential, or all.
    #[arg(long, default_value = "parallel")]
    pub algo: String,

    /// Behaviour when a worker thread cannot be created.
    #[arg(long, value_enum, default_value = "abort")]
    pub on_spawn_failure: SpawnFailure,

    /// Worker stack size in bytes (0 = platform default).
    #[arg(long, default_value = "0")]
    pub stack_size: usize,

    /// Generate this many Fibonacci terms instead of approximating pi.
    #[arg(long, value_name = "TERMS")]
    pub fibonacci: Option<usize>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show per-worker details.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            threads: self.threads,
            spawn_policy: self.on_spawn_failure.into(),
            stack_size: Some(self.stack_size),
        }
        .normalize()
    }
}
