//! Batch solving over a directory of problem files.
//!
//! Every regular file below the input directory is one problem instance.
//! Instances are solved independently on a rayon thread pool and their
//! results are reduced into a [`BatchSummary`].

mod discover;
mod runner;
mod summary;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::SolverConfig;
use crate::problem::ParseMode;

pub use discover::discover_problems;
pub use runner::{run_batch, solve_file};
pub use summary::{BatchSummary, InstanceResult};

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read problem directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Settings for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Parameters applied to every instance.
    pub solver: SolverConfig,
    /// How problem files are parsed.
    pub parse_mode: ParseMode,
    /// Worker threads; `None` uses rayon's default of one per core.
    pub threads: Option<usize>,
}
