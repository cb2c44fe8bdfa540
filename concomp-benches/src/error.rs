//! Benchmark setup error type.
//!
//! Collects the failures that can interrupt graph generation, experiment
//! sweeps, and report writing so harness code can propagate them with `?`.

use std::path::PathBuf;

use concomp_core::GraphError;

use crate::generator::GeneratorError;

/// Errors that may occur while preparing or running an experiment.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A graph rejected an edge while an experiment was growing it.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The sweep bounds describe an empty range.
    #[error("minimum vertex count {min} exceeds maximum {max}")]
    EmptyRange {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
    /// Writing a report failed.
    #[error("failed to write report `{path}`: {source}")]
    Report {
        /// Report file or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
