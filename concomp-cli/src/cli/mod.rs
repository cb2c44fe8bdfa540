//! Command-line interface for the connected-component baselines.
//!
//! `demo` labels a built-in five-vertex graph, `components` labels a graph
//! read from an edge-list file, and `experiment` runs the timing sweep and
//! connectivity experiment and writes their CSV reports.

mod commands;
mod input;

pub use commands::{
    Algorithm, Cli, CliError, Command, CommandOutput, ComponentsArgs, ComponentsSummary,
    ExperimentArgs, ExperimentSummary, LabelledRun, render_components, render_experiment,
    render_output, run_cli,
};
pub use input::{InputError, parse_edge_list};

#[cfg(test)]
mod test_helpers;
