//! Command definitions, execution, and rendering.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use concomp_benches::{
    error::BenchSetupError,
    experiment::{SweepConfig, run_connectivity_experiment, run_performance_sweep},
    report::write_experiment_reports,
};
use concomp_core::{ComponentLabels, Graph, GraphError, GraphErrorCode};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_edge_list};

/// Adjacency list of the graph labelled by `concomp demo`.
const DEMO_ADJACENCY: [&[usize]; 5] = [&[1, 2], &[0], &[0, 3], &[2], &[]];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "concomp",
    about = "Label connected components with the naive and disjoint-set baselines."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Label the built-in five-vertex demonstration graph with both algorithms.
    Demo,
    /// Label the components of a graph read from an edge-list file.
    Components(ComponentsArgs),
    /// Run the timing sweep and connectivity experiment and write CSV reports.
    Experiment(ExperimentArgs),
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsArgs {
    /// Edge-list file: a vertex count, then one `u v` pair per line.
    pub path: PathBuf,

    /// Algorithm used to label the components.
    #[arg(long, value_enum, default_value_t = Algorithm::Both)]
    pub algorithm: Algorithm,
}

/// Options accepted by the `experiment` command.
#[derive(Debug, Args, Clone)]
pub struct ExperimentArgs {
    /// Directory receiving the CSV reports.
    #[arg(long = "output-dir")]
    pub output_dir: PathBuf,

    /// Smallest vertex count in the sweep.
    #[arg(long = "min-vertices", default_value_t = SweepConfig::default().min_vertices)]
    pub min_vertices: usize,

    /// Largest vertex count in the sweep, inclusive.
    #[arg(long = "max-vertices", default_value_t = SweepConfig::default().max_vertices)]
    pub max_vertices: usize,

    /// Increment between vertex counts.
    #[arg(long, default_value_t = SweepConfig::default().step)]
    pub step: usize,

    /// Seed for random graph generation.
    #[arg(long, default_value_t = SweepConfig::default().seed)]
    pub seed: u64,

    /// Skip the connectivity experiment.
    #[arg(long = "skip-connectivity")]
    pub skip_connectivity: bool,
}

impl ExperimentArgs {
    const fn sweep(&self) -> SweepConfig {
        SweepConfig {
            min_vertices: self.min_vertices,
            max_vertices: self.max_vertices,
            step: self.step,
            seed: self.seed,
        }
    }
}

/// Component labelling algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum Algorithm {
    /// Repeated label minimisation over the edge list.
    Naive,
    /// Disjoint-set merging over the edge list.
    Dsu,
    /// Run both and report each.
    Both,
}

impl Algorithm {
    /// Returns the lowercase name used on the command line and in output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Dsu => "dsu",
            Self::Both => "both",
        }
    }

    const fn selected(self) -> &'static [Self] {
        match self {
            Self::Naive => &[Self::Naive],
            Self::Dsu => &[Self::Dsu],
            Self::Both => &[Self::Naive, Self::Dsu],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list file could not be parsed.
    #[error("invalid edge list `{path}`: {source}")]
    Input {
        /// File being parsed.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: InputError,
    },
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The experiment harness failed.
    #[error(transparent)]
    Bench(#[from] BenchSetupError),
}

impl CliError {
    /// Returns the stable graph error code behind this failure, if any.
    #[must_use]
    pub const fn code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(err) | Self::Bench(BenchSetupError::Graph(err)) => Some(err.code()),
            Self::Input { source, .. } => match source.graph_error() {
                Some(err) => Some(err.code()),
                None => None,
            },
            _ => None,
        }
    }
}

/// Labels produced by one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledRun {
    /// Algorithm that produced `labels`; never [`Algorithm::Both`].
    pub algorithm: Algorithm,
    /// One component id per vertex.
    pub labels: ComponentLabels,
}

/// Outcome of the `demo` and `components` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentsSummary {
    /// Where the graph came from: `demo` or the input path.
    pub source: String,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// One entry per algorithm run, naive first.
    pub runs: Vec<LabelledRun>,
}

/// Outcome of the `experiment` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentSummary {
    /// Report files in the order they were written.
    pub reports: Vec<PathBuf>,
}

/// Outcome of any CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Component labels for one graph.
    Components(ComponentsSummary),
    /// Paths of the written experiment reports.
    Experiment(ExperimentSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading input, building the graph, or running
/// the experiments fails.
///
/// # Examples
/// ```
/// use concomp_cli::cli::{Cli, Command, CommandOutput, run_cli};
///
/// let output = run_cli(Cli { command: Command::Demo })?;
/// let CommandOutput::Components(summary) = output else {
///     panic!("demo labels a graph");
/// };
/// assert_eq!(summary.runs.len(), 2);
/// assert_eq!(summary.runs[0].labels.component_count(), 2);
/// # Ok::<(), concomp_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.execute", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo => {
            span.record("command", field::display("demo"));
            run_demo().map(CommandOutput::Components)
        }
        Command::Components(args) => {
            span.record("command", field::display("components"));
            run_components(&args).map(CommandOutput::Components)
        }
        Command::Experiment(args) => {
            span.record("command", field::display("experiment"));
            run_experiment(&args).map(CommandOutput::Experiment)
        }
    }
}

#[instrument(name = "cli.demo", err)]
pub(super) fn run_demo() -> Result<ComponentsSummary, CliError> {
    let graph = Graph::from_adjacency_list(DEMO_ADJACENCY.len(), &DEMO_ADJACENCY)?;
    Ok(label_graph("demo".to_owned(), &graph, Algorithm::Both))
}

#[instrument(
    name = "cli.components",
    err,
    skip(args),
    fields(path = %args.path.display(), algorithm = %args.algorithm),
)]
pub(super) fn run_components(args: &ComponentsArgs) -> Result<ComponentsSummary, CliError> {
    let graph = load_graph(&args.path)?;
    let summary = label_graph(args.path.display().to_string(), &graph, args.algorithm);
    info!(
        vertices = summary.vertex_count,
        edges = summary.edge_count,
        "components labelled"
    );
    Ok(summary)
}

pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(&text).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn label_graph(source: String, graph: &Graph, algorithm: Algorithm) -> ComponentsSummary {
    let runs = algorithm
        .selected()
        .iter()
        .map(|&selected| LabelledRun {
            algorithm: selected,
            labels: match selected {
                Algorithm::Naive => graph.component_naive(),
                Algorithm::Dsu | Algorithm::Both => graph.component_dsu(),
            },
        })
        .collect();
    ComponentsSummary {
        source,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        runs,
    }
}

#[instrument(
    name = "cli.experiment",
    err,
    skip(args),
    fields(output_dir = %args.output_dir.display(), connectivity = !args.skip_connectivity),
)]
pub(super) fn run_experiment(args: &ExperimentArgs) -> Result<ExperimentSummary, CliError> {
    let sweep = args.sweep();
    let timings = run_performance_sweep(&sweep)?;
    let connectivity = if args.skip_connectivity {
        None
    } else {
        Some(run_connectivity_experiment(&sweep)?)
    };
    let reports = write_experiment_reports(&args.output_dir, &timings, connectivity.as_deref())?;
    info!(reports = reports.len(), "experiment reports written");
    Ok(ExperimentSummary { reports })
}

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_output(output: &CommandOutput, writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Components(summary) => render_components(summary, writer),
        CommandOutput::Experiment(summary) => render_experiment(summary, writer),
    }
}

/// Renders component labels, one `vertex<TAB>label` line per vertex for
/// each algorithm run.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use concomp_cli::cli::{Algorithm, ComponentsSummary, LabelledRun, render_components};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ComponentsSummary {
///     source: "demo".into(),
///     vertex_count: 2,
///     edge_count: 1,
///     runs: vec![LabelledRun {
///         algorithm: Algorithm::Dsu,
///         labels: vec![0, 0].into(),
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_components(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "source: demo\nvertices: 2\nedges: 1\ndsu: 1 components\n0\t0\n1\t0\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_components(summary: &ComponentsSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    for run in &summary.runs {
        writeln!(
            writer,
            "{}: {} components",
            run.algorithm,
            run.labels.component_count()
        )?;
        for (vertex, label) in run.labels.as_slice().iter().enumerate() {
            writeln!(writer, "{vertex}\t{label}")?;
        }
    }
    Ok(())
}

/// Renders the paths of the written reports, one per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_experiment(summary: &ExperimentSummary, mut writer: impl Write) -> io::Result<()> {
    for path in &summary.reports {
        writeln!(writer, "wrote {}", path.display())?;
    }
    Ok(())
}
