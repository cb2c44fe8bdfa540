//! Timing sweeps and the connectivity experiment.
//!
//! The performance sweep generates one graph per shape and vertex count and
//! times each component query once. The connectivity experiment adds random
//! edges to an empty graph until it becomes connected and records how many
//! were needed.

use std::hint::black_box;
use std::time::{Duration, Instant};

use concomp_core::{Graph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::error::BenchSetupError;
use crate::generator::{GraphShape, RandomGraphConfig, generate_random_graph, shuffled_complete_edges};

/// Vertex-count range and seed shared by both experiments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SweepConfig {
    /// Smallest vertex count, inclusive.
    pub min_vertices: usize,
    /// Largest vertex count, inclusive.
    pub max_vertices: usize,
    /// Distance between consecutive vertex counts.
    pub step: usize,
    /// Seed from which every generated graph derives its own seed.
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_vertices: 1,
            max_vertices: 1_001,
            step: 10,
            seed: 42,
        }
    }
}

impl SweepConfig {
    /// Returns the vertex counts visited by the sweep.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] for a zero step and
    /// [`BenchSetupError::EmptyRange`] when the minimum exceeds the maximum.
    ///
    /// # Examples
    /// ```
    /// use concomp_benches::experiment::SweepConfig;
    ///
    /// let config = SweepConfig { min_vertices: 1, max_vertices: 25, step: 10, seed: 0 };
    /// assert_eq!(config.vertex_counts()?, vec![1, 11, 21]);
    /// # Ok::<(), concomp_benches::error::BenchSetupError>(())
    /// ```
    pub fn vertex_counts(&self) -> Result<Vec<usize>, BenchSetupError> {
        if self.step == 0 {
            return Err(BenchSetupError::ZeroValue { context: "step" });
        }
        if self.min_vertices > self.max_vertices {
            return Err(BenchSetupError::EmptyRange {
                min: self.min_vertices,
                max: self.max_vertices,
            });
        }
        Ok((self.min_vertices..=self.max_vertices)
            .step_by(self.step)
            .collect())
    }
}

/// Wall-clock time of both queries on one generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimingRecord {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Time spent in [`Graph::component_naive`].
    pub naive: Duration,
    /// Time spent in [`Graph::component_dsu`].
    pub dsu: Duration,
}

/// All timing records for one graph shape, in sweep order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShapeTimings {
    /// Shape shared by every graph in `records`.
    pub shape: GraphShape,
    /// One record per visited vertex count.
    pub records: Vec<TimingRecord>,
}

/// Number of random edges needed to connect a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectivityRecord {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges added before the graph became connected.
    pub edges_required: usize,
}

/// Times both queries for every shape across the sweep.
///
/// # Errors
/// Returns [`BenchSetupError`] when the sweep bounds are invalid or a graph
/// cannot be generated.
#[instrument(
    name = "bench.performance_sweep",
    err,
    skip(config),
    fields(min = config.min_vertices, max = config.max_vertices, step = config.step),
)]
pub fn run_performance_sweep(config: &SweepConfig) -> Result<Vec<ShapeTimings>, BenchSetupError> {
    let vertex_counts = config.vertex_counts()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut timings: Vec<ShapeTimings> = GraphShape::ALL
        .into_iter()
        .map(|shape| ShapeTimings {
            shape,
            records: Vec::with_capacity(vertex_counts.len()),
        })
        .collect();

    for &vertex_count in &vertex_counts {
        for entry in &mut timings {
            let graph_config = RandomGraphConfig::for_shape(entry.shape, vertex_count, rng.r#gen());
            let graph = generate_random_graph(&graph_config)?;
            let record = time_queries(&graph);
            debug!(
                shape = %entry.shape,
                vertices = vertex_count,
                edges = record.edge_count,
                naive_us = record.naive.as_micros(),
                dsu_us = record.dsu.as_micros(),
                "timed component queries"
            );
            entry.records.push(record);
        }
    }
    info!(points = vertex_counts.len(), "performance sweep completed");
    Ok(timings)
}

/// Times each query once on `graph`.
#[must_use]
pub fn time_queries(graph: &Graph) -> TimingRecord {
    TimingRecord {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        naive: time(|| graph.component_naive()),
        dsu: time(|| graph.component_dsu()),
    }
}

fn time<T>(operation: impl FnOnce() -> T) -> Duration {
    let started = Instant::now();
    black_box(operation());
    started.elapsed()
}

/// Measures, for each vertex count, how many shuffled edges connect a graph.
///
/// # Errors
/// Returns [`BenchSetupError`] when the sweep bounds are invalid.
#[instrument(
    name = "bench.connectivity",
    err,
    skip(config),
    fields(min = config.min_vertices, max = config.max_vertices, step = config.step),
)]
pub fn run_connectivity_experiment(
    config: &SweepConfig,
) -> Result<Vec<ConnectivityRecord>, BenchSetupError> {
    let vertex_counts = config.vertex_counts()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(vertex_counts.len());
    for vertex_count in vertex_counts {
        let edges_required = edges_until_connected(vertex_count, &mut rng)?;
        debug!(
            vertices = vertex_count,
            edges_required, "graph became connected"
        );
        records.push(ConnectivityRecord {
            vertex_count,
            edges_required,
        });
    }
    info!(points = records.len(), "connectivity experiment completed");
    Ok(records)
}

/// Adds shuffled edges one at a time, re-running the DSU query after each,
/// until the graph is connected. Graphs with at most one vertex need none.
///
/// # Errors
/// Propagates [`GraphError`] from [`Graph::add_edge`].
pub fn edges_until_connected(vertex_count: usize, rng: &mut SmallRng) -> Result<usize, GraphError> {
    if vertex_count <= 1 {
        return Ok(0);
    }
    let mut graph = Graph::new(vertex_count);
    let mut added = 0;
    for (u, v) in shuffled_complete_edges(vertex_count, rng) {
        graph.add_edge(u, v)?;
        added += 1;
        if graph.component_dsu().is_connected() {
            break;
        }
    }
    Ok(added)
}
