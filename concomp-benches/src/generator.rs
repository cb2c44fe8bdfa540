//! Seeded random graph generation.
//!
//! Graphs are sampled uniformly from the simple graphs with a given vertex
//! and edge count: edges are distinct, never self-loops, and stored as
//! `(min, max)` pairs in sorted order.

use std::collections::BTreeSet;
use std::fmt;

use concomp_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Edge-density regime of a generated graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphShape {
    /// `n * n / 10` edges.
    Dense,
    /// `n - 1` edges: tree-sized, though not necessarily a tree.
    Tree,
    /// `floor(log2 n)` edges.
    Sparse,
}

impl GraphShape {
    /// Every shape, in report order.
    pub const ALL: [Self; 3] = [Self::Dense, Self::Tree, Self::Sparse];

    /// Returns the number of edges generated for `vertex_count` vertices.
    ///
    /// # Examples
    /// ```
    /// use concomp_benches::generator::GraphShape;
    ///
    /// assert_eq!(GraphShape::Dense.edge_count(100), 1_000);
    /// assert_eq!(GraphShape::Tree.edge_count(100), 99);
    /// assert_eq!(GraphShape::Sparse.edge_count(100), 6);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "Dense edge budgets round down to whole edges."
    )]
    pub const fn edge_count(self, vertex_count: usize) -> usize {
        match self {
            Self::Dense => vertex_count.saturating_mul(vertex_count) / 10,
            Self::Tree => vertex_count.saturating_sub(1),
            Self::Sparse => match vertex_count.checked_ilog2() {
                Some(bits) => bits as usize,
                None => 0,
            },
        }
    }

    /// Returns the lowercase name used in benchmark ids and report files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Tree => "tree",
            Self::Sparse => "sparse",
        }
    }
}

impl fmt::Display for GraphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while generating random graphs.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// More edges were requested than a simple graph can hold.
    #[error("cannot place {requested} distinct edges among {vertex_count} vertices (max {max})")]
    TooManyEdges {
        /// Number of edges requested.
        requested: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Largest possible number of distinct edges.
        max: usize,
    },
}

/// Parameters for [`generate_random_graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of distinct edges to place.
    pub edge_count: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Builds a configuration whose edge count follows `shape`.
    #[must_use]
    pub const fn for_shape(shape: GraphShape, vertex_count: usize, seed: u64) -> Self {
        Self {
            vertex_count,
            edge_count: shape.edge_count(vertex_count),
            seed,
        }
    }
}

/// Returns the number of distinct non-loop edges on `vertex_count` vertices.
///
/// Saturates at `usize::MAX` when the product overflows.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "n * (n - 1) is always even."
)]
pub const fn max_edge_count(vertex_count: usize) -> usize {
    match vertex_count.checked_mul(vertex_count.saturating_sub(1)) {
        Some(product) => product / 2,
        None => usize::MAX,
    }
}

/// Generates a graph with exactly `config.edge_count` distinct edges.
///
/// Graphs with at most one vertex are returned edgeless whatever the
/// requested edge count.
///
/// # Errors
/// Returns [`GeneratorError::TooManyEdges`] when the edge count exceeds
/// [`max_edge_count`].
///
/// # Examples
/// ```
/// use concomp_benches::generator::{RandomGraphConfig, generate_random_graph};
///
/// let graph = generate_random_graph(&RandomGraphConfig {
///     vertex_count: 10,
///     edge_count: 12,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edge_count(), 12);
/// # Ok::<(), concomp_benches::generator::GeneratorError>(())
/// ```
pub fn generate_random_graph(config: &RandomGraphConfig) -> Result<Graph, GeneratorError> {
    let RandomGraphConfig {
        vertex_count,
        edge_count,
        seed,
    } = *config;
    if vertex_count <= 1 {
        return Ok(Graph::new(vertex_count));
    }

    let max = max_edge_count(vertex_count);
    if edge_count > max {
        return Err(GeneratorError::TooManyEdges {
            requested: edge_count,
            vertex_count,
            max,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chosen = BTreeSet::new();
    while chosen.len() < edge_count {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            chosen.insert((u.min(v), u.max(v)));
        }
    }
    Ok(Graph::from_edges(vertex_count, chosen))
}

/// Returns every vertex pair `(i, j)` with `i < j`, shuffled.
#[must_use]
pub fn shuffled_complete_edges(vertex_count: usize, rng: &mut SmallRng) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..vertex_count)
        .flat_map(|i| ((i + 1)..vertex_count).map(move |j| (i, j)))
        .collect();
    edges.shuffle(rng);
    edges
}
