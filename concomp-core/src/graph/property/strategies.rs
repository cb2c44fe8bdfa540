//! Random graph strategies for the component properties.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Edge, Graph};

/// Upper bound on generated vertex counts; the naive query is `O(V * E)`.
const MAX_VERTICES: usize = 40;

/// Edge layout used to generate a fixture.
#[derive(Clone, Copy, Debug)]
pub(super) enum Topology {
    /// Roughly a tenth of all vertex pairs.
    Dense,
    /// `n - 1` random edges, often but not always spanning.
    TreeLike,
    /// About `log2(n)` random edges.
    Sparse,
    /// Two dense halves with no edge between them.
    Disconnected,
    /// A path whose edges are listed from the far end.
    ReversedPath,
}

/// A generated graph together with the topology that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) topology: Topology,
    pub(super) graph: Graph,
}

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let topology = prop_oneof![
        Just(Topology::Dense),
        Just(Topology::TreeLike),
        Just(Topology::Sparse),
        Just(Topology::Disconnected),
        Just(Topology::ReversedPath),
    ];
    (topology, 0..=MAX_VERTICES, any::<u64>()).prop_map(|(topology, vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, vertex_count, &mut rng)
    })
}

pub(super) fn generate_fixture(
    topology: Topology,
    vertex_count: usize,
    rng: &mut SmallRng,
) -> GraphFixture {
    let edges = match topology {
        Topology::Dense => random_edges(0, vertex_count, vertex_count * vertex_count / 10, rng),
        Topology::TreeLike => random_edges(0, vertex_count, vertex_count.saturating_sub(1), rng),
        Topology::Sparse => {
            let count = vertex_count.checked_ilog2().unwrap_or(0) as usize;
            random_edges(0, vertex_count, count, rng)
        }
        Topology::Disconnected => {
            let half = vertex_count / 2;
            let mut edges = random_edges(0, half, half * half / 4, rng);
            edges.extend(random_edges(half, vertex_count, half * half / 4, rng));
            edges.shuffle(rng);
            edges
        }
        Topology::ReversedPath => (1..vertex_count).rev().map(|v| (v - 1, v)).collect(),
    };
    GraphFixture {
        topology,
        graph: Graph::from_edges(vertex_count, edges),
    }
}

/// Samples `count` edges with both endpoints in `start..end`, endpoints
/// possibly equal and pairs possibly repeated.
fn random_edges(start: usize, end: usize, count: usize, rng: &mut SmallRng) -> Vec<Edge> {
    if start >= end {
        return Vec::new();
    }
    (0..count)
        .map(|_| (rng.gen_range(start..end), rng.gen_range(start..end)))
        .collect()
}
