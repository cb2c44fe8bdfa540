use concomp_core::Graph;
use concomp_test_support::partition::canonical_labels;

/// Builds a graph from an adjacency list that is known to be well formed.
#[must_use]
pub fn graph_from_list(vertex_count: usize, adjacency: Vec<Vec<usize>>) -> Graph {
    match Graph::from_adjacency_list(vertex_count, &adjacency) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture adjacency list rejected: {err}"),
    }
}

/// Runs both queries and returns their canonical labels.
#[must_use]
pub fn canonical_pair(graph: &Graph) -> (Vec<usize>, Vec<usize>) {
    (
        canonical_labels(graph.component_naive().as_slice()),
        canonical_labels(graph.component_dsu().as_slice()),
    )
}
