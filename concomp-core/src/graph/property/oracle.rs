//! Breadth-first component oracle.

use std::collections::VecDeque;

use crate::Edge;

/// Labels every vertex with the smallest vertex id reachable from it.
pub(super) fn bfs_components(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for &(a, b) in edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    let mut labels: Vec<Option<usize>> = vec![None; vertex_count];
    let mut queue = VecDeque::new();
    for start in 0..vertex_count {
        if labels[start].is_some() {
            continue;
        }
        labels[start] = Some(start);
        queue.push_back(start);
        while let Some(vertex) = queue.pop_front() {
            for &next in &adjacency[vertex] {
                if labels[next].is_none() {
                    labels[next] = Some(start);
                    queue.push_back(next);
                }
            }
        }
    }
    labels.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_with_component_minimum() {
        let labels = bfs_components(6, &[(4, 1), (5, 3), (3, 2)]);
        assert_eq!(labels, vec![0, 1, 2, 2, 1, 2]);
    }
}
