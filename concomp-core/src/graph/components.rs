//! The two component queries.
//!
//! Neither query mutates the graph. Endpoints outside `0..vertex_count` can
//! only reach these functions through the unvalidated constructors and panic
//! at the offending index.

use tracing::instrument;

use super::Graph;
use crate::{dsu::DisjointSetUnion, labels::ComponentLabels};

impl Graph {
    /// Labels components by repeated label minimisation.
    ///
    /// Every vertex starts with its own id. The full edge list is then swept
    /// `vertex_count - 1` times; each edge sets both endpoints to the smaller
    /// of their two labels. The pass count is fixed, so the cost is always
    /// `O(V * E)` even when the labels settle early.
    ///
    /// # Panics
    /// Panics when an edge endpoint is not below [`Self::vertex_count`].
    ///
    /// # Examples
    /// ```
    /// use concomp_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1), (2, 3)]);
    /// assert_eq!(graph.component_naive().into_vec(), vec![0, 0, 2, 2]);
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.component_naive",
        level = "debug",
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn component_naive(&self) -> ComponentLabels {
        let mut comp: Vec<usize> = (0..self.vertex_count).collect();
        for _ in 1..self.vertex_count {
            for &(a, b) in &self.edges {
                let smallest = comp[a].min(comp[b]);
                comp[a] = smallest;
                comp[b] = smallest;
            }
        }
        ComponentLabels::from(comp)
    }

    /// Labels components by merging through a [`DisjointSetUnion`].
    ///
    /// Edges are visited once in insertion order. When the endpoints carry
    /// different labels the second label is rewritten to the first across
    /// the whole array. The partition matches [`Self::component_naive`];
    /// the raw label values may not.
    ///
    /// # Panics
    /// Panics when an edge endpoint is not below [`Self::vertex_count`].
    ///
    /// # Examples
    /// ```
    /// use concomp_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(2, 1)]);
    /// assert_eq!(graph.component_dsu().into_vec(), vec![0, 2, 2]);
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.component_dsu",
        level = "debug",
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn component_dsu(&self) -> ComponentLabels {
        let mut dsu = DisjointSetUnion::new(self.vertex_count);
        for &(a, b) in &self.edges {
            let left = dsu.find(a);
            let right = dsu.find(b);
            if left != right {
                dsu.union(left, right);
            }
        }
        ComponentLabels::from(dsu.into_components())
    }
}
