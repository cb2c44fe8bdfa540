//! Undirected graph stored as a vertex count and an ordered edge list.
//!
//! Construction from adjacency structures and bulk edge lists performs no
//! endpoint validation; only [`Graph::add_edge`] checks its input. Edge order
//! is preserved exactly as supplied because the component queries walk the
//! list front to back.

mod components;

#[cfg(test)]
mod property;

use tracing::debug;

use crate::error::{GraphError, Result};

/// An undirected edge between two vertex ids.
pub type Edge = (usize, usize);

/// Undirected graph over vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use concomp_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// assert_eq!(graph.edges(), vec![(0, 1)]);
/// assert!(graph.add_edge(0, 3).is_err());
/// # Ok::<(), concomp_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a graph holding `edges` verbatim.
    ///
    /// Endpoints are not checked against `vertex_count`; duplicates and
    /// self-loops are kept.
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            vertex_count,
            edges: edges.into_iter().collect(),
        }
    }

    /// Builds a graph from the upper triangle of an adjacency matrix.
    ///
    /// The vertex count is the number of rows. An edge `(i, j)` is added for
    /// every `i < j` whose entry is greater than `T::default()`; the lower
    /// triangle is never read, so an asymmetric matrix silently loses its
    /// lower half. Columns missing from a short row add nothing and columns
    /// past the row count are ignored.
    ///
    /// # Examples
    /// ```
    /// use concomp_core::Graph;
    ///
    /// let graph = Graph::from_adjacency_matrix(&[
    ///     vec![0, 1, 0],
    ///     vec![1, 0, 0],
    ///     vec![0, 0, 0],
    /// ]);
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edges(), vec![(0, 1)]);
    /// ```
    #[must_use]
    pub fn from_adjacency_matrix<R, T>(matrix: &[R]) -> Self
    where
        R: AsRef<[T]>,
        T: Copy + Default + PartialOrd,
    {
        let vertex_count = matrix.len();
        let absent = T::default();
        let edges = matrix
            .iter()
            .enumerate()
            .flat_map(|(row, entries)| {
                entries
                    .as_ref()
                    .iter()
                    .enumerate()
                    .take(vertex_count)
                    .skip(row + 1)
                    .filter(move |&(_, &entry)| entry > absent)
                    .map(move |(column, _)| (row, column))
            })
            .collect();
        Self {
            vertex_count,
            edges,
        }
    }

    /// Builds a graph from a symmetric adjacency list.
    ///
    /// Each neighbour `j` of vertex `i` contributes the edge `(i, j)` only
    /// when `i < j`; the mirrored entry on the other side is skipped.
    /// Neighbour ids are not bounds-checked.
    ///
    /// # Errors
    /// Returns [`GraphError::SizeMismatch`] when `adjacency.len()` differs
    /// from `vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use concomp_core::{Graph, GraphError};
    ///
    /// let graph = Graph::from_adjacency_list(3, &[vec![1], vec![0, 2], vec![1]])?;
    /// assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    ///
    /// let err = Graph::from_adjacency_list(3, &[vec![1], vec![0]]).unwrap_err();
    /// assert_eq!(err, GraphError::SizeMismatch { expected: 3, actual: 2 });
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn from_adjacency_list<L>(vertex_count: usize, adjacency: &[L]) -> Result<Self>
    where
        L: AsRef<[usize]>,
    {
        if adjacency.len() != vertex_count {
            return Err(GraphError::SizeMismatch {
                expected: vertex_count,
                actual: adjacency.len(),
            });
        }

        let edges = adjacency
            .iter()
            .enumerate()
            .flat_map(|(vertex, neighbours)| {
                neighbours
                    .as_ref()
                    .iter()
                    .filter(move |&&neighbour| vertex < neighbour)
                    .map(move |&neighbour| (vertex, neighbour))
            })
            .collect();
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Appends the edge `(u, v)`.
    ///
    /// Self-loops and duplicates are accepted; only existence of both
    /// endpoints is checked.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when either endpoint is not below
    /// [`Self::vertex_count`]. The edge list is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if let Some(vertex) = [u, v].into_iter().find(|&end| end >= self.vertex_count) {
            debug!(
                vertex,
                vertex_count = self.vertex_count,
                "rejected edge with missing endpoint"
            );
            return Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        self.edges.push((u, v));
        Ok(())
    }

    /// Appends an isolated vertex and returns its id.
    pub const fn add_vertex(&mut self) -> usize {
        let vertex = self.vertex_count;
        self.vertex_count += 1;
        vertex
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of stored edges, duplicates included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns a copy of the edge list in insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }
}
