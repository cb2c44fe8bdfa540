//! Connected components over an undirected edge list.
//!
//! Two deliberately unoptimised algorithms answer the same query so their
//! running time can be compared:
//!
//! - [`Graph::component_naive`] repeats a label-minimisation pass over every
//!   edge `vertex_count - 1` times, costing `O(V * E)`.
//! - [`Graph::component_dsu`] merges labels through a [`DisjointSetUnion`]
//!   whose union rewrites the whole label array, costing `O(V)` per merge.
//!
//! Both return a [`ComponentLabels`] assignment. Raw label values are not
//! renumbered; two vertices share a component exactly when their labels are
//! equal.

mod dsu;
mod error;
mod graph;
mod labels;

#[cfg(test)]
mod test_utils;

pub use crate::{
    dsu::DisjointSetUnion,
    error::{GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph},
    labels::ComponentLabels,
};
