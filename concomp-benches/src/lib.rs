//! Benchmark harness for the two connected-component queries.
//!
//! Generates random graphs in three density regimes, times
//! [`concomp_core::Graph::component_naive`] against
//! [`concomp_core::Graph::component_dsu`] across a sweep of vertex counts,
//! measures how many random edges it takes to connect a graph, and writes
//! the results as CSV reports. Criterion benchmarks under `benches/` reuse
//! the same generators.

pub mod error;
pub mod experiment;
pub mod generator;
pub mod params;
pub mod report;
