//! Benchmark parameter types.

use std::fmt;

use crate::generator::GraphShape;

/// Parameters for one component-query benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct ComponentBenchParams {
    /// Density regime of the generated graph.
    pub shape: GraphShape,
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
}

impl fmt::Display for ComponentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.shape, self.vertex_count)
    }
}
