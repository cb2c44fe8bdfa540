//! Edge-list file parsing.
//!
//! The first significant line holds the vertex count and every following
//! significant line holds one `u v` pair. Blank lines and anything after a
//! `#` are ignored. Edges go through [`Graph::add_edge`], so endpoints
//! outside the declared vertex count are rejected with the line they came
//! from.

use concomp_core::{Edge, Graph, GraphError};
use thiserror::Error;

/// Errors raised while parsing an edge-list file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The input holds no significant lines.
    #[error("edge list is missing its vertex count")]
    MissingVertexCount,
    /// The first significant line is not a non-negative integer.
    #[error("line {line}: invalid vertex count `{value}`")]
    InvalidVertexCount {
        /// One-based line number.
        line: usize,
        /// Text found on the line.
        value: String,
    },
    /// An edge line does not hold exactly two fields.
    #[error("line {line}: expected `u v`, found `{content}`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// Text found on the line, comment removed.
        content: String,
    },
    /// An edge endpoint is not a non-negative integer.
    #[error("line {line}: invalid vertex id `{value}`")]
    InvalidVertex {
        /// One-based line number.
        line: usize,
        /// The offending field.
        value: String,
    },
    /// The graph rejected an edge.
    #[error("line {line}: {source}")]
    Edge {
        /// One-based line number.
        line: usize,
        /// Error reported by the graph.
        #[source]
        source: GraphError,
    },
}

impl InputError {
    /// Returns the graph error behind this failure, if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Edge { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses an edge list into a [`Graph`].
///
/// # Errors
/// Returns [`InputError`] describing the first offending line.
///
/// # Examples
/// ```
/// use concomp_cli::cli::parse_edge_list;
///
/// let graph = parse_edge_list("# two pairs\n4\n0 1\n\n2 3 # second\n")?;
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edges(), vec![(0, 1), (2, 3)]);
/// # Ok::<(), concomp_cli::cli::InputError>(())
/// ```
pub fn parse_edge_list(text: &str) -> Result<Graph, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, strip_comment(raw)))
        .filter(|(_, content)| !content.is_empty());

    let (count_line, count) = lines.next().ok_or(InputError::MissingVertexCount)?;
    let vertex_count = count
        .parse::<usize>()
        .map_err(|_| InputError::InvalidVertexCount {
            line: count_line,
            value: count.to_owned(),
        })?;

    let mut graph = Graph::new(vertex_count);
    for (line, content) in lines {
        let (u, v) = parse_edge(line, content)?;
        graph
            .add_edge(u, v)
            .map_err(|source| InputError::Edge { line, source })?;
    }
    Ok(graph)
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#')
        .map_or(raw, |(before, _)| before)
        .trim()
}

fn parse_edge(line: usize, content: &str) -> Result<Edge, InputError> {
    let mut fields = content.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(u), Some(v), None) => Ok((parse_vertex(line, u)?, parse_vertex(line, v)?)),
        _ => Err(InputError::MalformedEdge {
            line,
            content: content.to_owned(),
        }),
    }
}

fn parse_vertex(line: usize, field: &str) -> Result<usize, InputError> {
    field.parse().map_err(|_| InputError::InvalidVertex {
        line,
        value: field.to_owned(),
    })
}
