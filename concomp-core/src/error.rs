//! Error types for graph construction and mutation.
//!
//! Only two inputs are ever rejected: an adjacency list whose length
//! disagrees with the declared vertex count, and an explicitly added edge
//! whose endpoint does not exist. Everything else is accepted as given.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while building or mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The adjacency list did not contain one entry per declared vertex.
    #[error("adjacency list has {actual} entries but {expected} vertices were declared")]
    SizeMismatch {
        /// Vertex count declared by the caller.
        expected: usize,
        /// Number of adjacency entries supplied.
        actual: usize,
    },
    /// An edge endpoint referenced a vertex that does not exist.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph at the time of the call.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The adjacency list did not contain one entry per declared vertex.
        SizeMismatch => SizeMismatch { .. } => "GRAPH_SIZE_MISMATCH",
        /// An edge endpoint referenced a vertex that does not exist.
        OutOfRange => OutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// Convenient result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        GraphError::SizeMismatch { expected: 3, actual: 2 },
        GraphErrorCode::SizeMismatch,
        "GRAPH_SIZE_MISMATCH"
    )]
    #[case(
        GraphError::OutOfRange { vertex: 3, vertex_count: 3 },
        GraphErrorCode::OutOfRange,
        "GRAPH_VERTEX_OUT_OF_RANGE"
    )]
    fn codes_are_stable(
        #[case] error: GraphError,
        #[case] expected: GraphErrorCode,
        #[case] raw: &str,
    ) {
        assert_eq!(error.code(), expected);
        assert_eq!(error.code().as_str(), raw);
        assert_eq!(error.code().to_string(), raw);
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = GraphError::OutOfRange {
            vertex: 7,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph with 4 vertices"
        );
    }
}
