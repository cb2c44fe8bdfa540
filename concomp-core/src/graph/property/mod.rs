//! Property-based tests for the component queries.
//!
//! Checks that both queries agree with each other and with a breadth-first
//! oracle on random graphs of several topologies, and that the raw labels
//! each algorithm leaves behind have the shape its merge rule implies.

mod oracle;
mod strategies;
