//! Circuit multigraph representation and validation.
//!
//! This module provides the in-memory form of a resistor network. The
//! [`CircuitGraph`] struct holds every node and every resistor instance,
//! including any number of parallel resistors between the same two nodes.

mod graph;
mod types;
mod validate;

pub use graph::CircuitGraph;
pub use types::*;
pub use validate::{validate_resistance, validate_terminals};

/// Create an empty circuit, ready for [`CircuitGraph::add_resistor`] calls.
pub fn build_circuit<N: NodeLabel>() -> CircuitGraph<N> {
    CircuitGraph::new()
}
