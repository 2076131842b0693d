//! Boundary validation for circuits and queries.

use std::fmt::Display;

use crate::error::{OhmicError, Result};

use super::{CircuitGraph, NodeLabel};

/// Validate a resistor value before it is added to a circuit.
///
/// Checks:
/// - The value is strictly positive
/// - The value is finite (an infinite resistor is an open circuit, not a resistor)
pub fn validate_resistance<N: Display>(u: &N, v: &N, resistance: f64) -> Result<()> {
    if resistance > 0.0 && resistance.is_finite() {
        Ok(())
    } else {
        Err(OhmicError::invalid_resistance(u, v, resistance))
    }
}

/// Validate a terminal pair against a circuit before reduction.
pub fn validate_terminals<N: NodeLabel>(graph: &CircuitGraph<N>, a: &N, b: &N) -> Result<()> {
    for terminal in [a, b] {
        if !graph.contains_node(terminal) {
            return Err(OhmicError::unknown_terminal(terminal));
        }
    }
    Ok(())
}
