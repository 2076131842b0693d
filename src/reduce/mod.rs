//! Series/parallel reduction of resistor networks.
//!
//! This module collapses a [`CircuitGraph`] towards a single resistor between
//! two terminal nodes using the two textbook rules:
//!
//! - **Parallel**: resistors `R_1 … R_k` joining the same two nodes become one
//!   resistor of `1 / Σ(1/R_i)`
//! - **Series**: a non-terminal node with exactly two resistors to two
//!   *different* neighbours is removed and its resistors become one of
//!   `R_1 + R_2`
//!
//! Each rule is a pass that performs at most one rewrite and reports it. The
//! [`Reducer`] driver alternates the passes (parallel first) and rescans from
//! scratch after every rewrite, until either one resistor joins the terminals
//! ([`Reduction::Solved`]) or neither rule applies ([`Reduction::Irreducible`],
//! e.g. a Wheatstone bridge).
//!
//! ## Termination
//!
//! Every rewrite removes at least one edge, so a network with `|E|` resistors
//! needs at most `|E|` steps, each of which scans `O(|V| + |E|)`.
//!
//! [`CircuitGraph`]: crate::circuit::CircuitGraph

mod driver;
mod parallel;
mod series;

use std::fmt;

use crate::units::format_ohms;

pub use driver::{
    equivalent_resistance, equivalent_resistance_with_config, Reducer, ReducerConfig, Reduction,
    ReductionState, Residual, ScanOrder,
};
pub use parallel::{collapse_parallel, try_parallel_reduce};
pub use series::try_series_reduce;

/// One rewrite performed on the circuit.
#[derive(Debug, Clone, PartialEq)]
pub enum ReductionStep<N> {
    /// Resistors directly joining `u` and `v` were merged.
    Parallel {
        u: N,
        v: N,
        /// Merged values in insertion order
        resistances: Vec<f64>,
        equivalent: f64,
    },
    /// `node` was removed and its two resistors to `u` and `w` were joined.
    Series {
        node: N,
        u: N,
        w: N,
        resistances: [f64; 2],
        equivalent: f64,
    },
    /// A resistor with both ends on `node` was discarded before reducing.
    SelfLoopDropped { node: N, resistance: f64 },
}

impl<N: fmt::Display> fmt::Display for ReductionStep<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionStep::Parallel {
                u,
                v,
                resistances,
                equivalent,
            } => {
                let parts: Vec<String> = resistances.iter().map(|r| format_ohms(*r)).collect();
                write!(
                    f,
                    "parallel {}–{}: {} = {}",
                    u,
                    v,
                    parts.join(" ∥ "),
                    format_ohms(*equivalent)
                )
            }
            ReductionStep::Series {
                node,
                u,
                w,
                resistances,
                equivalent,
            } => write!(
                f,
                "series through {} ({}–{}): {} + {} = {}",
                node,
                u,
                w,
                format_ohms(resistances[0]),
                format_ohms(resistances[1]),
                format_ohms(*equivalent)
            ),
            ReductionStep::SelfLoopDropped { node, resistance } => {
                write!(f, "dropped self-loop at {}: {}", node, format_ohms(*resistance))
            }
        }
    }
}
