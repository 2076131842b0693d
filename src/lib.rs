//! # Ohmic Core
//!
//! Equivalent resistance of resistor networks by series/parallel reduction.
//!
//! This library provides:
//! - A multigraph of circuit nodes and resistors that keeps parallel resistors apart
//! - Parallel and series reduction passes, each usable on its own
//! - A reduction driver that reports either a value or an irreducible residue
//! - A small SPICE-inspired netlist format for describing networks as text
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit multigraph and boundary validation
//! - [`reduce`] - Parallel/series passes and the reduction driver
//! - [`netlist`] - Parser for the netlist text format
//! - [`units`] - SI-prefixed resistance parsing and formatting
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use ohmic_core::circuit::build_circuit;
//!
//! let mut circuit = build_circuit();
//! circuit.add_resistor("a", "b", 10.0)?;
//! circuit.add_resistor("b", "c", 20.0)?;
//! circuit.add_resistor("b", "c", 30.0)?;
//! circuit.add_resistor("c", "d", 40.0)?;
//!
//! let result = circuit.equivalent_resistance(&"a", &"d")?;
//! assert!((result.resistance().unwrap() - 62.0).abs() < 1e-9);
//! # Ok::<(), ohmic_core::OhmicError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! ohmic divider.net --from top --to 0 --trace
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { equivalent_resistance } from 'ohmic_core';
//!
//! const ohms = equivalent_resistance(netlist, 'a', 'd'); // NaN if irreducible
//! ```
//!
//! ## Limitations
//!
//! Only series and parallel rules are applied. Bridge networks, which need
//! Y-Δ transforms or nodal analysis, come back as
//! [`Reduction::Irreducible`] with the remaining nodes and resistors.

pub mod circuit;
pub mod error;
pub mod netlist;
pub mod reduce;
pub mod units;

// Re-export main types for convenience
pub use circuit::{build_circuit, CircuitGraph};
pub use error::{OhmicError, Result};
pub use reduce::{equivalent_resistance, Reducer, ReducerConfig, Reduction, ScanOrder};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;
