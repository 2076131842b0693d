//! Parsed netlist types.

use crate::circuit::{CircuitGraph, EdgeKey};
use crate::error::{OhmicError, Result};

/// Complete representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    /// Resistor lines in file order
    pub resistors: Vec<ResistorDef>,
    /// Terminal pair from a `.terminals` directive
    pub terminals: Option<(String, String)>,
}

/// A resistor line from the netlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorDef {
    /// Unique component name
    pub name: String,
    /// First node name
    pub u: String,
    /// Second node name
    pub v: String,
    /// Resistance in ohms, as written (not yet validated)
    pub resistance: f64,
    /// Source line number for error reporting
    pub line: usize,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the circuit described by this netlist.
    ///
    /// Fails on the first resistor with a non-positive value.
    pub fn to_circuit(&self) -> Result<CircuitGraph<String>> {
        let mut graph = CircuitGraph::new();
        for def in &self.resistors {
            def.add_to(&mut graph)?;
        }
        Ok(graph)
    }

    /// Terminal pair to reduce between: `explicit` if given, otherwise the
    /// pair from `.terminals`.
    pub fn select_terminals(&self, explicit: Option<(String, String)>) -> Result<(String, String)> {
        explicit
            .or_else(|| self.terminals.clone())
            .ok_or(OhmicError::MissingTerminals)
    }

    /// Find a resistor definition by component name.
    pub fn resistor(&self, name: &str) -> Option<&ResistorDef> {
        self.resistors.iter().find(|def| def.name == name)
    }
}

impl ResistorDef {
    /// Add this resistor to `graph`.
    pub fn add_to(&self, graph: &mut CircuitGraph<String>) -> Result<EdgeKey> {
        graph.add_resistor(self.u.clone(), self.v.clone(), self.resistance)
    }
}
