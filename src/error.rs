//! Error types for the Ohmic resistor-network reducer.
//!
//! This module provides a unified error type [`OhmicError`] that covers
//! all error conditions that can occur while building a circuit, parsing a
//! netlist, or asking for an equivalent resistance.
//!
//! A network that series/parallel reduction cannot collapse is *not* an
//! error. It is reported through [`crate::reduce::Reduction::Irreducible`].

use thiserror::Error;

/// Result type alias using [`OhmicError`].
pub type Result<T> = std::result::Result<T, OhmicError>;

/// Unified error type for all Ohmic operations.
#[derive(Error, Debug)]
pub enum OhmicError {
    // ============ Circuit Construction Errors ============
    /// Resistance is zero, negative, or not a number
    #[error("Invalid resistance {resistance} between '{u}' and '{v}': must be a finite value > 0")]
    InvalidResistance {
        u: String,
        v: String,
        resistance: f64,
    },

    /// Terminal node not present in the circuit
    #[error("Terminal node '{node}' not found in circuit")]
    UnknownTerminal { node: String },

    // ============ Netlist Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Malformed component line
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Only resistors are understood by the reducer
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    /// Duplicate component name
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    /// No terminal pair was given on the command line or in the netlist
    #[error("No terminals specified (use '.terminals <a> <b>' or --from/--to)")]
    MissingTerminals,

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OhmicError {
    /// Create an invalid resistance error
    pub fn invalid_resistance(u: impl ToString, v: impl ToString, resistance: f64) -> Self {
        Self::InvalidResistance {
            u: u.to_string(),
            v: v.to_string(),
            resistance,
        }
    }

    /// Create an unknown terminal error
    pub fn unknown_terminal(node: impl ToString) -> Self {
        Self::UnknownTerminal {
            node: node.to_string(),
        }
    }

    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OhmicError::invalid_resistance("a", "b", -5.0);
        assert_eq!(
            err.to_string(),
            "Invalid resistance -5 between 'a' and 'b': must be a finite value > 0"
        );

        let err = OhmicError::unknown_terminal(7);
        assert_eq!(err.to_string(), "Terminal node '7' not found in circuit");

        let err = OhmicError::parse(3, "unknown directive: .foo");
        assert_eq!(err.to_string(), "Parse error at line 3: unknown directive: .foo");
    }
}
