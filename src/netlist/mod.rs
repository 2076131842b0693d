//! Netlist parser for resistor networks.
//!
//! This module reads a SPICE-inspired text description of a resistor network.
//! The format is line-oriented and human-editable.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | resistor | empty
//! comment     = ('#' | ';' | '*') { any_char }
//! directive   = ".terminals" node node | ".end"
//! resistor    = name node node value
//!
//! name        = ('R' | 'r') { letter | digit | '_' }
//! node        = identifier | number
//! value       = number [unit_suffix] ["Ω" | "ohm"]
//!
//! number      = ['-'|'+'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! Node names are plain labels. `0` and `GND` have no special meaning.
//! Everything after `.end` is ignored.
//!
//! # Example
//!
//! ```text
//! # Series resistor into a parallel pair
//! .terminals a d
//!
//! R1 a b 10
//! R2 b c 20
//! R3 b c 30
//! R4 c d 40
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist string.
pub fn parse(input: &str) -> Result<Netlist> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::OhmicError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
