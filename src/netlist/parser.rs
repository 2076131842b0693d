//! Parser for resistor netlists.

use std::collections::HashSet;

use super::ast::{Netlist, ResistorDef};
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{OhmicError, Result};
use crate::units::parse_value;

/// Parser for resistor netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            // Replaced by the first real token in `parse`
            current: Token {
                kind: TokenKind::Newline,
                text: String::new(),
                line: 1,
                column: 1,
            },
        }
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<Netlist> {
        let mut netlist = Netlist::new();
        let mut names = HashSet::new();

        self.advance()?;

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                // Skip empty lines
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => {
                    if !self.parse_directive(&mut netlist)? {
                        break;
                    }
                }
                TokenKind::Identifier => {
                    let resistor = self.parse_resistor()?;
                    if !names.insert(resistor.name.clone()) {
                        return Err(OhmicError::DuplicateComponent {
                            name: resistor.name,
                        });
                    }
                    netlist.resistors.push(resistor);
                }
                TokenKind::Number | TokenKind::Eof => {
                    return Err(OhmicError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_end_of_line()?;
        }

        Ok(netlist)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn at_end_of_line(&self) -> bool {
        matches!(self.current.kind, TokenKind::Newline | TokenKind::Eof)
    }

    fn expect_end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(OhmicError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    /// Collect the remaining tokens on the current line.
    fn operands(&mut self) -> Result<Vec<Token>> {
        let mut operands = Vec::new();
        while !self.at_end_of_line() {
            operands.push(self.current.clone());
            self.advance()?;
        }
        Ok(operands)
    }

    /// Parse a directive. Returns `false` when parsing should stop (`.end`).
    fn parse_directive(&mut self, netlist: &mut Netlist) -> Result<bool> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".terminals" => {
                let operands = self.operands()?;
                match operands.as_slice() {
                    [a, b] if is_node(a) && is_node(b) => {
                        netlist.terminals = Some((a.text.clone(), b.text.clone()));
                    }
                    _ => {
                        return Err(OhmicError::parse(
                            line,
                            format!(".terminals expects 2 node names, got {} tokens", operands.len()),
                        ));
                    }
                }
                Ok(true)
            }
            ".end" => Ok(false),
            _ => Err(OhmicError::parse(line, format!("unknown directive: {}", directive))),
        }
    }

    fn parse_resistor(&mut self) -> Result<ResistorDef> {
        let name = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        if !name.starts_with(['R', 'r']) {
            return Err(OhmicError::UnknownComponentType {
                component_type: name,
                line,
            });
        }

        let operands = self.operands()?;
        let [u, v, value] = operands.as_slice() else {
            return Err(OhmicError::invalid_component(
                &name,
                line,
                format!("expected 2 nodes and a value, got {} tokens", operands.len()),
            ));
        };

        if !is_node(u) || !is_node(v) {
            return Err(OhmicError::invalid_component(
                &name,
                line,
                "node names must be plain identifiers or numbers",
            ));
        }

        let resistance = parse_value(&value.text).ok_or_else(|| {
            OhmicError::invalid_component(&name, line, format!("invalid value: {}", value.text))
        })?;

        Ok(ResistorDef {
            name,
            u: u.text.clone(),
            v: v.text.clone(),
            resistance,
            line,
        })
    }
}

fn is_node(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Identifier | TokenKind::Number)
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;

    #[test]
    fn test_parse_resistor() {
        let netlist = parse("R1 in out 10k").unwrap();
        assert_eq!(netlist.resistors.len(), 1);
        assert_eq!(
            netlist.resistors[0],
            ResistorDef {
                name: "R1".to_string(),
                u: "in".to_string(),
                v: "out".to_string(),
                resistance: 10_000.0,
                line: 1,
            }
        );
    }

    #[test]
    fn test_parse_terminals_and_comments() {
        let input = "\
# Voltage divider
.terminals top 0

R1 top mid 1k   ; upper leg
r2 mid 0 2.2k
";
        let netlist = parse(input).unwrap();
        assert_eq!(netlist.terminals, Some(("top".to_string(), "0".to_string())));
        assert_eq!(netlist.resistors.len(), 2);
        assert_eq!(netlist.resistor("r2").unwrap().v, "0");
        assert_eq!(netlist.resistor("r2").unwrap().line, 5);
    }

    #[test]
    fn test_parse_stops_at_end() {
        let netlist = parse("R1 a b 1\n.end\nthis is ignored").unwrap();
        assert_eq!(netlist.resistors.len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("C1 a b 1u"),
            Err(OhmicError::UnknownComponentType { line: 1, .. })
        ));
        assert!(matches!(
            parse("R1 a b"),
            Err(OhmicError::InvalidComponent { line: 1, .. })
        ));
        assert!(matches!(
            parse("R1 a b 1 2"),
            Err(OhmicError::InvalidComponent { .. })
        ));
        assert!(matches!(
            parse("R1 a b 10x"),
            Err(OhmicError::InvalidComponent { .. })
        ));
        assert!(matches!(
            parse("R1 a b 1\nR1 b c 2"),
            Err(OhmicError::DuplicateComponent { .. })
        ));
        assert!(matches!(
            parse(".probe a"),
            Err(OhmicError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            parse(".terminals a"),
            Err(OhmicError::ParseError { .. })
        ));
        assert!(matches!(parse("10 a b"), Err(OhmicError::ParseError { .. })));
        assert!(matches!(parse("R1 a - 5"), Err(OhmicError::LexerError { .. })));
    }
}
