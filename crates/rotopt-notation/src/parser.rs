//! Parser for the circuit notation.
//!
//! ```text
//! program  := "[" "]" | gate ("," gate)*
//! gate     := ("X" | "Y" | "Z") "(" index "," angle ")"
//!           | "CX" "(" index "," index ")"
//! angle    := ("+" | "-")? (int | float)
//! ```

use rotopt_ir::{Axis, Circuit, Gate, QubitId};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a notation string into a gate list.
///
/// Empty input and `[]` both parse to an empty list.
pub fn parse(source: &str) -> ParseResult<Vec<Gate>> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Parse a notation string into a circuit on `num_qubits` qubits.
pub fn parse_circuit(source: &str, num_qubits: u32) -> ParseResult<Circuit> {
    let gates = parse(source)?;
    Ok(Circuit::from_gates(num_qubits, gates)?)
}

/// Parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    source_len: usize,
}

impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, msg)) => {
                    return Err(ParseError::LexerError {
                        position: span.start,
                        message: msg,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            source_len: source.len(),
        })
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.token.clone();
        self.pos += 1;
        Some(token)
    }

    /// Build an error for the token that was just consumed.
    fn unexpected(&self, expected: &str, found: &Token) -> ParseError {
        let position = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map_or(self.source_len, |t| t.span.start);
        ParseError::UnexpectedToken {
            position,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Expect a specific token.
    #[allow(clippy::needless_pass_by_value)]
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if found != expected {
            return Err(self.unexpected(&expected.to_string(), &found));
        }
        Ok(())
    }

    fn parse_program(&mut self) -> ParseResult<Vec<Gate>> {
        if self.is_eof() {
            return Ok(vec![]);
        }
        if self.peek() == Some(&Token::LBracket) {
            self.advance();
            self.expect(Token::RBracket)?;
            return self.finish(vec![]);
        }

        let mut gates = vec![self.parse_gate()?];
        while !self.is_eof() {
            self.expect(Token::Comma)?;
            gates.push(self.parse_gate()?);
        }
        Ok(gates)
    }

    fn finish(&mut self, gates: Vec<Gate>) -> ParseResult<Vec<Gate>> {
        match self.advance() {
            None => Ok(gates),
            Some(token) => Err(self.unexpected("end of input", &token)),
        }
    }

    fn parse_gate(&mut self) -> ParseResult<Gate> {
        let token = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected gate".into()))?;

        let axis = match token {
            Token::GateX => Axis::X,
            Token::GateY => Axis::Y,
            Token::GateZ => Axis::Z,
            Token::GateCX => return self.parse_cx(),
            Token::Identifier(name) => return Err(ParseError::UnknownGate(name)),
            other => return Err(self.unexpected("gate name", &other)),
        };

        self.expect(Token::LParen)?;
        let qubit = self.parse_qubit()?;
        self.expect(Token::Comma)?;
        let angle = self.parse_angle()?;
        self.expect(Token::RParen)?;
        Ok(Gate::rotation(axis, qubit, angle))
    }

    fn parse_cx(&mut self) -> ParseResult<Gate> {
        self.expect(Token::LParen)?;
        let control = self.parse_qubit()?;
        self.expect(Token::Comma)?;
        let target = self.parse_qubit()?;
        self.expect(Token::RParen)?;
        Ok(Gate::cx(control, target)?)
    }

    fn parse_qubit(&mut self) -> ParseResult<QubitId> {
        match self.advance() {
            Some(Token::IntLiteral(digits)) => digits
                .parse::<u32>()
                .map(QubitId)
                .map_err(|_| ParseError::InvalidQubitIndex(digits)),
            Some(other) => Err(self.unexpected("qubit index", &other)),
            None => Err(ParseError::UnexpectedEof("expected qubit index".into())),
        }
    }

    fn parse_angle(&mut self) -> ParseResult<f64> {
        let sign = match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                -1.0
            }
            Some(Token::Plus) => {
                self.advance();
                1.0
            }
            _ => 1.0,
        };
        match self.advance() {
            Some(Token::FloatLiteral(v)) => Ok(sign * v),
            Some(Token::IntLiteral(digits)) => match digits.parse::<f64>() {
                Ok(v) => Ok(sign * v),
                Err(_) => Err(self.unexpected("angle", &Token::IntLiteral(digits))),
            },
            Some(other) => Err(self.unexpected("angle", &other)),
            None => Err(ParseError::UnexpectedEof("expected angle".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotopt_ir::IrError;

    #[test]
    fn test_parse_rotations() {
        let gates = parse("X(0, 180.0), Y(0, 67.0), X(0, 5), Y(0, -55.5)").unwrap();
        assert_eq!(
            gates,
            vec![
                Gate::Rx(QubitId(0), 180.0),
                Gate::Ry(QubitId(0), 67.0),
                Gate::Rx(QubitId(0), 5.0),
                Gate::Ry(QubitId(0), -55.5),
            ]
        );
    }

    #[test]
    fn test_parse_large_integer_angle() {
        let gates = parse("X(0, 100000000000000000000), Z(0, -18446744073709551616)").unwrap();
        assert_eq!(
            gates,
            vec![
                Gate::Rx(QubitId(0), 1e20),
                Gate::Rz(QubitId(0), -18_446_744_073_709_551_616.0),
            ]
        );
    }

    #[test]
    fn test_qubit_index_overflow() {
        let err = parse("X(4294967296, 90)").unwrap_err();
        assert!(matches!(err, ParseError::InvalidQubitIndex(ref d) if d == "4294967296"));
    }

    #[test]
    fn test_parse_cx() {
        let gates = parse("Z(1, 90), CX(1, 0)").unwrap();
        assert_eq!(gates[1], Gate::Cx(QubitId(1), QubitId(0)));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  []  ").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(parse("X(0,90)").unwrap(), parse(" X ( 0 , 90 ) ").unwrap());
    }

    #[test]
    fn test_bad_cx_pair() {
        let err = parse("CX(0, 0)").unwrap_err();
        assert!(matches!(
            err,
            ParseError::CircuitError(IrError::UnsupportedGateConfiguration { .. })
        ));
    }

    #[test]
    fn test_unknown_gate() {
        let err = parse("H(0, 90)").unwrap_err();
        assert!(matches!(err, ParseError::UnknownGate(ref name) if name == "H"));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("X(0, 90) Y(0, 90)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == ","));
    }

    #[test]
    fn test_truncated_input() {
        assert!(matches!(
            parse("X(0, ").unwrap_err(),
            ParseError::UnexpectedEof(_)
        ));
        assert!(matches!(
            parse("X(0, 90),").unwrap_err(),
            ParseError::UnexpectedEof(_)
        ));
    }

    #[test]
    fn test_unexpected_token_position() {
        let err = parse("X(0, 90) Y(0, 90)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 9, .. }));
    }

    #[test]
    fn test_lexer_error_position() {
        let err = parse("X(0, 9#0)").unwrap_err();
        assert!(matches!(err, ParseError::LexerError { position: 6, .. }));
    }

    #[test]
    fn test_parse_circuit_validates_qubits() {
        assert!(parse_circuit("X(0, 90), CX(0, 1)", 2).is_ok());
        let err = parse_circuit("X(1, 90)", 1).unwrap_err();
        assert!(matches!(
            err,
            ParseError::CircuitError(IrError::QubitOutOfRange { .. })
        ));
    }
}
