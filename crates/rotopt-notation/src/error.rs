//! Error types for the notation parser.

use thiserror::Error;

/// Errors that can occur during parsing and emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at position {position}: {message}")]
    LexerError { position: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at position {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        position: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Gate name is not part of the notation.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Qubit index does not fit a qubit id.
    #[error("Invalid qubit index: {0}")]
    InvalidQubitIndex(String),

    /// Gate has no notation form.
    #[error("Gate '{0}' cannot be written in circuit notation")]
    Unrepresentable(String),

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    CircuitError(#[from] rotopt_ir::IrError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
