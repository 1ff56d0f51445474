//! Circuit Notation Parser and Emitter for rotopt
//!
//! The notation is a comma-separated gate list on a one- or two-qubit
//! register, with angles in degrees:
//!
//! ```text
//! X(0, 90), Z(1, 180), CX(0, 1), Y(1, -45.5)
//! ```
//!
//! # Example: Parsing
//!
//! ```rust
//! use rotopt_notation::parse_circuit;
//!
//! let circuit = parse_circuit("X(0, 90), Z(1, 180), CX(0, 1)", 2).unwrap();
//! assert_eq!(circuit.len(), 3);
//! ```
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use rotopt_notation::{emit, parse};
//!
//! let gates = parse("Y(0, 180), X(0, 86.5), Y(0, 180)").unwrap();
//! assert_eq!(emit(&gates).unwrap(), "Y(0, 180), X(0, 86.5), Y(0, 180)");
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;

pub use emitter::{emit, emit_circuit};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_circuit};
