//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum IrError {
    /// CX is only defined on the ordered pairs (0, 1) and (1, 0).
    #[error("CX gate requires qubit pair (q0, q1) or (q1, q0), got ({control}, {target})")]
    UnsupportedGateConfiguration {
        /// The requested control qubit.
        control: QubitId,
        /// The requested target qubit.
        target: QubitId,
    },

    /// Qubit index outside the circuit.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Circuits are defined on one or two qubits only.
    #[error("Circuits support 1 or 2 qubits, got {0}")]
    UnsupportedQubitCount(u32),

    /// Rotation angle is NaN or infinite.
    #[error("Gate '{gate_name}' has non-finite angle {angle}")]
    NonFiniteAngle {
        /// Name of the gate.
        gate_name: &'static str,
        /// The rejected angle in degrees.
        angle: f64,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
