//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur during optimization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] rotopt_ir::IrError),

    /// The phase-stripped composed operator kept an imaginary `[0, 0]` entry.
    #[error("Numerical inconsistency: [0, 0] entry has imaginary part {imag:e} after phase removal")]
    NumericalInconsistency { imag: f64 },

    /// The profile allows neither the ZXZ nor the ZYZ decomposition.
    #[error("Unreachable hardware state: neither X nor Y rotations are native")]
    UnreachableHardwareState,

    /// Hardware profile values are out of range.
    #[error("Invalid hardware profile: {0}")]
    InvalidHardwareProfile(String),

    /// A gate that acts on more than one qubit was given to a one-qubit routine.
    #[error("Gate '{0}' is not a single-qubit gate")]
    NotSingleQubit(String),

    /// The sequence acts on more than one qubit.
    #[error("Sequence mixes qubits {first} and {second}")]
    MixedQubits {
        first: rotopt_ir::QubitId,
        second: rotopt_ir::QubitId,
    },

    /// Gate not in the target basis and no translation exists for it.
    #[error("Gate '{0}' not in target basis")]
    GateNotNative(String),

    /// Circuit too wide for the target.
    #[error("Circuit requires {required} qubits but target only has {available}")]
    CircuitTooLarge { required: u32, available: u32 },

    /// Hardware configuration could not be decoded.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
