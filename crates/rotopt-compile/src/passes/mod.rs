//! Built-in compilation passes.

mod optimize_runs;
mod translation;
mod verification;

pub use optimize_runs::{Optimize1qRuns, optimize_circuit};
pub use translation::{BasisTranslation, push_native, translate_gate};
pub use verification::NativeVerification;

/// Fail if `circuit` is wider than the target.
pub(crate) fn check_width(
    circuit: &rotopt_ir::Circuit,
    hardware: &crate::hardware::HardwareProfile,
) -> crate::error::CompileResult<()> {
    if circuit.num_qubits() > hardware.num_qubits() {
        return Err(crate::error::CompileError::CircuitTooLarge {
            required: circuit.num_qubits(),
            available: hardware.num_qubits(),
        });
    }
    Ok(())
}
