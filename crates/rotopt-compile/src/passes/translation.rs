//! Basis translation to the native rotation set.

use tracing::debug;

use rotopt_ir::{Circuit, Gate};

use crate::driver::decompose_unitary;
use crate::error::{CompileError, CompileResult};
use crate::hardware::HardwareProfile;
use crate::pass::{Pass, PassKind};

use super::check_width;

/// Basis translation pass.
///
/// Rewrites every gate the target cannot run:
/// - `X(θ)` on `{Y, Z}`: `Z(90), Y(θ), Z(-90)`
/// - `Y(θ)` on `{X, Z}`: `Z(-90), X(θ), Z(90)`
/// - `U(θ, φ, λ)`: its Euler decomposition for the target
pub struct BasisTranslation;

impl Pass for BasisTranslation {
    fn name(&self) -> &'static str {
        "BasisTranslation"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()> {
        check_width(circuit, hardware)?;
        let mut translated = Vec::with_capacity(circuit.len());
        for gate in circuit.gates() {
            translated.extend(translate_gate(gate, hardware)?);
        }
        debug!(
            "Translated {} gates to {} native gates",
            circuit.len(),
            translated.len()
        );
        circuit.set_gates(translated)?;
        Ok(())
    }

    fn should_run(&self, circuit: &Circuit, hardware: &HardwareProfile) -> bool {
        !hardware.supports_all(circuit.gates())
    }
}

/// Translate one gate into native gates for `hardware`.
///
/// Native gates are returned as is.
pub fn translate_gate(gate: &Gate, hardware: &HardwareProfile) -> CompileResult<Vec<Gate>> {
    gate.validate()?;
    for qubit in gate.qubits() {
        hardware.validate_qubit(qubit)?;
    }
    if hardware.supports(gate) {
        return Ok(vec![*gate]);
    }

    match *gate {
        Gate::Rx(q, theta) => Ok(vec![Gate::Rz(q, 90.0), Gate::Ry(q, theta), Gate::Rz(q, -90.0)]),
        Gate::Ry(q, theta) => Ok(vec![Gate::Rz(q, -90.0), Gate::Rx(q, theta), Gate::Rz(q, 90.0)]),
        Gate::U {
            qubit,
            theta,
            phi,
            lambda,
        } => decompose_unitary(qubit, theta, phi, lambda, hardware),
        Gate::Rz(..) | Gate::Cx(..) => Err(CompileError::GateNotNative(gate.to_string())),
    }
}

/// Append `gate` to `circuit`, translated into native gates for `hardware`.
pub fn push_native(
    circuit: &mut Circuit,
    gate: Gate,
    hardware: &HardwareProfile,
) -> CompileResult<()> {
    check_width(circuit, hardware)?;
    for native in translate_gate(&gate, hardware)? {
        circuit.push(native)?;
    }
    Ok(())
}
