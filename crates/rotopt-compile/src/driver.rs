//! Entry points for optimizing one-qubit sequences.

use tracing::debug;

use rotopt_ir::{Gate, QubitId};

use crate::compose::{compose, sequence_qubit};
use crate::error::CompileResult;
use crate::euler::EulerAngles;
use crate::hardware::HardwareProfile;
use crate::peephole::peephole;
use crate::select::select;

/// Longest sequence handed to the peephole rewriter.
pub const PEEPHOLE_WINDOW: usize = 3;

/// Optimize a sequence of rotations on one qubit for `hardware`.
///
/// Sequences of up to three gates go through the peephole rewriter first. A
/// shorter native result is returned directly; otherwise the sequence is
/// also synthesized from its net unitary and the shorter native candidate is
/// returned, preferring the rewritten one on ties. Longer sequences are
/// always synthesized, yielding at most three gates.
///
/// The result is equivalent to `gates` up to global phase and uses only
/// native rotations.
pub fn optimize_one_qubit_sequence(
    gates: &[Gate],
    hardware: &HardwareProfile,
) -> CompileResult<Vec<Gate>> {
    let Some(qubit) = sequence_qubit(gates)? else {
        return Ok(vec![]);
    };
    hardware.validate_qubit(qubit)?;
    for gate in gates {
        gate.validate()?;
    }

    if gates.len() > PEEPHOLE_WINDOW {
        return synthesize(gates, qubit, hardware);
    }

    let rewritten = peephole(gates);
    let rewritten_native = hardware.supports_all(&rewritten);
    if rewritten.len() < gates.len() && rewritten_native {
        debug!(
            "Peephole reduced {} gates to {}",
            gates.len(),
            rewritten.len()
        );
        return Ok(rewritten);
    }

    let synthesized = synthesize(gates, qubit, hardware)?;
    if rewritten_native && rewritten.len() <= synthesized.len() {
        Ok(rewritten)
    } else {
        Ok(synthesized)
    }
}

/// Decompose `U(theta, phi, lambda)` (degrees) into native rotations on
/// `qubit`.
pub fn decompose_unitary(
    qubit: QubitId,
    theta: f64,
    phi: f64,
    lambda: f64,
    hardware: &HardwareProfile,
) -> CompileResult<Vec<Gate>> {
    Gate::u(qubit, theta, phi, lambda).validate()?;
    hardware.validate_qubit(qubit)?;
    let (_, gates) = select(&EulerAngles::new(theta, phi, lambda), qubit, hardware)?;
    Ok(gates)
}

/// Compose, decompose and render for the target.
fn synthesize(
    gates: &[Gate],
    qubit: QubitId,
    hardware: &HardwareProfile,
) -> CompileResult<Vec<Gate>> {
    let unitary = compose(gates)?;
    let angles = EulerAngles::from_unitary(&unitary)?;
    debug!(
        "Net operator of {} gates on {qubit}: theta={:.6}, phi={:.6}, lambda={:.6}",
        gates.len(),
        angles.theta,
        angles.phi,
        angles.lambda
    );
    let (_, rendered) = select(&angles, qubit, hardware)?;
    Ok(rendered)
}
