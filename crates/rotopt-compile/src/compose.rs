//! Operator composition: fold a one-qubit gate sequence into its net unitary.

use num_complex::Complex64;

use rotopt_ir::{Gate, GateMatrix, QubitId, Unitary2x2};

use crate::error::{CompileError, CompileResult};

/// Largest imaginary part tolerated in `[0, 0]` after phase removal.
pub const PHASE_TOLERANCE: f64 = 1e-5;

/// Unitarity bound checked on every composed operator in debug builds.
const UNITARITY_TOLERANCE: f64 = 1e-8;

/// The one qubit a sequence acts on.
///
/// Returns `None` for an empty sequence. Two-qubit gates and sequences that
/// touch more than one qubit are rejected.
pub fn sequence_qubit(gates: &[Gate]) -> CompileResult<Option<QubitId>> {
    let mut qubit = None;
    for gate in gates {
        let q = gate
            .qubit()
            .ok_or_else(|| CompileError::NotSingleQubit(gate.name().to_string()))?;
        match qubit {
            None => qubit = Some(q),
            Some(first) if first != q => {
                return Err(CompileError::MixedQubits { first, second: q });
            }
            Some(_) => {}
        }
    }
    Ok(qubit)
}

/// Compose a one-qubit gate sequence into its net operator.
///
/// The first gate is applied first, so the result is `M(gn) · … · M(g1)`. The
/// global phase is then removed so that `[0, 0]` is non-negative real. An
/// empty sequence composes to the identity.
pub fn compose(gates: &[Gate]) -> CompileResult<Unitary2x2> {
    sequence_qubit(gates)?;

    let mut combined = Unitary2x2::identity();
    for gate in gates {
        match gate.unitary() {
            GateMatrix::One(u) => combined = u * combined,
            GateMatrix::Two(_) => return Err(CompileError::NotSingleQubit(gate.name().into())),
        }
    }
    debug_assert!(
        combined.is_unitary(UNITARITY_TOLERANCE),
        "composed operator drifted from unitarity: {}",
        combined.unitarity_error()
    );

    strip_phase(&combined)
}

/// Remove the global phase of `u`, checking that `[0, 0]` ends up real.
///
/// A NaN in `[0, 0]` fails the check.
pub(crate) fn strip_phase(u: &Unitary2x2) -> CompileResult<Unitary2x2> {
    let stripped = u.strip_global_phase();
    let corner: Complex64 = stripped.get(0, 0);
    if corner.im.is_nan() || corner.im.abs() > PHASE_TOLERANCE {
        return Err(CompileError::NumericalInconsistency { imag: corner.im });
    }
    Ok(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q0: QubitId = QubitId(0);

    #[test]
    fn test_empty_is_identity() {
        let u = compose(&[]).unwrap();
        assert!(u.is_identity());
        assert!((u.get(0, 0) - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_corner_is_real() {
        let u = compose(&[Gate::Rz(Q0, 70.0), Gate::Rx(Q0, 33.0), Gate::Ry(Q0, 12.0)]).unwrap();
        assert!(u.get(0, 0).im.abs() < 1e-12);
        assert!(u.get(0, 0).re >= 0.0);
    }

    #[test]
    fn test_application_order() {
        // Rx(90) then Rz(90): M = Rz · Rx, which differs from Rx · Rz.
        let composed = compose(&[Gate::Rx(Q0, 90.0), Gate::Rz(Q0, 90.0)]).unwrap();
        let rx = Unitary2x2::rx(90_f64.to_radians());
        let rz = Unitary2x2::rz(90_f64.to_radians());
        assert!(composed.equiv_up_to_phase(&(rz * rx), 1e-10));
        assert!(!composed.equiv_up_to_phase(&(rx * rz), 1e-6));
    }

    #[test]
    fn test_inverse_rotations_cancel() {
        let u = compose(&[Gate::Ry(Q0, 37.0), Gate::Ry(Q0, -37.0)]).unwrap();
        assert!(u.is_identity());
    }

    #[test]
    fn test_rejects_cx() {
        let err = compose(&[Gate::Cx(QubitId(0), QubitId(1))]).unwrap_err();
        assert!(matches!(err, CompileError::NotSingleQubit(ref name) if name == "CX"));
    }

    #[test]
    fn test_rejects_mixed_qubits() {
        let err = compose(&[Gate::Rx(Q0, 10.0), Gate::Rx(QubitId(1), 10.0)]).unwrap_err();
        assert!(matches!(err, CompileError::MixedQubits { .. }));
    }

    #[test]
    fn test_strip_phase_makes_corner_real() {
        let u = Unitary2x2::ry(0.8).scale(Complex64::from_polar(1.0, -1.3));
        let stripped = strip_phase(&u).unwrap();
        assert!(stripped.get(0, 0).im.abs() < 1e-12);
        assert!(stripped.equiv_up_to_phase(&u, 1e-12));
    }

    #[test]
    fn test_strip_phase_rejects_corrupted_corner() {
        let corrupted = Unitary2x2::new(
            Complex64::new(f64::NAN, 0.5),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        );
        let err = strip_phase(&corrupted).unwrap_err();
        assert!(matches!(err, CompileError::NumericalInconsistency { imag } if imag.is_nan()));
        assert!(err.to_string().starts_with("Numerical inconsistency: [0, 0] entry"));
    }

    #[test]
    fn test_sequence_qubit() {
        assert_eq!(sequence_qubit(&[]).unwrap(), None);
        assert_eq!(
            sequence_qubit(&[Gate::Rz(QubitId(1), 1.0), Gate::Rx(QubitId(1), 1.0)]).unwrap(),
            Some(QubitId(1))
        );
    }
}
