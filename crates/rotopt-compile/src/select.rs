//! Choice between the ZXZ and ZYZ renderings for a target.

use tracing::debug;

use rotopt_ir::{Axis, Gate, QubitId};

use crate::error::{CompileError, CompileResult};
use crate::euler::{EulerAngles, EulerBasis};
use crate::hardware::HardwareProfile;

/// Pick the rendering of `angles` that runs on `hardware`.
///
/// If only one of X and Y is native its rendering is used. With both native
/// the rendering with the strictly lower total duration wins and ties go to
/// ZYZ.
pub fn select(
    angles: &EulerAngles,
    qubit: QubitId,
    hardware: &HardwareProfile,
) -> CompileResult<(EulerBasis, Vec<Gate>)> {
    let basis = hardware.basis();
    let (has_x, has_y) = (basis.contains(Axis::X), basis.contains(Axis::Y));

    let choice = match (has_x, has_y) {
        (false, false) => return Err(CompileError::UnreachableHardwareState),
        (false, true) => (EulerBasis::Zyz, angles.zyz(qubit)),
        (true, false) => (EulerBasis::Zxz, angles.zxz(qubit)),
        (true, true) => {
            let zxz = angles.zxz(qubit);
            let zyz = angles.zyz(qubit);
            let zxz_cost = hardware.duration_of_sequence(&zxz)?;
            let zyz_cost = hardware.duration_of_sequence(&zyz)?;
            debug!("ZXZ costs {zxz_cost}, ZYZ costs {zyz_cost}");
            if zxz_cost < zyz_cost {
                (EulerBasis::Zxz, zxz)
            } else {
                (EulerBasis::Zyz, zyz)
            }
        }
    };

    debug!("Selected {} decomposition with {} gates", choice.0, choice.1.len());
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{GateDurations, NativeBasis};

    const Q0: QubitId = QubitId(0);

    fn profile(basis: NativeBasis, x: u64, y: u64) -> HardwareProfile {
        HardwareProfile::new(1, basis)
            .unwrap()
            .with_durations(GateDurations {
                x,
                y,
                ..GateDurations::default()
            })
            .unwrap()
    }

    #[test]
    fn test_missing_x_forces_zyz() {
        let angles = EulerAngles::new(40.0, 30.0, 60.0);
        let (basis, gates) = select(&angles, Q0, &profile(NativeBasis::Yz, 10, 1000)).unwrap();
        assert_eq!(basis, EulerBasis::Zyz);
        assert_eq!(gates[1], Gate::Ry(Q0, 40.0));
    }

    #[test]
    fn test_missing_y_forces_zxz() {
        let angles = EulerAngles::new(40.0, 30.0, 60.0);
        let (basis, gates) = select(&angles, Q0, &profile(NativeBasis::Xz, 1000, 10)).unwrap();
        assert_eq!(basis, EulerBasis::Zxz);
        assert_eq!(
            gates,
            vec![Gate::Rz(Q0, -30.0), Gate::Rx(Q0, 40.0), Gate::Rz(Q0, 120.0)]
        );
    }

    #[test]
    fn test_cheaper_wins() {
        let angles = EulerAngles::new(40.0, 30.0, 60.0);
        let (basis, _) = select(&angles, Q0, &profile(NativeBasis::Xyz, 5, 10)).unwrap();
        assert_eq!(basis, EulerBasis::Zxz);
        let (basis, _) = select(&angles, Q0, &profile(NativeBasis::Xyz, 10, 5)).unwrap();
        assert_eq!(basis, EulerBasis::Zyz);
    }

    #[test]
    fn test_tie_goes_to_zyz() {
        let angles = EulerAngles::new(40.0, 30.0, 60.0);
        let (basis, _) = select(&angles, Q0, &HardwareProfile::default()).unwrap();
        assert_eq!(basis, EulerBasis::Zyz);
    }

    #[test]
    fn test_fewer_gates_can_win() {
        // λ = 90 drops a Z rotation from the ZXZ form only.
        let angles = EulerAngles::new(40.0, 10.0, 90.0);
        let (basis, gates) = select(&angles, Q0, &HardwareProfile::default()).unwrap();
        assert_eq!(basis, EulerBasis::Zxz);
        assert_eq!(gates.len(), 2);
    }
}
