//! Euler decomposition of one-qubit unitaries.
//!
//! Every one-qubit unitary equals, up to global phase,
//!
//! ```text
//! U(θ, φ, λ) = [[cos θ/2,          -e^(iλ) sin θ/2     ],
//!               [e^(iφ) sin θ/2,    e^(i(φ+λ)) cos θ/2 ]]
//! ```
//!
//! which can be written as a Z rotation, a rotation around X or Y, and a
//! second Z rotation:
//!
//! | Basis | Gates (applied left to right) |
//! |-------|-------------------------------|
//! | ZYZ | `Rz(λ)`, `Ry(θ)`, `Rz(φ)` |
//! | ZXZ | `Rz(λ - 90)`, `Rx(θ)`, `Rz(φ + 90)` |

use std::fmt;

use rotopt_ir::{Axis, Gate, QubitId, Unitary2x2};

use crate::angle::{is_zero_angle, normalize_degrees};
use crate::compose::strip_phase;
use crate::error::CompileResult;

/// Below this magnitude `U[1, 0]` is treated as zero and the operator as a
/// pure Z rotation.
const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// The canonical angles `(θ, φ, λ)` of a one-qubit unitary, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Polar angle, in `[0, 180]` when derived from a unitary.
    pub theta: f64,
    /// Phase of the lower-left element.
    pub phi: f64,
    /// Phase of the negated upper-right element.
    pub lambda: f64,
}

impl EulerAngles {
    /// Create from angles in degrees.
    pub fn new(theta: f64, phi: f64, lambda: f64) -> Self {
        Self { theta, phi, lambda }
    }

    /// Extract the canonical angles of `u`.
    ///
    /// The global phase is removed first. `θ = 2·arccos|U00|`, computed as
    /// `2·atan2(|U10|, |U00|)` so that near-identity operators keep full
    /// precision. When `U10` vanishes the operator is diagonal and
    /// `θ = 0`, `φ = arg U11`, `λ = 0`.
    pub fn from_unitary(u: &Unitary2x2) -> CompileResult<Self> {
        let u = strip_phase(u)?;
        let (u00, u01, u10, u11) = (u.get(0, 0), u.get(0, 1), u.get(1, 0), u.get(1, 1));

        if u10.norm() < DEGENERATE_TOLERANCE {
            return Ok(Self::new(0.0, u11.arg().to_degrees(), 0.0));
        }
        Ok(Self::new(
            (2.0 * u10.norm().atan2(u00.norm())).to_degrees(),
            u10.arg().to_degrees(),
            (-u01).arg().to_degrees(),
        ))
    }

    /// The unitary `U(θ, φ, λ)`.
    pub fn unitary(&self) -> Unitary2x2 {
        Unitary2x2::u(
            self.theta.to_radians(),
            self.phi.to_radians(),
            self.lambda.to_radians(),
        )
    }

    /// Render as `Rz(λ)`, `Ry(θ)`, `Rz(φ)`.
    pub fn zyz(&self, qubit: QubitId) -> Vec<Gate> {
        render(qubit, Axis::Y, self.lambda, self.theta, self.phi)
    }

    /// Render as `Rz(λ - 90)`, `Rx(θ)`, `Rz(φ + 90)`.
    pub fn zxz(&self, qubit: QubitId) -> Vec<Gate> {
        render(qubit, Axis::X, self.lambda - 90.0, self.theta, self.phi + 90.0)
    }
}

/// The two Z-sandwich decompositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerBasis {
    /// Z, X, Z.
    Zxz,
    /// Z, Y, Z.
    Zyz,
}

impl EulerBasis {
    /// Axis of the middle rotation.
    pub fn middle_axis(self) -> Axis {
        match self {
            EulerBasis::Zxz => Axis::X,
            EulerBasis::Zyz => Axis::Y,
        }
    }

    /// Render `angles` in this basis on `qubit`.
    pub fn render(self, angles: &EulerAngles, qubit: QubitId) -> Vec<Gate> {
        match self {
            EulerBasis::Zxz => angles.zxz(qubit),
            EulerBasis::Zyz => angles.zyz(qubit),
        }
    }
}

impl fmt::Display for EulerBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerBasis::Zxz => f.write_str("ZXZ"),
            EulerBasis::Zyz => f.write_str("ZYZ"),
        }
    }
}

/// Emit `Rz(first)`, `R<middle>(mid)`, `Rz(last)` with zero rotations
/// dropped. If the middle rotation drops out the two Z rotations merge.
fn render(qubit: QubitId, middle: Axis, first: f64, mid: f64, last: f64) -> Vec<Gate> {
    let mid = normalize_degrees(mid);
    if is_zero_angle(mid) {
        let z = normalize_degrees(first + last);
        if is_zero_angle(z) {
            return vec![];
        }
        return vec![Gate::Rz(qubit, z)];
    }

    let mut gates = Vec::with_capacity(3);
    let first = normalize_degrees(first);
    if !is_zero_angle(first) {
        gates.push(Gate::Rz(qubit, first));
    }
    gates.push(Gate::rotation(middle, qubit, mid));
    let last = normalize_degrees(last);
    if !is_zero_angle(last) {
        gates.push(Gate::Rz(qubit, last));
    }
    gates
}
