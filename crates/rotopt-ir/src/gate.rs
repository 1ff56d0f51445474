//! Rotation gates and the CX interaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;
use crate::unitary::{Unitary2x2, Unitary4x4};

/// A single-qubit rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Rotation around X.
    X,
    /// Rotation around Y.
    Y,
    /// Rotation around Z.
    Z,
}

impl Axis {
    /// All axes, in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Notation name of the axis.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate instruction with its operands.
///
/// Angles are in degrees. Matrices are derived on demand by
/// [`Gate::unitary`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Rotation around X by an angle in degrees.
    Rx(QubitId, f64),
    /// Rotation around Y by an angle in degrees.
    Ry(QubitId, f64),
    /// Rotation around Z by an angle in degrees.
    Rz(QubitId, f64),
    /// Controlled-X with (control, target). Only (0, 1) and (1, 0) exist.
    Cx(QubitId, QubitId),
    /// General one-qubit unitary U(θ, φ, λ) in degrees.
    ///
    /// Intermediate representation of a composed operator; never produced by
    /// the notation parser.
    U {
        /// Target qubit.
        qubit: QubitId,
        /// Polar angle.
        theta: f64,
        /// Phase applied after the Y rotation.
        phi: f64,
        /// Phase applied before the Y rotation.
        lambda: f64,
    },
}

/// The matrix of a gate, sized by its arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateMatrix {
    /// Single-qubit gate.
    One(Unitary2x2),
    /// Two-qubit gate.
    Two(Unitary4x4),
}

impl GateMatrix {
    /// The 2x2 matrix, if this is a single-qubit gate.
    pub fn as_one(&self) -> Option<&Unitary2x2> {
        match self {
            GateMatrix::One(u) => Some(u),
            GateMatrix::Two(_) => None,
        }
    }
}

impl Gate {
    /// Build a rotation around `axis`.
    pub fn rotation(axis: Axis, qubit: QubitId, angle: f64) -> Self {
        match axis {
            Axis::X => Gate::Rx(qubit, angle),
            Axis::Y => Gate::Ry(qubit, angle),
            Axis::Z => Gate::Rz(qubit, angle),
        }
    }

    /// Build a CX gate, rejecting index pairs other than (0, 1) and (1, 0).
    pub fn cx(control: QubitId, target: QubitId) -> IrResult<Self> {
        match (control.0, target.0) {
            (0, 1) | (1, 0) => Ok(Gate::Cx(control, target)),
            _ => Err(IrError::UnsupportedGateConfiguration { control, target }),
        }
    }

    /// Build a U gate.
    pub fn u(qubit: QubitId, theta: f64, phi: f64, lambda: f64) -> Self {
        Gate::U {
            qubit,
            theta,
            phi,
            lambda,
        }
    }

    /// Get the notation name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Rx(..) => "X",
            Gate::Ry(..) => "Y",
            Gate::Rz(..) => "Z",
            Gate::Cx(..) => "CX",
            Gate::U { .. } => "UOne",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Rx(..) | Gate::Ry(..) | Gate::Rz(..) | Gate::U { .. } => 1,
            Gate::Cx(..) => 2,
        }
    }

    /// Qubits this gate acts on, control first for CX.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Gate::Rx(q, _) | Gate::Ry(q, _) | Gate::Rz(q, _) | Gate::U { qubit: q, .. } => vec![q],
            Gate::Cx(control, target) => vec![control, target],
        }
    }

    /// The qubit of a single-qubit gate.
    pub fn qubit(&self) -> Option<QubitId> {
        match *self {
            Gate::Rx(q, _) | Gate::Ry(q, _) | Gate::Rz(q, _) | Gate::U { qubit: q, .. } => Some(q),
            Gate::Cx(..) => None,
        }
    }

    /// Rotation axis, for the three rotation gates.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Gate::Rx(..) => Some(Axis::X),
            Gate::Ry(..) => Some(Axis::Y),
            Gate::Rz(..) => Some(Axis::Z),
            Gate::Cx(..) | Gate::U { .. } => None,
        }
    }

    /// Rotation angle in degrees, for the three rotation gates.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Gate::Rx(_, a) | Gate::Ry(_, a) | Gate::Rz(_, a) => Some(a),
            Gate::Cx(..) | Gate::U { .. } => None,
        }
    }

    /// Same gate with a different rotation angle. Non-rotations are returned
    /// unchanged.
    #[must_use]
    pub fn with_angle(&self, angle: f64) -> Self {
        match *self {
            Gate::Rx(q, _) => Gate::Rx(q, angle),
            Gate::Ry(q, _) => Gate::Ry(q, angle),
            Gate::Rz(q, _) => Gate::Rz(q, angle),
            other => other,
        }
    }

    /// Check that every angle parameter is finite and that a CX acts on
    /// the pair (0, 1) or (1, 0).
    pub fn validate(&self) -> IrResult<()> {
        let angles = match *self {
            Gate::Rx(_, a) | Gate::Ry(_, a) | Gate::Rz(_, a) => vec![a],
            Gate::U {
                theta, phi, lambda, ..
            } => vec![theta, phi, lambda],
            Gate::Cx(control, target) => return Gate::cx(control, target).map(drop),
        };
        match angles.iter().find(|a| !a.is_finite()) {
            Some(&angle) => Err(IrError::NonFiniteAngle {
                gate_name: self.name(),
                angle,
            }),
            None => Ok(()),
        }
    }

    /// The unitary matrix of this gate.
    ///
    /// This is the only place where degrees are converted to radians. A CX
    /// is assumed to have passed [`Gate::validate`].
    pub fn unitary(&self) -> GateMatrix {
        match *self {
            Gate::Rx(_, a) => GateMatrix::One(Unitary2x2::rx(a.to_radians())),
            Gate::Ry(_, a) => GateMatrix::One(Unitary2x2::ry(a.to_radians())),
            Gate::Rz(_, a) => GateMatrix::One(Unitary2x2::rz(a.to_radians())),
            Gate::U {
                theta, phi, lambda, ..
            } => GateMatrix::One(Unitary2x2::u(
                theta.to_radians(),
                phi.to_radians(),
                lambda.to_radians(),
            )),
            Gate::Cx(control, _) => {
                if control.0 == 0 {
                    GateMatrix::Two(Unitary4x4::cx01())
                } else {
                    GateMatrix::Two(Unitary4x4::cx10())
                }
            }
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rx(q, a) | Gate::Ry(q, a) | Gate::Rz(q, a) => {
                write!(f, "{}({}, {})", self.name(), q.0, a)
            }
            Gate::Cx(c, t) => write!(f, "CX({}, {})", c.0, t.0),
            Gate::U {
                qubit,
                theta,
                phi,
                lambda,
            } => write!(f, "UOne({}, {theta}, {phi}, {lambda})", qubit.0),
        }
    }
}
