//! rotopt Circuit Intermediate Representation
//!
//! This crate provides the value types the optimizer works on: rotation gates,
//! their unitary matrices, and a small circuit container.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing the one- or two-qubit register
//! - **Gates**: [`Gate`], a closed set of X/Y/Z rotations (degrees), the CX
//!   interaction and the general one-qubit unitary `U(θ, φ, λ)`
//! - **Unitaries**: [`Unitary2x2`] and [`Unitary4x4`], derived on demand from a
//!   gate's parameters
//! - **Circuit**: [`Circuit`], an ordered gate list with index validation
//!
//! # Example
//!
//! ```rust
//! use rotopt_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.rx(90.0, QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.to_string(), "X(0, 90), CX(0, 1)");
//! ```
//!
//! # Matrix Convention
//!
//! A gate list `[g1, g2, ..., gn]` applies `g1` first. Its net operator is
//! `M(gn) · ... · M(g2) · M(g1)`.
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation by an angle in degrees |
//! | `U` | 1 | General one-qubit unitary U(θ,φ,λ) |
//! | `Cx` | 2 | Controlled-NOT on (0, 1) or (1, 0) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod unitary;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Axis, Gate, GateMatrix};
pub use qubit::QubitId;
pub use unitary::{Unitary2x2, Unitary4x4};
