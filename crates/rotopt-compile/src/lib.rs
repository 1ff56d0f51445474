//! rotopt Single-Qubit Optimizer
//!
//! This crate rewrites sequences of single-qubit rotations into equivalent,
//! shorter sequences that use only the native rotations of a target device.
//! Equivalence is up to global phase.
//!
//! # Overview
//!
//! A one-qubit sequence goes through two stages:
//! 1. **Peephole**: closed-form identities on windows of up to three gates
//! 2. **Synthesis**: compose the net unitary, extract its Euler angles and
//!    render them as ZXZ or ZYZ, whichever the target can run more cheaply
//!
//! # Architecture
//!
//! ```text
//! gates ──► peephole ──────────────────────────────┐
//!   │                                              ▼
//!   └────► compose ──► EulerAngles ──► select ──► shortest native result
//!                                        ▲
//!                                 HardwareProfile
//! ```
//!
//! # Example: Optimizing a Sequence
//!
//! ```rust
//! use rotopt_compile::{HardwareProfile, NativeBasis, optimize_one_qubit_sequence};
//! use rotopt_ir::{Gate, QubitId};
//!
//! let q = QubitId(0);
//! let hardware = HardwareProfile::new(1, NativeBasis::Xyz).unwrap();
//!
//! let gates = [Gate::Ry(q, 180.0), Gate::Rx(q, 86.0), Gate::Ry(q, 180.0)];
//! let optimized = optimize_one_qubit_sequence(&gates, &hardware).unwrap();
//! assert_eq!(optimized, vec![Gate::Rx(q, -86.0)]);
//! ```
//!
//! # Example: Compiling a Circuit
//!
//! ```rust
//! use rotopt_compile::{HardwareProfile, NativeBasis, PassManagerBuilder};
//! use rotopt_ir::{Circuit, QubitId};
//!
//! let hardware = HardwareProfile::new(2, NativeBasis::Xz).unwrap();
//! let (pm, hardware) = PassManagerBuilder::new().with_hardware(hardware).build();
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.ry(90.0, QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! pm.run(&mut circuit, &hardware).unwrap();
//! assert!(hardware.supports_all(circuit.gates()));
//! ```
//!
//! # Optimization Levels
//!
//! | Level | Passes Included |
//! |-------|-----------------|
//! | 0 | Basis translation |
//! | 1-3 | + Single-qubit run optimization, native verification |
//!
//! # Custom Passes
//!
//! Implement the [`Pass`] trait to create custom compilation passes:
//!
//! ```rust
//! use rotopt_compile::{CompileResult, HardwareProfile, Pass, PassKind};
//! use rotopt_ir::Circuit;
//!
//! struct MyCustomPass;
//!
//! impl Pass for MyCustomPass {
//!     fn name(&self) -> &str { "my_custom_pass" }
//!     fn kind(&self) -> PassKind { PassKind::Transformation }
//!
//!     fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod angle;
pub mod compose;
pub mod driver;
pub mod error;
pub mod euler;
pub mod hardware;
pub mod manager;
pub mod pass;
pub mod peephole;
pub mod select;

// Built-in passes
pub mod passes;

pub use compose::compose;
pub use driver::{decompose_unitary, optimize_one_qubit_sequence};
pub use error::{CompileError, CompileResult};
pub use euler::{EulerAngles, EulerBasis};
pub use hardware::{GateDurations, HardwareConfig, HardwareProfile, NativeBasis};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use passes::optimize_circuit;
pub use peephole::peephole;
pub use select::select;
