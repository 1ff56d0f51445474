//! Pass trait and types for compilation passes.

use rotopt_ir::Circuit;

use crate::error::CompileResult;
use crate::hardware::HardwareProfile;

/// The kind of compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Analysis pass that reads but does not modify the circuit.
    Analysis,
    /// Transformation pass that modifies the circuit.
    Transformation,
}

/// A compilation pass that operates on a circuit for a given target.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Get the kind of this pass.
    fn kind(&self) -> PassKind;

    /// Run the pass on the given circuit.
    ///
    /// Analysis passes must leave the circuit unchanged.
    fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()>;

    /// Check if this pass should run based on current state.
    fn should_run(&self, _circuit: &Circuit, _hardware: &HardwareProfile) -> bool {
        true
    }
}
