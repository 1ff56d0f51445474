//! Verification that a compiled circuit runs on its target.

use tracing::debug;

use rotopt_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::hardware::HardwareProfile;
use crate::pass::{Pass, PassKind};

use super::check_width;

/// Analysis pass that fails on the first gate the target cannot run.
///
/// Added after translation and optimization to catch passes that emit
/// non-native gates.
pub struct NativeVerification;

impl Pass for NativeVerification {
    fn name(&self) -> &'static str {
        "native_verification"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()> {
        check_width(circuit, hardware)?;
        if let Some(gate) = circuit.gates().iter().find(|g| !hardware.supports(g)) {
            return Err(CompileError::GateNotNative(gate.to_string()));
        }
        debug!(
            "All {} gates native to {}",
            circuit.len(),
            hardware.basis()
        );
        Ok(())
    }
}
