//! Pass manager for orchestrating compilation.

use tracing::{debug, info, instrument};

use rotopt_ir::Circuit;

use crate::error::CompileResult;
use crate::hardware::HardwareProfile;
use crate::pass::Pass;
use crate::passes::{BasisTranslation, NativeVerification, Optimize1qRuns};

/// Manages and executes a sequence of compilation passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on the given circuit.
    #[instrument(skip(self, circuit, hardware))]
    pub fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()> {
        info!(
            "Running pass manager with {} passes on circuit with {} qubits, {} gates",
            self.passes.len(),
            circuit.num_qubits(),
            circuit.len()
        );

        for pass in &self.passes {
            if pass.should_run(circuit, hardware) {
                debug!("Running pass: {}", pass.name());
                pass.run(circuit, hardware)?;
                debug!("Pass {} completed, gates: {}", pass.name(), circuit.len());
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }

        info!(
            "Pass manager completed, gates: {}, CX: {}",
            circuit.len(),
            circuit.num_two_qubit_gates()
        );

        Ok(())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Names of the passes, in execution order.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating pass managers with preset configurations.
pub struct PassManagerBuilder {
    /// Optimization level (0-3).
    optimization_level: u8,
    /// Target hardware.
    hardware: HardwareProfile,
}

impl PassManagerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            optimization_level: 1,
            hardware: HardwareProfile::default(),
        }
    }

    /// Set the optimization level.
    ///
    /// - Level 0: Basis translation only
    /// - Level 1 and up: Translation, run optimization and native verification
    #[must_use]
    pub fn with_optimization_level(mut self, level: u8) -> Self {
        self.optimization_level = level.min(3);
        self
    }

    /// Set the target hardware.
    #[must_use]
    pub fn with_hardware(mut self, hardware: HardwareProfile) -> Self {
        self.hardware = hardware;
        self
    }

    /// Build the pass manager and return it with the hardware profile.
    pub fn build(self) -> (PassManager, HardwareProfile) {
        let mut pm = PassManager::new();

        pm.add_pass(BasisTranslation);

        if self.optimization_level >= 1 {
            pm.add_pass(Optimize1qRuns);
            pm.add_pass(NativeVerification);
        }

        (pm, self.hardware)
    }
}

impl Default for PassManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
