//! Circuit container on one or two qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::QubitId;

/// Maximum register width supported by the optimizer.
pub const MAX_QUBITS: u32 = 2;

/// An ordered list of gates on a one- or two-qubit register.
///
/// Gates are applied in insertion order. Every gate is checked against the
/// register width when it is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits in the register.
    num_qubits: u32,
    /// Gates in application order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit on `num_qubits` qubits (1 or 2).
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(IrError::UnsupportedQubitCount(num_qubits));
        }
        Ok(Self {
            num_qubits,
            gates: vec![],
        })
    }

    /// Create a circuit from a gate list, validating every gate.
    pub fn from_gates(num_qubits: u32, gates: impl IntoIterator<Item = Gate>) -> IrResult<Self> {
        let mut circuit = Self::new(num_qubits)?;
        for gate in gates {
            circuit.push(gate)?;
        }
        Ok(circuit)
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        gate.validate()?;
        for qubit in gate.qubits() {
            self.validate_qubit(qubit, Some(gate.name()))?;
        }
        if let Gate::Cx(control, target) = gate {
            // Re-run the constructor check for gates built directly from the variant.
            Gate::cx(control, target)?;
        }
        self.gates.push(gate);
        Ok(self)
    }

    /// Check that `qubit` exists in this circuit.
    pub fn validate_qubit(&self, qubit: QubitId, gate_name: Option<&str>) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
                gate_name: gate_name.map(str::to_string),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Gate builders
    // =========================================================================

    /// Apply an X rotation (degrees).
    pub fn rx(&mut self, angle: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::Rx(qubit, angle))
    }

    /// Apply a Y rotation (degrees).
    pub fn ry(&mut self, angle: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::Ry(qubit, angle))
    }

    /// Apply a Z rotation (degrees).
    pub fn rz(&mut self, angle: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::Rz(qubit, angle))
    }

    /// Apply a CX gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::cx(control, target)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Consume the circuit, returning its gates.
    pub fn into_gates(self) -> Vec<Gate> {
        self.gates
    }

    /// Replace all gates, validating each one. On error the circuit is left
    /// unchanged.
    pub fn set_gates(&mut self, gates: Vec<Gate>) -> IrResult<()> {
        let rebuilt = Self::from_gates(self.num_qubits, gates)?;
        *self = rebuilt;
        Ok(())
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of CX gates.
    pub fn num_two_qubit_gates(&self) -> usize {
        self.gates.iter().filter(|g| g.num_qubits() == 2).count()
    }
}

impl fmt::Display for Circuit {
    /// Writes the circuit in notation form, e.g. `X(0, 90), CX(0, 1)`, or
    /// `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return f.write_str("[]");
        }
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{gate}")?;
        }
        Ok(())
    }
}
