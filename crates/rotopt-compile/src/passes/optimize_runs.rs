//! Per-qubit run optimization of a whole circuit.

use rustc_hash::FxHashMap;
use tracing::debug;

use rotopt_ir::{Circuit, Gate, QubitId};

use crate::driver::optimize_one_qubit_sequence;
use crate::error::CompileResult;
use crate::hardware::HardwareProfile;
use crate::pass::{Pass, PassKind};

use super::check_width;

/// Single-qubit run optimization pass.
///
/// Splits each qubit's gates into runs separated by CX gates (a CX ends the
/// current run on both of its qubits) and replaces every run with its
/// optimized form. CX gates keep their relative order, and every rotation
/// stays on the same side of each CX that touches its qubit.
pub struct Optimize1qRuns;

impl Pass for Optimize1qRuns {
    fn name(&self) -> &'static str {
        "Optimize1qRuns"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, hardware: &HardwareProfile) -> CompileResult<()> {
        let optimized = optimize_gates(circuit, hardware)?;
        debug!(
            "Optimized {} gates to {}",
            circuit.len(),
            optimized.len()
        );
        circuit.set_gates(optimized)?;
        Ok(())
    }

    fn should_run(&self, circuit: &Circuit, _hardware: &HardwareProfile) -> bool {
        !circuit.is_empty()
    }
}

/// Optimize every single-qubit run of `circuit` for `hardware`.
pub fn optimize_circuit(circuit: &Circuit, hardware: &HardwareProfile) -> CompileResult<Circuit> {
    let gates = optimize_gates(circuit, hardware)?;
    Ok(Circuit::from_gates(circuit.num_qubits(), gates)?)
}

fn optimize_gates(circuit: &Circuit, hardware: &HardwareProfile) -> CompileResult<Vec<Gate>> {
    check_width(circuit, hardware)?;

    let mut pending: FxHashMap<QubitId, Vec<Gate>> = FxHashMap::default();
    let mut out = Vec::with_capacity(circuit.len());

    for gate in circuit.gates() {
        match *gate {
            Gate::Cx(control, target) => {
                flush(&mut pending, control, hardware, &mut out)?;
                flush(&mut pending, target, hardware, &mut out)?;
                out.push(*gate);
            }
            _ => {
                if let Some(qubit) = gate.qubit() {
                    pending.entry(qubit).or_default().push(*gate);
                }
            }
        }
    }

    let mut remaining: Vec<QubitId> = pending.keys().copied().collect();
    remaining.sort_unstable();
    for qubit in remaining {
        flush(&mut pending, qubit, hardware, &mut out)?;
    }
    Ok(out)
}

/// Optimize and emit the open run on `qubit`, if any.
fn flush(
    pending: &mut FxHashMap<QubitId, Vec<Gate>>,
    qubit: QubitId,
    hardware: &HardwareProfile,
    out: &mut Vec<Gate>,
) -> CompileResult<()> {
    if let Some(run) = pending.remove(&qubit) {
        let optimized = optimize_one_qubit_sequence(&run, hardware)?;
        debug!(
            "Run of {} gates on {qubit} became {}",
            run.len(),
            optimized.len()
        );
        out.extend(optimized);
    }
    Ok(())
}
