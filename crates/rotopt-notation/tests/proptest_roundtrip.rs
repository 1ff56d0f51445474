//! Property-based tests for notation roundtrip conversion.
//!
//! Tests that gates → text → gates reproduces the gate list exactly.

use proptest::prelude::*;
use rotopt_ir::{Axis, Gate, QubitId};
use rotopt_notation::{emit, parse, parse_circuit};

/// Generate a gate on a register of `num_qubits` qubits.
fn arb_gate(num_qubits: u32) -> impl Strategy<Value = Gate> {
    let rotation = (
        prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)],
        0..num_qubits,
        prop_oneof![3 => -720.0_f64..720.0, 1 => -1e300_f64..1e300],
    )
        .prop_map(|(axis, q, angle)| Gate::rotation(axis, QubitId(q), angle));

    if num_qubits < 2 {
        rotation.boxed()
    } else {
        prop_oneof![
            4 => rotation,
            1 => any::<bool>().prop_map(|flip| if flip {
                Gate::Cx(QubitId(1), QubitId(0))
            } else {
                Gate::Cx(QubitId(0), QubitId(1))
            }),
        ]
        .boxed()
    }
}

fn arb_gate_list() -> impl Strategy<Value = (u32, Vec<Gate>)> {
    (1_u32..=2).prop_flat_map(|num_qubits| {
        (
            Just(num_qubits),
            prop::collection::vec(arb_gate(num_qubits), 0..=8),
        )
    })
}

proptest! {
    /// Emitted text parses back to the same gates, angles included.
    #[test]
    fn test_emit_parse_roundtrip((num_qubits, gates) in arb_gate_list()) {
        let text = emit(&gates).unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &gates);

        let circuit = parse_circuit(&text, num_qubits).unwrap();
        prop_assert_eq!(circuit.to_string(), text);
    }
}

#[test]
fn test_notation_sample() {
    let text = "X(0, 180.0), Y(0, 67.0), X(0, 5.0), Y(0, 55.0)";
    let gates = parse(text).unwrap();
    assert_eq!(gates.len(), 4);
    assert_eq!(emit(&gates).unwrap(), "X(0, 180), Y(0, 67), X(0, 5), Y(0, 55)");
}

#[test]
fn test_large_angle_roundtrip() {
    let gates = vec![Gate::Rx(QubitId(0), 1e20), Gate::Rz(QubitId(0), -3.5e25)];
    let text = emit(&gates).unwrap();
    assert_eq!(text, "X(0, 100000000000000000000), Z(0, -35000000000000000000000000)");
    assert_eq!(parse(&text).unwrap(), gates);
}
