//! End-to-end optimization scenarios in circuit notation.

use rotopt_compile::{
    CompileError, GateDurations, HardwareProfile, NativeBasis, PassManagerBuilder,
    decompose_unitary, optimize_circuit, optimize_one_qubit_sequence,
};
use rotopt_ir::{Axis, Gate, QubitId};
use rotopt_notation::{emit, parse, parse_circuit};

fn profile(basis: NativeBasis) -> HardwareProfile {
    HardwareProfile::new(1, basis).unwrap()
}

/// Optimize a notation string on one qubit and emit the result.
fn optimize_text(text: &str, basis: NativeBasis) -> String {
    let gates = parse(text).unwrap();
    let optimized = optimize_one_qubit_sequence(&gates, &profile(basis)).unwrap();
    emit(&optimized).unwrap()
}

#[test]
fn test_merge_to_empty() {
    assert_eq!(optimize_text("X(0, 90), X(0, 90), X(0, 180)", NativeBasis::Xyz), "[]");
    assert_eq!(optimize_text("Y(0, 90), Y(0, 90), Y(0, 180)", NativeBasis::Xyz), "[]");
}

#[test]
fn test_conjugation_identity() {
    assert_eq!(
        optimize_text("Y(0, 180), X(0, 86.0), Y(0, 180)", NativeBasis::Xyz),
        "X(0, -86)"
    );
}

#[test]
fn test_ninety_half_ninety_identity() {
    assert_eq!(
        optimize_text("Z(0, 90), X(0, 180), Z(0, 90)", NativeBasis::Xyz),
        "X(0, 180)"
    );
}

#[test]
fn test_long_sequence_at_most_three_gates() {
    for basis in [NativeBasis::Xyz, NativeBasis::Xz, NativeBasis::Yz] {
        let gates = parse("X(0, 180.0), Y(0, 67.0), X(0, 5.0), Y(0, 55.0)").unwrap();
        let hardware = profile(basis);
        let optimized = optimize_one_qubit_sequence(&gates, &hardware).unwrap();
        assert!(optimized.len() <= 3, "{basis}: {optimized:?}");
        assert!(hardware.supports_all(&optimized));
    }
}

#[test]
fn test_hardware_constrained_zxz() {
    let hardware = profile(NativeBasis::Xz);
    let gates = decompose_unitary(QubitId(0), 40.0, 30.0, 60.0, &hardware).unwrap();
    assert_eq!(emit(&gates).unwrap(), "Z(0, -30), X(0, 40), Z(0, 120)");
}

#[test]
fn test_synthesized_zxz_matches_angles() {
    // Rz(60), Ry(40), Rz(30) is U(40, 30, 60); without Y it comes back as ZXZ.
    let gates = parse("Z(0, 60), Y(0, 40), Z(0, 30)").unwrap();
    let optimized = optimize_one_qubit_sequence(&gates, &profile(NativeBasis::Xz)).unwrap();
    let expected = [(Axis::Z, -30.0), (Axis::X, 40.0), (Axis::Z, 120.0)];
    assert_eq!(optimized.len(), expected.len());
    for (gate, (axis, angle)) in optimized.iter().zip(expected) {
        assert_eq!(gate.axis(), Some(axis));
        assert!((gate.angle().unwrap() - angle).abs() < 1e-9, "{gate}");
    }
}

#[test]
fn test_cheaper_basis_selected() {
    let hardware = profile(NativeBasis::Xyz)
        .with_durations(GateDurations {
            x: 10,
            y: 50,
            z: 10,
            cx: 100,
        })
        .unwrap();
    let gates = parse("Z(0, 60), Y(0, 40), Z(0, 30), Y(0, 1)").unwrap();
    let optimized = optimize_one_qubit_sequence(&gates, &hardware).unwrap();
    assert!(optimized.iter().all(|g| g.axis() != Some(Axis::Y)));
}

#[test]
fn test_two_qubit_circuit() {
    let hardware = HardwareProfile::new(2, NativeBasis::Xyz).unwrap();
    let circuit = parse_circuit(
        "X(1, 90), Z(1, 180), CX(0, 1), Y(0, 180), X(0, 86), Y(0, 180)",
        2,
    )
    .unwrap();
    let optimized = optimize_circuit(&circuit, &hardware).unwrap();
    assert_eq!(optimized.num_two_qubit_gates(), 1);
    assert!(optimized.to_string().ends_with("X(0, -86)"));
}

#[test]
fn test_pass_manager_from_json_profile() {
    let hardware = HardwareProfile::from_json(
        r#"{"num_qubits": 2, "basis_gates": ["Y", "Z", "CX"], "durations": {"y": 20}}"#,
    )
    .unwrap();
    let (pm, hardware) = PassManagerBuilder::new()
        .with_optimization_level(2)
        .with_hardware(hardware)
        .build();

    let mut circuit = parse_circuit("X(0, 45), X(0, 45), CX(1, 0), X(1, 10)", 2).unwrap();
    pm.run(&mut circuit, &hardware).unwrap();

    assert!(hardware.supports_all(circuit.gates()));
    assert_eq!(circuit.num_two_qubit_gates(), 1);
}

#[test]
fn test_cx_rejected_in_one_qubit_sequence() {
    let gates = vec![Gate::Cx(QubitId(0), QubitId(1))];
    assert!(matches!(
        optimize_one_qubit_sequence(&gates, &profile(NativeBasis::Xyz)),
        Err(CompileError::NotSingleQubit(_))
    ));
}
