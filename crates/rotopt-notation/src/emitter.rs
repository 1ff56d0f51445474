//! Emitter for the circuit notation.

use rotopt_ir::{Circuit, Gate};

use crate::error::{ParseError, ParseResult};

/// Emit a gate list as notation text, e.g. `X(0, 90), CX(0, 1)`.
///
/// An empty list is written as `[]`. `U` gates have no notation form and are
/// rejected.
pub fn emit(gates: &[Gate]) -> ParseResult<String> {
    if let Some(gate) = gates.iter().find(|g| matches!(g, Gate::U { .. })) {
        return Err(ParseError::Unrepresentable(gate.name().to_string()));
    }
    if gates.is_empty() {
        return Ok("[]".to_string());
    }
    Ok(gates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", "))
}

/// Emit a circuit as notation text.
pub fn emit_circuit(circuit: &Circuit) -> ParseResult<String> {
    emit(circuit.gates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotopt_ir::QubitId;

    #[test]
    fn test_emit_gates() {
        let gates = [
            Gate::Rx(QubitId(0), -86.0),
            Gate::Cx(QubitId(0), QubitId(1)),
            Gate::Rz(QubitId(1), 12.25),
        ];
        assert_eq!(emit(&gates).unwrap(), "X(0, -86), CX(0, 1), Z(1, 12.25)");
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(emit(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_emit_rejects_u() {
        let err = emit(&[Gate::u(QubitId(0), 10.0, 20.0, 30.0)]).unwrap_err();
        assert!(matches!(err, ParseError::Unrepresentable(_)));
    }
}
