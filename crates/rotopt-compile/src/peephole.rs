//! Peephole rewriting of short one-qubit rotation windows.
//!
//! Works on windows of up to three rotations with closed-form identities
//! (all up to global phase):
//!
//! | Window | Result |
//! |--------|--------|
//! | `P(a)` with `a ≡ 0` | nothing |
//! | `P(a)·P(b)` | `P(a + b)`, or nothing when `a + b ≡ 0` |
//! | `X(180)·P(θ)·X(180)`, `P ∈ {Y, Z}` | `P(-θ)` |
//! | `Y(180)·P(θ)·Y(180)`, `P ∈ {X, Z}` | `P(-θ)` |
//! | `Z(180)·P(θ)·Z(180)`, `P ∈ {X, Y}` | `P(-θ)` |
//! | `P(90)·Q(180)·P(90)`, `P ≠ Q` | `Q(180)` |
//!
//! Anything else, including windows longer than three, windows holding a
//! CX or U gate and windows spanning more than one qubit, is returned
//! unchanged.

use tracing::debug;

use rotopt_ir::Gate;

use crate::angle::{angle_is, is_zero_angle};

/// Rewrite a window of at most three rotations on one qubit.
pub fn peephole(gates: &[Gate]) -> Vec<Gate> {
    if gates.iter().any(|g| g.axis().is_none()) || !on_one_qubit(gates) {
        return gates.to_vec();
    }
    match gates {
        [] => vec![],
        [gate] => single(*gate),
        [a, b] => merge_pair(*a, *b).unwrap_or_else(|| vec![*a, *b]),
        [a, b, c] => rewrite_triple(*a, *b, *c),
        _ => gates.to_vec(),
    }
}

fn on_one_qubit(gates: &[Gate]) -> bool {
    let mut qubits = gates.iter().filter_map(Gate::qubit);
    match qubits.next() {
        Some(first) => qubits.all(|q| q == first),
        None => true,
    }
}

fn single(gate: Gate) -> Vec<Gate> {
    match gate.angle() {
        Some(angle) if is_zero_angle(angle) => {
            debug!("Dropping zero rotation {gate}");
            vec![]
        }
        _ => vec![gate],
    }
}

/// Merge two rotations around the same axis. Returns `None` when the axes
/// differ.
fn merge_pair(first: Gate, second: Gate) -> Option<Vec<Gate>> {
    let axis = first.axis()?;
    if second.axis()? != axis {
        return None;
    }
    let sum = first.angle()? + second.angle()?;
    if is_zero_angle(sum) {
        debug!("{first} and {second} cancel");
        return Some(vec![]);
    }
    Some(vec![first.with_angle(sum)])
}

fn rewrite_triple(a: Gate, b: Gate, c: Gate) -> Vec<Gate> {
    if let Some(merged) = merge_pair(a, b) {
        let spliced: Vec<Gate> = merged.into_iter().chain([c]).collect();
        return peephole(&spliced);
    }
    if let Some(merged) = merge_pair(b, c) {
        let spliced: Vec<Gate> = [a].into_iter().chain(merged).collect();
        return peephole(&spliced);
    }
    match three_gate_identity(a, b, c) {
        Some(gate) => {
            debug!("Rewrote {a}, {b}, {c} to {gate}");
            single(gate)
        }
        None => vec![a, b, c],
    }
}

/// Apply the conjugation and 90-180-90 identities to a window whose
/// neighbours are on different axes.
fn three_gate_identity(a: Gate, b: Gate, c: Gate) -> Option<Gate> {
    let (outer, middle) = (a.axis()?, b.axis()?);
    let (a_angle, b_angle, c_angle) = (a.angle()?, b.angle()?, c.angle()?);
    if c.axis()? != outer || middle == outer {
        return None;
    }

    // A half turn around one axis flips rotations around either other axis.
    if angle_is(a_angle, 180.0) && angle_is(c_angle, 180.0) {
        return Some(b.with_angle(-b_angle));
    }

    if angle_is(a_angle, 90.0) && angle_is(b_angle, 180.0) && angle_is(c_angle, 90.0) {
        return Some(b);
    }

    None
}
