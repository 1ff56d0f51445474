//! Unitary matrices for the supported gates.
//!
//! All constructors take angles in radians. Degree-valued gate parameters are
//! converted once, in [`Gate::unitary`](crate::gate::Gate::unitary).

use num_complex::Complex64;

/// Tolerance for floating point comparisons.
const EPSILON: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    /// Create an RX rotation matrix.
    pub fn rx(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, -s),
            Complex64::new(0.0, -s),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RY rotation matrix.
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            ZERO,
            ZERO,
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Create a U gate U(theta, phi, lambda).
    pub fn u(theta: f64, phi: f64, lambda: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            -Complex64::from_polar(s, lambda),
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        )
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * 2 + col]
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Multiply every element by a scalar.
    pub fn scale(&self, factor: Complex64) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a * factor, b * factor, c * factor, d * factor)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Frobenius norm of `U†U - I`.
    pub fn unitarity_error(&self) -> f64 {
        let product = self.dagger() * *self;
        product
            .data
            .iter()
            .zip(Self::identity().data.iter())
            .map(|(x, y)| (x - y).norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check that `U†U = I` within `tolerance`.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_error() < tolerance
    }

    /// Check if this is approximately identity (up to global phase).
    pub fn is_identity(&self) -> bool {
        self.equiv_up_to_phase(&Self::identity(), EPSILON)
    }

    /// Divide out the phase of the `[0, 0]` element so it becomes
    /// non-negative real.
    ///
    /// When `[0, 0]` vanishes its phase is taken as zero and the matrix is
    /// returned unchanged.
    #[must_use]
    pub fn strip_global_phase(&self) -> Self {
        let phase = self.data[0].arg();
        self.scale(Complex64::from_polar(1.0, -phase))
    }

    /// Compare two unitaries up to a global phase.
    ///
    /// Uses `|tr(A†B)| = 2`, which holds exactly when `B = e^(iα)·A`.
    pub fn equiv_up_to_phase(&self, other: &Self, tolerance: f64) -> bool {
        let overlap = (self.dagger() * *other).trace();
        (overlap.norm() - 2.0).abs() < tolerance
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Complex64 {
        self.data[0] + self.data[3]
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}

/// A 4x4 matrix in row-major order, used for the two-qubit CX gate.
///
/// Basis states are indexed little-endian: qubit 0 is the least significant
/// bit of the row/column index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary4x4 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 16],
}

impl Unitary4x4 {
    /// Build a permutation matrix sending basis state `i` to `perm[i]`.
    fn permutation(perm: [usize; 4]) -> Self {
        let mut data = [ZERO; 16];
        for (col, &row) in perm.iter().enumerate() {
            data[row * 4 + col] = ONE;
        }
        Self { data }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::permutation([0, 1, 2, 3])
    }

    /// CX with control qubit 0 and target qubit 1.
    pub fn cx01() -> Self {
        // |01> <-> |11> in q1q0 order: indices 1 and 3.
        Self::permutation([0, 3, 2, 1])
    }

    /// CX with control qubit 1 and target qubit 0.
    pub fn cx10() -> Self {
        Self::permutation([0, 1, 3, 2])
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * 4 + col]
    }

    /// Multiply this matrix by another: self * other.
    pub fn mul(&self, other: &Self) -> Self {
        let mut data = [ZERO; 16];
        for row in 0..4 {
            for col in 0..4 {
                data[row * 4 + col] = (0..4).map(|k| self.get(row, k) * other.get(k, col)).sum();
            }
        }
        Self { data }
    }

    /// Check that this is approximately the identity.
    pub fn is_identity(&self) -> bool {
        self.data
            .iter()
            .zip(Self::identity().data.iter())
            .all(|(x, y)| (x - y).norm() < EPSILON)
    }
}

impl std::ops::Mul for Unitary4x4 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary4x4::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity() {
        let i = Unitary2x2::identity();
        assert!(i.is_identity());
        assert!(i.is_unitary(EPSILON));
    }

    #[test]
    fn test_rotations_are_unitary() {
        for angle in [0.0, 0.3, PI / 2.0, PI, 4.0] {
            assert!(Unitary2x2::rx(angle).is_unitary(EPSILON));
            assert!(Unitary2x2::ry(angle).is_unitary(EPSILON));
            assert!(Unitary2x2::rz(angle).is_unitary(EPSILON));
            assert!(Unitary2x2::u(angle, 0.7, -1.1).is_unitary(EPSILON));
        }
    }

    #[test]
    fn test_full_turn_is_minus_identity() {
        let rx = Unitary2x2::rx(2.0 * PI);
        assert!((rx.get(0, 0) + ONE).norm() < EPSILON);
        assert!(rx.is_identity());
    }

    #[test]
    fn test_rotation_composition() {
        let a = Unitary2x2::ry(0.4) * Unitary2x2::ry(0.9);
        let b = Unitary2x2::ry(1.3);
        for i in 0..4 {
            assert!((a.data[i] - b.data[i]).norm() < EPSILON);
        }
    }

    #[test]
    fn test_u_matches_zyz_product() {
        // U(θ, φ, λ) = e^(i(φ+λ)/2) · Rz(φ) · Ry(θ) · Rz(λ)
        let (theta, phi, lambda) = (0.8, -0.4, 1.9);
        let product = Unitary2x2::rz(phi) * Unitary2x2::ry(theta) * Unitary2x2::rz(lambda);
        assert!(product.equiv_up_to_phase(&Unitary2x2::u(theta, phi, lambda), 1e-9));
    }

    #[test]
    fn test_strip_global_phase() {
        let u = Unitary2x2::rz(1.2) * Unitary2x2::rx(0.5);
        let stripped = u.strip_global_phase();
        assert!(stripped.get(0, 0).im.abs() < EPSILON);
        assert!(stripped.get(0, 0).re >= 0.0);
        assert!(stripped.equiv_up_to_phase(&u, 1e-9));
    }

    #[test]
    fn test_equiv_rejects_different_rotation() {
        let a = Unitary2x2::rx(0.5);
        let b = Unitary2x2::rx(0.6);
        assert!(!a.equiv_up_to_phase(&b, 1e-6));
    }

    #[test]
    fn test_cx_matrices() {
        let cx01 = Unitary4x4::cx01();
        assert_eq!(cx01.get(3, 1), ONE);
        assert_eq!(cx01.get(1, 3), ONE);
        assert_eq!(cx01.get(2, 2), ONE);

        let cx10 = Unitary4x4::cx10();
        assert_eq!(cx10.get(3, 2), ONE);
        assert_eq!(cx10.get(1, 1), ONE);

        assert!((cx01 * cx01).is_identity());
        assert!((cx10 * cx10).is_identity());
        assert!(!(cx01 * cx10).is_identity());
    }
}
