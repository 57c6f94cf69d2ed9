//! Dirac spinor and gamma-matrix algebra
//!
//! Fixed-dimension objects: 4-component spinors for the external fermion
//! states and 4x4 matrices in the Dirac basis for the vertex insertions.

use crate::{
    lorentz::{Contract, LorentzIndex, LorentzVector},
    numeric::{functions::csqrt, Complex, Float},
};

use nalgebra::{Matrix4, Vector4};
use num_traits::Zero;
use prefix_num_ops::real::*;
use std::ops::{Add, Mul, Neg, Sub};

/// Number of spinor components
pub const SPINOR_DIM: usize = 4;

// ### DIRAC SPINORS ###

/// Four-component Dirac spinor
#[derive(Clone, Debug, PartialEq)]
pub struct DiracSpinor(Vector4<Complex>);
//
impl DiracSpinor {
    /// Build a spinor from its four components
    pub fn new(components: [Complex; SPINOR_DIM]) -> Self {
        Self(Vector4::from_column_slice(&components))
    }

    /// Access one component
    pub fn component(&self, i: usize) -> Complex {
        self.0[i]
    }

    /// Adjoint spinor u-bar = u-dagger gamma^0
    ///
    /// This is where the conjugation lives; the spinor contraction itself
    /// is a genuinely bilinear pairing.
    pub fn adjoint(&self) -> Self {
        Self(gamma_0_matrix() * self.0.map(|c| c.conj()))
    }
}

/// Positive-energy helicity spinor for momentum in the x-z plane
///
/// `two_lambda` is twice the helicity, +1 or -1. The square roots are taken
/// as complex principal roots so that sub-threshold energies continue
/// smoothly instead of producing NaNs.
pub fn u_spinor(energy: Float, mass: Float, theta: Float, two_lambda: i32) -> DiracSpinor {
    assert!(
        two_lambda == 1 || two_lambda == -1,
        "twice-helicity of a spin-1/2 state must be +1 or -1"
    );
    let half = 0.5 * theta;
    let chi = if two_lambda == 1 {
        [cos(half), sin(half)]
    } else {
        [-sin(half), cos(half)]
    };
    let upper = csqrt(Complex::new(energy + mass, 0.));
    let lower = (two_lambda as Float) * csqrt(Complex::new(energy - mass, 0.));
    DiracSpinor::new([
        upper * chi[0],
        upper * chi[1],
        lower * chi[0],
        lower * chi[1],
    ])
}

// The one contraction rule that is not a plain multiplication: spinor
// pairs contract through a dot-product-like bilinear form. It must be
// special-cased ahead of the generic scalar-like path.
impl Contract for DiracSpinor {
    type Output = Complex;

    fn contract(&self, rhs: &Self) -> Complex {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a * b).sum()
    }
}

impl Add for DiracSpinor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Neg for DiracSpinor {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Complex> for DiracSpinor {
    type Output = Self;

    fn mul(self, rhs: Complex) -> Self {
        Self(self.0 * rhs)
    }
}

// ### DIRAC MATRICES ###

/// 4x4 complex matrix acting on Dirac spinors
#[derive(Clone, Debug, PartialEq)]
pub struct DiracMatrix(Matrix4<Complex>);
//
impl DiracMatrix {
    /// Build a matrix from its rows
    pub fn from_rows(rows: [[Complex; SPINOR_DIM]; SPINOR_DIM]) -> Self {
        Self(Matrix4::from_fn(|i, j| rows[i][j]))
    }

    /// The identity insertion
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Gamma matrix for one Lorentz index, in the Dirac basis
    pub fn gamma(mu: LorentzIndex) -> Self {
        let o = Complex::new(0., 0.);
        let l = Complex::new(1., 0.);
        let i = Complex::new(0., 1.);
        match mu {
            LorentzIndex::T => Self::from_rows([
                [l, o, o, o],
                [o, l, o, o],
                [o, o, -l, o],
                [o, o, o, -l],
            ]),
            LorentzIndex::X => Self::from_rows([
                [o, o, o, l],
                [o, o, l, o],
                [o, -l, o, o],
                [-l, o, o, o],
            ]),
            LorentzIndex::Y => Self::from_rows([
                [o, o, o, -i],
                [o, o, i, o],
                [o, i, o, o],
                [-i, o, o, o],
            ]),
            LorentzIndex::Z => Self::from_rows([
                [o, o, l, o],
                [o, o, o, -l],
                [-l, o, o, o],
                [o, l, o, o],
            ]),
        }
    }

    /// The chirality matrix gamma^5
    pub fn gamma_5() -> Self {
        let o = Complex::new(0., 0.);
        let l = Complex::new(1., 0.);
        Self::from_rows([
            [o, o, l, o],
            [o, o, o, l],
            [l, o, o, o],
            [o, l, o, o],
        ])
    }

    /// The four gamma matrices as a rank-1 tensor of matrix elements
    pub fn gamma_vector() -> LorentzVector<DiracMatrix> {
        LorentzVector::from_components(
            Self::gamma(LorentzIndex::T),
            Self::gamma(LorentzIndex::X),
            Self::gamma(LorentzIndex::Y),
            Self::gamma(LorentzIndex::Z),
        )
    }

    /// Feynman slash: the contraction p_mu gamma^mu of a 4-momentum with
    /// the gamma basis
    pub fn slash(p: &LorentzVector<Complex>) -> Self {
        Self::gamma_vector().contract(p)
    }
}

/// Raw gamma^0 for building adjoints without a DiracMatrix round-trip
fn gamma_0_matrix() -> Matrix4<Complex> {
    Matrix4::from_diagonal(&Vector4::new(
        Complex::new(1., 0.),
        Complex::new(1., 0.),
        Complex::new(-1., 0.),
        Complex::new(-1., 0.),
    ))
}

// Matrix pairs fall through the generic scalar-like path: their
// contraction is the matrix product
impl Contract for DiracMatrix {
    type Output = DiracMatrix;

    fn contract(&self, rhs: &Self) -> DiracMatrix {
        DiracMatrix(self.0 * rhs.0)
    }
}

// Mixed scalar/matrix elements appear when a complex-valued tensor is
// contracted against a matrix-valued one (e.g. the Feynman slash)
impl Contract<Complex> for DiracMatrix {
    type Output = DiracMatrix;

    fn contract(&self, rhs: &Complex) -> DiracMatrix {
        DiracMatrix(self.0 * *rhs)
    }
}

impl Contract<DiracMatrix> for Complex {
    type Output = DiracMatrix;

    fn contract(&self, rhs: &DiracMatrix) -> DiracMatrix {
        DiracMatrix(rhs.0 * *self)
    }
}

impl Add for DiracMatrix {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for DiracMatrix {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for DiracMatrix {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul for DiracMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<DiracSpinor> for DiracMatrix {
    type Output = DiracSpinor;

    fn mul(self, rhs: DiracSpinor) -> DiracSpinor {
        DiracSpinor(self.0 * rhs.0)
    }
}

impl Mul<Complex> for DiracMatrix {
    type Output = Self;

    fn mul(self, rhs: Complex) -> Self {
        Self(self.0 * rhs)
    }
}

impl Zero for DiracMatrix {
    fn zero() -> Self {
        Self(Matrix4::zeros())
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorentz::{contract, four_momentum, metric, INDICES};

    #[test]
    fn clifford_algebra() {
        // {gamma^mu, gamma^nu} = 2 g^mu^nu
        for &mu in &INDICES {
            for &nu in &INDICES {
                let anti = DiracMatrix::gamma(mu) * DiracMatrix::gamma(nu)
                    + DiracMatrix::gamma(nu) * DiracMatrix::gamma(mu);
                let expected = if mu == nu {
                    DiracMatrix::identity() * Complex::new(2. * metric(mu), 0.)
                } else {
                    DiracMatrix::zero()
                };
                assert_eq!(anti, expected);
            }
        }
    }

    #[test]
    fn gamma_5_squares_to_one() {
        let g5 = DiracMatrix::gamma_5();
        assert_eq!(g5.clone() * g5, DiracMatrix::identity());
    }

    #[test]
    fn spinor_contraction_is_bilinear_and_symmetric() {
        let u = DiracSpinor::new([
            Complex::new(1., 1.),
            Complex::new(0., 2.),
            Complex::new(-1., 0.),
            Complex::new(0.5, -0.5),
        ]);
        let v = DiracSpinor::new([
            Complex::new(2., 0.),
            Complex::new(1., -1.),
            Complex::new(0., 1.),
            Complex::new(-2., 0.),
        ]);
        assert_eq!(contract(&u, &v), contract(&v, &u));
        let scaled = contract(&(u.clone() * Complex::new(3., 0.)), &v);
        assert!((scaled - 3. * contract(&u, &v)).norm() < 1e-12);
    }

    #[test]
    fn spinor_normalization() {
        // u-bar u = 2m for a positive-energy spinor
        let (energy, mass) = (1.7, 0.938272);
        for &two_lambda in &[1, -1] {
            let u = u_spinor(energy, mass, 0.6, two_lambda);
            let norm = contract(&u.adjoint(), &u);
            assert!((norm.re - 2. * mass).abs() < 1e-12);
            assert!(norm.im.abs() < 1e-12);
        }
    }

    #[test]
    fn slash_squares_to_momentum_squared()  {
        // p-slash p-slash = p.p
        let p = four_momentum(2., 0.3, -0.4, 1.1);
        let p2 = contract(&p, &p);
        let slashed = DiracMatrix::slash(&p);
        let square = slashed.clone() * slashed;
        let expected = DiracMatrix::identity() * p2;
        for i in 0..SPINOR_DIM {
            for j in 0..SPINOR_DIM {
                assert!((square.0[(i, j)] - expected.0[(i, j)]).norm() < 1e-12);
            }
        }
    }
}
