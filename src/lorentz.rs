//! Lorentz tensor algebra: index labels, the Minkowski metric, rank 0-2
//! tensors with arbitrary element types, and the generic contraction engine
//! that assembles amplitudes out of them.

use crate::numeric::{Complex, Float};
use num_traits::Zero;
use std::ops::{Add, Mul, Neg};

// ### LORENTZ INDICES AND THE METRIC ###

/// Label of one Minkowski coordinate
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LorentzIndex {
    /// Time component
    T = 0,
    /// Space x component
    X = 1,
    /// Space y component
    Y = 2,
    /// Space z component
    Z = 3,
}

/// All coordinate labels, in component storage order
pub const INDICES: [LorentzIndex; 4] = [
    LorentzIndex::T,
    LorentzIndex::X,
    LorentzIndex::Y,
    LorentzIndex::Z,
];

impl LorentzIndex {
    /// Position of this coordinate in component storage
    pub fn offset(self) -> usize {
        self as usize
    }
}

/// Diagonal Minkowski metric element, signature (+, -, -, -)
pub fn metric(mu: LorentzIndex) -> Float {
    match mu {
        LorentzIndex::T => 1.,
        _ => -1.,
    }
}

/// Product of metric elements over an ordered index sequence
pub fn metric_product(indices: &[LorentzIndex]) -> Float {
    indices.iter().map(|&mu| metric(mu)).product()
}

/// Enumerate all 4^rank ordered index sequences of a given length
///
/// These are the terms of a rank-fold Einstein sum over a diagonal metric;
/// off-diagonal metric terms never appear so the plain index product is all
/// that is needed.
pub fn index_sequences(rank: usize) -> Vec<Vec<LorentzIndex>> {
    let mut sequences = vec![Vec::new()];
    for _ in 0..rank {
        let mut longer = Vec::with_capacity(sequences.len() * 4);
        for sequence in &sequences {
            for &mu in &INDICES {
                let mut extended = sequence.clone();
                extended.push(mu);
                longer.push(extended);
            }
        }
        sequences = longer;
    }
    sequences
}

// ### TENSOR STORAGE ###

/// Rank-R Lorentz tensor with arbitrary element type
///
/// Fully populated at construction with 4^R components, immutable
/// afterwards, value semantics. Component access is total: every valid
/// index sequence maps to a stored component.
#[derive(Clone, Debug, PartialEq)]
pub struct LorentzTensor<T, const R: usize> {
    components: Vec<T>,
}

/// Rank-1 tensor, i.e. a Lorentz 4-vector
pub type LorentzVector<T> = LorentzTensor<T, 1>;

/// Rank-2 tensor
pub type LorentzTensor2<T> = LorentzTensor<T, 2>;

impl<T, const R: usize> LorentzTensor<T, R> {
    /// Number of stored components
    pub const LEN: usize = 4usize.pow(R as u32);

    /// Build a tensor from its full component list
    ///
    /// Components are ordered row-major: the last index varies fastest.
    pub fn new(components: Vec<T>) -> Self {
        assert_eq!(
            components.len(),
            Self::LEN,
            "a rank-{} tensor has {} components",
            R,
            Self::LEN
        );
        Self { components }
    }

    /// Component at an ordered index sequence
    pub fn component(&self, indices: &[LorentzIndex]) -> &T {
        debug_assert_eq!(indices.len(), R);
        let mut offset = 0;
        for &mu in indices {
            offset = 4 * offset + mu.offset();
        }
        &self.components[offset]
    }
}

impl<T> LorentzVector<T> {
    /// Build a 4-vector from its components in (t, x, y, z) order
    pub fn from_components(t: T, x: T, y: T, z: T) -> Self {
        Self::new(vec![t, x, y, z])
    }
}

impl<T: Mul<Output = T> + Clone> LorentzVector<T> {
    /// Outer (tensor) product of two 4-vectors
    pub fn outer(&self, rhs: &Self) -> LorentzTensor2<T> {
        let mut components = Vec::with_capacity(LorentzTensor2::<T>::LEN);
        for a in &self.components {
            for b in &rhs.components {
                components.push(a.clone() * b.clone());
            }
        }
        LorentzTensor2::new(components)
    }
}

impl LorentzVector<Complex> {
    /// Component-wise complex conjugate, as used for outgoing polarizations
    pub fn conj(&self) -> Self {
        Self::new(self.components.iter().map(|c| c.conj()).collect())
    }
}

/// Build a complex 4-momentum from its energy and 3-momentum components
pub fn four_momentum(e: Float, px: Float, py: Float, pz: Float) -> LorentzVector<Complex> {
    LorentzVector::from_components(
        Complex::new(e, 0.),
        Complex::new(px, 0.),
        Complex::new(py, 0.),
        Complex::new(pz, 0.),
    )
}

/// The metric itself as a rank-2 complex tensor
pub fn metric_tensor() -> LorentzTensor2<Complex> {
    let mut components = Vec::with_capacity(LorentzTensor2::<Complex>::LEN);
    for &mu in &INDICES {
        for &nu in &INDICES {
            let g = if mu == nu { metric(mu) } else { 0. };
            components.push(Complex::new(g, 0.));
        }
    }
    LorentzTensor2::new(components)
}

// ### GENERIC CONTRACTION ###

/// Generic contraction between two algebra objects
///
/// The impl set is closed over {Complex, DiracSpinor, DiracMatrix, tensors
/// of those}; asking for a contraction outside of it is a compile-time
/// error, never a runtime branch. The element-level impls double as the
/// rank-0 base case terminating the tensor recursion: a scalar pair
/// contracts as a plain product without ever enumerating indices.
pub trait Contract<Rhs = Self> {
    /// Scalar-like result of the contraction
    type Output;

    /// Contract the two operands
    fn contract(&self, rhs: &Rhs) -> Self::Output;
}

/// Contract two algebra objects (free-function form)
pub fn contract<L, R>(left: &L, right: &R) -> L::Output
where
    L: Contract<R>,
{
    left.contract(right)
}

// For complex numbers the contraction is just the product
impl Contract for Complex {
    type Output = Complex;

    fn contract(&self, rhs: &Self) -> Complex {
        self * rhs
    }
}

// Rank-fold Einstein sum over Minkowski-signature indices, recursing into
// whichever contraction rule applies to the element types
impl<L, Rh, const R: usize> Contract<LorentzTensor<Rh, R>> for LorentzTensor<L, R>
where
    L: Contract<Rh>,
    <L as Contract<Rh>>::Output: Zero + Neg<Output = <L as Contract<Rh>>::Output>,
{
    type Output = <L as Contract<Rh>>::Output;

    fn contract(&self, rhs: &LorentzTensor<Rh, R>) -> Self::Output {
        let mut sum = Self::Output::zero();
        for sequence in index_sequences(R) {
            let term = self.component(&sequence).contract(rhs.component(&sequence));
            sum = sum + if metric_product(&sequence) < 0. { -term } else { term };
        }
        sum
    }
}

// ### ARITHMETIC ON TENSORS ###

impl<T, const R: usize> Add for LorentzTensor<T, R>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            components: self
                .components
                .into_iter()
                .zip(rhs.components)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl<T, const R: usize> Neg for LorentzTensor<T, R>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            components: self.components.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<T, const R: usize> Mul<Complex> for LorentzTensor<T, R>
where
    T: Mul<Complex, Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Complex) -> Self {
        Self {
            components: self.components.into_iter().map(|c| c * rhs).collect(),
        }
    }
}
