//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

use num_complex;

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;
pub type Complex = num_complex::Complex<Float>;

/// Mathematical functions
pub mod functions {
    use super::{Complex, Float};

    /// Compute the square of a number
    pub fn sqr(x: Float) -> Float {
        x * x
    }

    /// Compute the conjugate of a Complex number
    pub fn conj(z: Complex) -> Complex {
        z.conj()
    }

    /// Real part of a Complex number
    pub fn re(z: Complex) -> Float {
        z.re
    }

    /// Imaginary part of a Complex number
    pub fn im(z: Complex) -> Float {
        z.im
    }

    /// Squared modulus of a Complex number
    pub fn norm_sqr(z: Complex) -> Float {
        z.norm_sqr()
    }

    /// Principal complex square root
    ///
    /// Used where a real formula continues below a kinematic threshold: the
    /// argument may be negative and the result picks up an imaginary part.
    pub fn csqrt(z: Complex) -> Complex {
        z.sqrt()
    }

    /// Principal complex logarithm
    pub fn clog(z: Complex) -> Complex {
        z.ln()
    }
}
