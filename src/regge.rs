//! Regge trajectories for the exchange propagators

use crate::numeric::{Complex, Float};

use anyhow::{ensure, Result};

/// Linear Regge trajectory alpha(t) = alpha(0) + alpha' t
///
/// Parameterizes the effective spin of an exchanged family of particles as
/// a function of momentum transfer.
pub struct LinearTrajectory {
    /// Signature, +1 or -1
    signature: i32,

    /// Intercept alpha(0)
    intercept: Float,

    /// Slope alpha' (GeV^-2)
    slope: Float,

    /// Lowest physical spin lying on the trajectory
    min_j: u32,
}
//
impl LinearTrajectory {
    /// Set up a trajectory; an invalid signature aborts setup
    pub fn new(signature: i32, intercept: Float, slope: Float) -> Result<Self> {
        ensure!(
            signature == 1 || signature == -1,
            "trajectory signature must be +1 or -1, got {}",
            signature
        );
        Ok(Self {
            signature,
            intercept,
            slope,
            min_j: 0,
        })
    }

    /// Select the lowest physical spin on the trajectory
    pub fn set_min_j(&mut self, min_j: u32) {
        self.min_j = min_j;
    }

    /// Trajectory value at momentum transfer t
    pub fn eval(&self, t: Float) -> Complex {
        Complex::new(self.intercept + self.slope * t, 0.)
    }

    /// Trajectory slope
    pub fn slope(&self) -> Complex {
        Complex::new(self.slope, 0.)
    }

    /// Signature of the trajectory
    pub fn signature(&self) -> i32 {
        self.signature
    }

    /// Lowest physical spin on the trajectory
    pub fn min_j(&self) -> u32 {
        self.min_j
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_in_t() {
        let alpha = LinearTrajectory::new(1, 0.5, 0.9).unwrap();
        assert!((alpha.eval(0.).re - 0.5).abs() < 1e-15);
        assert!((alpha.eval(-1.).re - (0.5 - 0.9)).abs() < 1e-15);
        assert!(alpha.eval(-1.).im.abs() < 1e-15);
    }

    #[test]
    fn signature_is_validated() {
        assert!(LinearTrajectory::new(0, 0.5, 0.9).is_err());
        assert!(LinearTrajectory::new(-1, 0.5, 0.9).is_ok());
    }
}
