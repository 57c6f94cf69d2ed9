//! Partial-wave amplitude in the scattering-length approximation with two
//! coupled channels, unitarized through a K-matrix
//!
//! The production channel (the photoproduced final state) couples to one
//! hadronic rescattering channel; the Chew-Mandelstam loop function keeps
//! the amplitude analytic across both thresholds.

use crate::{
    amplitude::Amplitude,
    kinematics::{kallen, ReactionKinematics},
    numeric::{
        floats::consts::{PI, SQRT_2},
        functions::{clog, csqrt},
        Complex, Float,
    },
    special::legendre,
};

use anyhow::{ensure, Result};
use prefix_num_ops::real::*;

/// Number of free real parameters: three scattering lengths and two
/// production normalizations
pub const NUM_PARAMS: usize = 5;

/// Chew-Mandelstam two-body loop function, continuous across threshold
///
/// Complex square root and logarithm throughout: above threshold rho is
/// real and the function picks up its unitarity cut; below threshold rho
/// turns imaginary and the function is real. Never assume real-valuedness.
pub fn chew_mandelstam(s: Float, m1: Float, m2: Float) -> Complex {
    let rho = csqrt(Complex::new(kallen(s, m1 * m1, m2 * m2), 0.)) / s;
    let xi = 1. - (m1 + m2) * (m1 + m2) / s;
    -(rho * clog((xi + rho) / (xi - rho)) - xi * (m2 - m1) / (m2 + m1) * ln(m2 / m1)) / PI
}

/// Two-channel K-matrix partial wave in the scattering-length approximation
pub struct TwoChannel<'kin> {
    /// Kinematics of the production channel
    kinematics: &'kin ReactionKinematics,

    /// Partial-wave order J
    j: u32,

    /// Masses of the rescattering channel
    m1: Float,
    m2: Float,

    /// K-matrix scattering lengths
    a00: Float,
    a01: Float,
    a11: Float,

    /// Production-amplitude normalizations
    b0: Float,
    b1: Float,
}
//
impl<'kin> TwoChannel<'kin> {
    // ### CONSTRUCTION ###

    /// Set up the partial wave for a given J and rescattering channel
    pub fn new(
        kinematics: &'kin ReactionKinematics,
        j: u32,
        rescattering_masses: [Float; 2],
    ) -> Result<Self> {
        let wave = Self {
            kinematics,
            j,
            m1: rescattering_masses[0],
            m2: rescattering_masses[1],
            a00: 0.,
            a01: 0.,
            a11: 0.,
            b0: 0.,
            b1: 0.,
        };
        wave.check_jp()?;
        Ok(wave)
    }

    // ### EVALUATION ###

    /// Unitarized K-matrix partial wave at one kinematic point
    ///
    /// Every derived quantity (channel momenta, loop functions, K-matrix
    /// entries, numerators, denominator) is recomputed on the stack for
    /// this call; only the five fit parameters persist across calls.
    pub fn evaluate(&self, s: Float) -> Complex {
        // Channel momenta
        let q0 = self.kinematics.final_momentum(s);
        let q1 = csqrt(Complex::new(kallen(s, self.m1 * self.m1, self.m2 * self.m2), 0.))
            / csqrt(Complex::new(4. * s, 0.));

        // Loop functions
        let g0 = chew_mandelstam(s, self.kinematics.m_meson(), self.kinematics.m_recoil());
        let g1 = chew_mandelstam(s, self.m1, self.m2);

        // Production amplitude pieces, scaled by the photoproduction
        // momentum product to the power J
        let p = self.kinematics.initial_momentum(s);
        let b_0 = (p * q0).powu(self.j) * self.b0;
        let b_1 = (p * q1).powu(self.j) * self.b1;

        // K-matrix entries, scaled by the hadronic momentum products
        let k00 = (q0 * q0).powu(self.j) * self.a00;
        let k01 = (q0 * q1).powu(self.j) * self.a01;
        let k11 = (q1 * q1).powu(self.j) * self.a11;

        // The A-matrix entries all share the same denominator. A vanishing
        // denominator is a genuine resonance pole and is left unguarded.
        let d = (1. - g0 * k00) * (1. - g1 * k11) - g0 * g1 * k01 * k01;

        // Determinant of the K-matrix
        let det_k = k00 * k11 - k01 * k01;

        // Unitarized numerators
        let a00 = (k00 - g1 * det_k) / d;
        let a01 = k01 / d;

        b_0 * (1. + g0 * a00) + b_1 * g1 * a01
    }
}

impl Amplitude for TwoChannel<'_> {
    fn name(&self) -> &'static str {
        "scattering_length"
    }

    fn kinematics(&self) -> &ReactionKinematics {
        self.kinematics
    }

    /// Projections onto orbital angular momentum are helicity independent:
    /// one combination carries the whole wave and the rest return zero
    fn helicity_amplitude(&self, helicities: [i32; 4], s: Float, t: Float) -> Complex {
        if helicities != self.kinematics.helicity(0) {
            return Complex::new(0., 0.);
        }
        let cos_theta = self.kinematics.cos_theta(s, t);
        // The sqrt(2)(2J+1) normalization strips the helicity averaging
        // from the observable layer
        SQRT_2 * (2 * self.j + 1) as Float * legendre(self.j, cos_theta) * self.evaluate(s)
    }

    fn set_params(&mut self, params: &[Float]) -> Result<()> {
        ensure!(
            params.len() == NUM_PARAMS,
            "scattering_length expects {} parameters, got {}",
            NUM_PARAMS,
            params.len()
        );
        self.a00 = params[0];
        self.a01 = params[1];
        self.a11 = params[2];
        self.b0 = params[3];
        self.b1 = params[4];
        Ok(())
    }

    fn params(&self) -> Vec<Float> {
        vec![self.a00, self.a01, self.a11, self.b0, self.b1]
    }
}
