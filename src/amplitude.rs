//! Exclusive amplitude interface: helicity amplitudes, quantum-number
//! validation and the observables built on top of them

use crate::{
    constants::GEV2_TO_NB,
    kinematics::ReactionKinematics,
    numeric::{
        floats::consts::PI,
        functions::{norm_sqr, sqr},
        Complex, Float,
    },
    quadrature::integrate,
};

use anyhow::{bail, ensure, Result};

// ### QUANTUM NUMBERS ###

/// Spin and parity of a state; fermion spins are doubled
pub type SpinParity = (u32, i32);

/// Pseudoscalar meson quantum numbers 0^-
pub const PSEUDOSCALAR: SpinParity = (0, -1);

/// Vector meson quantum numbers 1^-
pub const VECTOR: SpinParity = (1, -1);

/// Axial-vector meson quantum numbers 1^+
pub const AXIAL_VECTOR: SpinParity = (1, 1);

/// Baryon quantum numbers 1/2^+
pub const HALF_PLUS: SpinParity = (1, 1);

/// Baryon quantum numbers 1/2^-
pub const HALF_MINUS: SpinParity = (1, -1);

/// Meson quantum numbers any amplitude in this crate may produce
pub const ALLOWED_MESON_JP: [SpinParity; 3] = [PSEUDOSCALAR, VECTOR, AXIAL_VECTOR];

/// Baryon quantum numbers any amplitude in this crate may recoil against
pub const ALLOWED_BARYON_JP: [SpinParity; 2] = [HALF_PLUS, HALF_MINUS];

/// Lowest orbital angular momentum and transverse combinatorial factor of
/// an s-channel state with the given doubled spin and parity
///
/// The table is closed and checked exhaustively: an unlisted combination
/// is a configuration error that aborts setup, never a silent default.
pub fn orbital_config(two_j: u32, parity: i32) -> Result<(u32, Float)> {
    ensure!(
        parity == 1 || parity == -1,
        "invalid parity {} for an s-channel state",
        parity
    );
    match parity * two_j as i32 {
        1 => Ok((0, 2. / 3.)),
        -1 => Ok((1, 3. / 5.)),
        3 => Ok((1, 3. / 5.)),
        -3 => Ok((0, 2. / 3.)),
        5 => Ok((1, 3. / 5.)),
        -5 => Ok((2, 1. / 3.)),
        _ => bail!(
            "spin-parity combination 2J = {} and P = {} is not tabulated",
            two_j,
            parity
        ),
    }
}

// ### AMPLITUDE INTERFACE ###

/// An exclusive exchange amplitude
///
/// Implementors provide one helicity amplitude; the observables are
/// derived from it here. All evaluation is pure: per-point quantities live
/// on the call stack, so independent (s, t) evaluations can safely run in
/// parallel over a shared amplitude.
pub trait Amplitude {
    /// Identifying name used to select coupling templates downstream
    fn name(&self) -> &'static str;

    /// Kinematics this amplitude is evaluated on
    fn kinematics(&self) -> &ReactionKinematics;

    /// Scattering amplitude for one helicity combination at fixed (s, t)
    fn helicity_amplitude(&self, helicities: [i32; 4], s: Float, t: Float) -> Complex;

    /// Replace the model parameters; a count mismatch aborts setup
    fn set_params(&mut self, params: &[Float]) -> Result<()>;

    /// Current model parameters
    fn params(&self) -> Vec<Float>;

    /// Check the kinematics' quantum numbers against the allowed set
    fn check_jp(&self) -> Result<()> {
        let jp = self.kinematics().meson_jp();
        ensure!(
            ALLOWED_MESON_JP.contains(&jp),
            "amplitude {} cannot produce a meson with J = {}, P = {}",
            self.name(),
            jp.0,
            jp.1
        );
        Ok(())
    }

    /// Squared amplitude summed over all helicity combinations
    fn probability_distribution(&self, s: Float, t: Float) -> Float {
        self.kinematics()
            .helicities()
            .iter()
            .map(|&h| norm_sqr(self.helicity_amplitude(h, s, t)))
            .sum()
    }

    /// Differential cross-section dsigma/dt in nanobarn GeV^-2
    fn differential_xsection(&self, s: Float, t: Float) -> Float {
        let kin = self.kinematics();
        let qi2 = sqr(kin.initial_momentum(s).re);
        if qi2 <= 0. {
            return 0.;
        }
        // Average over the four initial helicity configurations
        self.probability_distribution(s, t) / 4. / (64. * PI * s * qi2) * GEV2_TO_NB
    }

    /// Integrated cross-section sigma(s) in nanobarn
    fn integrated_xsection(&self, s: Float) -> Float {
        let kin = self.kinematics();
        if s <= kin.s_threshold() {
            return 0.;
        }
        let t_backward = kin.t_man(s, PI);
        let t_forward = kin.t_man(s, 0.);
        integrate(
            |t| self.differential_xsection(s, t),
            t_backward,
            t_forward,
            1e-6,
        )
    }
}
