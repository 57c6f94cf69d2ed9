//! Exclusive two-body reaction kinematics for gamma N -> X N'
//!
//! Amplitude models treat this as a pure function table: invariant momenta,
//! thresholds, Mandelstam-t conversions and the helicity-combination table.
//! They never own or mutate a kinematics instance.

use crate::{
    amplitude::{self, SpinParity},
    constants::M_PROTON,
    lorentz::LorentzVector,
    numeric::{
        floats::consts::SQRT_2,
        functions::{csqrt, sqr},
        Complex, Float,
    },
};

use anyhow::{ensure, Result};
use prefix_num_ops::real::*;

/// Kallen (triangle) function lambda(a, b, c)
///
/// Its square root is (twice sqrt(s) times) the momentum of a two-body
/// system; negative values signal a sub-threshold configuration.
pub fn kallen(a: Float, b: Float, c: Float) -> Float {
    sqr(a) + sqr(b) + sqr(c) - 2. * (a * b + b * c + c * a)
}

/// Kinematics of a fixed exclusive reaction beam + target -> meson + recoil
pub struct ReactionKinematics {
    /// Beam mass (zero for a photon)
    m_beam: Float,

    /// Target mass
    m_target: Float,

    /// Produced meson mass
    m_meson: Float,

    /// Recoil baryon mass
    m_recoil: Float,

    /// Produced meson spin and parity
    meson_jp: SpinParity,

    /// All helicity combinations [beam, target, meson, recoil]
    ///
    /// Boson entries are plain helicities, fermion entries are doubled
    /// (+1 stands for +1/2).
    helicities: Vec<[i32; 4]>,
}
//
impl ReactionKinematics {
    // ### CONSTRUCTION ###

    /// Set up photoproduction of a meson off a proton target
    pub fn new(m_meson: Float) -> Self {
        Self::with_masses(0., M_PROTON, m_meson, M_PROTON)
    }

    /// Set up a reaction with all four external masses explicit
    pub fn with_masses(m_beam: Float, m_target: Float, m_meson: Float, m_recoil: Float) -> Self {
        let meson_jp = amplitude::PSEUDOSCALAR;
        Self {
            m_beam,
            m_target,
            m_meson,
            m_recoil,
            meson_jp,
            helicities: helicity_table(meson_jp.0),
        }
    }

    /// Select the produced meson's quantum numbers
    ///
    /// This is a configuration step: an unphysical combination aborts setup.
    pub fn set_meson_jp(&mut self, j: u32, p: i32) -> Result<()> {
        ensure!(
            amplitude::ALLOWED_MESON_JP.contains(&(j, p)),
            "meson quantum numbers J = {}, P = {} are not supported",
            j,
            p
        );
        self.meson_jp = (j, p);
        self.helicities = helicity_table(j);
        Ok(())
    }

    // ### ACCESSORS ###

    /// Produced meson mass
    pub fn m_meson(&self) -> Float {
        self.m_meson
    }

    /// Target mass
    pub fn m_target(&self) -> Float {
        self.m_target
    }

    /// Recoil mass
    pub fn m_recoil(&self) -> Float {
        self.m_recoil
    }

    /// Produced meson spin-parity
    pub fn meson_jp(&self) -> SpinParity {
        self.meson_jp
    }

    /// Table of helicity combinations [beam, target, meson, recoil]
    pub fn helicities(&self) -> &[[i32; 4]] {
        &self.helicities
    }

    /// Map a discrete helicity-combination index to particle helicities
    pub fn helicity(&self, index: usize) -> [i32; 4] {
        self.helicities[index]
    }

    // ### THRESHOLDS AND MOMENTA ###

    /// Center-of-mass threshold energy of the final state
    pub fn w_threshold(&self) -> Float {
        self.m_meson + self.m_recoil
    }

    /// Threshold value of Mandelstam s
    pub fn s_threshold(&self) -> Float {
        sqr(self.w_threshold())
    }

    /// Initial-state center-of-mass momentum
    ///
    /// Complex-valued so that sub-threshold evaluation continues smoothly.
    pub fn initial_momentum(&self, s: Float) -> Complex {
        csqrt(Complex::new(
            kallen(s, sqr(self.m_beam), sqr(self.m_target)),
            0.,
        )) / (2. * sqrt(s))
    }

    /// Final-state center-of-mass momentum
    pub fn final_momentum(&self, s: Float) -> Complex {
        csqrt(Complex::new(
            kallen(s, sqr(self.m_meson), sqr(self.m_recoil)),
            0.,
        )) / (2. * sqrt(s))
    }

    /// Center-of-mass energy of the beam
    pub fn beam_energy(&self, s: Float) -> Float {
        (s + sqr(self.m_beam) - sqr(self.m_target)) / (2. * sqrt(s))
    }

    /// Center-of-mass energy of the target
    pub fn target_energy(&self, s: Float) -> Float {
        (s + sqr(self.m_target) - sqr(self.m_beam)) / (2. * sqrt(s))
    }

    /// Center-of-mass energy of the produced meson
    pub fn meson_energy(&self, s: Float) -> Float {
        (s + sqr(self.m_meson) - sqr(self.m_recoil)) / (2. * sqrt(s))
    }

    /// Center-of-mass energy of the recoil baryon
    pub fn recoil_energy(&self, s: Float) -> Float {
        (s + sqr(self.m_recoil) - sqr(self.m_meson)) / (2. * sqrt(s))
    }

    // ### MANDELSTAM VARIABLES ###

    /// Mandelstam t at a given center-of-mass scattering angle
    pub fn t_man(&self, s: Float, theta: Float) -> Float {
        let qi = self.initial_momentum(s).re;
        let qf = self.final_momentum(s).re;
        sqr(self.m_beam) + sqr(self.m_meson)
            - 2. * (self.beam_energy(s) * self.meson_energy(s) - qi * qf * cos(theta))
    }

    /// Cosine of the scattering angle at given (s, t)
    pub fn cos_theta(&self, s: Float, t: Float) -> Float {
        let qi = self.initial_momentum(s).re;
        let qf = self.final_momentum(s).re;
        (t - sqr(self.m_beam) - sqr(self.m_meson)
            + 2. * self.beam_energy(s) * self.meson_energy(s))
            / (2. * qi * qf)
    }

    // ### POLARIZATION VECTORS ###

    /// Polarization vector of the photon beam along +z, helicity +1 or -1
    pub fn beam_polarization(&self, lambda: i32) -> LorentzVector<Complex> {
        assert!(
            lambda == 1 || lambda == -1,
            "photon helicity must be +1 or -1"
        );
        LorentzVector::from_components(
            Complex::new(0., 0.),
            Complex::new(-(lambda as Float) / SQRT_2, 0.),
            Complex::new(0., -1. / SQRT_2),
            Complex::new(0., 0.),
        )
    }

    /// Polarization vector of the produced massive vector meson at angle
    /// theta in the x-z plane
    pub fn meson_polarization(&self, s: Float, theta: Float, lambda: i32) -> LorentzVector<Complex> {
        assert!(
            (-1..=1).contains(&lambda),
            "vector-meson helicity must be -1, 0 or +1"
        );
        if lambda == 0 {
            let e = self.meson_energy(s);
            let p = self.final_momentum(s).re;
            LorentzVector::from_components(
                Complex::new(p / self.m_meson, 0.),
                Complex::new(e * sin(theta) / self.m_meson, 0.),
                Complex::new(0., 0.),
                Complex::new(e * cos(theta) / self.m_meson, 0.),
            )
        } else {
            LorentzVector::from_components(
                Complex::new(0., 0.),
                Complex::new(-(lambda as Float) * cos(theta) / SQRT_2, 0.),
                Complex::new(0., -1. / SQRT_2),
                Complex::new((lambda as Float) * sin(theta) / SQRT_2, 0.),
            )
        }
    }
}

/// Build the helicity-combination table for a given meson spin
fn helicity_table(meson_j: u32) -> Vec<[i32; 4]> {
    let meson_j = meson_j as i32;
    let mut table = Vec::new();
    for &lam_beam in &[1, -1] {
        for &lam_target in &[1, -1] {
            for lam_meson in (-meson_j..=meson_j).rev() {
                for &lam_recoil in &[1, -1] {
                    table.push([lam_beam, lam_target, lam_meson, lam_recoil]);
                }
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorentz::contract;
    use crate::numeric::floats::consts::PI;

    #[test]
    fn kallen_factorizes() {
        // lambda(a, b, c) = (a - b - c)^2 - 4 b c
        let (a, b, c) = (5., 1.2, 0.7);
        assert!((kallen(a, b, c) - (sqr(a - b - c) - 4. * b * c)).abs() < 1e-12);
    }

    #[test]
    fn momenta_vanish_at_threshold() {
        let kin = ReactionKinematics::new(3.0969);
        let s_th = kin.s_threshold();
        assert!(kin.final_momentum(s_th).norm() < 1e-6);
        assert!(kin.final_momentum(1.1 * s_th).re > 0.);
        // Below threshold the momentum turns imaginary
        let below = kin.final_momentum(0.9 * s_th);
        assert!(below.re.abs() < 1e-12);
        assert!(below.im > 0.);
    }

    #[test]
    fn t_man_round_trip() {
        let kin = ReactionKinematics::new(1.2295);
        let s = 1.5 * kin.s_threshold();
        for &theta in &[0.3, 1.2, 2.7] {
            let t = kin.t_man(s, theta);
            assert!((kin.cos_theta(s, t) - cos(theta)).abs() < 1e-10);
        }
        // Forward scattering has the least-negative t
        assert!(kin.t_man(s, 0.) > kin.t_man(s, PI));
    }

    #[test]
    fn helicity_tables_by_meson_spin() {
        let mut kin = ReactionKinematics::new(1.2295);
        assert_eq!(kin.helicities().len(), 8);
        kin.set_meson_jp(1, 1).unwrap();
        assert_eq!(kin.helicities().len(), 24);
        assert_eq!(kin.helicity(0), [1, 1, 1, 1]);
        assert!(kin.set_meson_jp(2, 1).is_err());
    }

    #[test]
    fn polarization_vectors_are_normalized() {
        let kin = ReactionKinematics::new(1.2295);
        let s = 2. * kin.s_threshold();
        // Transverse photon: eps* . eps = -1
        let eps = kin.beam_polarization(1);
        assert!((contract(&eps.conj(), &eps).re + 1.).abs() < 1e-12);
        // Massive vector: eps*(lambda) . eps(lambda) = -1 for every helicity
        for lambda in -1..=1 {
            let eps = kin.meson_polarization(s, 0.8, lambda);
            assert!((contract(&eps.conj(), &eps).re + 1.).abs() < 1e-10);
        }
        // Longitudinal mode is orthogonal to the meson momentum
        let e = kin.meson_energy(s);
        let p = kin.final_momentum(s).re;
        let momentum = crate::lorentz::four_momentum(e, p * sin(0.8), 0., p * cos(0.8));
        let eps0 = kin.meson_polarization(s, 0.8, 0);
        assert!(contract(&momentum, &eps0).norm() < 1e-10);
    }
}
