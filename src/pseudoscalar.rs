//! Photoproduction of an axial-vector or vector meson through t-channel
//! pseudoscalar (pion-like) exchange
//!
//! The amplitude is assembled from the tensor/spinor core: a polarization
//! contraction at the top vertex, a u-bar gamma^5 u bilinear at the bottom
//! vertex and a scalar pole propagator between them.

use crate::{
    amplitude::{Amplitude, AXIAL_VECTOR, VECTOR},
    dirac::{u_spinor, DiracMatrix},
    kinematics::ReactionKinematics,
    lorentz::contract,
    numeric::{
        floats::consts::PI,
        functions::sqr,
        Complex, Float,
    },
};

use anyhow::{ensure, Result};
use prefix_num_ops::real::*;

/// Number of couplings: one for the top vertex, one for the bottom vertex
pub const NUM_PARAMS: usize = 2;

/// t-channel pseudoscalar-exchange amplitude
pub struct PseudoscalarExchange<'kin> {
    /// Kinematics of the production process
    kinematics: &'kin ReactionKinematics,

    /// Mass of the exchanged pseudoscalar
    m_exchange: Float,

    /// Photon - meson - exchange coupling
    g_top: Float,

    /// Nucleon - nucleon - exchange coupling
    g_bottom: Float,

    /// Exponential form-factor slope, if enabled (GeV^-2)
    form_factor_slope: Option<Float>,
}
//
impl<'kin> PseudoscalarExchange<'kin> {
    /// Set up the exchange of a pseudoscalar of the given mass
    ///
    /// Only vector and axial-vector meson production is supported; an
    /// incompatible kinematics configuration aborts setup.
    pub fn new(kinematics: &'kin ReactionKinematics, exchange_mass: Float) -> Result<Self> {
        let jp = kinematics.meson_jp();
        ensure!(
            jp == VECTOR || jp == AXIAL_VECTOR,
            "pseudoscalar exchange cannot produce a meson with J = {}, P = {}",
            jp.0,
            jp.1
        );
        Ok(Self {
            kinematics,
            m_exchange: exchange_mass,
            g_top: 0.,
            g_bottom: 0.,
            form_factor_slope: None,
        })
    }

    /// Enable an exponential form factor with the given slope (GeV^-2)
    pub fn set_form_factor(&mut self, slope: Float) {
        self.form_factor_slope = Some(slope);
    }

    /// The top-vertex coupling as a function of t
    ///
    /// This is the shape the inclusive triple-Regge engine extracts when
    /// it recognizes this amplitude by name.
    pub fn top_coupling(&self, t: Float) -> Float {
        (self.g_top / self.kinematics.m_meson()) * (t - sqr(self.kinematics.m_meson()))
    }
}

impl Amplitude for PseudoscalarExchange<'_> {
    fn name(&self) -> &'static str {
        "pseudoscalar_exchange"
    }

    fn kinematics(&self) -> &ReactionKinematics {
        self.kinematics
    }

    fn helicity_amplitude(&self, helicities: [i32; 4], s: Float, t: Float) -> Complex {
        let [lam_beam, lam_target, lam_meson, lam_recoil] = helicities;
        let kin = self.kinematics;
        let theta = acos(kin.cos_theta(s, t).clamp(-1., 1.));

        // Top vertex: photon and outgoing meson polarizations contracted
        // across the exchange
        let eps_beam = kin.beam_polarization(lam_beam);
        let eps_meson = kin.meson_polarization(s, theta, lam_meson).conj();
        let top = self.top_coupling(t) * contract(&eps_beam, &eps_meson);

        // Bottom vertex: u-bar(recoil) gamma^5 u(target), target along -z
        // and recoil back to back with the meson
        let u_target = u_spinor(kin.target_energy(s), kin.m_target(), PI, lam_target);
        let u_recoil = u_spinor(kin.recoil_energy(s), kin.m_recoil(), theta + PI, lam_recoil);
        let bottom =
            self.g_bottom * contract(&u_recoil.adjoint(), &(DiracMatrix::gamma_5() * u_target));

        // Exchange propagator and optional form factor
        let propagator = 1. / (t - sqr(self.m_exchange));
        let form_factor = match self.form_factor_slope {
            Some(slope) => exp(slope * (t - kin.t_man(s, 0.))),
            None => 1.,
        };
        top * bottom * propagator * form_factor
    }

    fn set_params(&mut self, params: &[Float]) -> Result<()> {
        ensure!(
            params.len() == NUM_PARAMS,
            "pseudoscalar_exchange expects {} parameters, got {}",
            NUM_PARAMS,
            params.len()
        );
        self.g_top = params[0];
        self.g_bottom = params[1];
        Ok(())
    }

    fn params(&self) -> Vec<Float> {
        vec![self.g_top, self.g_bottom]
    }
}
