//! Inclusive production through a triple-Regge interaction
//!
//! The t dependence comes from properly normalized Regge (or fixed-spin)
//! exchange propagators at the top vertex, the missing-mass dependence
//! from the total hadronic cross-section of the bottom vertex. The
//! invariant cross-section is then integrated numerically over the
//! kinematically allowed region for single-differential and fully
//! integrated observables.

use crate::{
    amplitude::Amplitude,
    constants::{M_PION, M_PROTON},
    numeric::{
        floats::consts::PI,
        functions::{norm_sqr, sqr},
        Complex, Float,
    },
    quadrature::integrate,
    regge::LinearTrajectory,
    sigma_tot::{make_sigma_total, SigmaTotOption, SigmaTotal, ZeroXsection},
    special::cgamma,
};

use prefix_num_ops::real::*;

/// Half-width of the guard band around the Feynman-x endpoint
///
/// Things tend to blow up at exactly x = 1, so the formula returns zero
/// inside this band instead of evaluating there.
pub const X_ENDPOINT_BAND: Float = 0.001;

/// Relative tolerance of the inner (single-differential) integrations
const INNER_TOL: Float = 1e-6;

/// Relative tolerance of the outer (fully integrated) integration
const OUTER_TOL: Float = 1e-5;

// ### INCLUSIVE KINEMATICS ###

/// Kinematics of inclusive production gamma target -> X + anything
pub struct InclusiveKinematics {
    /// Mass of the produced (detected) particle
    m_x: Float,

    /// Target mass
    m_target: Float,

    /// Minimum missing mass squared of the unobserved recoil system
    min_m2: Float,
}
//
impl InclusiveKinematics {
    /// Set up inclusive production of a particle off a proton target
    ///
    /// The lightest inelastic recoil system, a pion-nucleon pair, sets the
    /// default minimum missing mass.
    pub fn new(produced_mass: Float) -> Self {
        Self {
            m_x: produced_mass,
            m_target: M_PROTON,
            min_m2: sqr(M_PROTON + M_PION),
        }
    }

    /// Override the minimum missing mass squared
    pub fn set_min_m2(&mut self, min_m2: Float) {
        self.min_m2 = min_m2;
    }

    /// Produced particle mass
    pub fn m_x(&self) -> Float {
        self.m_x
    }

    /// Target mass
    pub fn m_target(&self) -> Float {
        self.m_target
    }

    /// Minimum missing mass squared
    pub fn min_m2(&self) -> Float {
        self.min_m2
    }

    /// Center-of-mass energy (and momentum) of the massless beam
    pub fn beam_momentum(&self, s: Float) -> Float {
        (s - sqr(self.m_target)) / (2. * sqrt(s))
    }

    /// Center-of-mass energy of the produced particle at missing mass
    /// squared m2
    fn x_energy(&self, s: Float, m2: Float) -> Float {
        (s + sqr(self.m_x) - m2) / (2. * sqrt(s))
    }

    /// Center-of-mass momentum of the produced particle; zero past the
    /// kinematic endpoint
    fn x_momentum(&self, s: Float, m2: Float) -> Float {
        sqrt((sqr(self.x_energy(s, m2)) - sqr(self.m_x)).max(0.))
    }

    /// Largest reachable missing mass squared: X produced at rest
    pub fn m2_max(&self, s: Float) -> Float {
        sqr(sqrt(s) - self.m_x)
    }

    /// Minimum momentum transfer (forward production) at fixed missing
    /// mass squared
    pub fn t_min(&self, s: Float, m2: Float) -> Float {
        let e_beam = self.beam_momentum(s);
        sqr(self.m_x) - 2. * e_beam * (self.x_energy(s, m2) - self.x_momentum(s, m2))
    }

    /// Maximum momentum transfer (backward production) at fixed missing
    /// mass squared
    pub fn t_max(&self, s: Float, m2: Float) -> Float {
        let e_beam = self.beam_momentum(s);
        sqr(self.m_x) - 2. * e_beam * (self.x_energy(s, m2) + self.x_momentum(s, m2))
    }

    /// Feynman x in the high-energy approximation
    pub fn x_from_m2(&self, s: Float, m2: Float) -> Float {
        1. - m2 / s
    }

    /// Missing mass squared at a given Feynman x
    pub fn m2_from_x(&self, s: Float, x: Float) -> Float {
        s * (1. - x)
    }

    /// Momentum transfer in the high-energy (x, pT^2) chart
    pub fn t_from_x_y2(&self, x: Float, y2: Float) -> Float {
        sqr(self.m_x) - (sqr(self.m_x) + y2) / x
    }

    /// Whether a (t, M2) point lies inside the allowed region at this s
    pub fn in_physical_region(&self, s: Float, t: Float, m2: Float) -> bool {
        m2 >= self.min_m2
            && m2 <= self.m2_max(s)
            && t <= self.t_min(s, m2)
            && t >= self.t_max(s, m2)
    }
}

// ### EXCHANGE DYNAMICS ###

/// Dynamics of the exchanged object at the top vertex
pub enum Exchange {
    /// Reggeized exchange along a trajectory
    Regge(LinearTrajectory),

    /// Fixed-spin pole of the given squared mass and spin
    FixedSpin {
        /// Squared mass of the exchanged particle
        mass2: Float,
        /// Spin of the exchanged particle
        j: u32,
    },
}

/// Convention for the third kinematic variable of the invariant
/// cross-section
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// The third variable is the missing mass squared M2
    MissingMass,

    /// The third variable is Feynman x
    FeynmanX,
}

// ### TRIPLE-REGGE MODEL ###

/// Inclusive invariant cross-section from a triple-Regge interaction
pub struct TripleRegge {
    /// Inclusive kinematics of the detected particle
    kinematics: InclusiveKinematics,

    /// Top-vertex coupling as a function of t
    coupling: Box<dyn Fn(Float) -> Float>,

    /// Form-factor slope b (GeV^-2)
    b: Float,

    /// Exchange dynamics
    exchange: Exchange,

    /// Bottom-vertex total cross-section (single owner)
    sigma_tot: Box<dyn SigmaTotal>,

    /// Third-variable convention
    mode: Mode,
}
//
impl TripleRegge {
    // ### CONSTRUCTION ###

    /// Build the inclusive model from an exclusive amplitude
    ///
    /// The amplitude's name selects the coupling template for the top
    /// vertex; an unrecognized name falls back to a zero coupling and a
    /// zero cross-section, which makes the model inert rather than wrong.
    pub fn new(amplitude: &dyn Amplitude, exchange: Exchange, form_factor_slope: Float) -> Self {
        let m_x = amplitude.kinematics().m_meson();
        let kinematics = InclusiveKinematics::new(m_x);

        let (coupling, sigma_tot): (Box<dyn Fn(Float) -> Float>, Box<dyn SigmaTotal>) =
            if amplitude.name() == "pseudoscalar_exchange" {
                // Axial-vector - photon - pseudoscalar coupling, with the
                // pi- p PDG parameterization as the default bottom vertex
                let g = amplitude.params()[0];
                let m_x2 = sqr(m_x);
                (
                    Box::new(move |t| (g / m_x) * (t - m_x2)),
                    make_sigma_total(SigmaTotOption::PdgPimOnlyRegge),
                )
            } else {
                (Box::new(|_| 0.), Box::new(ZeroXsection))
            };

        Self {
            kinematics,
            coupling,
            b: form_factor_slope,
            exchange,
            sigma_tot,
            mode: Mode::MissingMass,
        }
    }

    /// Access the inclusive kinematics
    pub fn kinematics(&self) -> &InclusiveKinematics {
        &self.kinematics
    }

    /// Select the third-variable convention
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replace the top-vertex coupling function
    pub fn set_coupling(&mut self, coupling: Box<dyn Fn(Float) -> Float>) {
        self.coupling = coupling;
    }

    /// Swap the bottom-vertex total-cross-section sub-model
    ///
    /// The sub-model is a single-owner resource: the previous instance is
    /// dropped before the replacement is installed, and only subsequent
    /// evaluations see the new one.
    pub fn set_sigma_total(&mut self, option: SigmaTotOption) {
        self.sigma_tot = make_sigma_total(option);
    }

    // ### INVARIANT CROSS-SECTION ###

    /// Lorentz-invariant differential cross-section E d3sigma/d3p
    ///
    /// The third argument is the missing mass squared or Feynman x
    /// according to the configured mode.
    pub fn invariant_xsection(&self, s: Float, t: Float, mm: Float) -> Float {
        // Things tend to blow up at exactly x = 1
        if self.mode == Mode::FeynmanX && abs(mm - 1.) < X_ENDPOINT_BAND {
            return 0.;
        }

        // Coupling squared
        let coupling2 = sqr((self.coupling)(t));

        // Form factor with t' relative to the exclusive limit
        let t_exclusive = self.kinematics.t_min(s, self.kinematics.min_m2());
        let form_factor2 = exp(2. * self.b * (t - t_exclusive));

        // Phase-space piece: (1 - x) or M2 / s
        let s_piece = match self.mode {
            Mode::FeynmanX => 1. - mm,
            Mode::MissingMass => mm / s,
        };

        let exchange_propagator2 = match &self.exchange {
            Exchange::Regge(trajectory) => {
                let alpha = trajectory.eval(t).re;
                let alpha_prime = trajectory.slope().re;

                // First check t isn't large enough to blow up the gamma
                // function; this is a numerical-domain guard only
                if self.b + alpha_prime - alpha_prime * ln(-alpha_prime * t) < 0. {
                    return 0.;
                }

                let signature_factor = (1.
                    + (trajectory.signature() as Float) * Complex::new(0., -PI * alpha).exp())
                    / 2.;
                let t_piece = norm_sqr(
                    alpha_prime
                        * signature_factor
                        * cgamma(Complex::new(trajectory.min_j() as Float - alpha, 0.)),
                );
                t_piece * powf(s_piece, -2. * alpha)
            }
            Exchange::FixedSpin { mass2, j } => {
                // Simple pole, squared
                let pole = 1. / (mass2 - t);
                pole * pole * powf(s_piece, -2. * (*j as Float))
            }
        };

        // Bottom vertex: total cross-section at the missing mass
        let sigma_tot = match self.mode {
            Mode::FeynmanX => self.sigma_tot.eval(s * (1. - mm)),
            Mode::MissingMass => self.sigma_tot.eval(mm),
        };

        sigma_tot * coupling2 * form_factor2 * exchange_propagator2 * s_piece / powi(4. * PI, 3)
    }

    // ### INTEGRATED OBSERVABLES ###

    /// Phase-space normalization relating the invariant cross-section to
    /// d2sigma/(dt dM2): pi / (2 q sqrt(s)) for a phi-symmetric final state
    fn dtdm2_norm(&self, s: Float) -> Float {
        PI / (s - sqr(self.kinematics.m_target()))
    }

    /// The invariant cross-section at (t, M2), in whichever variable the
    /// mode expects, clamped to the physical region
    fn integrand(&self, s: Float, t: Float, m2: Float) -> Float {
        if !self.kinematics.in_physical_region(s, t, m2) {
            return 0.;
        }
        let mm = match self.mode {
            Mode::MissingMass => m2,
            Mode::FeynmanX => self.kinematics.x_from_m2(s, m2),
        };
        self.invariant_xsection(s, t, mm)
    }

    /// Single-differential cross-section in t, missing mass integrated out
    pub fn dsigma_dt(&self, s: Float, t: Float) -> Float {
        let m2_lo = self.kinematics.min_m2();
        let m2_hi = self.kinematics.m2_max(s);
        if m2_hi <= m2_lo {
            return 0.;
        }
        self.dtdm2_norm(s) * integrate(|m2| self.integrand(s, t, m2), m2_lo, m2_hi, INNER_TOL)
    }

    /// Single-differential cross-section in the missing mass squared,
    /// momentum transfer integrated out
    pub fn dsigma_dm2(&self, s: Float, m2: Float) -> Float {
        if m2 < self.kinematics.min_m2() || m2 > self.kinematics.m2_max(s) {
            return 0.;
        }
        let t_lo = self.kinematics.t_max(s, m2);
        let t_hi = self.kinematics.t_min(s, m2);
        if t_hi <= t_lo {
            return 0.;
        }
        self.dtdm2_norm(s) * integrate(|t| self.integrand(s, t, m2), t_lo, t_hi, INNER_TOL)
    }

    /// Single-differential cross-section in Feynman x
    pub fn dsigma_dx(&self, s: Float, x: Float) -> Float {
        // dM2 = s dx along the high-energy chart
        s * self.dsigma_dm2(s, self.kinematics.m2_from_x(s, x))
    }

    /// Single-differential cross-section in the transverse momentum
    /// squared y2 = pT^2, Feynman x integrated out
    pub fn dsigma_dy2(&self, s: Float, y2: Float) -> Float {
        let x_lo = (self.kinematics.x_from_m2(s, self.kinematics.m2_max(s))).max(1e-3);
        let x_hi = 1.;
        let norm = self.dtdm2_norm(s);
        integrate(
            |x| {
                let t = self.kinematics.t_from_x_y2(x, y2);
                let m2 = self.kinematics.m2_from_x(s, x);
                // Jacobian d(t, M2) -> d(x, y2) is s / x
                self.integrand(s, t, m2) * s / x
            },
            x_lo,
            x_hi,
            INNER_TOL,
        ) * norm
    }

    /// Fully integrated inclusive cross-section
    pub fn integrated_xsection(&self, s: Float) -> Float {
        let m2_lo = self.kinematics.min_m2();
        let m2_hi = self.kinematics.m2_max(s);
        if m2_hi <= m2_lo {
            return 0.;
        }
        integrate(|m2| self.dsigma_dm2(s, m2), m2_lo, m2_hi, OUTER_TOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{M_B1, M_PION},
        kinematics::ReactionKinematics,
        pseudoscalar::PseudoscalarExchange,
    };

    /// Reggeized pion exchange model for inclusive b1 production
    fn b1_model() -> TripleRegge {
        let mut kin = ReactionKinematics::new(M_B1);
        kin.set_meson_jp(1, 1).unwrap();
        let mut exclusive = PseudoscalarExchange::new(&kin, M_PION).unwrap();
        exclusive.set_params(&[0.24, 17.22]).unwrap();

        // Pion trajectory: intercept fixed by the pion pole
        let alpha_prime = 0.7;
        let mut trajectory = LinearTrajectory::new(1, -alpha_prime * sqr(M_PION), alpha_prime)
            .unwrap();
        trajectory.set_min_j(0);

        let b_pi = 1. / sqr(0.9);
        TripleRegge::new(&exclusive, Exchange::Regge(trajectory), b_pi)
    }

    #[test]
    fn x_endpoint_returns_exactly_zero() {
        let mut model = b1_model();
        model.set_mode(Mode::FeynmanX);
        for &(s, t) in &[(75.9421, -0.3), (20., -1.5), (200., -0.05)] {
            assert_eq!(model.invariant_xsection(s, t, 1.), 0.);
            assert_eq!(model.invariant_xsection(s, t, 1. - 0.5 * X_ENDPOINT_BAND), 0.);
        }
    }

    #[test]
    fn invariant_xsection_is_positive_in_the_bulk() {
        let mut model = b1_model();
        model.set_mode(Mode::FeynmanX);
        let f = model.invariant_xsection(75.9421, -0.4, 0.85);
        assert!(f.is_finite());
        assert!(f > 0.);
    }

    #[test]
    fn gamma_domain_guard_kicks_in_at_large_t() {
        let mut model = b1_model();
        model.set_mode(Mode::FeynmanX);
        // b + alpha' - alpha' ln(-alpha' t) goes negative at huge |t|
        assert_eq!(model.invariant_xsection(75.9421, -1e4, 0.85), 0.);
    }

    #[test]
    fn degenerate_trajectory_reduces_to_the_fixed_pole() {
        // A trajectory with vanishing slope and intercept pinned at the
        // lowest spin is numerically a fixed pole of zero exchange mass
        let mut kin = ReactionKinematics::new(M_B1);
        kin.set_meson_jp(1, 1).unwrap();
        let mut exclusive = PseudoscalarExchange::new(&kin, M_PION).unwrap();
        exclusive.set_params(&[0.24, 17.22]).unwrap();

        let alpha_prime = 1e-9;
        let trajectory = LinearTrajectory::new(1, 0., alpha_prime).unwrap();
        let mut regge = TripleRegge::new(&exclusive, Exchange::Regge(trajectory), 1.1);
        regge.set_mode(Mode::FeynmanX);

        let mut fixed = TripleRegge::new(
            &exclusive,
            Exchange::FixedSpin { mass2: 0., j: 0 },
            1.1,
        );
        fixed.set_mode(Mode::FeynmanX);

        let (s, t, x) = (75.9421, -0.5, 0.85);
        let a = regge.invariant_xsection(s, t, x);
        let b = fixed.invariant_xsection(s, t, x);
        assert!(a > 0.);
        assert!((a - b).abs() < 1e-3 * b);
    }

    #[test]
    fn integrated_matches_nested_dsigma_dt() {
        let model = b1_model();
        let s = 30.;

        let direct = model.integrated_xsection(s);

        // Global t range: widest at the minimum missing mass
        let kin = model.kinematics();
        let t_lo = kin.t_max(s, kin.min_m2());
        let t_hi = kin.t_min(s, kin.min_m2());
        let nested = integrate(|t| model.dsigma_dt(s, t), t_lo, t_hi, 1e-5);

        assert!(direct > 0.);
        assert!((direct - nested).abs() < 0.01 * direct);
    }

    #[test]
    fn mass_and_x_modes_agree_on_observables() {
        // The integrands are parameterized differently but describe the
        // same physics, so dsigma/dt must come out mode independent up to
        // the high-energy identification x = 1 - M2/s
        let s = 75.9421;
        let t = -0.4;
        let mut model = b1_model();
        let in_mass_mode = model.dsigma_dt(s, t);
        model.set_mode(Mode::FeynmanX);
        let in_x_mode = model.dsigma_dt(s, t);
        assert!(in_mass_mode > 0.);
        assert!((in_mass_mode - in_x_mode).abs() < 0.05 * in_mass_mode);
    }

    #[test]
    fn sigma_total_swap_is_single_owner_and_immediate() {
        let mut model = b1_model();
        model.set_mode(Mode::FeynmanX);
        let (s, t, x) = (75.9421, -0.4, 0.85);

        let before = model.invariant_xsection(s, t, x);
        assert!(before > 0.);

        // Swapping to the zero model affects evaluations immediately
        model.set_sigma_total(SigmaTotOption::Zero);
        assert_eq!(model.invariant_xsection(s, t, x), 0.);

        // Swapping back restores the original value exactly
        model.set_sigma_total(SigmaTotOption::PdgPimOnlyRegge);
        let after = model.invariant_xsection(s, t, x);
        assert_eq!(before, after);
    }

    #[test]
    fn unrecognized_amplitude_is_inert() {
        let kin = ReactionKinematics::new(crate::constants::M_JPSI);
        let wave = crate::two_channel::TwoChannel::new(&kin, 0, [1., 1.]).unwrap();
        let model = TripleRegge::new(
            &wave,
            Exchange::FixedSpin { mass2: 1., j: 0 },
            1.,
        );
        assert_eq!(model.invariant_xsection(30., -0.4, 2.), 0.);
        assert_eq!(model.integrated_xsection(30.), 0.);
    }

    #[test]
    fn sub_threshold_inputs_propagate_as_zero() {
        let model = b1_model();
        // s too small to reach the minimum missing mass
        assert_eq!(model.integrated_xsection(1.5), 0.);
        assert_eq!(model.dsigma_dt(1.5, -0.3), 0.);
    }

    #[test]
    fn dsigma_dx_and_dy2_are_positive_in_range() {
        let mut model = b1_model();
        model.set_mode(Mode::FeynmanX);
        let s = 75.9421;
        let dx = model.dsigma_dx(s, 0.85);
        assert!(dx.is_finite());
        assert!(dx > 0.);
        let dy2 = model.dsigma_dy2(s, 0.2);
        assert!(dy2.is_finite());
        assert!(dy2 > 0.);
    }
}
