//! Total hadronic cross-section sub-models for the bottom vertex of the
//! inclusive triple-Regge interaction

use crate::{
    constants::{MB_TO_GEV2, M_PION, M_PROTON},
    numeric::{functions::sqr, Float},
};

use anyhow::{ensure, Result};
use prefix_num_ops::real::*;

/// A total hadronic cross-section as a function of squared invariant mass
///
/// The single operation any sub-model exposes. Results are in GeV^-2.
pub trait SigmaTotal {
    /// Total cross-section at squared invariant mass `s` (GeV^2)
    fn eval(&self, s: Float) -> Float;
}

// ### CLOSED OPTION SET ###

/// Ready-made sub-model configurations selectable at runtime
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SigmaTotOption {
    /// COMPETE fit to pi+ p, Regge terms only
    PdgPipOnlyRegge,

    /// COMPETE fit to pi- p, Regge terms only
    PdgPimOnlyRegge,

    /// Identically zero
    Zero,
}

/// Instantiate the sub-model behind an option
pub fn make_sigma_total(option: SigmaTotOption) -> Box<dyn SigmaTotal> {
    match option {
        SigmaTotOption::PdgPipOnlyRegge => Box::new(PdgParameterization::pi_p(1)),
        SigmaTotOption::PdgPimOnlyRegge => Box::new(PdgParameterization::pi_p(-1)),
        SigmaTotOption::Zero => Box::new(ZeroXsection),
    }
}

// ### COMPETE / PDG PARAMETERIZATION ###

/// Universal Heisenberg-term coefficient H (mb)
const H: Float = 0.2720;

/// Reggeon powers eta_1 and eta_2 of the COMPETE fit
const ETA_1: Float = 0.4473;
const ETA_2: Float = 0.5486;

/// Universal mass scale M (GeV) entering s_M = (m1 + m2 + M)^2
const BIG_M: Float = 2.1206;

/// COMPETE highest-rank fit to a total hadronic cross-section, as listed
/// in the Review of Particle Physics
pub struct PdgParameterization {
    /// Squared mass scale s_M of the colliding pair
    s_m: Float,

    /// Opening threshold of the channel
    s_threshold: Float,

    /// Crossing sign: -1 for particle, +1 for antiparticle beams
    iso: Float,

    /// Overall scale of the universal terms
    delta: Float,

    /// Regge-pole residues R1, R2 (mb) and Pomeron constant P (mb)
    r1: Float,
    r2: Float,
    p: Float,
}
//
impl PdgParameterization {
    /// Set up a fit for the collision of two hadrons with the given masses
    ///
    /// Parameters are ordered {iso, delta, R1, R2, P} the way the Review
    /// tabulates them.
    pub fn new(m1: Float, m2: Float, params: [Float; 5]) -> Self {
        Self {
            s_m: sqr(m1 + m2 + BIG_M),
            s_threshold: sqr(m1 + m2),
            iso: params[0],
            delta: params[1],
            r1: params[2],
            r2: params[3],
            p: params[4],
        }
    }

    /// The pi+- p configuration used by the inclusive defaults
    pub fn pi_p(charge: i32) -> Self {
        Self::new(
            M_PION,
            M_PROTON,
            [charge as Float, 1., 9.56, 1.767, 18.75],
        )
    }
}

impl SigmaTotal for PdgParameterization {
    fn eval(&self, s: Float) -> Float {
        if s <= self.s_threshold {
            return 0.;
        }
        let ratio = s / self.s_m;
        let mb = self.delta * (H * sqr(ln(ratio)) + self.p)
            + self.r1 * powf(ratio, -ETA_1)
            + self.iso * self.r2 * powf(ratio, -ETA_2);
        mb * MB_TO_GEV2
    }
}

// ### TABULATED DATA ###

/// Piecewise-linear interpolation through tabulated cross-section points
///
/// The caller supplies the (s, sigma) points; reading them from a data
/// file is client-side work. Outside the tabulated range the nearest
/// endpoint value is used.
pub struct InterpolatedTable {
    s_values: Vec<Float>,
    sigma_values: Vec<Float>,
}
//
impl InterpolatedTable {
    /// Build a table from matching (s, sigma) samples sorted in s
    pub fn new(s_values: Vec<Float>, sigma_values: Vec<Float>) -> Result<Self> {
        ensure!(
            s_values.len() == sigma_values.len(),
            "tabulated cross-section needs matching abscissae and values"
        );
        ensure!(
            s_values.len() >= 2,
            "tabulated cross-section needs at least two points"
        );
        ensure!(
            s_values.windows(2).all(|w| w[0] < w[1]),
            "tabulated cross-section abscissae must be strictly increasing"
        );
        Ok(Self {
            s_values,
            sigma_values,
        })
    }
}

impl SigmaTotal for InterpolatedTable {
    fn eval(&self, s: Float) -> Float {
        let n = self.s_values.len();
        if s <= self.s_values[0] {
            return self.sigma_values[0];
        }
        if s >= self.s_values[n - 1] {
            return self.sigma_values[n - 1];
        }
        let hi = self.s_values.partition_point(|&x| x < s);
        let (x0, x1) = (self.s_values[hi - 1], self.s_values[hi]);
        let (y0, y1) = (self.sigma_values[hi - 1], self.sigma_values[hi]);
        y0 + (y1 - y0) * (s - x0) / (x1 - x0)
    }
}

// ### ZERO MODEL ###

/// The identically-zero cross-section, for switching a vertex off
pub struct ZeroXsection;

impl SigmaTotal for ZeroXsection {
    fn eval(&self, _s: Float) -> Float {
        0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdg_fit_is_positive_and_asymptotically_rising() {
        let sigma = PdgParameterization::pi_p(-1);
        let low = sigma.eval(10.);
        let high = sigma.eval(1e4);
        assert!(low > 0.);
        // The ln^2 term dominates at high energy
        assert!(high > sigma.eval(1e3));
        assert!(sigma.eval(0.5) == 0.);
        // pi+ p and pi- p differ only through the crossing term
        let plus = PdgParameterization::pi_p(1);
        assert!(plus.eval(10.) != low);
    }

    #[test]
    fn table_interpolates_and_clamps() {
        let table = InterpolatedTable::new(vec![1., 2., 4.], vec![10., 20., 10.]).unwrap();
        assert!((table.eval(1.5) - 15.).abs() < 1e-12);
        assert!((table.eval(3.) - 15.).abs() < 1e-12);
        assert_eq!(table.eval(0.5), 10.);
        assert_eq!(table.eval(9.), 10.);
    }

    #[test]
    fn table_construction_is_validated() {
        assert!(InterpolatedTable::new(vec![1., 2.], vec![1.]).is_err());
        assert!(InterpolatedTable::new(vec![2., 1.], vec![1., 2.]).is_err());
        assert!(InterpolatedTable::new(vec![1.], vec![1.]).is_err());
    }

    #[test]
    fn option_set_resolves() {
        let zero = make_sigma_total(SigmaTotOption::Zero);
        assert_eq!(zero.eval(100.), 0.);
        let pim = make_sigma_total(SigmaTotOption::PdgPimOnlyRegge);
        assert!(pim.eval(100.) > 0.);
    }
}
