//! Immutable table of physical constants shared by the amplitude models
//!
//! Models receive the masses and couplings they depend on through their
//! constructors; nothing in this crate goes through mutable global state.

use crate::numeric::Float;

// ### HADRON MASSES (GeV) ###

/// Charged pion mass
pub const M_PION: Float = 0.13957;

/// Proton mass
pub const M_PROTON: Float = 0.938272;

/// J/psi mass
pub const M_JPSI: Float = 3.0969;

/// b1(1235) axial-vector meson mass
pub const M_B1: Float = 1.2295;

/// D meson mass
pub const M_D: Float = 1.86965;

/// D* meson mass
pub const M_DSTAR: Float = 2.00685;

/// Lambda_c baryon mass
pub const M_LAMBDAC: Float = 2.28646;

// ### UNIT CONVERSIONS ###

/// Conversion factor from GeV^-2 to nanobarn
pub const GEV2_TO_NB: Float = 0.3894e6;

/// Conversion factor from millibarn to GeV^-2
pub const MB_TO_GEV2: Float = 2.56819;
