//! photoprod: scattering observables for particle-exchange reactions
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate computes photoproduction and hadroproduction observables for
//! two-body reactions mediated by particle exchange. Exclusive helicity
//! amplitudes are assembled from a small algebra of Lorentz tensors and
//! Dirac spinors; a two-channel K-matrix in the scattering-length
//! approximation unitarizes partial waves across coupled thresholds; and a
//! triple-Regge interaction, with the missing mass integrated over a total
//! hadronic cross-section at the bottom vertex, gives inclusive
//! single-particle spectra.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Everything here is deterministic arithmetic. Contractions are small
//! Einstein sums resolved through a closed trait-impl set at compile time;
//! the loop functions use complex square roots and logarithms so that
//! thresholds are crossed smoothly; and the inclusive observables are
//! adaptive-Simpson integrals whose endpoint singularities are clamped to
//! zero inside documented guard bands.
//!
//! Evaluation is pure: per-point scratch lives on the call stack and the
//! only state a model carries is its fitted parameter set, so grids of
//! (s, t) points can be evaluated in parallel over shared models. The one
//! mutable resource, the total-cross-section sub-model of the inclusive
//! engine, is a single-owner handle swapped through an explicit setter.

#![warn(missing_docs)]

pub mod amplitude;
pub mod constants;
pub mod dirac;
pub mod kinematics;
pub mod lorentz;
pub mod numeric;
pub mod pseudoscalar;
pub mod quadrature;
pub mod regge;
pub mod sigma_tot;
pub mod special;
pub mod triple_regge;
pub mod two_channel;
