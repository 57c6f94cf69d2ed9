//! Adaptive numerical quadrature for the cross-section integrals
//!
//! A plain adaptive Simpson rule is accurate enough for plotting-grade
//! physics output and has no trouble with the integrands here, which are
//! smooth away from endpoints that the amplitude formulas already clamp
//! to zero.

use crate::numeric::{floats::MIN_POSITIVE, Float};

use prefix_num_ops::real::*;

/// Hard cap on the subdivision depth
///
/// Reaching it surfaces integration non-convergence as a best-effort
/// estimate rather than an error, which is all the physics needs.
const MAX_DEPTH: u32 = 20;

/// Integrate f over [a, b] by adaptive Simpson subdivision to a relative
/// tolerance
pub fn integrate<F: Fn(Float) -> Float>(f: F, a: Float, b: Float, rel_tol: Float) -> Float {
    if a == b {
        return 0.;
    }
    let m = 0.5 * (a + b);
    let (fa, fm, fb) = (f(a), f(m), f(b));
    let whole = simpson(a, b, fa, fm, fb);
    adaptive(&f, a, b, fa, fm, fb, whole, rel_tol, MAX_DEPTH)
}

/// Simpson's rule over one panel
fn simpson(a: Float, b: Float, fa: Float, fm: Float, fb: Float) -> Float {
    (b - a) / 6. * (fa + 4. * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn adaptive<F: Fn(Float) -> Float>(
    f: &F,
    a: Float,
    b: Float,
    fa: Float,
    fm: Float,
    fb: Float,
    whole: Float,
    rel_tol: Float,
    depth: u32,
) -> Float {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let (flm, frm) = (f(lm), f(rm));
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    // The absolute floor lets regions where the integrand is identically
    // zero terminate immediately
    if depth == 0 || abs(delta) <= 15. * rel_tol * (abs(left) + abs(right)) + MIN_POSITIVE {
        left + right + delta / 15.
    } else {
        adaptive(f, a, m, fa, flm, fm, left, rel_tol, depth - 1)
            + adaptive(f, m, b, fm, frm, fb, right, rel_tol, depth - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::floats::consts::PI;

    #[test]
    fn polynomial_is_exact() {
        // Simpson integrates cubics exactly
        let result = integrate(|x| x * x * x - 2. * x + 1., 0., 2., 1e-10);
        assert!((result - 2.).abs() < 1e-12);
    }

    #[test]
    fn oscillatory_integrand() {
        let result = integrate(|x: Float| x.sin(), 0., PI, 1e-10);
        assert!((result - 2.).abs() < 1e-9);
    }

    #[test]
    fn reversed_and_empty_ranges() {
        assert_eq!(integrate(|x| x, 1., 1., 1e-10), 0.);
        let forward = integrate(|x| x * x, 0., 1., 1e-10);
        let backward = integrate(|x| x * x, 1., 0., 1e-10);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn integrand_with_a_dead_region() {
        // Zero on half the range, as the physical-region indicator produces
        let f = |x: Float| if x < 0.5 { 0. } else { (x - 0.5) * (x - 0.5) };
        let result = integrate(f, 0., 1., 1e-8);
        let exact = 0.125 / 3.;
        assert!((result - exact).abs() < 1e-6 * exact.max(1.));
    }
}
