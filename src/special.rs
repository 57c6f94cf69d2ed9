//! Special functions needed by the exchange propagators and the
//! partial-wave projection

use crate::numeric::{floats::consts::PI, Complex, Float};

// ### GAMMA FUNCTION ###

/// Lanczos parameter g for the coefficient set below
const LANCZOS_G: Float = 7.;

/// Lanczos coefficients for g = 7, n = 9
const LANCZOS_COEFFS: [Float; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Gamma function continued to complex argument (Lanczos approximation)
///
/// Arguments near the poles at non-positive integers come out as huge
/// values rather than errors, which is what the Regge propagator wants in
/// the neighborhood of a pole.
pub fn cgamma(z: Complex) -> Complex {
    if z.re < 0.5 {
        // Reflection formula maps the left half-plane onto the right one
        let pi_z = Complex::new(PI, 0.) * z;
        return Complex::new(PI, 0.) / (pi_z.sin() * cgamma(Complex::new(1., 0.) - z));
    }
    let z = z - 1.;
    let mut sum = Complex::new(LANCZOS_COEFFS[0], 0.);
    for (k, &coeff) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        sum += coeff / (z + k as Float);
    }
    let t = z + LANCZOS_G + 0.5;
    (2. * PI).sqrt() * t.powc(z + 0.5) * (-t).exp() * sum
}

/// Gamma function of a real argument
pub fn gamma(x: Float) -> Float {
    cgamma(Complex::new(x, 0.)).re
}

// ### LEGENDRE POLYNOMIALS ###

/// Legendre polynomial P_l(x) by Bonnet's recurrence
pub fn legendre(l: u32, x: Float) -> Float {
    match l {
        0 => 1.,
        1 => x,
        _ => {
            let mut p_prev = 1.;
            let mut p = x;
            for n in 1..l {
                let n = n as Float;
                let p_next = ((2. * n + 1.) * x * p - n * p_prev) / (n + 1.);
                p_prev = p;
                p = p_next;
            }
            p
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_at_integers_and_half_integers() {
        assert!((gamma(1.) - 1.).abs() < 1e-12);
        assert!((gamma(5.) - 24.).abs() < 1e-10);
        assert!((gamma(0.5) - PI.sqrt()).abs() < 1e-12);
        // Reflection: Gamma(-1/2) = -2 sqrt(pi)
        assert!((gamma(-0.5) + 2. * PI.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn gamma_functional_equation() {
        // Gamma(z + 1) = z Gamma(z) off the real axis
        let z = Complex::new(0.7, 1.3);
        let lhs = cgamma(z + 1.);
        let rhs = z * cgamma(z);
        assert!((lhs - rhs).norm() < 1e-12 * rhs.norm());
    }

    #[test]
    fn gamma_blows_up_at_poles() {
        assert!(gamma(-1e-12).abs() > 1e10);
    }

    #[test]
    fn legendre_low_orders() {
        let x = 0.37;
        assert!((legendre(0, x) - 1.).abs() < 1e-15);
        assert!((legendre(1, x) - x).abs() < 1e-15);
        assert!((legendre(2, x) - 0.5 * (3. * x * x - 1.)).abs() < 1e-15);
        assert!((legendre(3, x) - 0.5 * (5. * x * x * x - 3. * x)).abs() < 1e-15);
    }

    #[test]
    fn legendre_at_unit_argument() {
        // P_l(1) = 1 for every order
        for l in 0..8 {
            assert!((legendre(l, 1.) - 1.).abs() < 1e-12);
        }
    }
}
