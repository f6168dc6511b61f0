//! # Simply-Supported Beam Formulas
//!
//! Maximum effects for a beam with a pin at the left support and a roller at
//! the right, under the two load cases the engine supports.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! All functions are unit-agnostic: pass consistent units (e.g. N, mm, MPa,
//! mm⁴) and the result comes back in the same system.

// =============================================================================
// POINT LOAD AT MIDSPAN
// =============================================================================

/// Maximum moment for point load P at midspan
///
/// ```text
///           P
///           ↓
///    ───────┬───────
///    △    L/2       △
///   R1  ←────L────→ R2
/// ```
///
/// # Formula
/// M_max = PL/4  at x = L/2
#[inline]
pub fn point_load_max_moment_midspan(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Maximum shear for point load P at midspan
///
/// # Formula
/// V_max = R1 = R2 = P/2
#[inline]
pub fn point_load_max_shear_midspan(p: f64) -> f64 {
    p / 2.0
}

/// Maximum deflection for point load P at midspan
///
/// # Formula (Roark's Table 8.1, Case 1a with a = L/2)
/// δ_max = PL³ / (48EI)   at x = L/2
#[inline]
pub fn point_load_max_deflection_midspan(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

// =============================================================================
// UNIFORM LOAD OVER FULL SPAN
// =============================================================================

/// Maximum moment for uniform load
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M_max = wL²/8  at x = L/2
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Maximum shear for uniform load (at the supports)
///
/// # Formula
/// V_max = R1 = R2 = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_uniform_moment_and_shear() {
        // w = 15 kN/m, L = 6 m
        assert!((uniform_load_max_moment(15.0, 6.0) - 67.5).abs() < TOL);
        assert!((uniform_load_max_shear(15.0, 6.0) - 45.0).abs() < TOL);
    }

    #[test]
    fn test_point_moment_and_shear() {
        // P = 50 kN, L = 5 m
        assert!((point_load_max_moment_midspan(50.0, 5.0) - 62.5).abs() < TOL);
        assert!((point_load_max_shear_midspan(50.0) - 25.0).abs() < TOL);
    }

    #[test]
    fn test_uniform_deflection() {
        // w = 15 N/mm, L = 6000 mm, E = 210000 MPa, I = 5e8 mm⁴
        // δ = 5 * 15 * 6000⁴ / (384 * 210000 * 5e8) = 2.411 mm
        let delta = uniform_load_max_deflection(15.0, 6000.0, 210_000.0, 5.0e8);
        assert!((delta - 2.4107).abs() < 1e-3);
    }

    #[test]
    fn test_point_deflection() {
        // P = 50000 N, L = 5000 mm, E = 210000 MPa, I = 2.43e8 mm⁴
        // δ = 50000 * 5000³ / (48 * 210000 * 2.43e8) = 2.552 mm
        let delta = point_load_max_deflection_midspan(50_000.0, 5000.0, 210_000.0, 2.43e8);
        assert!((delta - 2.5516).abs() < 1e-3);
    }

    #[test]
    fn test_uniform_deflection_fourth_power_of_span() {
        let short = uniform_load_max_deflection(10.0, 4000.0, 210_000.0, 1.0e8);
        let long = uniform_load_max_deflection(10.0, 8000.0, 210_000.0, 1.0e8);
        assert!((long / short - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_total_load_point_is_worse() {
        // Same total load W = wL applied as a midspan point load gives twice the moment
        let (w, l) = (12.0, 5.0);
        let uniform = uniform_load_max_moment(w, l);
        let point = point_load_max_moment_midspan(w * l, l);
        assert!((point / uniform - 2.0).abs() < TOL);
    }
}
