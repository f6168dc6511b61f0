//! # Unit Types
//!
//! Type-safe wrappers for the SI engineering units used by the engine. They
//! are plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Unit System
//!
//! Inputs and reported results use the units engineers quote:
//! - Length: metres (m) for spans, millimetres (mm) for deflection
//! - Force: kilonewtons (kN)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Moment: kilonewton-metres (kNm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Section properties: cm³ and cm⁴, as printed in section tables
//!
//! Mechanics formulas are evaluated in N and mm, so every input is converted
//! through the `From` impls below before it reaches a formula.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Cm4, Metres, Millimetres, Mm4};
//!
//! let span = Metres(6.0);
//! let span_mm: Millimetres = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//!
//! let i: Mm4 = Cm4(50_000.0).into();
//! assert_eq!(i.0, 5.0e8);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Div;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

/// Distributed load in newtons per millimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NPerMm(pub f64);

// 1 kN/m = 1000 N / 1000 mm
impl From<KnPerM> for NPerMm {
    fn from(w: KnPerM) -> Self {
        NPerMm(w.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(m: KnM) -> Self {
        NMm(m.0 * 1.0e6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

// ============================================================================
// Section Properties
// ============================================================================

/// Section modulus in cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Moment of inertia in cm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

/// Moment of inertia in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl From<Cm3> for Mm3 {
    fn from(w: Cm3) -> Self {
        Mm3(w.0 * 1.0e3)
    }
}

impl From<Cm4> for Mm4 {
    fn from(i: Cm4) -> Self {
        Mm4(i.0 * 1.0e4)
    }
}

/// Bending stress from a moment and a section modulus: σ = M / W
impl Div<Mm3> for NMm {
    type Output = Mpa;
    fn div(self, rhs: Mm3) -> Mpa {
        Mpa(self.0 / rhs.0)
    }
}

// ============================================================================
// Scaling
// ============================================================================

macro_rules! impl_scale {
    ($($type:ty),*) => {
        $(
            impl Div<f64> for $type {
                type Output = Self;
                fn div(self, rhs: f64) -> Self::Output {
                    Self(self.0 / rhs)
                }
            }
        )*
    };
}

// Deflection limit (span / ratio) and allowable stress (fy / γ)
impl_scale!(Millimetres, Mpa);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metres_to_millimetres() {
        let span: Millimetres = Metres(6.5).into();
        assert_eq!(span.0, 6500.0);
    }

    #[test]
    fn test_kilonewtons_to_newtons() {
        let p: Newtons = KiloNewtons(50.0).into();
        assert_eq!(p.0, 50_000.0);
    }

    #[test]
    fn test_distributed_load_is_numerically_equal() {
        let w: NPerMm = KnPerM(15.0).into();
        assert_eq!(w.0, 15.0);
    }

    #[test]
    fn test_section_property_conversions() {
        let w: Mm3 = Cm3(1000.0).into();
        assert_eq!(w.0, 1.0e6);
        let i: Mm4 = Cm4(50_000.0).into();
        assert_eq!(i.0, 5.0e8);
    }

    #[test]
    fn test_bending_stress_division() {
        let m: NMm = KnM(67.5).into();
        let stress = m / Mm3::from(Cm3(1000.0));
        assert!((stress.0 - 67.5).abs() < 1e-9);
    }

    #[test]
    fn test_scaling() {
        assert_eq!((Millimetres(6000.0) / 250.0).0, 24.0);
        assert_eq!((Mpa(355.0) / 1.6).0, 355.0 / 1.6);
    }

    #[test]
    fn test_serialization() {
        let stress = Mpa(355.0);
        let json = serde_json::to_string(&stress).unwrap();
        assert_eq!(json, "355.0");

        let roundtrip: Mpa = serde_json::from_str(&json).unwrap();
        assert_eq!(stress, roundtrip);
    }
}
