//! # Mechanics Calculator
//!
//! Maximum bending moment, shear and deflection of a simply supported steel
//! beam under a uniform or midspan point load.
//!
//! ## Units
//!
//! Unit conversion happens here and nowhere else:
//!
//! | Quantity   | Input            | Formula units   | Reported |
//! |------------|------------------|-----------------|----------|
//! | Load       | kN/m or kN       | kN, m / N, mm   | -        |
//! | Span       | m                | m / mm          | -        |
//! | I          | cm⁴              | mm⁴             | -        |
//! | Moment     | -                | kN, m           | kNm      |
//! | Shear      | -                | kN              | kN       |
//! | Deflection | -                | N, mm, MPa, mm⁴ | mm       |
//!
//! An unsupported load type never gets this far: `LoadType` only has the two
//! supported variants and parsing anything else fails with `InvalidLoadType`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::mechanics;
//! use calc_core::catalog::Section;
//! use calc_core::loads::{LoadSpecification, LoadType};
//!
//! let section = Section::new("TEST", 50.0, 1000.0, 50_000.0);
//! let load = LoadSpecification::new(LoadType::Uniform, 15.0, 6.0);
//!
//! let result = mechanics::calculate(&load, &section).unwrap();
//! assert!((result.max_moment.0 - 67.5).abs() < 1e-9);
//! assert!((result.max_shear.0 - 45.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Section;
use crate::equations::beam::{
    point_load_max_deflection_midspan, point_load_max_moment_midspan, point_load_max_shear_midspan,
    uniform_load_max_deflection, uniform_load_max_moment, uniform_load_max_shear,
};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadSpecification, LoadType};
use crate::materials::STEEL_ELASTIC_MODULUS_MPA;
use crate::units::{KiloNewtons, KnM, KnPerM, Metres, Millimetres, Mm4, NPerMm, Newtons};

/// Demand on the beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanicsResult {
    /// Maximum bending moment (kNm), at midspan
    pub max_moment: KnM,

    /// Maximum shear force (kN), at the supports
    pub max_shear: KiloNewtons,

    /// Maximum deflection (mm), at midspan
    pub max_deflection: Millimetres,
}

/// Calculate the maximum moment, shear and deflection.
///
/// # Errors
///
/// * `InvalidGeometry` - span or moment of inertia is not positive
pub fn calculate(load: &LoadSpecification, section: &Section) -> CalcResult<MechanicsResult> {
    if !(load.span_length > 0.0) {
        return Err(CalcError::invalid_geometry(
            &section.designation,
            "span_length",
            load.span_length,
        ));
    }
    if !(section.moment_of_inertia.0 > 0.0) {
        return Err(CalcError::invalid_geometry(
            &section.designation,
            "moment_of_inertia",
            section.moment_of_inertia.0,
        ));
    }

    let span = Metres(load.span_length);
    let span_mm: Millimetres = span.into();
    let i_mm4: Mm4 = section.moment_of_inertia.into();
    let e = STEEL_ELASTIC_MODULUS_MPA;

    let result = match load.load_type {
        LoadType::Uniform => {
            let w = KnPerM(load.magnitude);
            let w_n_per_mm: NPerMm = w.into();
            MechanicsResult {
                max_moment: KnM(uniform_load_max_moment(w.0, span.0)),
                max_shear: KiloNewtons(uniform_load_max_shear(w.0, span.0)),
                max_deflection: Millimetres(uniform_load_max_deflection(
                    w_n_per_mm.0,
                    span_mm.0,
                    e,
                    i_mm4.0,
                )),
            }
        }
        LoadType::Point => {
            let p = KiloNewtons(load.magnitude);
            let p_n: Newtons = p.into();
            MechanicsResult {
                max_moment: KnM(point_load_max_moment_midspan(p.0, span.0)),
                max_shear: KiloNewtons(point_load_max_shear_midspan(p.0)),
                max_deflection: Millimetres(point_load_max_deflection_midspan(
                    p_n.0,
                    span_mm.0,
                    e,
                    i_mm4.0,
                )),
            }
        }
    };

    Ok(result)
}
