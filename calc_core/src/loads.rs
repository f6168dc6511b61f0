//! # Load Specification
//!
//! The load acting on a simply supported span, plus the design parameters it
//! is checked against (material grade, safety factor, deflection limit).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::loads::{LoadSpecification, LoadType};
//! use calc_core::materials::SteelGrade;
//!
//! let load = LoadSpecification::new(LoadType::Uniform, 15.0, 6.0)
//!     .with_grade(SteelGrade::S275)
//!     .with_safety_factor(1.5);
//!
//! assert!(load.validate().is_ok());
//! assert_eq!(load.deflection_limit_ratio, 250.0);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialGrade, SteelGrade};
use crate::settings::{DEFAULT_DEFLECTION_LIMIT_RATIO, DEFAULT_SAFETY_FACTOR};

/// Load configuration on a simply supported span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    /// Uniformly distributed over the full span (magnitude in kN/m)
    Uniform,
    /// Single concentrated load at midspan (magnitude in kN)
    Point,
}

impl LoadType {
    /// Wire name ("uniform" or "point")
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Uniform => "uniform",
            LoadType::Point => "point",
        }
    }

    /// Unit of the load magnitude for this configuration
    pub fn magnitude_unit(&self) -> &'static str {
        match self {
            LoadType::Uniform => "kN/m",
            LoadType::Point => "kN",
        }
    }
}

impl Default for LoadType {
    fn default() -> Self {
        LoadType::Uniform
    }
}

impl FromStr for LoadType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(LoadType::Uniform),
            "point" => Ok(LoadType::Point),
            _ => Err(CalcError::invalid_load_type(s)),
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validated-on-demand description of the loading and design criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSpecification {
    /// Uniform or midspan point load
    pub load_type: LoadType,

    /// Load magnitude (kN/m for uniform, kN for point)
    pub magnitude: f64,

    /// Simply supported span (m)
    pub span_length: f64,

    /// Partial safety factor applied to yield strength; must be ≥ 1.0
    pub safety_factor: f64,

    /// Steel grade governing allowable stress
    pub material_grade: SteelGrade,

    /// Deflection limit denominator (250 means span/250)
    pub deflection_limit_ratio: f64,
}

impl LoadSpecification {
    /// Create a load specification with default design criteria
    pub fn new(load_type: LoadType, magnitude: f64, span_length: f64) -> Self {
        LoadSpecification {
            load_type,
            magnitude,
            span_length,
            safety_factor: DEFAULT_SAFETY_FACTOR,
            material_grade: SteelGrade::default(),
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT_RATIO,
        }
    }

    /// Set the safety factor
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = safety_factor;
        self
    }

    /// Set the steel grade
    pub fn with_grade(mut self, grade: SteelGrade) -> Self {
        self.material_grade = grade;
        self
    }

    /// Set the deflection limit denominator
    pub fn with_deflection_limit_ratio(mut self, ratio: f64) -> Self {
        self.deflection_limit_ratio = ratio;
        self
    }

    /// Resolved material record for the grade
    pub fn material(&self) -> MaterialGrade {
        self.material_grade.material()
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.magnitude > 0.0 && self.magnitude.is_finite()) {
            return Err(CalcError::invalid_input(
                "applied_load",
                self.magnitude.to_string(),
                "Load must be positive",
            ));
        }
        if !(self.span_length > 0.0 && self.span_length.is_finite()) {
            return Err(CalcError::invalid_input(
                "span_length",
                self.span_length.to_string(),
                "Span must be positive",
            ));
        }
        // NaN must fail here too
        if !(self.safety_factor >= 1.0 && self.safety_factor.is_finite()) {
            return Err(CalcError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be at least 1.0",
            ));
        }
        if !(self.deflection_limit_ratio > 0.0 && self.deflection_limit_ratio.is_finite()) {
            return Err(CalcError::invalid_input(
                "deflection_limit_ratio",
                self.deflection_limit_ratio.to_string(),
                "Deflection limit ratio must be positive",
            ));
        }
        Ok(())
    }
}
