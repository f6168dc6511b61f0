//! # Design Settings
//!
//! Defaults applied to analysis requests that leave a design parameter out.
//! Settings can be loaded from a TOML file; missing keys keep their defaults.
//!
//! ```toml
//! safety_factor = 1.5
//! material_grade = "S275"
//! deflection_limit_ratio = 360.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelGrade;

/// Default partial safety factor on yield strength
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.6;

/// Default deflection limit denominator (span/250)
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 250.0;

/// Design defaults for new analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Safety factor used when a request does not give one
    pub safety_factor: f64,

    /// Steel grade used when a request does not give one
    pub material_grade: SteelGrade,

    /// Deflection limit denominator used when a request does not give one
    pub deflection_limit_ratio: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            safety_factor: DEFAULT_SAFETY_FACTOR,
            material_grade: SteelGrade::default(),
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT_RATIO,
        }
    }
}

impl DesignSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let settings: DesignSettings =
            toml::from_str(content).map_err(|e| CalcError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Reject defaults that no request would be allowed to use
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.safety_factor >= 1.0) {
            return Err(CalcError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be at least 1.0",
            ));
        }
        if !(self.deflection_limit_ratio > 0.0) {
            return Err(CalcError::invalid_input(
                "deflection_limit_ratio",
                self.deflection_limit_ratio.to_string(),
                "Deflection limit ratio must be positive",
            ));
        }
        Ok(())
    }
}
