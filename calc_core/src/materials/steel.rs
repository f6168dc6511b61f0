//! Structural Steel Grades (EN 10025)
//!
//! Nominal yield strengths for the hot-rolled non-alloy grades used in beam
//! design, plus the elastic modulus shared by every grade.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::steel::{SteelGrade, STEEL_ELASTIC_MODULUS_MPA};
//!
//! let grade: SteelGrade = "s355".parse().unwrap();
//! assert_eq!(grade.yield_strength_mpa(), 355.0);
//! assert_eq!(STEEL_ELASTIC_MODULUS_MPA, 210_000.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::Mpa;

/// Modulus of elasticity of structural steel (N/mm²).
///
/// Does not vary by grade.
pub const STEEL_ELASTIC_MODULUS_MPA: f64 = 210_000.0;

/// Nominal yield strength per grade (N/mm², t ≤ 16 mm)
static YIELD_STRENGTHS: Lazy<HashMap<SteelGrade, f64>> = Lazy::new(|| {
    HashMap::from([
        (SteelGrade::S235, 235.0),
        (SteelGrade::S275, 275.0),
        (SteelGrade::S355, 355.0),
        (SteelGrade::S460, 460.0),
    ])
});

/// Structural steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S460,
}

impl SteelGrade {
    /// All grades in ascending strength order
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::S235,
        SteelGrade::S275,
        SteelGrade::S355,
        SteelGrade::S460,
    ];

    /// Grade designation (e.g., "S355")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S460 => "S460",
        }
    }

    /// Nominal yield strength fy in MPa
    pub fn yield_strength_mpa(&self) -> f64 {
        YIELD_STRENGTHS[self]
    }

    /// Resolve the grade into its full material record
    pub fn material(&self) -> MaterialGrade {
        MaterialGrade {
            name: *self,
            yield_strength: Mpa(self.yield_strength_mpa()),
        }
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::S355
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        SteelGrade::ALL
            .into_iter()
            .find(|grade| grade.code() == normalized)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A steel grade together with its yield strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    /// Grade designation
    pub name: SteelGrade,
    /// Yield strength fy
    pub yield_strength: Mpa,
}

impl From<SteelGrade> for MaterialGrade {
    fn from(grade: SteelGrade) -> Self {
        grade.material()
    }
}
