//! # Structural Mechanics Equations
//!
//! Closed-form formulas used by the calculations. Keeping them in one place
//! makes them easy to check against the references and keeps unit handling
//! out of the formulas themselves: every function here takes consistent
//! units and returns the matching unit.
//!
//! ## Modules
//!
//! - [`beam`] - Simply supported beam formulas (moment, shear, deflection)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - SCI P363, Steel Building Design: Design Data

pub mod beam;

pub use beam::{
    point_load_max_deflection_midspan,
    point_load_max_moment_midspan,
    point_load_max_shear_midspan,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
};
