//! # Beam Calculations
//!
//! The analysis pipeline, leaves first:
//!
//! - [`mechanics`] - Maximum moment, shear and deflection
//! - [`compliance`] - Stress utilization, deflection check, recommendations
//! - [`selector`] - Lightest adequate section in a catalog
//! - [`analysis`] - Entry point: resolve a section, run the checks, build the result
//!
//! Every function is pure: inputs are borrowed, results are fresh values, and
//! nothing is cached between calls. Independent analyses can run on as many
//! threads as the caller likes.

pub mod analysis;
pub mod compliance;
pub mod mechanics;
pub mod selector;

// Re-export commonly used types
pub use analysis::{
    analyze, analyze_load, analyze_with_settings, resolve_section, AnalysisRequest, AnalysisResult,
    SectionChoice, SelectionMode,
};
pub use compliance::ComplianceResult;
pub use mechanics::MechanicsResult;
pub use selector::select_optimal;
