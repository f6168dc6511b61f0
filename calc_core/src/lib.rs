//! # calc_core - Steel Beam Analysis Engine
//!
//! `calc_core` checks whether a rolled steel section can carry a load over a
//! simply supported span, and searches a section catalog for the lightest
//! section that can. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Catalog-Agnostic**: Sections come from any [`SectionCatalog`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{analyze, builtin_universal_beams, AnalysisRequest};
//!
//! let catalog = builtin_universal_beams();
//!
//! // No designation: find the lightest adequate beam
//! let request = AnalysisRequest::new(15.0, 8.0).with_grade("S355");
//! let result = analyze(&request, &catalog).unwrap();
//!
//! println!("{} at {:.0}% utilization", result.beam.designation, result.stress_utilization * 100.0);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Mechanics, compliance, selection and the analysis entry point
//! - [`catalog`] - Sections and the catalog provider interface
//! - [`equations`] - Closed-form beam formulas
//! - [`loads`] - Load specification
//! - [`materials`] - Steel grades
//! - [`settings`] - Design defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisRequest, AnalysisResult, SectionChoice};
pub use catalog::{builtin_universal_beams, Section, SectionCatalog, SectionDb};
pub use errors::{CalcError, CalcResult};
pub use loads::{LoadSpecification, LoadType};
pub use materials::{MaterialGrade, SteelGrade};
pub use settings::DesignSettings;
