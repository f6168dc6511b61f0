//! # Materials
//!
//! Material definitions and property lookups. Only structural steel is
//! supported; grades follow EN 10025.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{MaterialGrade, SteelGrade};
//!
//! let material = MaterialGrade::from(SteelGrade::S275);
//! println!("fy = {} MPa", material.yield_strength.0);
//! ```

pub mod steel;

pub use steel::{MaterialGrade, SteelGrade, STEEL_ELASTIC_MODULUS_MPA};
