//! # Error Types
//!
//! Structured error types for calc_core. Every failure inside the engine is
//! returned as a typed [`CalcError`]; nothing in the core panics on bad input.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_length: f64) -> CalcResult<()> {
//!     if span_length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_length",
//!             span_length.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).unwrap_err().is_validation_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// The closest candidate when a catalog search finds nothing adequate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearMiss {
    /// Designation of the candidate section
    pub designation: String,
    /// Stress utilization of the candidate (actual / allowable)
    pub stress_utilization: f64,
    /// Deflection as a fraction of the deflection limit
    pub deflection_ratio: f64,
}

impl NearMiss {
    /// Governing ratio: whichever of stress or deflection is worse
    pub fn governing_ratio(&self) -> f64 {
        self.stress_utilization.max(self.deflection_ratio)
    }
}

/// Structured error type for analysis operations.
///
/// Each variant carries enough context for a caller to report or act on the
/// failure without parsing the message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A request value is malformed or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Load type is not one of the supported configurations
    #[error("Invalid load type '{value}': expected 'uniform' or 'point'")]
    InvalidLoadType { value: String },

    /// Material grade not found in the grade table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Section or span geometry that would make the mechanics meaningless
    #[error("Invalid geometry for '{designation}': {property} = {value} must be positive")]
    InvalidGeometry {
        designation: String,
        property: String,
        value: f64,
    },

    /// Explicitly requested section is not in the catalog
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// Catalog search finished without an adequate candidate
    #[error("No adequate section found among {candidates_checked} candidates")]
    NoAdequateSectionFound {
        candidates_checked: usize,
        best_near_miss: Option<NearMiss>,
    },

    /// The section catalog provider could not supply data
    #[error("Catalog unavailable from {source_name}: {reason}")]
    CatalogUnavailable { source_name: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoadType error
    pub fn invalid_load_type(value: impl Into<String>) -> Self {
        CalcError::InvalidLoadType { value: value.into() }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(designation: impl Into<String>, property: impl Into<String>, value: f64) -> Self {
        CalcError::InvalidGeometry {
            designation: designation.into(),
            property: property.into(),
            value,
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create a CatalogUnavailable error
    pub fn catalog_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CatalogUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether this error means the request itself was malformed
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::InvalidLoadType { .. }
                | CalcError::MaterialNotFound { .. }
        )
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::CatalogUnavailable { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidLoadType { .. } => "INVALID_LOAD_TYPE",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::NoAdequateSectionFound { .. } => "NO_ADEQUATE_SECTION",
            CalcError::CatalogUnavailable { .. } => "CATALOG_UNAVAILABLE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
