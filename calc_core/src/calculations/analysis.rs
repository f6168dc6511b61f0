//! # Beam Analysis
//!
//! The single entry point of the engine. An [`AnalysisRequest`] names a
//! section explicitly or asks for the lightest adequate one; either way the
//! resolved section is run through the mechanics calculator and the
//! compliance checker and returned as an [`AnalysisResult`].
//!
//! Requests are validated before the catalog is touched. The orchestrator
//! keeps no state between calls, so the same request against the same
//! catalog snapshot always produces the same result.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::analysis::{analyze, AnalysisRequest};
//! use calc_core::catalog::builtin_universal_beams;
//!
//! let catalog = builtin_universal_beams();
//! let request: AnalysisRequest = serde_json::from_str(r#"{
//!     "beam_designation": "UB406x178x74",
//!     "applied_load": 10.0,
//!     "span_length": 6.0,
//!     "load_type": "uniform"
//! }"#).unwrap();
//!
//! let result = analyze(&request, &catalog).unwrap();
//!
//! println!("Max moment: {:.2} kNm", result.max_moment.0);
//! println!("Utilization: {:.3}", result.stress_utilization);
//! assert!(result.is_adequate);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::selector::{evaluate, select_optimal};
use crate::catalog::{Section, SectionCatalog};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadSpecification, LoadType};
use crate::materials::SteelGrade;
use crate::settings::DesignSettings;
use crate::units::{KiloNewtons, KnM, Millimetres, Mpa};

/// How the section to analyze is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "designation", rename_all = "lowercase")]
pub enum SectionChoice {
    /// Analyze the named catalog section
    Explicit(String),
    /// Search the catalog for the lightest adequate section
    Optimal,
}

impl SectionChoice {
    /// Build from an optional designation; blank means auto-select
    pub fn from_designation(designation: Option<&str>) -> Self {
        match designation.map(str::trim) {
            Some(name) if !name.is_empty() => SectionChoice::Explicit(name.to_string()),
            _ => SectionChoice::Optimal,
        }
    }

    /// Selection mode recorded on the result
    pub fn mode(&self) -> SelectionMode {
        match self {
            SectionChoice::Explicit(_) => SelectionMode::Explicit,
            SectionChoice::Optimal => SelectionMode::Optimal,
        }
    }
}

/// Whether the analyzed section was named or auto-selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Explicit,
    Optimal,
}

fn default_load_type() -> String {
    LoadType::Uniform.code().to_string()
}

/// Inbound analysis request.
///
/// Load type and grade arrive as strings and are
/// parsed during [`AnalysisRequest::resolve`] so that a bad value is reported
/// with the field it came from. Missing design parameters fall back to
/// [`DesignSettings`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_designation": "UB406x178x67",
///   "applied_load": 50.0,
///   "span_length": 5.0,
///   "load_type": "point",
///   "safety_factor": 1.6,
///   "material_grade": "S355"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Section to analyze; omit (or leave blank) to auto-select
    #[serde(default)]
    pub beam_designation: Option<String>,

    /// Load magnitude (kN/m for uniform, kN for point)
    pub applied_load: f64,

    /// Simply supported span (m)
    pub span_length: f64,

    /// "uniform" or "point"
    #[serde(default = "default_load_type")]
    pub load_type: String,

    /// Safety factor on yield strength (≥ 1.0)
    #[serde(default)]
    pub safety_factor: Option<f64>,

    /// Steel grade: S235, S275, S355 or S460
    #[serde(default)]
    pub material_grade: Option<String>,

    /// Deflection limit denominator (e.g., 250 for span/250)
    #[serde(default)]
    pub deflection_limit_ratio: Option<f64>,
}

impl AnalysisRequest {
    /// Request an auto-selected uniform-load analysis
    pub fn new(applied_load: f64, span_length: f64) -> Self {
        AnalysisRequest {
            beam_designation: None,
            applied_load,
            span_length,
            load_type: default_load_type(),
            safety_factor: None,
            material_grade: None,
            deflection_limit_ratio: None,
        }
    }

    /// Name the section to analyze
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.beam_designation = Some(designation.into());
        self
    }

    /// Set the load type string
    pub fn with_load_type(mut self, load_type: impl Into<String>) -> Self {
        self.load_type = load_type.into();
        self
    }

    /// Set the safety factor
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = Some(safety_factor);
        self
    }

    /// Set the material grade string
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.material_grade = Some(grade.into());
        self
    }

    /// Set the deflection limit denominator
    pub fn with_deflection_limit_ratio(mut self, ratio: f64) -> Self {
        self.deflection_limit_ratio = Some(ratio);
        self
    }

    /// Validate the request and split it into a section choice and a load.
    ///
    /// # Errors
    ///
    /// * `InvalidLoadType` - load type is not "uniform" or "point"
    /// * `MaterialNotFound` - unknown steel grade
    /// * `InvalidInput` - non-positive load/span/ratio or safety factor < 1.0
    pub fn resolve(&self, settings: &DesignSettings) -> CalcResult<(SectionChoice, LoadSpecification)> {
        let load_type: LoadType = self.load_type.parse()?;
        let material_grade = match &self.material_grade {
            Some(grade) => grade.parse::<SteelGrade>()?,
            None => settings.material_grade,
        };

        let load = LoadSpecification {
            load_type,
            magnitude: self.applied_load,
            span_length: self.span_length,
            safety_factor: self.safety_factor.unwrap_or(settings.safety_factor),
            material_grade,
            deflection_limit_ratio: self
                .deflection_limit_ratio
                .unwrap_or(settings.deflection_limit_ratio),
        };
        load.validate()?;

        let choice = SectionChoice::from_designation(self.beam_designation.as_deref());
        Ok((choice, load))
    }
}

/// Outcome of one analysis. Built once and never modified.
///
/// Values are unrounded; presentation rounding is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Section analyzed, with all stored catalog properties
    pub beam: Section,

    /// Whether the section was named or auto-selected
    pub selection: SelectionMode,

    /// Load configuration
    pub load_type: LoadType,

    /// Load magnitude (kN/m or kN)
    pub applied_load: f64,

    /// Span (m)
    pub span_length: f64,

    /// Steel grade used
    pub material_grade: SteelGrade,

    /// Safety factor used
    pub safety_factor: f64,

    /// Maximum bending moment (kNm)
    pub max_moment: KnM,

    /// Maximum shear (kN)
    pub max_shear: KiloNewtons,

    /// Maximum deflection (mm)
    pub max_deflection: Millimetres,

    /// Bending stress (MPa)
    pub actual_stress: Mpa,

    /// fy / safety factor (MPa)
    pub allowable_stress: Mpa,

    /// actual / allowable stress; ≤ 1.0 passes
    pub stress_utilization: f64,

    /// Allowable deflection (mm)
    pub deflection_limit: Millimetres,

    /// Deflection within the limit
    pub deflection_limit_check: bool,

    /// Both checks pass
    pub is_adequate: bool,

    /// (1 - utilization) × 100 (%)
    pub safety_margin: f64,

    /// Advisory messages
    pub recommendations: Vec<String>,
}

/// Resolve the section for a choice, consulting the catalog.
///
/// # Errors
///
/// * `SectionNotFound` - the named section is not in the catalog
/// * `InvalidGeometry` - the named section has a non-positive property
/// * `NoAdequateSectionFound` - auto-selection found nothing adequate
/// * `CatalogUnavailable` - propagated unchanged from the provider
pub fn resolve_section<C>(choice: &SectionChoice, load: &LoadSpecification, catalog: &C) -> CalcResult<Section>
where
    C: SectionCatalog + ?Sized,
{
    match choice {
        SectionChoice::Explicit(designation) => {
            log::debug!("Looking up {} in {}", designation, catalog.source_name());
            let section = catalog
                .get_section(designation)?
                .ok_or_else(|| CalcError::section_not_found(designation))?;
            section.validate()?;
            Ok(section)
        }
        SectionChoice::Optimal => {
            let sections = catalog.list_sections()?;
            log::debug!(
                "Searching {} sections from {} for {} load of {} {} over {} m",
                sections.len(),
                catalog.source_name(),
                load.load_type,
                load.magnitude,
                load.load_type.magnitude_unit(),
                load.span_length
            );
            select_optimal(load, &sections)
        }
    }
}

/// Analyze an already-validated load.
pub fn analyze_load<C>(choice: &SectionChoice, load: &LoadSpecification, catalog: &C) -> CalcResult<AnalysisResult>
where
    C: SectionCatalog + ?Sized,
{
    load.validate()?;
    let section = resolve_section(choice, load, catalog)?;
    let (demand, verdict) = evaluate(&section, load)?;

    log::info!(
        "Analyzed {}: utilization {:.3}, deflection {:.2} mm, adequate={}",
        section.designation,
        verdict.stress_utilization,
        demand.max_deflection.0,
        verdict.is_adequate
    );

    Ok(AnalysisResult {
        beam: section,
        selection: choice.mode(),
        load_type: load.load_type,
        applied_load: load.magnitude,
        span_length: load.span_length,
        material_grade: load.material_grade,
        safety_factor: load.safety_factor,
        max_moment: demand.max_moment,
        max_shear: demand.max_shear,
        max_deflection: demand.max_deflection,
        actual_stress: verdict.actual_stress,
        allowable_stress: verdict.allowable_stress,
        stress_utilization: verdict.stress_utilization,
        deflection_limit: verdict.deflection_limit,
        deflection_limit_check: verdict.deflection_limit_check,
        is_adequate: verdict.is_adequate,
        safety_margin: verdict.safety_margin,
        recommendations: verdict.recommendations,
    })
}

/// Analyze a request using explicit design settings for missing parameters.
pub fn analyze_with_settings<C>(
    request: &AnalysisRequest,
    settings: &DesignSettings,
    catalog: &C,
) -> CalcResult<AnalysisResult>
where
    C: SectionCatalog + ?Sized,
{
    let (choice, load) = request.resolve(settings)?;
    analyze_load(&choice, &load, catalog)
}

/// Analyze a request with default design settings.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Results for the named or selected section
/// * `Err(CalcError)` - Structured error (validation, lookup, search or catalog)
pub fn analyze<C>(request: &AnalysisRequest, catalog: &C) -> CalcResult<AnalysisResult>
where
    C: SectionCatalog + ?Sized,
{
    analyze_with_settings(request, &DesignSettings::default(), catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_universal_beams, SectionDb};

    /// Provider that always fails, to prove validation runs first
    struct OfflineCatalog;

    impl SectionCatalog for OfflineCatalog {
        fn source_name(&self) -> String {
            "offline".to_string()
        }

        fn list_sections(&self) -> CalcResult<Vec<Section>> {
            Err(CalcError::catalog_unavailable("offline", "connection refused"))
        }
    }

    fn scenario_catalog() -> SectionDb {
        SectionDb::from_sections([
            Section::new("SCENARIO-A", 80.0, 1000.0, 50_000.0),
            Section::new("UB127x76x13", 13.0, 74.6, 473.0),
        ])
    }

    #[test]
    fn test_scenario_a() {
        let request = AnalysisRequest::new(15.0, 6.0)
            .with_designation("SCENARIO-A")
            .with_grade("S355")
            .with_safety_factor(1.6);
        let result = analyze(&request, &scenario_catalog()).unwrap();

        assert_eq!(result.beam.designation, "SCENARIO-A");
        assert_eq!(result.selection, SelectionMode::Explicit);
        assert!((result.max_moment.0 - 67.5).abs() < 1e-9);
        assert!((result.max_shear.0 - 45.0).abs() < 1e-9);

        let expected = (67.5e6 / 1.0e6) / (355.0 / 1.6);
        assert!((result.stress_utilization - expected).abs() < 1e-12);
        assert!(result.is_adequate);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_scenario_b_rejected_before_catalog() {
        let request = AnalysisRequest::new(15.0, 6.0).with_safety_factor(0.5);
        match analyze(&request, &OfflineCatalog).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "safety_factor"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_c_section_not_found() {
        let request = AnalysisRequest::new(15.0, 6.0).with_designation("UB999x999x999");
        let err = analyze(&request, &scenario_catalog()).unwrap_err();
        assert_eq!(err, CalcError::section_not_found("UB999x999x999"));
    }

    #[test]
    fn test_optimal_selection_path() {
        let catalog = builtin_universal_beams();
        let request = AnalysisRequest::new(15.0, 8.0);
        let result = analyze(&request, &catalog).unwrap();

        assert_eq!(result.selection, SelectionMode::Optimal);
        assert!(result.is_adequate);
        let direct = select_optimal(&request.resolve(&DesignSettings::default()).unwrap().1, catalog.sections()).unwrap();
        assert_eq!(result.beam, direct);
    }

    #[test]
    fn test_blank_designation_auto_selects() {
        let request = AnalysisRequest::new(15.0, 6.0).with_designation("   ");
        let result = analyze(&request, &builtin_universal_beams()).unwrap();
        assert_eq!(result.selection, SelectionMode::Optimal);
    }

    #[test]
    fn test_idempotent() {
        let catalog = builtin_universal_beams();
        let request = AnalysisRequest::new(50.0, 5.0)
            .with_designation("UB406x178x67")
            .with_load_type("point");

        let first = analyze(&request, &catalog).unwrap();
        let second = analyze(&request, &catalog).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_catalog_unavailable_propagates() {
        let request = AnalysisRequest::new(15.0, 6.0);
        let err = analyze(&request, &OfflineCatalog).unwrap_err();
        assert_eq!(err, CalcError::catalog_unavailable("offline", "connection refused"));
        assert!(err.is_recoverable());

        let explicit = AnalysisRequest::new(15.0, 6.0).with_designation("UB1");
        assert_eq!(analyze(&explicit, &OfflineCatalog).unwrap_err().error_code(), "CATALOG_UNAVAILABLE");
    }

    #[test]
    fn test_invalid_load_type_and_grade() {
        let catalog = scenario_catalog();
        let bad_type = AnalysisRequest::new(15.0, 6.0).with_load_type("triangular");
        assert_eq!(
            analyze(&bad_type, &catalog).unwrap_err(),
            CalcError::invalid_load_type("triangular")
        );

        let bad_grade = AnalysisRequest::new(15.0, 6.0).with_grade("A992");
        assert_eq!(analyze(&bad_grade, &catalog).unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_explicit_section_with_invalid_geometry() {
        let catalog = SectionDb::from_sections([Section::new("BROKEN", 20.0, 200.0, -5.0)]);
        let request = AnalysisRequest::new(10.0, 4.0).with_designation("BROKEN");
        assert_eq!(analyze(&request, &catalog).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_explicit_section_with_zero_mass_rejected() {
        let catalog = SectionDb::from_sections([
            Section::new("ZERO-MASS", 0.0, 1000.0, 50_000.0),
            Section::new("NAN-MASS", f64::NAN, 1000.0, 50_000.0),
        ]);

        for designation in ["ZERO-MASS", "NAN-MASS"] {
            let request = AnalysisRequest::new(15.0, 6.0).with_designation(designation);
            match analyze(&request, &catalog).unwrap_err() {
                CalcError::InvalidGeometry { designation: name, property, .. } => {
                    assert_eq!(name, designation);
                    assert_eq!(property, "mass_per_metre");
                }
                other => panic!("expected InvalidGeometry, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_settings_fill_missing_parameters() {
        let settings = DesignSettings {
            safety_factor: 1.0,
            material_grade: SteelGrade::S235,
            deflection_limit_ratio: 360.0,
        };
        let request = AnalysisRequest::new(15.0, 6.0).with_designation("SCENARIO-A");
        let result = analyze_with_settings(&request, &settings, &scenario_catalog()).unwrap();

        assert_eq!(result.material_grade, SteelGrade::S235);
        assert_eq!(result.safety_factor, 1.0);
        assert_eq!(result.allowable_stress, Mpa(235.0));
        assert!((result.deflection_limit.0 - 6000.0 / 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_request_json_defaults() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{ "applied_load": 12.0, "span_length": 4.5 }"#).unwrap();
        assert_eq!(request.beam_designation, None);
        assert_eq!(request.load_type, "uniform");

        let (choice, load) = request.resolve(&DesignSettings::default()).unwrap();
        assert_eq!(choice, SectionChoice::Optimal);
        assert_eq!(load.safety_factor, 1.6);
        assert_eq!(load.material_grade, SteelGrade::S355);
    }

    #[test]
    fn test_result_serialization() {
        let request = AnalysisRequest::new(10.0, 6.0).with_designation("UB406x178x74");
        let result = analyze(&request, &builtin_universal_beams()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        for field in [
            "beam",
            "applied_load",
            "span_length",
            "max_moment",
            "max_shear",
            "max_deflection",
            "stress_utilization",
            "deflection_limit_check",
            "is_adequate",
            "safety_margin",
            "recommendations",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(json["beam"]["designation"], "UB406x178x74");
        assert_eq!(json["beam"]["depth_of_section"], 412.8);
        assert_eq!(json["load_type"], "uniform");
        assert_eq!(json["selection"], "explicit");

        let roundtrip: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, result);
    }

    #[test]
    fn test_section_choice_from_designation() {
        assert_eq!(SectionChoice::from_designation(None), SectionChoice::Optimal);
        assert_eq!(SectionChoice::from_designation(Some("")), SectionChoice::Optimal);
        assert_eq!(
            SectionChoice::from_designation(Some(" UB1 ")),
            SectionChoice::Explicit("UB1".to_string())
        );
    }
}
