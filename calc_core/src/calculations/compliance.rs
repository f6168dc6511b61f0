//! # Compliance Checker
//!
//! Strength and serviceability verdict for one (section, load) pair.
//!
//! - Strength: σ = M/W against fy/γ, reported as a utilization ratio
//! - Serviceability: δ_max against span/ratio (span/250 by default)
//!
//! ## Recommendations
//!
//! Exactly one recommendation is produced per check. The rules in
//! [`RECOMMENDATION_RULES`] are evaluated top to bottom and the first match
//! wins:
//!
//! 1. Overstressed (utilization > 1.0) - `FAIL`
//! 2. Deflection over the limit - `FAIL`
//! 3. Utilization above 0.9 - `WARN`
//! 4. Otherwise - `PASS`

use serde::{Deserialize, Serialize};

use crate::calculations::mechanics::MechanicsResult;
use crate::catalog::Section;
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSpecification;
use crate::materials::MaterialGrade;
use crate::units::{KnM, Metres, Millimetres, Mm3, Mpa, NMm};

/// Utilization above which an adequate beam is flagged as near capacity
pub const NEAR_CAPACITY_UTILIZATION: f64 = 0.9;

/// Compliance verdict for one section under one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Bending stress σ = M/W (MPa)
    pub actual_stress: Mpa,

    /// Allowable stress fy/γ (MPa)
    pub allowable_stress: Mpa,

    /// actual_stress / allowable_stress; ≤ 1.0 passes
    pub stress_utilization: f64,

    /// Allowable deflection span/ratio (mm)
    pub deflection_limit: Millimetres,

    /// Whether max deflection is within the limit
    pub deflection_limit_check: bool,

    /// Stress check and deflection check both pass
    pub is_adequate: bool,

    /// (1 - utilization) × 100; negative when overstressed
    pub safety_margin: f64,

    /// Single advisory message from the first matching rule
    pub recommendations: Vec<String>,
}

impl ComplianceResult {
    /// Deflection as a fraction of the limit
    pub fn deflection_ratio(&self, max_deflection: Millimetres) -> f64 {
        max_deflection.0 / self.deflection_limit.0
    }
}

/// Stress utilization of a section under a given moment.
///
/// Converts kNm and cm³ to N·mm and mm³ so the stress comes out in MPa.
pub fn stress_utilization(
    max_moment: KnM,
    section: &Section,
    material: &MaterialGrade,
    safety_factor: f64,
) -> CalcResult<(Mpa, Mpa, f64)> {
    if !(section.elastic_section_modulus.0 > 0.0) {
        return Err(CalcError::invalid_geometry(
            &section.designation,
            "elastic_section_modulus",
            section.elastic_section_modulus.0,
        ));
    }

    let moment: NMm = max_moment.into();
    let modulus: Mm3 = section.elastic_section_modulus.into();
    let actual = moment / modulus;
    let allowable = material.yield_strength / safety_factor;

    Ok((actual, allowable, actual.0 / allowable.0))
}

/// Run the strength and deflection checks and build the verdict.
///
/// # Errors
///
/// * `InvalidGeometry` - elastic section modulus is not positive
pub fn check(
    mechanics: &MechanicsResult,
    section: &Section,
    load: &LoadSpecification,
) -> CalcResult<ComplianceResult> {
    let material = load.material();
    let (actual_stress, allowable_stress, utilization) =
        stress_utilization(mechanics.max_moment, section, &material, load.safety_factor)?;

    let span_mm: Millimetres = Metres(load.span_length).into();
    let deflection_limit = span_mm / load.deflection_limit_ratio;
    let deflection_limit_check = mechanics.max_deflection <= deflection_limit;

    let is_adequate = utilization <= 1.0 && deflection_limit_check;
    let safety_margin = (1.0 - utilization) * 100.0;

    let context = RecommendationContext {
        stress_utilization: utilization,
        deflection_limit_check,
        max_deflection: mechanics.max_deflection,
        deflection_limit,
        deflection_limit_ratio: load.deflection_limit_ratio,
    };

    Ok(ComplianceResult {
        actual_stress,
        allowable_stress,
        stress_utilization: utilization,
        deflection_limit,
        deflection_limit_check,
        is_adequate,
        safety_margin,
        recommendations: recommend(&context),
    })
}

// ============================================================================
// Recommendation Rules
// ============================================================================

/// Values the recommendation rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    pub stress_utilization: f64,
    pub deflection_limit_check: bool,
    pub max_deflection: Millimetres,
    pub deflection_limit: Millimetres,
    pub deflection_limit_ratio: f64,
}

/// A rule returns its message when it applies
pub type RecommendationRule = fn(&RecommendationContext) -> Option<String>;

/// Rules in priority order; the last one always matches
pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    overstressed_rule,
    deflection_exceeded_rule,
    near_capacity_rule,
    adequate_rule,
];

/// Evaluate the rules and return the first matching message
pub fn recommend(context: &RecommendationContext) -> Vec<String> {
    RECOMMENDATION_RULES
        .iter()
        .find_map(|rule| rule(context))
        .into_iter()
        .collect()
}

fn overstressed_rule(ctx: &RecommendationContext) -> Option<String> {
    (ctx.stress_utilization > 1.0).then(|| {
        format!(
            "FAIL: overstressed by {:.1}% (utilization {:.3}); select a larger section",
            (ctx.stress_utilization - 1.0) * 100.0,
            ctx.stress_utilization
        )
    })
}

fn deflection_exceeded_rule(ctx: &RecommendationContext) -> Option<String> {
    (!ctx.deflection_limit_check).then(|| {
        format!(
            "FAIL: deflection exceeds limit ({:.1} mm > {:.1} mm allowable, span/{:.0})",
            ctx.max_deflection.0, ctx.deflection_limit.0, ctx.deflection_limit_ratio
        )
    })
}

fn near_capacity_rule(ctx: &RecommendationContext) -> Option<String> {
    (ctx.stress_utilization > NEAR_CAPACITY_UTILIZATION).then(|| {
        format!(
            "WARN: utilization near capacity ({:.1}%); review design",
            ctx.stress_utilization * 100.0
        )
    })
}

fn adequate_rule(_ctx: &RecommendationContext) -> Option<String> {
    Some("PASS: beam is adequate for the applied loading".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::mechanics;
    use crate::loads::LoadType;
    use crate::materials::SteelGrade;

    fn scenario_a() -> (Section, LoadSpecification) {
        let section = Section::new("SCENARIO-A", 80.0, 1000.0, 50_000.0);
        let load = LoadSpecification::new(LoadType::Uniform, 15.0, 6.0)
            .with_grade(SteelGrade::S355)
            .with_safety_factor(1.6);
        (section, load)
    }

    fn context(utilization: f64, deflection_ok: bool) -> RecommendationContext {
        RecommendationContext {
            stress_utilization: utilization,
            deflection_limit_check: deflection_ok,
            max_deflection: Millimetres(if deflection_ok { 10.0 } else { 30.0 }),
            deflection_limit: Millimetres(24.0),
            deflection_limit_ratio: 250.0,
        }
    }

    #[test]
    fn test_scenario_a_utilization() {
        let (section, load) = scenario_a();
        let demand = mechanics::calculate(&load, &section).unwrap();
        let result = check(&demand, &section, &load).unwrap();

        // σ = 67.5e6 N·mm / 1e6 mm³ = 67.5 MPa; allowable = 355 / 1.6
        let expected = 67.5 / (355.0 / 1.6);
        assert!((result.actual_stress.0 - 67.5).abs() < 1e-9);
        assert!((result.allowable_stress.0 - 221.875).abs() < 1e-9);
        assert!((result.stress_utilization - expected).abs() < 1e-12);

        // δ = 2.41 mm against 6000/250 = 24 mm
        assert_eq!(result.deflection_limit, Millimetres(24.0));
        assert!(result.deflection_limit_check);
        assert!(result.is_adequate);
        assert!((result.safety_margin - (1.0 - expected) * 100.0).abs() < 1e-9);
        assert_eq!(result.recommendations, vec!["PASS: beam is adequate for the applied loading"]);
    }

    #[test]
    fn test_overstressed_margin_is_negative() {
        let section = Section::new("SMALL", 13.0, 74.6, 473.0);
        let load = LoadSpecification::new(LoadType::Uniform, 15.0, 6.0);
        let demand = mechanics::calculate(&load, &section).unwrap();
        let result = check(&demand, &section, &load).unwrap();

        assert!(result.stress_utilization > 1.0);
        assert!(!result.is_adequate);
        assert!(result.safety_margin < 0.0);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].starts_with("FAIL: overstressed by"));
    }

    #[test]
    fn test_utilization_monotonicity() {
        let section = Section::new("S", 40.0, 500.0, 8000.0);
        let stiffer = Section::new("S2", 40.0, 800.0, 8000.0);
        let s355 = SteelGrade::S355.material();
        let s460 = SteelGrade::S460.material();

        let (_, _, base) = stress_utilization(KnM(50.0), &section, &s355, 1.6).unwrap();
        let (_, _, more_moment) = stress_utilization(KnM(60.0), &section, &s355, 1.6).unwrap();
        let (_, _, higher_gamma) = stress_utilization(KnM(50.0), &section, &s355, 2.0).unwrap();
        let (_, _, bigger_w) = stress_utilization(KnM(50.0), &stiffer, &s355, 1.6).unwrap();
        let (_, _, stronger) = stress_utilization(KnM(50.0), &section, &s460, 1.6).unwrap();

        assert!(more_moment > base);
        assert!(higher_gamma > base);
        assert!(bigger_w < base);
        assert!(stronger < base);
    }

    #[test]
    fn test_zero_section_modulus_rejected() {
        let section = Section::new("NO-W", 10.0, 0.0, 1000.0);
        let err = stress_utilization(KnM(10.0), &section, &SteelGrade::S275.material(), 1.6).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_deflection_failure_with_low_stress() {
        // Stiff in bending, flexible in deflection
        let section = Section::new("FLEX", 30.0, 2000.0, 1000.0);
        let load = LoadSpecification::new(LoadType::Uniform, 10.0, 8.0);
        let demand = mechanics::calculate(&load, &section).unwrap();
        let result = check(&demand, &section, &load).unwrap();

        assert!(result.stress_utilization <= 1.0);
        assert!(!result.deflection_limit_check);
        assert!(!result.is_adequate);
        assert!(result.recommendations[0].starts_with("FAIL: deflection exceeds limit"));
        assert!(result.recommendations[0].contains("32.0 mm allowable"));
    }

    #[test]
    fn test_rule_order() {
        // Overstress wins over deflection failure
        let both = recommend(&context(1.25, false));
        assert_eq!(both.len(), 1);
        assert!(both[0].starts_with("FAIL: overstressed by 25.0%"));

        let deflection = recommend(&context(0.95, false));
        assert!(deflection[0].starts_with("FAIL: deflection exceeds limit (30.0 mm > 24.0 mm"));

        let near = recommend(&context(0.95, true));
        assert_eq!(near, vec!["WARN: utilization near capacity (95.0%); review design"]);

        let pass = recommend(&context(0.9, true));
        assert!(pass[0].starts_with("PASS"));
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        let result = recommend(&context(1.0, true));
        assert!(result[0].starts_with("WARN"));
    }
}
