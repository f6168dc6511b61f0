//! Plain-text rendering of analysis results and section listings.

use std::fmt;

use calc_core::calculations::{AnalysisResult, SelectionMode};
use calc_core::catalog::Section;

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

/// Terminal report for one analysis result
pub struct AnalysisReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let selection = match result.selection {
            SelectionMode::Explicit => "as requested",
            SelectionMode::Optimal => "lightest adequate",
        };

        writeln!(f, "{}", RULE)?;
        writeln!(f, "  BEAM ANALYSIS RESULTS")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "Input:")?;
        writeln!(f, "  Section:  {} ({})", result.beam.designation, selection)?;
        writeln!(f, "  Mass:     {:.1} kg/m", result.beam.mass_per_metre)?;
        writeln!(
            f,
            "  Load:     {} {} ({})",
            result.applied_load,
            result.load_type.magnitude_unit(),
            result.load_type
        )?;
        writeln!(f, "  Span:     {} m", result.span_length)?;
        writeln!(
            f,
            "  Material: {} (safety factor {})",
            result.material_grade, result.safety_factor
        )?;
        writeln!(f)?;
        writeln!(f, "Demand:")?;
        writeln!(f, "  M_max = {:.2} kNm", result.max_moment.0)?;
        writeln!(f, "  V_max = {:.2} kN", result.max_shear.0)?;
        writeln!(f, "  δ_max = {:.2} mm", result.max_deflection.0)?;
        writeln!(f)?;
        writeln!(f, "Checks:")?;
        writeln!(
            f,
            "  Stress:     {:.3} ({:.1}/{:.1} MPa) {}",
            result.stress_utilization,
            result.actual_stress.0,
            result.allowable_stress.0,
            status_icon(result.stress_utilization <= 1.0)
        )?;
        writeln!(
            f,
            "  Deflection: {:.2}/{:.2} mm {}",
            result.max_deflection.0,
            result.deflection_limit.0,
            status_icon(result.deflection_limit_check)
        )?;
        writeln!(f, "  Safety margin: {:.1}%", result.safety_margin)?;
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "  RESULT: {}",
            if result.is_adequate { "ADEQUATE" } else { "NOT ADEQUATE" }
        )?;
        writeln!(f, "{}", RULE)?;

        if !result.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommendations:")?;
            for recommendation in &result.recommendations {
                writeln!(f, "  - {}", recommendation)?;
            }
        }
        Ok(())
    }
}

/// Terminal table of catalog sections
pub struct SectionTable<'a>(pub &'a [Section]);

impl fmt::Display for SectionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} {:>10} {:>12} {:>12}",
            "Designation", "kg/m", "W (cm³)", "I (cm⁴)"
        )?;
        for section in self.0 {
            writeln!(
                f,
                "{:<16} {:>10.1} {:>12.1} {:>12.0}",
                section.designation,
                section.mass_per_metre,
                section.elastic_section_modulus.0,
                section.moment_of_inertia.0
            )?;
        }
        writeln!(f, "{} sections", self.0.len())
    }
}

/// One section with every stored property
pub struct SectionDetail<'a>(pub &'a Section);

impl fmt::Display for SectionDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self.0;
        writeln!(f, "{}", section.designation)?;
        writeln!(f, "  mass_per_metre: {} kg/m", section.mass_per_metre)?;
        writeln!(f, "  elastic_section_modulus: {} cm³", section.elastic_section_modulus.0)?;
        writeln!(f, "  moment_of_inertia: {} cm⁴", section.moment_of_inertia.0)?;
        for (name, value) in &section.extra {
            writeln!(f, "  {}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{analyze, builtin_universal_beams, AnalysisRequest};

    #[test]
    fn test_analysis_report() {
        let request = AnalysisRequest::new(10.0, 6.0).with_designation("UB406x178x74");
        let result = analyze(&request, &builtin_universal_beams()).unwrap();
        let text = AnalysisReport(&result).to_string();

        assert!(text.contains("UB406x178x74 (as requested)"));
        assert!(text.contains("M_max = 45.00 kNm"));
        assert!(text.contains("RESULT: ADEQUATE"));
        assert!(text.contains("PASS"));
    }

    #[test]
    fn test_section_table() {
        let db = builtin_universal_beams();
        let text = SectionTable(&db.sections()[..2]).to_string();
        assert!(text.contains("UB127x76x13"));
        assert!(text.contains("2 sections"));
    }

    #[test]
    fn test_section_detail_extra_properties() {
        let db = builtin_universal_beams();
        let text = SectionDetail(db.lookup("UB406x178x74").unwrap()).to_string();
        assert!(text.contains("depth_of_section: 412.8"));
    }
}
