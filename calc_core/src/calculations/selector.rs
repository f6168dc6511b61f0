//! # Optimal Section Selector
//!
//! Finds the lightest adequate section in a catalog for a given load.
//!
//! Every candidate goes through the mechanics calculator and the compliance
//! checker. Sections with invalid geometry are skipped rather than raised.
//! Among the adequate candidates, the lowest `mass_per_metre` wins and ties go
//! to the lexically smaller designation, so the result does not depend on
//! catalog order.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::selector::select_optimal;
//! use calc_core::catalog::builtin_universal_beams;
//! use calc_core::loads::{LoadSpecification, LoadType};
//!
//! let db = builtin_universal_beams();
//! let load = LoadSpecification::new(LoadType::Uniform, 15.0, 8.0);
//!
//! let section = select_optimal(&load, db.sections()).unwrap();
//! println!("Lightest adequate section: {}", section);
//! ```

use std::cmp::Ordering;

use crate::calculations::compliance::{self, ComplianceResult};
use crate::calculations::mechanics::{self, MechanicsResult};
use crate::catalog::Section;
use crate::errors::{CalcError, CalcResult, NearMiss};
use crate::loads::LoadSpecification;

/// Run the mechanics calculator and the compliance checker on one section
pub fn evaluate(section: &Section, load: &LoadSpecification) -> CalcResult<(MechanicsResult, ComplianceResult)> {
    let demand = mechanics::calculate(load, section)?;
    let verdict = compliance::check(&demand, section, load)?;
    Ok((demand, verdict))
}

/// Ordering used to pick the optimum: mass first, then designation
fn optimality_order(a: &Section, b: &Section) -> Ordering {
    a.mass_per_metre
        .total_cmp(&b.mass_per_metre)
        .then_with(|| a.designation.cmp(&b.designation))
}

/// Ordering used to pick the closest failing candidate
fn near_miss_order(a: &NearMiss, b: &NearMiss) -> Ordering {
    a.governing_ratio()
        .total_cmp(&b.governing_ratio())
        .then_with(|| a.designation.cmp(&b.designation))
}

/// Return the lightest section that passes both the stress and deflection checks.
///
/// # Errors
///
/// * `InvalidInput` - the load specification itself is invalid
/// * `NoAdequateSectionFound` - no candidate passed; carries the closest miss
pub fn select_optimal(load: &LoadSpecification, sections: &[Section]) -> CalcResult<Section> {
    load.validate()?;

    let mut best: Option<&Section> = None;
    let mut best_near_miss: Option<NearMiss> = None;
    let mut candidates_checked = 0usize;

    for section in sections {
        if let Err(e) = section.validate() {
            log::debug!("Skipping {}: {}", section.designation, e);
            continue;
        }

        let (demand, verdict) = match evaluate(section, load) {
            Ok(evaluation) => evaluation,
            Err(e) => {
                log::debug!("Skipping {}: {}", section.designation, e);
                continue;
            }
        };
        candidates_checked += 1;

        log::debug!(
            "Candidate {}: utilization {:.3}, deflection {:.2}/{:.2} mm, adequate={}",
            section.designation,
            verdict.stress_utilization,
            demand.max_deflection.0,
            verdict.deflection_limit.0,
            verdict.is_adequate
        );

        if verdict.is_adequate {
            let improves = best.map_or(true, |current| optimality_order(section, current) == Ordering::Less);
            if improves {
                best = Some(section);
            }
        } else {
            let miss = NearMiss {
                designation: section.designation.clone(),
                stress_utilization: verdict.stress_utilization,
                deflection_ratio: verdict.deflection_ratio(demand.max_deflection),
            };
            let closer = best_near_miss
                .as_ref()
                .map_or(true, |current| near_miss_order(&miss, current) == Ordering::Less);
            if closer {
                best_near_miss = Some(miss);
            }
        }
    }

    match best {
        Some(section) => {
            log::info!(
                "Selected {} ({:.1} kg/m) from {} candidates",
                section.designation,
                section.mass_per_metre,
                candidates_checked
            );
            Ok(section.clone())
        }
        None => {
            log::info!("No adequate section among {} candidates", candidates_checked);
            Err(CalcError::NoAdequateSectionFound {
                candidates_checked,
                best_near_miss,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_universal_beams;
    use crate::loads::LoadType;

    fn test_load() -> LoadSpecification {
        LoadSpecification::new(LoadType::Uniform, 15.0, 6.0)
    }

    #[test]
    fn test_selects_lightest_adequate() {
        let sections = vec![
            Section::new("HEAVY", 90.0, 2000.0, 60_000.0),
            Section::new("LIGHT-FAILS", 13.0, 74.6, 473.0),
            Section::new("MEDIUM", 40.0, 600.0, 12_000.0),
            Section::new("LIGHT-OK", 35.0, 500.0, 9_000.0),
        ];
        let selected = select_optimal(&test_load(), &sections).unwrap();
        assert_eq!(selected.designation, "LIGHT-OK");
    }

    #[test]
    fn test_selected_section_is_adequate_and_nothing_lighter_is() {
        let db = builtin_universal_beams();
        let load = LoadSpecification::new(LoadType::Uniform, 15.0, 8.0);
        let selected = select_optimal(&load, db.sections()).unwrap();

        let (_, verdict) = evaluate(&selected, &load).unwrap();
        assert!(verdict.is_adequate);

        for section in db.sections() {
            if section.mass_per_metre < selected.mass_per_metre {
                let (_, other) = evaluate(section, &load).unwrap();
                assert!(!other.is_adequate, "{} is lighter and adequate", section.designation);
            }
        }
    }

    #[test]
    fn test_no_adequate_section() {
        let sections = vec![
            Section::new("UB127x76x13", 13.0, 74.6, 473.0),
            Section::new("UB152x89x16", 16.0, 109.0, 834.0),
            Section::new("UB178x102x19", 19.0, 153.0, 1360.0),
        ];
        let load = LoadSpecification::new(LoadType::Uniform, 40.0, 10.0);

        match select_optimal(&load, &sections).unwrap_err() {
            CalcError::NoAdequateSectionFound {
                candidates_checked,
                best_near_miss,
            } => {
                assert_eq!(candidates_checked, 3);
                let miss = best_near_miss.expect("near miss reported");
                assert_eq!(miss.designation, "UB178x102x19");
                assert!(miss.governing_ratio() > 1.0);
            }
            other => panic!("expected NoAdequateSectionFound, got {:?}", other),
        }
    }

    #[test]
    fn test_tie_breaks_on_designation() {
        let sections = vec![
            Section::new("UB-B", 30.0, 600.0, 12_000.0),
            Section::new("UB-C", 45.0, 900.0, 20_000.0),
            Section::new("UB-A", 30.0, 600.0, 12_000.0),
        ];
        let selected = select_optimal(&test_load(), &sections).unwrap();
        assert_eq!(selected.designation, "UB-A");
    }

    #[test]
    fn test_order_independent() {
        let db = builtin_universal_beams();
        let load = LoadSpecification::new(LoadType::Point, 60.0, 7.0);

        let forward: Vec<Section> = db.sections().to_vec();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(forward.len() / 3);

        let a = select_optimal(&load, &forward).unwrap();
        let b = select_optimal(&load, &reversed).unwrap();
        let c = select_optimal(&load, &rotated).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_invalid_sections_skipped() {
        let sections = vec![
            Section::new("ZERO-I", 1.0, 5000.0, 0.0),
            Section::new("NEG-W", 2.0, -100.0, 50_000.0),
            Section::new("ZERO-MASS", 0.0, 5000.0, 50_000.0),
            Section::new("VALID", 60.0, 1000.0, 25_000.0),
        ];
        let selected = select_optimal(&test_load(), &sections).unwrap();
        assert_eq!(selected.designation, "VALID");
    }

    #[test]
    fn test_empty_catalog() {
        match select_optimal(&test_load(), &[]).unwrap_err() {
            CalcError::NoAdequateSectionFound {
                candidates_checked,
                best_near_miss,
            } => {
                assert_eq!(candidates_checked, 0);
                assert!(best_near_miss.is_none());
            }
            other => panic!("expected NoAdequateSectionFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_load_rejected_before_search() {
        let db = builtin_universal_beams();
        let load = test_load().with_safety_factor(0.5);
        let err = select_optimal(&load, db.sections()).unwrap_err();
        assert!(err.is_validation_error());
    }
}
