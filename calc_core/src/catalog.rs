//! # Section Catalog
//!
//! Beam sections and the provider interface the engine reads them through.
//!
//! The engine never owns or mutates the catalog. It asks a [`SectionCatalog`]
//! for the full list (optimal selection) or for one designation (explicit
//! analysis). [`SectionDb`] is the in-memory implementation; remote providers
//! live outside the core and implement the same trait.
//!
//! ## Units
//!
//! Section properties are stored as printed in UK section tables:
//! mass in kg/m, elastic modulus in cm³, second moment of area in cm⁴.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::{builtin_universal_beams, SectionCatalog};
//!
//! let db = builtin_universal_beams();
//! let beam = db.get_section("ub406x178x74").unwrap().unwrap();
//! assert_eq!(beam.designation, "UB406x178x74");
//! assert!(beam.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Cm3, Cm4};

/// A rolled steel section with the properties the engine needs.
///
/// Field aliases accept the column names served by the section catalog API
/// (`section_designation`, `elastic_modulus_axis_y`,
/// `second_moment_of_area_axis_y`). Every other column is kept in `extra`
/// and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Catalog designation (e.g., "UB406x178x74")
    #[serde(alias = "section_designation")]
    pub designation: String,

    /// Mass per metre (kg/m)
    pub mass_per_metre: f64,

    /// Elastic section modulus about the major axis, W (cm³)
    #[serde(alias = "elastic_modulus_axis_y")]
    pub elastic_section_modulus: Cm3,

    /// Second moment of area about the major axis, I (cm⁴)
    #[serde(alias = "second_moment_of_area_axis_y")]
    pub moment_of_inertia: Cm4,

    /// Remaining catalog columns (depth, flange width, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Section {
    /// Create a section with only the properties used by the engine
    pub fn new(
        designation: impl Into<String>,
        mass_per_metre: f64,
        elastic_section_modulus_cm3: f64,
        moment_of_inertia_cm4: f64,
    ) -> Self {
        Section {
            designation: designation.into(),
            mass_per_metre,
            elastic_section_modulus: Cm3(elastic_section_modulus_cm3),
            moment_of_inertia: Cm4(moment_of_inertia_cm4),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extra stored property
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Check that every property is strictly positive.
    ///
    /// NaN fails the check as well.
    pub fn validate(&self) -> CalcResult<()> {
        let properties = [
            ("mass_per_metre", self.mass_per_metre),
            ("elastic_section_modulus", self.elastic_section_modulus.0),
            ("moment_of_inertia", self.moment_of_inertia.0),
        ];
        for (property, value) in properties {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CalcError::invalid_geometry(&self.designation, property, value));
            }
        }
        Ok(())
    }

    /// Whether this section answers to `designation` (case-insensitive, trimmed)
    pub fn matches(&self, designation: &str) -> bool {
        self.designation.trim().eq_ignore_ascii_case(designation.trim())
    }

    /// Whether the designation starts with `prefix` (case-insensitive, trimmed)
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.designation
            .trim()
            .to_uppercase()
            .starts_with(&prefix.trim().to_uppercase())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} kg/m, W={:.0} cm³, I={:.0} cm⁴)",
            self.designation, self.mass_per_metre, self.elastic_section_modulus.0, self.moment_of_inertia.0
        )
    }
}

/// Read-only provider of beam sections.
///
/// Implementations must be shareable across threads; the engine calls them
/// synchronously and treats the answer as an immutable snapshot.
pub trait SectionCatalog: Send + Sync {
    /// Human-readable name of the data source, used in errors and logs
    fn source_name(&self) -> String;

    /// List every section in the catalog, in catalog order
    fn list_sections(&self) -> CalcResult<Vec<Section>>;

    /// Look up a single section by designation.
    ///
    /// Returns `Ok(None)` when the catalog has no such section.
    fn get_section(&self, designation: &str) -> CalcResult<Option<Section>> {
        Ok(self
            .list_sections()?
            .into_iter()
            .find(|section| section.matches(designation)))
    }
}

/// Shapes of catalog JSON accepted by [`parse_catalog_json`]
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    /// Bare array, as served by `GET /beams` on the catalog API
    List(Vec<Section>),
    /// Wrapped listing: `{ "beams": [...], "count": n }`
    Wrapped { beams: Vec<Section> },
}

/// Parse a catalog from JSON text.
///
/// Accepts either a bare array of sections or an object with a `beams` array.
pub fn parse_catalog_json(json: &str) -> CalcResult<Vec<Section>> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(match document {
        CatalogDocument::List(sections) => sections,
        CatalogDocument::Wrapped { beams } => beams,
    })
}

/// In-memory section catalog.
///
/// Keeps insertion order for listing and an uppercase index for lookup.
#[derive(Debug, Clone, Default)]
pub struct SectionDb {
    /// Sections in catalog order
    sections: Vec<Section>,

    /// Uppercase designation -> position in `sections`
    index: HashMap<String, usize>,

    /// Data source label (e.g., "builtin-uk-ub" or a file path)
    pub source: Option<String>,
}

impl SectionDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from a list of sections
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut db = Self::new();
        for section in sections {
            db.insert(section);
        }
        db
    }

    /// Load a catalog from a JSON file
    pub fn load_from_json(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", &display, e.to_string()))?;

        let sections = parse_catalog_json(&content)?;
        log::debug!("Loaded {} sections from {}", sections.len(), display);

        let mut db = Self::from_sections(sections);
        db.source = Some(display);
        Ok(db)
    }

    /// Insert a section, replacing any existing section with the same designation
    pub fn insert(&mut self, section: Section) {
        let key = section.designation.trim().to_uppercase();
        match self.index.get(&key) {
            Some(&position) => self.sections[position] = section,
            None => {
                self.index.insert(key, self.sections.len());
                self.sections.push(section);
            }
        }
    }

    /// Look up a section by designation
    ///
    /// Matching is case-insensitive.
    pub fn lookup(&self, designation: &str) -> CalcResult<&Section> {
        let key = designation.trim().to_uppercase();
        self.index
            .get(&key)
            .map(|&position| &self.sections[position])
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    /// All sections in catalog order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the number of sections in the database
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the database is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SectionCatalog for SectionDb {
    fn source_name(&self) -> String {
        self.source.clone().unwrap_or_else(|| "in-memory".to_string())
    }

    fn list_sections(&self) -> CalcResult<Vec<Section>> {
        Ok(self.sections.clone())
    }

    fn get_section(&self, designation: &str) -> CalcResult<Option<Section>> {
        match self.lookup(designation) {
            Ok(section) => Ok(Some(section.clone())),
            Err(CalcError::SectionNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// ============================================================================
// Built-in Universal Beams (for use without a catalog service)
// ============================================================================

/// Get a database with common UK universal beams pre-loaded
///
/// A subset of the UB range (BS 4-1) for demos, tests and offline use.
pub fn builtin_universal_beams() -> SectionDb {
    // (designation, mass kg/m, depth mm, width mm, Iy cm⁴, Wel,y cm³)
    let universal_beams = [
        ("UB127x76x13", 13.0, 127.0, 76.0, 473.0, 74.6),
        ("UB152x89x16", 16.0, 152.4, 88.7, 834.0, 109.0),
        ("UB178x102x19", 19.0, 177.8, 101.2, 1360.0, 153.0),
        ("UB203x102x23", 23.1, 203.2, 101.8, 2100.0, 207.0),
        ("UB203x133x25", 25.1, 203.2, 133.2, 2340.0, 230.0),
        ("UB203x133x30", 30.0, 206.8, 133.9, 2900.0, 280.0),
        ("UB254x102x22", 22.0, 254.0, 101.6, 2840.0, 224.0),
        ("UB254x102x25", 25.2, 257.2, 101.9, 3410.0, 266.0),
        ("UB254x102x28", 28.3, 260.4, 102.2, 4000.0, 308.0),
        ("UB254x146x31", 31.1, 251.4, 146.1, 4410.0, 351.0),
        ("UB254x146x37", 37.0, 256.0, 146.4, 5540.0, 433.0),
        ("UB254x146x43", 43.0, 259.6, 147.3, 6540.0, 504.0),
        ("UB305x102x25", 24.8, 305.1, 101.6, 4460.0, 291.0),
        ("UB305x102x28", 28.2, 308.7, 101.8, 5370.0, 349.0),
        ("UB305x102x33", 32.8, 312.7, 102.4, 6500.0, 416.0),
        ("UB305x127x37", 37.0, 304.4, 123.4, 7170.0, 471.0),
        ("UB305x127x42", 41.9, 307.2, 124.3, 8200.0, 534.0),
        ("UB305x165x40", 40.3, 303.4, 165.0, 8500.0, 560.0),
        ("UB305x165x46", 46.1, 306.6, 165.7, 9900.0, 646.0),
        ("UB356x127x33", 33.1, 349.0, 125.4, 8250.0, 473.0),
        ("UB356x127x39", 39.1, 353.4, 126.0, 10200.0, 576.0),
        ("UB356x171x45", 45.0, 351.4, 171.1, 12100.0, 687.0),
        ("UB356x171x51", 51.0, 355.0, 171.5, 14100.0, 796.0),
        ("UB406x140x39", 39.0, 398.0, 141.8, 12500.0, 627.0),
        ("UB406x140x46", 46.0, 403.2, 142.2, 15700.0, 778.0),
        ("UB406x178x54", 54.1, 402.6, 177.7, 18700.0, 930.0),
        ("UB406x178x60", 60.1, 406.4, 177.9, 21600.0, 1060.0),
        ("UB406x178x67", 67.1, 409.4, 178.8, 24300.0, 1200.0),
        ("UB406x178x74", 74.2, 412.8, 179.5, 27300.0, 1320.0),
        ("UB457x191x67", 67.1, 453.4, 189.9, 29400.0, 1300.0),
        ("UB457x191x74", 74.3, 457.0, 190.4, 33300.0, 1460.0),
        ("UB457x191x82", 82.0, 460.0, 191.3, 37100.0, 1610.0),
        ("UB533x210x82", 82.2, 528.3, 208.8, 47500.0, 1800.0),
        ("UB533x210x92", 92.1, 533.1, 209.3, 55200.0, 2070.0),
        ("UB610x229x101", 101.2, 602.6, 227.6, 75800.0, 2520.0),
    ];

    let mut db = SectionDb::from_sections(universal_beams.into_iter().map(
        |(designation, mass, depth, width, i, w)| {
            Section::new(designation, mass, w, i)
                .with_property("depth_of_section", depth)
                .with_property("width_of_section", width)
        },
    ));
    db.source = Some("builtin-uk-ub".to_string());
    db
}
