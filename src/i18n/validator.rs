//! Route table validation.
//!
//! Checks the invariants inverse lookup depends on: full coverage of every
//! route key in every language, empty segments only for the home page, and
//! unique segments within each language. Runs at load time so a broken data
//! file is reported before the first request.

use crate::i18n::Language;
use crate::routing::{RouteKey, RouteTable};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Invariant violations (resolution degrades or becomes ambiguous)
    pub errors: Vec<String>,

    /// Non-critical issues (URLs still resolve, but look wrong)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for route translation tables.
pub struct RouteTableValidator;

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

impl RouteTableValidator {
    /// Validate a route table against every supported language.
    pub fn validate(table: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in RouteKey::ALL {
            for language in Language::all() {
                match table.segment(key, language) {
                    None => report.errors.push(format!(
                        "Missing segment for '{}' in '{}'",
                        key, language
                    )),
                    Some("") if !key.is_home() => report.errors.push(format!(
                        "Empty segment for '{}' in '{}' (only 'home' may be empty)",
                        key, language
                    )),
                    Some("") => {}
                    Some(segment) if !Self::is_well_formed(segment) => {
                        report.warnings.push(format!(
                            "Segment '{}' for '{}' in '{}' is not lowercase kebab-case",
                            segment, key, language
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        for collision in table.collisions() {
            report.errors.push(format!(
                "Duplicate segment '{}' in '{}': '{}' shadows '{}'",
                collision.segment, collision.language, collision.first, collision.second
            ));
        }

        report
    }

    /// Lowercase ASCII words separated by `-`, optionally nested with `/`.
    fn is_well_formed(segment: &str) -> bool {
        let regex = SEGMENT_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:/[a-z0-9]+(?:-[a-z0-9]+)*)*$").unwrap()
        });
        regex.is_match(segment)
    }
}
