//! Validation findings keyed by structured tags.
//!
//! The destination system's tooling knows these findings by stable string
//! keys like `rounding_error_<subtable>_<col>`. Keys here are a typed enum
//! so subtable names and column indices cannot collide through string
//! formatting; `Display` renders the stable form.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde::ser::SerializeMap;
use thiserror::Error;

/// Identity of one validation finding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FindingKey {
    /// Declared and actual column counts differ for the subtable at this
    /// position in the description's canonical order.
    ColumnCount { subtable_index: usize },
    /// Values present in the data but absent from the bound code list.
    CategoryCodeOutside,
    /// Codes present in a code list but absent from the data.
    CategoryCodeMissing,
    /// A code-list-bound column is not stored as text.
    CategoryNotText { subtable: String, column: usize },
    /// A column still holds raw floating-point values.
    ContainsFloats { subtable: String, column: usize },
    /// A text column holds literal NA-like tokens.
    LiteralNaText { subtable: String, column: usize },
    /// A statistic column holds values that do not parse as numbers.
    StatisticNotNumber { subtable: String, column: usize },
    /// A statistic column's textual form does not match its declared
    /// decimal precision.
    Rounding { subtable: String, column: usize },
    /// A time column lacks values other subtables have.
    TimeValuesMissing { subtable: String, column: usize },
    /// A time column has values other subtables lack.
    TimeValuesExtra { subtable: String, column: usize },
    /// A time column's values are not all the same length.
    TimeSingleLength { column: usize },
    /// A time column's value length differs from its format's length.
    TimeFormatLength { column: usize },
    /// A digit position in the time format holds a non-digit.
    TimeNonDigit { column: usize },
    /// A literal letter position in the time format does not match.
    TimeCharacterMatch { column: usize },
    /// A literal punctuation position in the time format does not match.
    TimeSpecialCharacterMatch { column: usize },
    /// A suppression column holds a value outside the declared codes.
    SuppressionCodeInvalid { column: usize },
    /// Duplicate rows across the category columns of a subtable.
    DuplicateCategoryRows { subtable: String },
}

impl fmt::Display for FindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKey::ColumnCount { subtable_index } => {
                write!(f, "col_count_data_{subtable_index}")
            }
            FindingKey::CategoryCodeOutside => write!(f, "categorycode_outside"),
            FindingKey::CategoryCodeMissing => write!(f, "categorycode_missing"),
            FindingKey::CategoryNotText { subtable, column } => {
                write!(f, "category_not_string_{subtable}_{column}")
            }
            FindingKey::ContainsFloats { subtable, column } => {
                write!(f, "contains_floats_{subtable}_{column}")
            }
            FindingKey::LiteralNaText { subtable, column } => {
                write!(f, "contains_string_nans_{subtable}_{column}")
            }
            FindingKey::StatisticNotNumber { subtable, column } => {
                write!(f, "statistic_not_number_{subtable}_{column}")
            }
            FindingKey::Rounding { subtable, column } => {
                write!(f, "rounding_error_{subtable}_{column}")
            }
            FindingKey::TimeValuesMissing { subtable, column } => {
                write!(f, "time_values_missing_{subtable}_{column}")
            }
            FindingKey::TimeValuesExtra { subtable, column } => {
                write!(f, "time_values_extra_{subtable}_{column}")
            }
            FindingKey::TimeSingleLength { column } => {
                write!(f, "time_single_length_format_{column}")
            }
            FindingKey::TimeFormatLength { column } => write!(f, "time_formatlength_{column}"),
            FindingKey::TimeNonDigit { column } => write!(f, "time_non_digit_column{column}"),
            FindingKey::TimeCharacterMatch { column } => {
                write!(f, "character_match_column{column}")
            }
            FindingKey::TimeSpecialCharacterMatch { column } => {
                write!(f, "special_character_match_column{column}")
            }
            FindingKey::SuppressionCodeInvalid { column } => {
                write!(f, "prikke_character_match_column{column}")
            }
            FindingKey::DuplicateCategoryRows { subtable } => {
                write!(f, "duplicate_categorical_time_groups_{subtable}")
            }
        }
    }
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Info,
}

/// One validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Accumulated findings of one validation pass.
///
/// Keys are unique per invocation. Enumeration order is stable for display
/// but carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    findings: BTreeMap<FindingKey, Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FindingKey, finding: Finding) {
        self.findings.insert(key, finding);
    }

    pub fn get(&self, key: &FindingKey) -> Option<&Finding> {
        self.findings.get(key)
    }

    pub fn contains(&self, key: &FindingKey) -> bool {
        self.findings.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FindingKey, &Finding)> {
        self.findings.iter()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings
            .values()
            .any(|finding| finding.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .values()
            .filter(|finding| finding.severity == Severity::Error)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.findings
            .values()
            .filter(|finding| finding.severity == Severity::Info)
            .count()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    /// Raise the accumulated errors on demand. Info findings never fail.
    pub fn into_result(self) -> Result<ValidationReport, ValidationFailed> {
        if self.has_errors() {
            Err(ValidationFailed::from_report(&self))
        } else {
            Ok(self)
        }
    }
}

impl Serialize for ValidationReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.findings.len()))?;
        for (key, finding) in &self.findings {
            map.serialize_entry(&key.to_string(), finding)?;
        }
        map.end()
    }
}

/// Aggregate error wrapping every error-severity finding of a pass.
#[derive(Debug, Error)]
#[error("validation failed with {} error(s):\n{}", .messages.len(), .messages.join("\n"))]
pub struct ValidationFailed {
    pub messages: Vec<String>,
}

impl ValidationFailed {
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            messages: report
                .iter()
                .filter(|(_, finding)| finding.severity == Severity::Error)
                .map(|(key, finding)| format!("{key}: {}", finding.message))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_the_stable_string_forms() {
        let key = FindingKey::Rounding {
            subtable: "kommtab1.dat".to_string(),
            column: 3,
        };
        assert_eq!(key.to_string(), "rounding_error_kommtab1.dat_3");

        assert_eq!(
            FindingKey::ColumnCount { subtable_index: 0 }.to_string(),
            "col_count_data_0"
        );
        assert_eq!(
            FindingKey::SuppressionCodeInvalid { column: 4 }.to_string(),
            "prikke_character_match_column4"
        );
        assert_eq!(
            FindingKey::DuplicateCategoryRows {
                subtable: "x.dat".to_string()
            }
            .to_string(),
            "duplicate_categorical_time_groups_x.dat"
        );
    }

    #[test]
    fn info_findings_do_not_fail_the_report() {
        let mut report = ValidationReport::new();
        report.insert(
            FindingKey::CategoryCodeMissing,
            Finding::info("code 02 missing from column 1"),
        );
        assert!(!report.has_errors());
        assert_eq!(report.info_count(), 1);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn error_findings_raise_on_demand() {
        let mut report = ValidationReport::new();
        report.insert(
            FindingKey::CategoryCodeOutside,
            Finding::error("code 03 not in code list"),
        );
        let failed = report.into_result().unwrap_err();
        assert_eq!(failed.messages.len(), 1);
        assert!(failed.messages[0].starts_with("categorycode_outside"));
    }

    #[test]
    fn report_serializes_with_display_keys() {
        let mut report = ValidationReport::new();
        report.insert(
            FindingKey::ContainsFloats {
                subtable: "x.dat".to_string(),
                column: 2,
            },
            Finding::error("column 2 is a float"),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("contains_floats_x.dat_2").is_some());
    }
}
