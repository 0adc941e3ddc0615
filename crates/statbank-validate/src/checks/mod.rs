//! Validation check modules.
//!
//! Each module covers one family of checks. All of them run on every pass
//! and their findings merge into one report; no check stops another.

mod codes;
mod duplicates;
mod numeric;
pub(crate) mod shape;
mod suppression;
mod time;
mod types;

use statbank_model::{Dataset, TableDescription, ValidationReport};

/// Run every content check and merge the findings.
pub(crate) fn run_all(description: &TableDescription, data: &Dataset) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Declared vs actual column counts
    for (key, finding) in shape::check_column_counts(description, data) {
        report.insert(key, finding);
    }

    // 2. Code-list-bound columns must be text
    for (key, finding) in types::check_category_storage(description, data) {
        report.insert(key, finding);
    }

    // 3. Code usage: outside the list (error), missing from data (info)
    for (key, finding) in codes::check_code_usage(description, data) {
        report.insert(key, finding);
    }

    // 4. No raw floats anywhere
    for (key, finding) in types::check_for_floats(data) {
        report.insert(key, finding);
    }

    // 5. No literal NA-like strings
    for (key, finding) in types::check_for_literal_nans(data) {
        report.insert(key, finding);
    }

    // 6. Statistic values parse as numbers
    for (key, finding) in numeric::check_statistic_values(description, data) {
        report.insert(key, finding);
    }

    // 7. Statistic values carry the declared decimals
    for (key, finding) in numeric::check_rounding(description, data) {
        report.insert(key, finding);
    }

    // 8. Time values agree across subtables
    for (key, finding) in time::check_time_consistency(description, data) {
        report.insert(key, finding);
    }

    // 9. Time values satisfy the format grammar
    for (key, finding) in time::check_time_formats(description, data) {
        report.insert(key, finding);
    }

    // 10. Suppression columns only hold declared codes
    for (key, finding) in suppression::check_suppression(description, data) {
        report.insert(key, finding);
    }

    // 11. No duplicate rows across category columns
    for (key, finding) in duplicates::check_unique_category_rows(description, data) {
        report.insert(key, finding);
    }

    report
}
