//! Local validation of a dataset against a table description.
//!
//! All validation happens in memory; nothing is sent anywhere. A pass runs
//! every check and reports everything it finds in one go, so a statistician
//! fixes all problems in one round instead of one per attempt.

mod checks;
mod error;
mod util;

pub use error::{ShapeError, ValidateError};

use statbank_model::{Dataset, TableDescription, ValidationFailed, ValidationReport};
use tracing::debug;

/// Validate `data` against `description`.
///
/// Shape problems (wrong number of subtables, missing subtable names) fail
/// immediately: no other check is meaningful without the right tables in
/// place. Content problems accumulate into the returned report. With
/// `raise_on_errors`, a report containing any error-severity finding is
/// returned as [`ValidateError::Failed`] instead; informational findings
/// alone never fail a pass. The input is never mutated.
pub fn validate(
    description: &TableDescription,
    data: &Dataset,
    raise_on_errors: bool,
) -> Result<ValidationReport, ValidateError> {
    debug!(table_id = %description.table_id, "validating");
    checks::shape::check_subtable_count(description, data)?;

    let report = checks::run_all(description, data);
    if raise_on_errors && report.has_errors() {
        return Err(ValidateError::Failed(ValidationFailed::from_report(
            &report,
        )));
    }
    Ok(report)
}
