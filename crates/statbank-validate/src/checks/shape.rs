//! Subtable and column counts.

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

use crate::error::ShapeError;

/// The dataset must hold exactly one subtable per declared name. Nothing
/// else is worth checking when this fails, so it errors immediately instead
/// of contributing to the finding set.
pub(crate) fn check_subtable_count(
    description: &TableDescription,
    data: &Dataset,
) -> Result<(), ShapeError> {
    if data.len() != description.subtables.len() {
        return Err(ShapeError::SubtableCount {
            expected: description.subtables.len(),
            found: data.len(),
            names: description
                .subtables
                .iter()
                .map(|subtable| subtable.file_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
    for subtable in &description.subtables {
        if !data.contains(&subtable.file_name) {
            return Err(ShapeError::MissingSubtable {
                file_name: subtable.file_name.clone(),
            });
        }
    }
    Ok(())
}

/// Declared columns (category + statistic + suppression) must equal the
/// actual column count, per subtable.
pub(crate) fn check_column_counts(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for (index, subtable) in description.subtables.iter().enumerate() {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        let expected = subtable.total_columns();
        if table.n_columns() != expected {
            let message = format!(
                "expecting {expected} columns in dataframe number {index}: {} but found {}",
                subtable.file_name,
                table.n_columns()
            );
            warn!("{message}");
            findings.push((
                FindingKey::ColumnCount {
                    subtable_index: index,
                },
                Finding::error(message),
            ));
        }
    }
    if findings.is_empty() {
        debug!("correct number of columns");
    }
    findings
}
