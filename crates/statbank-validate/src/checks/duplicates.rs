//! Duplicate rows across category columns.
//!
//! The category columns (time included) form the key of every row; two rows
//! with the same key would collide in the destination table. Rows are
//! compared row-wise over the category column positions.

use std::collections::HashSet;

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

pub(crate) fn check_unique_category_rows(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        let columns: Vec<Vec<String>> = subtable
            .category_variables
            .iter()
            .filter_map(|variable| table.column(variable.index()))
            .map(|column| column.to_text_values())
            .collect();
        if columns.is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        let mut duplicated = false;
        for row in 0..table.n_rows() {
            let key: Vec<&str> = columns
                .iter()
                .map(|column| column[row].as_str())
                .collect();
            if !seen.insert(key) {
                duplicated = true;
                break;
            }
        }
        if duplicated {
            let message = format!(
                "there seem to be duplicate rows across the categorical values (including \
                 time) in subtable {}",
                subtable.file_name
            );
            warn!("{message}");
            findings.push((
                FindingKey::DuplicateCategoryRows {
                    subtable: subtable.file_name.clone(),
                },
                Finding::error(message),
            ));
        }
    }
    if findings.is_empty() {
        debug!("found no duplicate combinations of categorical columns");
    }
    findings
}
