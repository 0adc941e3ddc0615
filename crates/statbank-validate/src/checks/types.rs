//! Column storage-kind checks: raw floats, literal NA tokens, and category
//! columns that should be text.

use statbank_model::{Column, Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

use crate::util::{NA_TOKENS, is_na_token};

/// No column may still hold raw floating-point values at validation time;
/// the rounder turns them into decimal strings first.
pub(crate) fn check_for_floats(data: &Dataset) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for (name, table) in data.iter() {
        for (index, column) in table.columns().iter().enumerate() {
            if column.is_number() {
                let message = format!(
                    "column {index} in {name} is a float; run the data through round_data \
                     first, which rounds halves up like SAS and Excel instead of to even"
                );
                warn!("{message}");
                findings.push((
                    FindingKey::ContainsFloats {
                        subtable: name.clone(),
                        column: index,
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    findings
}

/// Text columns must not contain literal NA-like tokens; those are missing
/// values that were stringified instead of emptied.
pub(crate) fn check_for_literal_nans(data: &Dataset) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for (name, table) in data.iter() {
        for (index, column) in table.columns().iter().enumerate() {
            let Column::Text(values) = column else {
                continue;
            };
            let hits = values.iter().filter(|value| is_na_token(value)).count();
            if hits > 0 {
                let message = format!(
                    "column {index} in {name} has {hits} value(s) that look like NAs turned \
                     into literal strings (one of {NA_TOKENS:?}); convert missing values to \
                     empty strings before transfer"
                );
                warn!("{message}");
                findings.push((
                    FindingKey::LiteralNaText {
                        subtable: name.clone(),
                        column: index,
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    if findings.is_empty() {
        debug!("no literal NA-like strings");
    }
    findings
}

/// Columns bound to a code list hold codes, and codes are text.
pub(crate) fn check_category_storage(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        for variable in &subtable.category_variables {
            if variable.code_list.is_none() {
                continue;
            }
            let Some(column) = table.column(variable.index()) else {
                continue;
            };
            if column.is_number() {
                let message = format!(
                    "column {} in {} is bound to code list {} but is stored as numbers; \
                     codes must be strings",
                    variable.index(),
                    subtable.file_name,
                    variable.code_list.as_deref().unwrap_or_default()
                );
                warn!("{message}");
                findings.push((
                    FindingKey::CategoryNotText {
                        subtable: subtable.file_name.clone(),
                        column: variable.index(),
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    findings
}
