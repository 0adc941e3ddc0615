//! Time columns: format grammar and value consistency across subtables.
//!
//! A category column is a time column when its code-list text carries a
//! format specification, e.g. `format = åååå` or `format = ååååKk`. Each
//! character of the specification constrains one position of every value:
//! lowercase means "a digit", uppercase and punctuation mean "exactly this
//! character".

use std::collections::BTreeSet;

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

struct TimeColumn<'a> {
    subtable: &'a str,
    column: usize,
    format: String,
    /// Columns are matched across subtables by code list when bound,
    /// otherwise by the format string itself.
    group: String,
}

fn collect_time_columns(description: &TableDescription) -> Vec<TimeColumn<'_>> {
    let mut columns = Vec::new();
    for subtable in &description.subtables {
        for variable in &subtable.category_variables {
            if let Some(format) = variable.time_format() {
                let group = variable
                    .code_list
                    .clone()
                    .unwrap_or_else(|| format.clone());
                columns.push(TimeColumn {
                    subtable: &subtable.file_name,
                    column: variable.index(),
                    format,
                    group,
                });
            }
        }
    }
    columns
}

fn column_values(data: &Dataset, subtable: &str, column: usize) -> Option<Vec<String>> {
    let table = data.get(subtable)?;
    let values = table
        .column(column)?
        .to_text_values()
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect();
    Some(values)
}

/// Per-column grammar check against the format specification.
pub(crate) fn check_time_formats(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for time in collect_time_columns(description) {
        let Some(values) = column_values(data, time.subtable, time.column) else {
            continue;
        };
        if values.is_empty() {
            continue;
        }

        let lengths: BTreeSet<usize> = values.iter().map(|value| value.chars().count()).collect();
        if lengths.len() != 1 {
            findings.push((
                FindingKey::TimeSingleLength {
                    column: time.column,
                },
                Finding::error(format!(
                    "column number {} does not have a single time format in the shape: {}",
                    time.column, time.format
                )),
            ));
        }

        let format_len = time.format.chars().count();
        if lengths.len() == 1 && !lengths.contains(&format_len) {
            findings.push((
                FindingKey::TimeFormatLength {
                    column: time.column,
                },
                Finding::error(format!(
                    "column number {} does not match the time format in the shape: {}",
                    time.column, time.format
                )),
            ));
        }

        for (position, spec_char) in time.format.chars().enumerate() {
            let mismatch = |value: &String| {
                let actual = value.chars().nth(position);
                if spec_char.is_lowercase() {
                    !actual.is_some_and(|c| c.is_ascii_digit())
                } else {
                    actual != Some(spec_char)
                }
            };
            if !values.iter().any(mismatch) {
                continue;
            }
            let (key, expectation) = if spec_char.is_lowercase() {
                (
                    FindingKey::TimeNonDigit {
                        column: time.column,
                    },
                    "a digit".to_string(),
                )
            } else if spec_char.is_uppercase() {
                (
                    FindingKey::TimeCharacterMatch {
                        column: time.column,
                    },
                    format!("the character {spec_char}"),
                )
            } else {
                (
                    FindingKey::TimeSpecialCharacterMatch {
                        column: time.column,
                    },
                    format!("the special character {spec_char}"),
                )
            };
            let message = format!(
                "character number {position} in column {} in subtable {} should be {expectation}, \
                 does not match format {}",
                time.column, time.subtable, time.format
            );
            warn!("{message}");
            findings.push((key, Finding::error(message)));
        }
    }
    if findings.is_empty() {
        debug!("time format validation ok");
    }
    findings
}

/// The distinct values of a time column must be the same in every subtable
/// that carries it. The first carrying subtable, in the description's
/// canonical order, is the reference.
pub(crate) fn check_time_consistency(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let time_columns = collect_time_columns(description);
    let mut findings = Vec::new();

    let mut groups: Vec<&str> = Vec::new();
    for time in &time_columns {
        if !groups.contains(&time.group.as_str()) {
            groups.push(&time.group);
        }
    }

    for group in groups {
        let members: Vec<&TimeColumn> = time_columns
            .iter()
            .filter(|time| time.group == group)
            .collect();
        if members.len() < 2 {
            continue;
        }

        let Some(reference) = column_values(data, members[0].subtable, members[0].column) else {
            continue;
        };
        let reference: BTreeSet<String> = reference.into_iter().collect();

        for member in &members[1..] {
            let Some(values) = column_values(data, member.subtable, member.column) else {
                continue;
            };
            let present: BTreeSet<String> = values.into_iter().collect();

            let missing: Vec<&String> = reference.difference(&present).collect();
            if !missing.is_empty() {
                let message = format!(
                    "time values {} are missing from column {} in subtable {} but present in {}",
                    missing
                        .iter()
                        .map(|value| value.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    member.column,
                    member.subtable,
                    members[0].subtable
                );
                warn!("{message}");
                findings.push((
                    FindingKey::TimeValuesMissing {
                        subtable: member.subtable.to_string(),
                        column: member.column,
                    },
                    Finding::error(message),
                ));
            }

            let extra: Vec<&String> = present.difference(&reference).collect();
            if !extra.is_empty() {
                let message = format!(
                    "time values {} in column {} in subtable {} are not present in {}",
                    extra
                        .iter()
                        .map(|value| value.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    member.column,
                    member.subtable,
                    members[0].subtable
                );
                warn!("{message}");
                findings.push((
                    FindingKey::TimeValuesExtra {
                        subtable: member.subtable.to_string(),
                        column: member.column,
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    findings
}
