//! Statistic-column content: values must parse as numbers, and their
//! textual form must match the declared decimal precision.

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

use crate::util::{comma_form, parse_statistic};

/// Every non-empty statistic value must parse as a number once the comma
/// separator is normalized. Failures collect per column and never stop the
/// other checks.
pub(crate) fn check_statistic_values(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        for variable in &subtable.statistic_variables {
            let Some(column) = table.column(variable.index()) else {
                continue;
            };
            let mut bad = Vec::new();
            for value in column.to_text_values() {
                if value.is_empty() {
                    continue;
                }
                if parse_statistic(&value).is_none() {
                    bad.push(value);
                }
            }
            if !bad.is_empty() {
                bad.truncate(5);
                let message = format!(
                    "column {} in {} holds values that do not parse as numbers, e.g. {}",
                    variable.index(),
                    subtable.file_name,
                    bad.join(", ")
                );
                warn!("{message}");
                findings.push((
                    FindingKey::StatisticNotNumber {
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

/// The textual form of a statistic column must carry exactly the declared
/// number of decimals: a comma and that many digits when nonzero, a plain
/// optionally-signed digit string when zero.
pub(crate) fn check_rounding(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut findings = Vec::new();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        for variable in &subtable.statistic_variables {
            let Some(decimals) = variable.stored_decimals else {
                continue;
            };
            let Some(column) = table.column(variable.index()) else {
                continue;
            };
            // Empty cells are excluded; an all-empty column has nothing to
            // check and is not an error.
            let values: Vec<String> = column
                .to_text_values()
                .into_iter()
                .map(|value| comma_form(&value))
                .filter(|value| !value.is_empty())
                .collect();
            if values.is_empty() {
                continue;
            }

            let ok = if decimals > 0 {
                values.iter().all(|value| {
                    value
                        .rsplit_once(',')
                        .is_some_and(|(_, fraction)| fraction.len() as u32 == decimals)
                })
            } else {
                values.iter().all(|value| {
                    let digits = value.strip_prefix('-').unwrap_or(value);
                    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
                })
            };

            if !ok {
                let message = format!(
                    "column {} in {} should be stored with {decimals} decimal place(s); \
                     check the number of decimals, and consider converting unrounded floats \
                     with round_data, which rounds halves up like SAS and Excel instead of \
                     to even",
                    variable.index(),
                    subtable.file_name
                );
                warn!("{message}");
                findings.push((
                    FindingKey::Rounding {
                        subtable: subtable.file_name.clone(),
                        column: variable.index(),
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    if findings.is_empty() {
        debug!("rounding of statistic columns ok");
    }
    findings
}
