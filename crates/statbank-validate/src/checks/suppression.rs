//! Suppression columns must only hold declared codes or nothing.

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, warn};

pub(crate) fn check_suppression(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let Some(declared) = description.suppression_codes.as_ref() else {
        debug!("no suppression codes declared, nothing to check");
        return Vec::new();
    };
    let mut allowed: Vec<&str> = declared.iter().map(|code| code.code.as_str()).collect();
    allowed.push("");

    let mut findings = Vec::new();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        for variable in &subtable.suppression_variables {
            let Some(column) = table.column(variable.index()) else {
                continue;
            };
            let invalid = column
                .to_text_values()
                .iter()
                .any(|value| !allowed.contains(&value.as_str()));
            if invalid {
                let message = format!(
                    "suppression code not among allowed codes {allowed:?}, in column {} in \
                     subtable {}",
                    variable.index(),
                    subtable.file_name
                );
                warn!("{message}");
                findings.push((
                    FindingKey::SuppressionCodeInvalid {
                        column: variable.index(),
                    },
                    Finding::error(message),
                ));
            }
        }
    }
    if findings.is_empty() {
        debug!("suppression-code validation ok / no suppression columns in use");
    }
    findings
}
