//! Code-list usage: values outside the list are errors, declared codes
//! missing from the data are informational.

use std::collections::BTreeSet;

use statbank_model::{Dataset, Finding, FindingKey, TableDescription};
use tracing::{debug, info, warn};

pub(crate) fn check_code_usage(
    description: &TableDescription,
    data: &Dataset,
) -> Vec<(FindingKey, Finding)> {
    let mut outside = Vec::new();
    let mut missing = Vec::new();

    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        for variable in &subtable.category_variables {
            let Some(list_name) = variable.code_list.as_deref() else {
                continue;
            };
            let Some(list) = description.code_list(list_name) else {
                continue;
            };
            let Some(column) = table.column(variable.index()) else {
                continue;
            };

            let distinct: BTreeSet<String> = column.to_text_values().into_iter().collect();
            for value in &distinct {
                if list.contains(value) {
                    continue;
                }
                if value.contains(' ') {
                    outside.push(format!(
                        "code {value:?} contains spaces, should it? The exact code \
                         (including spaces) is in the data but not in the description; \
                         add it to statbank admin? From column number {}, in subtable {}",
                        variable.position, subtable.file_name
                    ));
                } else {
                    outside.push(format!(
                        "code {value} in data but not in the description, add to statbank \
                         admin? From column number {}, in subtable {}",
                        variable.position, subtable.file_name
                    ));
                }
            }
            for code in &list.codes {
                if !distinct.contains(&code.code) {
                    missing.push(format!(
                        "code {} missing from column number {}, in subtable {}",
                        code.code, variable.position, subtable.file_name
                    ));
                }
            }
        }
    }

    let mut findings = Vec::new();
    if outside.is_empty() {
        debug!("no codes in categorical columns outside code lists");
    } else {
        let message = outside.join("\n");
        warn!("codes in data outside code list:\n{message}");
        findings.push((FindingKey::CategoryCodeOutside, Finding::error(message)));
    }
    if missing.is_empty() {
        debug!("no codes missing from categorical columns");
    } else {
        let message = missing.join("\n");
        info!("category codes missing from data (ok if intentional):\n{message}");
        findings.push((FindingKey::CategoryCodeMissing, Finding::info(message)));
    }
    findings
}
