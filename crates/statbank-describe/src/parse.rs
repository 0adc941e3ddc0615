//! Builds the typed [`TableDescription`] model from a raw document.

use std::collections::BTreeMap;

use tracing::{debug, info};

use statbank_model::{
    CategoryVariable, Code, CodeList, StatisticVariable, SuppressionCode, SuppressionVariable,
    Subtable, TableDescription,
};

use crate::error::{DescribeError, Result};
use crate::raw::{RawCodeList, RawDescription, RawSubtable};

/// Parse a raw extract-description document into the typed model.
///
/// Stray tab characters are stripped before parsing; they show up in
/// production documents and are never meaningful. Required fields that are
/// absent or unparseable fail here, not at some later lookup.
pub fn parse_description(raw: &str) -> Result<TableDescription> {
    let cleaned = raw.replace('\t', "");
    let document: RawDescription = serde_json::from_str(&cleaned)?;
    let description = build(document)?;
    info!(
        table = %description.table_name,
        table_id = %description.table_id,
        created = %description.retrieved,
        "parsed extract description"
    );
    Ok(description)
}

/// Serialize a description for caching.
pub fn to_json_string(description: &TableDescription) -> Result<String> {
    Ok(serde_json::to_string(description)?)
}

/// Reload a cached description.
pub fn from_json_str(raw: &str) -> Result<TableDescription> {
    Ok(serde_json::from_str(raw)?)
}

/// The subtable file names, in the order datasets are expected.
pub fn transferdata_template(description: &TableDescription) -> Vec<String> {
    description
        .subtables
        .iter()
        .map(|subtable| subtable.file_name.clone())
        .collect()
}

fn build(document: RawDescription) -> Result<TableDescription> {
    let mut subtables = Vec::with_capacity(document.subtable_titles.len());
    for title in &document.subtable_titles {
        let raw = document
            .subtables
            .iter()
            .find(|subtable| subtable.file_name == title.file_name)
            .ok_or_else(|| DescribeError::MissingSubtable {
                file_name: title.file_name.clone(),
            })?;
        subtables.push(build_subtable(raw, &title.title)?);
    }

    let mut code_lists = BTreeMap::new();
    for raw in document
        .code_lists
        .iter()
        .chain(document.ir_code_lists.iter())
    {
        let list = build_code_list(raw);
        code_lists.insert(list.name.clone(), list);
    }
    debug!(code_lists = code_lists.len(), "flattened code lists");

    let suppression_codes = document.suppression_code_list.map(|codes| {
        codes
            .into_iter()
            .map(|raw| SuppressionCode {
                code: raw.code,
                text: raw.description.or(raw.shown_as).unwrap_or_default(),
            })
            .collect()
    });

    Ok(TableDescription {
        table_id: document.table_id,
        table_name: document.main_table,
        retrieved: document.created,
        subtables,
        code_lists,
        suppression_codes,
    })
}

fn build_subtable(raw: &RawSubtable, title: &str) -> Result<Subtable> {
    let mut category_variables = Vec::new();
    for variable in &raw.variables {
        category_variables.push(CategoryVariable {
            position: parse_position("kolonnenummer", &variable.column_number)?,
            code_list: normalize_code_list_id(variable.code_list_id.as_deref()),
            text: variable.code_list_text.clone().unwrap_or_default(),
        });
    }
    // International-reporting columns take part in the column count and the
    // code checks exactly like ordinary category columns.
    for variable in &raw.international_reporting {
        category_variables.push(CategoryVariable {
            position: parse_position("kolonnenummer", &variable.column_number)?,
            code_list: normalize_code_list_id(variable.code_list_id.as_deref()),
            text: variable.code_list_text.clone().unwrap_or_default(),
        });
    }

    let mut statistic_variables = Vec::new();
    for variable in &raw.statistic_variables {
        statistic_variables.push(StatisticVariable {
            position: parse_position("kolonnenummer", &variable.column_number)?,
            stored_decimals: parse_decimals(
                "Antall_lagrede_desimaler",
                variable.stored_decimals.as_deref(),
            )?,
            displayed_decimals: parse_decimals(
                "Antall_viste_desimaler",
                variable.displayed_decimals.as_deref(),
            )?,
            text: variable.text.clone().unwrap_or_default(),
        });
    }

    let mut suppression_variables = Vec::new();
    for column in &raw.suppression_columns {
        suppression_variables.push(SuppressionVariable {
            position: parse_position("kolonnenummer", &column.column_number)?,
            applies_to: column
                .applies_to_column
                .as_deref()
                .and_then(|value| value.trim().parse().ok()),
            text: column.applies_to_text.clone().unwrap_or_default(),
        });
    }

    Ok(Subtable {
        file_name: raw.file_name.clone(),
        title: title.to_string(),
        category_variables,
        statistic_variables,
        suppression_variables,
    })
}

fn build_code_list(raw: &RawCodeList) -> CodeList {
    CodeList {
        name: raw.name.clone(),
        codes: raw
            .codes
            .iter()
            .map(|code| Code {
                code: code.code.clone(),
                label: code.text.clone(),
            })
            .collect(),
        total_code: raw.total_code.clone(),
    }
}

fn parse_position(field: &'static str, value: &str) -> Result<usize> {
    let position: usize = value
        .trim()
        .parse()
        .map_err(|_| DescribeError::BadNumber {
            field,
            value: value.to_string(),
        })?;
    if position == 0 {
        return Err(DescribeError::BadNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(position)
}

fn parse_decimals(field: &'static str, value: Option<&str>) -> Result<Option<u32>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| DescribeError::BadNumber {
                field,
                value: text.to_string(),
            }),
    }
}

fn normalize_code_list_id(id: Option<&str>) -> Option<String> {
    match id.map(str::trim) {
        None | Some("") | Some("-") => None,
        Some(name) => Some(name.to_string()),
    }
}
