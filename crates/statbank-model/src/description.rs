use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marker inside a category variable's code-list text that introduces a
/// time-format specification, e.g. `"Tidsperiode, format = åååå"`.
const TIME_FORMAT_MARKER: &str = " format = ";

/// A classification column, optionally bound to a named code list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryVariable {
    /// One-based column position within the subtable.
    pub position: usize,
    /// Name of the code list the values must be drawn from, if any.
    pub code_list: Option<String>,
    /// Descriptive text from the description document.
    pub text: String,
}

impl CategoryVariable {
    /// Zero-based column index.
    pub fn index(&self) -> usize {
        self.position - 1
    }

    /// The time-format specification carried in the descriptive text, when
    /// present. `Å` is folded to `å` so the grammar only sees one spelling
    /// of the year placeholder.
    pub fn time_format(&self) -> Option<String> {
        let (_, spec) = self.text.split_once(TIME_FORMAT_MARKER)?;
        Some(spec.trim().replace('Å', "å"))
    }
}

/// A numeric measure column with a declared decimal precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticVariable {
    /// One-based column position within the subtable.
    pub position: usize,
    /// Decimals the data must contain once formatted as text. Columns
    /// without a declared precision are exempt from rounding checks.
    pub stored_decimals: Option<u32>,
    /// Decimals shown in the destination system. Informational only.
    pub displayed_decimals: Option<u32>,
    pub text: String,
}

impl StatisticVariable {
    pub fn index(&self) -> usize {
        self.position - 1
    }
}

/// A column holding a code that explains why a sibling statistic cell is
/// withheld or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionVariable {
    /// One-based column position within the subtable.
    pub position: usize,
    /// One-based position of the statistic column this suppression applies to.
    pub applies_to: Option<usize>,
    pub text: String,
}

impl SuppressionVariable {
    pub fn index(&self) -> usize {
        self.position - 1
    }
}

/// One expected unit of data, with its column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtable {
    /// File name used as the dataset key, e.g. `"kommtab1.dat"`.
    pub file_name: String,
    /// Human-readable title.
    pub title: String,
    pub category_variables: Vec<CategoryVariable>,
    pub statistic_variables: Vec<StatisticVariable>,
    pub suppression_variables: Vec<SuppressionVariable>,
}

impl Subtable {
    /// Total declared columns across all three roles.
    pub fn total_columns(&self) -> usize {
        self.category_variables.len()
            + self.statistic_variables.len()
            + self.suppression_variables.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub code: String,
    pub label: String,
}

/// Named enumeration of valid codes for a category column, in the order the
/// description document declared them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeList {
    pub name: String,
    pub codes: Vec<Code>,
    /// Code designated as the "all categories" aggregate, if declared.
    pub total_code: Option<String>,
}

impl CodeList {
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|entry| entry.code == code)
    }
}

/// A valid suppression code with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionCode {
    pub code: String,
    pub text: String,
}

/// Parsed metadata describing the shape of one table's submission.
///
/// Built once per session from the extract-description document and
/// immutable afterwards. Serializes losslessly for caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescription {
    /// Numeric id of the main table.
    pub table_id: String,
    /// Name of the main table, as opposed to its id.
    pub table_name: String,
    /// Server timestamp for when the description was produced.
    pub retrieved: String,
    /// Expected subtables, in canonical order.
    pub subtables: Vec<Subtable>,
    pub code_lists: BTreeMap<String, CodeList>,
    /// Valid suppression codes, when the table uses suppression columns.
    pub suppression_codes: Option<Vec<SuppressionCode>>,
}

impl TableDescription {
    pub fn subtable(&self, file_name: &str) -> Option<&Subtable> {
        self.subtables
            .iter()
            .find(|subtable| subtable.file_name == file_name)
    }

    pub fn code_list(&self, name: &str) -> Option<&CodeList> {
        self.code_lists.get(name)
    }

    /// Grand-total codes per code list, for lists that declare one.
    pub fn total_codes(&self) -> BTreeMap<String, String> {
        self.code_lists
            .iter()
            .filter_map(|(name, list)| {
                list.total_code
                    .as_ref()
                    .map(|code| (name.clone(), code.clone()))
            })
            .collect()
    }
}
