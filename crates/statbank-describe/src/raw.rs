//! Wire-schema types for the extract-description document.
//!
//! The field spellings mirror the ingestion API's JSON contract exactly and
//! must stay that way; the API is a fixed third-party surface. Numbers that
//! arrive as strings (column positions, decimal counts) stay strings here
//! and are converted once, during model building.

use serde::{Deserialize, Serialize};

/// Top-level extract-description document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDescription {
    #[serde(rename = "Uttaksbeskrivelse_lagd")]
    pub created: String,
    #[serde(rename = "base", default)]
    pub base: Option<String>,
    #[serde(rename = "TabellId")]
    pub table_id: String,
    #[serde(rename = "Huvudtabell")]
    pub main_table: String,
    #[serde(rename = "DeltabellTitler")]
    pub subtable_titles: Vec<RawSubtableTitle>,
    #[serde(rename = "deltabller")]
    pub subtables: Vec<RawSubtable>,
    #[serde(rename = "kodelister", default)]
    pub code_lists: Vec<RawCodeList>,
    #[serde(rename = "IRkodelister", default)]
    pub ir_code_lists: Vec<RawCodeList>,
    #[serde(rename = "null_prikk_missing_kodeliste", default)]
    pub suppression_code_list: Option<Vec<RawSuppressionCode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubtableTitle {
    #[serde(rename = "Filnavn")]
    pub file_name: String,
    #[serde(rename = "Filtext")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubtable {
    #[serde(rename = "deltabell")]
    pub file_name: String,
    #[serde(rename = "variabler")]
    pub variables: Vec<RawVariable>,
    #[serde(rename = "statistikkvariabler")]
    pub statistic_variables: Vec<RawStatisticVariable>,
    #[serde(rename = "internasjonal_rapportering", default)]
    pub international_reporting: Vec<RawInternationalVariable>,
    #[serde(rename = "null_prikk_missing", default)]
    pub suppression_columns: Vec<RawSuppressionColumn>,
    #[serde(rename = "eksempel_linje", default)]
    pub example_line: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVariable {
    #[serde(rename = "kolonnenummer")]
    pub column_number: String,
    #[serde(rename = "Klassifikasjonsvariabel", default)]
    pub classification_variable: Option<String>,
    #[serde(rename = "Variabeltext", default)]
    pub variable_text: Option<String>,
    #[serde(rename = "Kodeliste_id", default)]
    pub code_list_id: Option<String>,
    #[serde(rename = "Kodeliste_text", default)]
    pub code_list_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStatisticVariable {
    #[serde(rename = "kolonnenummer")]
    pub column_number: String,
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
    #[serde(rename = "Enhet", default)]
    pub unit: Option<String>,
    #[serde(rename = "Antall_lagrede_desimaler", default)]
    pub stored_decimals: Option<String>,
    #[serde(rename = "Antall_viste_desimaler", default)]
    pub displayed_decimals: Option<String>,
}

/// International-reporting columns count as category columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInternationalVariable {
    #[serde(rename = "kolonnenummer")]
    pub column_number: String,
    #[serde(rename = "egenskap", default)]
    pub property: Option<String>,
    #[serde(rename = "beskrivning", default)]
    pub description: Option<String>,
    #[serde(rename = "Kodeliste_id", default)]
    pub code_list_id: Option<String>,
    #[serde(rename = "Kodeliste_text", default)]
    pub code_list_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSuppressionColumn {
    #[serde(rename = "kolonnenummer")]
    pub column_number: String,
    #[serde(rename = "gjelder_for_text", default)]
    pub applies_to_text: Option<String>,
    #[serde(rename = "gjelder_for__kolonner_nummer", default)]
    pub applies_to_column: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCodeList {
    #[serde(rename = "kodeliste")]
    pub name: String,
    #[serde(rename = "SumIALtTotalKode", default)]
    pub total_code: Option<String>,
    #[serde(rename = "koder")]
    pub codes: Vec<RawCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCode {
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "text")]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSuppressionCode {
    #[serde(rename = "Kode")]
    pub code: String,
    #[serde(rename = "Vises_som", default)]
    pub shown_as: Option<String>,
    #[serde(rename = "Beskrivelse", default)]
    pub description: Option<String>,
}
