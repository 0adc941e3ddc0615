//! Parsing of Statbank extract-description documents.
//!
//! An extract description ("uttrekksbeskrivelse") tells a statistician what
//! shape of data a table expects: its subtables, their column layout, the
//! code lists category columns must draw from, and the valid suppression
//! codes. This crate turns the raw JSON document into the typed
//! [`statbank_model::TableDescription`] and round-trips it for caching.

mod error;
mod parse;
pub mod raw;

pub use error::{DescribeError, Result};
pub use parse::{from_json_str, parse_description, to_json_string, transferdata_template};
