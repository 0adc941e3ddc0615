#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("malformed description document: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("could not parse {field} value {value:?} as a number")]
    BadNumber { field: &'static str, value: String },

    #[error("subtable {file_name} is titled but has no column description")]
    MissingSubtable { file_name: String },
}

pub type Result<T> = std::result::Result<T, DescribeError>;
