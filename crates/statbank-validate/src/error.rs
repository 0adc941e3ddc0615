use thiserror::Error;

use statbank_model::ValidationFailed;

/// Structural problems that make every other check meaningless.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("expected one subtable per declared name ({expected}: {names}), got {found}")]
    SubtableCount {
        expected: usize,
        found: usize,
        names: String,
    },

    #[error("dataset has no subtable named {file_name}")]
    MissingSubtable { file_name: String },
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("dataset shape does not match the description: {0}")]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Failed(#[from] ValidationFailed),
}
