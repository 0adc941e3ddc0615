use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column {column} has {found} rows, expected {expected}")]
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },
}
