use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("initials {value:?} must be exactly three letters")]
    BadInitials { value: String },

    #[error("table id {value:?} must be a string of digits")]
    BadTableId { value: String },

    #[error("publish date {value:?} must look like 2022-01-01")]
    BadPublishDate { value: String },

    #[error("approval {value:?} must be 0 (manual), 1 (immediate) or 2 (just-in-time)")]
    BadApprove { value: String },

    #[error("failed to write transfer body: {0}")]
    Body(#[from] csv::Error),

    #[error("failed to flush transfer body: {0}")]
    Io(#[from] std::io::Error),

    #[error("transfer body is not valid UTF-8: {0}")]
    BodyEncoding(#[from] std::string::FromUtf8Error),

    #[error("malformed transfer response: {0}")]
    Response(#[from] serde_json::Error),
}
