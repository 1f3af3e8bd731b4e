use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodebookError {
    #[error("column '{column}' referenced by variable '{variable}' not found in dataset")]
    ColumnNotFound { variable: String, column: String },

    #[error("variable '{variable}' is not described in the schema")]
    UnknownVariable { variable: String },

    #[error("duplicate descriptor for variable '{variable}'")]
    DuplicateVariable { variable: String },

    #[error("invalid width strategy '{value}'")]
    InvalidWidthStrategy { value: String },
}

pub type Result<T> = std::result::Result<T, CodebookError>;
