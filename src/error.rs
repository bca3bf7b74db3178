use thiserror::Error;

#[derive(Error, Debug)]
pub enum MercanetError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{0}` is not set")]
    FieldNotSet(String),
    #[error("invalid value for `{field}`: {reason}")]
    ValidationError { field: String, reason: String },
    #[error("required field `{field}` can not be empty")]
    MissingRequiredField { field: String },
    #[error("DATA parameter not present in response")]
    MissingDataField,
    #[error("SEAL parameter not present in response")]
    MissingSealField,
    #[error("response parameter `{name}` does not exist")]
    UnknownParameter { name: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MercanetError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MercanetError>;
