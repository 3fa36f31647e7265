use thiserror::Error;

/// Errors raised while interpreting caller-supplied selectors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown feature type: {0}")]
    UnknownFeature(String),

    #[error("invalid {field}: {value}")]
    InvalidModifier { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
