use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(String),
    #[error("model expects {expected} features, found {found}")]
    FeatureCount { expected: usize, found: usize },
    #[error("Values must be finite and not `Inf`, `-Inf` or `NaN`")]
    InvalidValues,
}
