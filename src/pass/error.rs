use thiserror::Error;

/// Reasons a password cannot be produced from a config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no characters left to generate from after exclusions")]
    EmptyPool,

    #[error("invalid length range {min}..={max}: minimum must be at least 1 and not above maximum")]
    InvalidRange { min: usize, max: usize },
}
