use thiserror::Error;

use crate::flight::NoConflictError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
    #[error("No value present")]
    EmptyValueAccess,
    #[error(transparent)]
    NoConflict(#[from] NoConflictError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PresenceError>;

// Helper conversions
impl From<serde_json::Error> for PresenceError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}

impl From<config::ConfigError> for PresenceError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
