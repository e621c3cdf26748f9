//! Errors raised by the crate's own helpers (not decode failures)
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("KIND/unknown target kind '{0}'")]
    UnknownKind(String),

    #[error("CONFIG/{0}")]
    InvalidConfig(String),
}
