use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("invalid rational number format: '{0}'")]
    InvalidFormat(String),

    #[error("invalid literal '{token}': {source}")]
    ParseError {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("key must be 'n' or 'd', got '{0}'")]
    InvalidKey(String),

    #[error("integer overflow")]
    Overflow,
}
