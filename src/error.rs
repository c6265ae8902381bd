//! Error types for map construction.

use thiserror::Error;

/// Errors raised while building an [`OrderedMap`](crate::OrderedMap) from untyped input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was neither absent, a sequence of `[key, value]` pairs, nor a keyed record.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input.
        message: String,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
