//! Routing error definitions.

use thiserror::Error;

/// A pattern string that uses the `{name}` parameter syntax incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// `{` or `}` appears without forming a whole `{name}` segment.
    #[error("misplaced parameter delimiter in segment '{0}'")]
    MisplacedDelimiter(String),

    /// The segment is `{}`.
    #[error("empty parameter name in segment '{0}'")]
    EmptyName(String),

    /// The name between the braces is not an identifier.
    #[error("invalid parameter name '{0}'")]
    InvalidName(String),
}

/// Errors returned by [`Router`](super::Router) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A route was registered with a malformed pattern.
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// `start` was called on a router that is already listening.
    #[error("router already started")]
    AlreadyStarted,
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
