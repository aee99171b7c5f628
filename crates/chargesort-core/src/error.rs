//! Policy error types.

use thiserror::Error;

/// Result type alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Conditions under which no placement decision can be made.
///
/// A node that is a valid candidate but loses the ranking is not an
/// error; see [`crate::ReasonCode::NotTopChoice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("node not found")]
    MissingNodeInfo,

    #[error("no candidate nodes")]
    EmptyCandidateSet,
}
