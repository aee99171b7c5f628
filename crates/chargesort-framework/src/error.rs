//! Framework error types.

use thiserror::Error;

/// Errors raised while assembling plugins and profiles.
///
/// Filter outcomes are never errors at this level; they are reported as a
/// [`crate::Status`].
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("plugin not registered: {0}")]
    UnknownPlugin(String),

    #[error("plugin already registered: {0}")]
    DuplicatePlugin(String),

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("invalid args for plugin {plugin}: {reason}")]
    InvalidArgs { plugin: String, reason: String },

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

pub type FrameworkResult<T> = Result<T, FrameworkError>;
