//! Configuration errors

use split_optimizations::{ResolveError, UnknownDimension};

/// Errors from loading a bundle config and resolving its optimizations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid bundletool version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error(transparent)]
    UnknownDimension(#[from] UnknownDimension),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
