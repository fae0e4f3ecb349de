//! Resolution errors.

use semver::Version;

/// Errors raised while resolving optimizations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// An upstream precondition was violated, e.g. a version older than
    /// every entry of the default policy table.
    #[error(
        "Invalid configuration state: no default optimizations for bundletool version {version}"
    )]
    InvalidConfigurationState { version: Version },
}
