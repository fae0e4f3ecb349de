//! Bundle configuration loading
//!
//! Reads the optimization section of a bundle config file and records the
//! effective optimizations resolved from it:
//! 1. Default policy for the bundletool version
//! 2. Split dimension directives from the file
//! 3. Override set from the caller (CLI flag)

mod effective;
mod error;
mod file;

pub use effective::{ConfigSource, EffectiveOptimizations, SCHEMA_ID, SCHEMA_VERSION};
pub use error::ConfigError;
pub use file::{BundleConfigFile, OptimizationsSection, SplitDimensionEntry, DEFAULT_TOOL_VERSION};
