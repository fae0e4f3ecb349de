//! Version-aware resolution of split APK optimizations.
//!
//! Combines bundletool's default optimization policy for a version, the
//! split directives of a bundle configuration, and an optional override set
//! into a single immutable [`ApkOptimizations`] decision.

mod bundle_config;
mod dimension;
mod error;
mod explain;
mod optimizations;
mod policy;
mod resolver;

pub use bundle_config::{BundleConfig, BundleConfigBuilder, NativeLibrariesSetting, SplitDirective};
pub use dimension::{OptimizationDimension, UnknownDimension};
pub use error::ResolveError;
pub use explain::{DimensionOrigin, Resolution, SettingOrigin};
pub use optimizations::ApkOptimizations;
pub use policy::{default_optimizations_for_version, policy_thresholds};
pub use resolver::{resolve, OptimizationResolver, OverrideSet};
pub use semver::Version;
