//! APK optimizer - split optimization resolution for app bundles
//!
//! This crate loads the optimization section of a bundle config and resolves
//! the split dimensions and native library compression that apply when the
//! bundle is turned into split APKs.

pub mod config;

pub use config::{BundleConfigFile, ConfigError, EffectiveOptimizations, DEFAULT_TOOL_VERSION};
pub use split_optimizations::{
    default_optimizations_for_version, resolve, ApkOptimizations, BundleConfig,
    BundleConfigBuilder, NativeLibrariesSetting, OptimizationDimension, OptimizationResolver,
    OverrideSet, Resolution, ResolveError, SplitDirective, UnknownDimension, Version,
};
