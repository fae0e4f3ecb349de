//! Optimization resolver
//!
//! Layers the bundle configuration and an optional override set on top of
//! the version's default policy:
//! 1. Baseline: default policy for the bundle's bundletool version
//! 2. Split directives from the bundle config, applied in order
//! 3. Override set, which replaces the dimensions entirely when non-empty
//! 4. Uncompress flag: explicit config value, else the baseline value.
//!    The override set never touches it.

use std::collections::{BTreeMap, BTreeSet};

use crate::bundle_config::BundleConfig;
use crate::dimension::OptimizationDimension;
use crate::error::ResolveError;
use crate::explain::{DimensionOrigin, Resolution, SettingOrigin};
use crate::optimizations::ApkOptimizations;
use crate::policy::default_optimizations_for_version;

/// Caller-supplied split dimensions that replace the computed ones.
///
/// An empty set is the same as no override.
pub type OverrideSet = BTreeSet<OptimizationDimension>;

/// Resolves the final [`ApkOptimizations`] for a build.
///
/// Stateless; the same inputs always produce the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationResolver;

impl OptimizationResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the optimizations for `config`, honoring `override_set` if given.
    pub fn resolve(
        &self,
        config: &BundleConfig,
        override_set: Option<&OverrideSet>,
    ) -> Result<ApkOptimizations, ResolveError> {
        self.explain(config, override_set).map(Resolution::into_optimizations)
    }

    /// Like [`resolve`](Self::resolve), also recording where each value came from.
    pub fn explain(
        &self,
        config: &BundleConfig,
        override_set: Option<&OverrideSet>,
    ) -> Result<Resolution, ResolveError> {
        let baseline = default_optimizations_for_version(&config.bundletool_version)?;

        let mut origins: BTreeMap<OptimizationDimension, DimensionOrigin> = baseline
            .split_dimensions()
            .iter()
            .map(|d| (*d, DimensionOrigin::Default))
            .collect();
        let mut removed = BTreeSet::new();

        let override_set = override_set.filter(|overrides| !overrides.is_empty());
        match override_set {
            Some(overrides) => {
                if !config.split_directives.is_empty() {
                    tracing::debug!(
                        ignored = config.split_directives.len(),
                        "override set replaces split dimension directives from bundle config"
                    );
                }
                origins = overrides
                    .iter()
                    .map(|d| (*d, DimensionOrigin::Override))
                    .collect();
            }
            None => {
                for directive in &config.split_directives {
                    if directive.negate {
                        if origins.remove(&directive.dimension).is_some()
                            && baseline.splits_by(directive.dimension)
                        {
                            removed.insert(directive.dimension);
                        }
                    } else {
                        removed.remove(&directive.dimension);
                        origins
                            .entry(directive.dimension)
                            .or_insert(DimensionOrigin::BundleConfig);
                    }
                }
            }
        }

        let (uncompress_native_libraries, uncompress_origin) =
            match config.uncompress_native_libraries.explicit() {
                Some(explicit) => (explicit, SettingOrigin::BundleConfig),
                None => (baseline.uncompress_native_libraries(), SettingOrigin::Default),
            };

        let optimizations = ApkOptimizations::new(
            origins.keys().copied().collect(),
            uncompress_native_libraries,
        );

        tracing::debug!(
            version = %config.bundletool_version,
            directives = config.split_directives.len(),
            overridden = override_set.is_some(),
            dimensions = ?optimizations.split_dimensions(),
            uncompress_native_libraries,
            "resolved apk optimizations"
        );

        Ok(Resolution {
            bundletool_version: config.bundletool_version.clone(),
            optimizations,
            dimension_origins: origins,
            removed,
            uncompress_origin,
        })
    }
}

/// Resolve with a default [`OptimizationResolver`].
pub fn resolve(
    config: &BundleConfig,
    override_set: Option<&OverrideSet>,
) -> Result<ApkOptimizations, ResolveError> {
    OptimizationResolver::new().resolve(config, override_set)
}
