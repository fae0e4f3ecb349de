//! Optimization settings carried by a bundle configuration.

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::dimension::OptimizationDimension;

/// Explicit setting for storing native libraries uncompressed.
///
/// `Unset` and `Disabled` are distinct: only `Unset` falls back to the
/// version's default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeLibrariesSetting {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl NativeLibrariesSetting {
    /// The explicit value, if any.
    pub fn explicit(self) -> Option<bool> {
        match self {
            NativeLibrariesSetting::Unset => None,
            NativeLibrariesSetting::Enabled => Some(true),
            NativeLibrariesSetting::Disabled => Some(false),
        }
    }
}

impl From<Option<bool>> for NativeLibrariesSetting {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => NativeLibrariesSetting::Unset,
            Some(true) => NativeLibrariesSetting::Enabled,
            Some(false) => NativeLibrariesSetting::Disabled,
        }
    }
}

/// Adds a dimension to the active set, or removes it when `negate` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDirective {
    pub dimension: OptimizationDimension,
    #[serde(default)]
    pub negate: bool,
}

impl SplitDirective {
    pub fn enable(dimension: OptimizationDimension) -> Self {
        Self {
            dimension,
            negate: false,
        }
    }

    pub fn disable(dimension: OptimizationDimension) -> Self {
        Self {
            dimension,
            negate: true,
        }
    }
}

/// The parts of a bundle configuration that drive optimization resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Bundletool version the bundle was built with.
    pub bundletool_version: Version,

    /// Split dimension directives, applied in order.
    #[serde(default)]
    pub split_directives: Vec<SplitDirective>,

    #[serde(default)]
    pub uncompress_native_libraries: NativeLibrariesSetting,
}

impl BundleConfig {
    /// Config with no directives and an unset uncompress setting.
    pub fn for_version(bundletool_version: Version) -> Self {
        Self {
            bundletool_version,
            split_directives: Vec::new(),
            uncompress_native_libraries: NativeLibrariesSetting::Unset,
        }
    }

    pub fn builder(bundletool_version: Version) -> BundleConfigBuilder {
        BundleConfigBuilder::create(bundletool_version)
    }
}

/// Incremental construction of a [`BundleConfig`].
#[derive(Debug, Clone)]
pub struct BundleConfigBuilder {
    config: BundleConfig,
}

impl BundleConfigBuilder {
    pub fn create(bundletool_version: Version) -> Self {
        Self {
            config: BundleConfig::for_version(bundletool_version),
        }
    }

    pub fn set_version(mut self, bundletool_version: Version) -> Self {
        self.config.bundletool_version = bundletool_version;
        self
    }

    pub fn add_split_dimension(mut self, dimension: OptimizationDimension) -> Self {
        self.config.split_directives.push(SplitDirective::enable(dimension));
        self
    }

    pub fn add_split_dimension_negated(mut self, dimension: OptimizationDimension) -> Self {
        self.config.split_directives.push(SplitDirective::disable(dimension));
        self
    }

    pub fn set_uncompress_native_libraries(mut self, enabled: bool) -> Self {
        self.config.uncompress_native_libraries = Some(enabled).into();
        self
    }

    /// Drop every optimization directive and the uncompress setting.
    pub fn clear_optimizations(mut self) -> Self {
        self.config.split_directives.clear();
        self.config.uncompress_native_libraries = NativeLibrariesSetting::Unset;
        self
    }

    pub fn build(self) -> BundleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_libraries_setting() {
        assert_eq!(NativeLibrariesSetting::default(), NativeLibrariesSetting::Unset);
        assert_eq!(NativeLibrariesSetting::Unset.explicit(), None);
        assert_eq!(NativeLibrariesSetting::Enabled.explicit(), Some(true));
        assert_eq!(NativeLibrariesSetting::Disabled.explicit(), Some(false));
        assert_eq!(NativeLibrariesSetting::from(Some(false)), NativeLibrariesSetting::Disabled);
    }

    #[test]
    fn test_builder_keeps_directive_order() {
        let config = BundleConfig::builder(Version::new(0, 2, 0))
            .add_split_dimension(OptimizationDimension::Abi)
            .add_split_dimension_negated(OptimizationDimension::Abi)
            .set_uncompress_native_libraries(false)
            .build();

        assert_eq!(
            config.split_directives,
            vec![
                SplitDirective::enable(OptimizationDimension::Abi),
                SplitDirective::disable(OptimizationDimension::Abi),
            ]
        );
        assert_eq!(config.uncompress_native_libraries, NativeLibrariesSetting::Disabled);
    }

    #[test]
    fn test_clear_optimizations() {
        let config = BundleConfigBuilder::create(Version::new(0, 2, 0))
            .add_split_dimension(OptimizationDimension::Language)
            .set_uncompress_native_libraries(true)
            .clear_optimizations()
            .set_version(Version::new(0, 6, 0))
            .build();

        assert_eq!(config, BundleConfig::for_version(Version::new(0, 6, 0)));
    }

    #[test]
    fn test_directive_negate_defaults_to_false() {
        let directive: SplitDirective =
            serde_json::from_str(r#"{"dimension":"LANGUAGE"}"#).unwrap();
        assert_eq!(directive, SplitDirective::enable(OptimizationDimension::Language));
    }
}
