//! Provenance of a resolved optimization decision
//!
//! Structured JSON and human-readable explanations of which layer
//! (default policy, bundle config, override set) produced each value.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::dimension::OptimizationDimension;
use crate::optimizations::ApkOptimizations;

/// Layer that enabled a split dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionOrigin {
    Default,
    BundleConfig,
    Override,
}

/// Layer that decided the uncompress-native-libraries flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingOrigin {
    Default,
    BundleConfig,
}

/// A resolved decision together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Version whose default policy formed the baseline
    pub bundletool_version: Version,

    pub optimizations: ApkOptimizations,

    /// Origin of every active split dimension
    pub dimension_origins: BTreeMap<OptimizationDimension, DimensionOrigin>,

    /// Default dimensions switched off by bundle config directives
    pub removed: BTreeSet<OptimizationDimension>,

    pub uncompress_origin: SettingOrigin,
}

impl Resolution {
    pub fn into_optimizations(self) -> ApkOptimizations {
        self.optimizations
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate human-readable explanation
    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Bundletool version: {}", self.bundletool_version));
        lines.push(String::new());

        if self.dimension_origins.is_empty() {
            lines.push("Split dimensions: none".to_string());
        } else {
            lines.push("Split dimensions:".to_string());
            for (dimension, origin) in &self.dimension_origins {
                lines.push(format!("  + {} ({})", dimension, Self::format_origin(*origin)));
            }
        }

        if !self.removed.is_empty() {
            lines.push("Disabled by bundle config:".to_string());
            for dimension in &self.removed {
                lines.push(format!("  - {}", dimension));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Uncompress native libraries: {} ({})",
            self.optimizations.uncompress_native_libraries(),
            match self.uncompress_origin {
                SettingOrigin::Default => "default policy",
                SettingOrigin::BundleConfig => "bundle config",
            }
        ));

        lines.join("\n")
    }

    fn format_origin(origin: DimensionOrigin) -> &'static str {
        match origin {
            DimensionOrigin::Default => "default policy",
            DimensionOrigin::BundleConfig => "bundle config",
            DimensionOrigin::Override => "override",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resolution() -> Resolution {
        Resolution {
            bundletool_version: Version::new(0, 6, 0),
            optimizations: ApkOptimizations::new(
                [OptimizationDimension::ScreenDensity, OptimizationDimension::DeviceTier]
                    .into_iter()
                    .collect(),
                true,
            ),
            dimension_origins: [
                (OptimizationDimension::ScreenDensity, DimensionOrigin::Default),
                (OptimizationDimension::DeviceTier, DimensionOrigin::BundleConfig),
            ]
            .into_iter()
            .collect(),
            removed: [OptimizationDimension::Abi].into_iter().collect(),
            uncompress_origin: SettingOrigin::Default,
        }
    }

    #[test]
    fn test_to_human() {
        let human = sample_resolution().to_human();

        assert!(human.contains("Bundletool version: 0.6.0"));
        assert!(human.contains("  + SCREEN_DENSITY (default policy)"));
        assert!(human.contains("  + DEVICE_TIER (bundle config)"));
        assert!(human.contains("  - ABI"));
        assert!(human.contains("Uncompress native libraries: true (default policy)"));
    }

    #[test]
    fn test_to_human_no_dimensions() {
        let resolution = Resolution {
            optimizations: ApkOptimizations::new(BTreeSet::new(), false),
            dimension_origins: BTreeMap::new(),
            removed: BTreeSet::new(),
            uncompress_origin: SettingOrigin::BundleConfig,
            ..sample_resolution()
        };
        let human = resolution.to_human();

        assert!(human.contains("Split dimensions: none"));
        assert!(!human.contains("Disabled by bundle config"));
        assert!(human.contains("false (bundle config)"));
    }

    #[test]
    fn test_to_json() {
        let json = sample_resolution().to_json().unwrap();

        assert!(json.contains("\"bundletool_version\": \"0.6.0\""));
        assert!(json.contains("\"DEVICE_TIER\": \"bundle_config\""));
        assert!(json.contains("\"uncompress_origin\": \"default\""));
    }
}
