//! Bundle config file format (`BundleConfig.toml`)
//!
//! Only the fields that drive optimization resolution are read:
//!
//! ```toml
//! bundletool_version = "0.6.0"
//!
//! [optimizations]
//! uncompress_native_libraries = true
//!
//! [[optimizations.split_dimension]]
//! value = "ABI"
//! negate = true
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use split_optimizations::{
    BundleConfig, NativeLibrariesSetting, OptimizationDimension, SplitDirective, Version,
};
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Bundletool version assumed when a config does not declare one.
pub const DEFAULT_TOOL_VERSION: Version = Version::new(1, 15, 6);

/// Parsed bundle config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleConfigFile {
    /// Bundletool version the bundle was built with (strict semver)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundletool_version: Option<String>,

    #[serde(default)]
    pub optimizations: OptimizationsSection,
}

/// `[optimizations]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationsSection {
    /// Absent means "use the version's default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncompress_native_libraries: Option<bool>,

    /// Split directives in file order
    #[serde(default, rename = "split_dimension")]
    pub split_dimensions: Vec<SplitDimensionEntry>,
}

/// `[[optimizations.split_dimension]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDimensionEntry {
    /// Dimension name (e.g., "ABI", "SCREEN_DENSITY")
    pub value: String,

    /// Remove the dimension instead of adding it
    #[serde(default)]
    pub negate: bool,
}

impl BundleConfigFile {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path).map(|(file, _)| file)
    }

    /// Load from a TOML file, also returning the SHA-256 digest of its bytes
    pub fn read(path: &Path) -> Result<(Self, String), ConfigError> {
        let bytes = fs::read(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

        Ok((Self::from_toml_str(&contents)?, digest))
    }

    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))
    }

    /// Declared bundletool version, or `fallback` if none is declared
    pub fn version_or(&self, fallback: &Version) -> Result<Version, ConfigError> {
        match &self.bundletool_version {
            Some(raw) => Version::parse(raw.trim()).map_err(|e| ConfigError::InvalidVersion {
                version: raw.clone(),
                reason: e.to_string(),
            }),
            None => Ok(fallback.clone()),
        }
    }

    /// Convert into the resolver's input, validating versions and dimension names
    pub fn to_bundle_config(
        &self,
        fallback_version: &Version,
    ) -> Result<BundleConfig, ConfigError> {
        let split_directives = self
            .optimizations
            .split_dimensions
            .iter()
            .map(|entry| {
                let dimension: OptimizationDimension = entry.value.parse()?;
                Ok(SplitDirective {
                    dimension,
                    negate: entry.negate,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(BundleConfig {
            bundletool_version: self.version_or(fallback_version)?,
            split_directives,
            uncompress_native_libraries: NativeLibrariesSetting::from(
                self.optimizations.uncompress_native_libraries,
            ),
        })
    }
}
