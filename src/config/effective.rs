//! Effective optimizations with full provenance
//!
//! Captures the resolved optimizations plus the bundle config file and
//! override set they were derived from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use split_optimizations::{
    ApkOptimizations, BundleConfig, OptimizationResolver, OverrideSet, Resolution, Version,
};
use std::fs;
use std::io;
use std::path::Path;

use super::error::ConfigError;
use super::file::BundleConfigFile;

/// Schema version for effective_optimizations
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "apk-optimizer/effective_optimizations@1";

/// The bundle config file that was resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigSource {
    pub path: String,

    /// SHA-256 digest of raw file bytes
    pub digest: String,
}

/// Effective optimizations with full provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveOptimizations {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this record was computed
    pub created_at: DateTime<Utc>,

    /// Bundle config file (None when resolving defaults only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ConfigSource>,

    /// Override set supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_set: Option<OverrideSet>,

    /// The bundle config that was resolved
    pub bundle_config: BundleConfig,

    /// Resolved optimizations and where each value came from
    pub resolution: Resolution,
}

impl EffectiveOptimizations {
    /// Load the config file (if any) and resolve it
    pub fn build(
        config_path: Option<&Path>,
        fallback_version: &Version,
        override_set: Option<OverrideSet>,
    ) -> Result<Self, ConfigError> {
        let (file, source) = match config_path {
            Some(path) => {
                let (file, digest) = BundleConfigFile::read(path)?;
                tracing::debug!(path = %path.display(), %digest, "loaded bundle config");
                let source = ConfigSource {
                    path: path.to_string_lossy().to_string(),
                    digest,
                };
                (file, Some(source))
            }
            None => (BundleConfigFile::default(), None),
        };

        let bundle_config = file.to_bundle_config(fallback_version)?;
        Self::from_bundle_config(bundle_config, source, override_set)
    }

    /// Resolve an already-parsed bundle config. An empty override set is dropped.
    pub fn from_bundle_config(
        bundle_config: BundleConfig,
        source: Option<ConfigSource>,
        override_set: Option<OverrideSet>,
    ) -> Result<Self, ConfigError> {
        let override_set = override_set.filter(|overrides| !overrides.is_empty());
        if override_set.is_some() && !bundle_config.split_directives.is_empty() {
            tracing::warn!(
                ignored = bundle_config.split_directives.len(),
                "override set replaces split dimension directives from bundle config"
            );
        }

        let resolution =
            OptimizationResolver::new().explain(&bundle_config, override_set.as_ref())?;

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            source,
            override_set,
            bundle_config,
            resolution,
        })
    }

    /// The resolved optimizations
    pub fn optimizations(&self) -> &ApkOptimizations {
        &self.resolution.optimizations
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary
    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        match &self.source {
            Some(source) => {
                lines.push(format!("Config: {} (sha256 {})", source.path, source.digest))
            }
            None => lines.push("Config: <none>".to_string()),
        }
        if let Some(overrides) = &self.override_set {
            let names: Vec<&str> = overrides.iter().map(|d| d.as_str()).collect();
            lines.push(format!("Override: [{}]", names.join(", ")));
        }
        lines.push(self.resolution.to_human());
        lines.join("\n")
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }
}
