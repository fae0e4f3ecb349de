//! Split dimension identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An axis along which an app bundle can be split into device-specific APKs.
///
/// Only set membership matters. The derived ordering exists so that sets of
/// dimensions iterate and serialize deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationDimension {
    /// Native library ABI (e.g., "arm64-v8a").
    Abi,
    /// Screen density buckets.
    ScreenDensity,
    /// Language resources.
    Language,
    /// Texture compression format of assets.
    TextureCompressionFormat,
    /// Device tier of assets.
    DeviceTier,
}

impl OptimizationDimension {
    /// Every known dimension.
    pub const ALL: [OptimizationDimension; 5] = [
        OptimizationDimension::Abi,
        OptimizationDimension::ScreenDensity,
        OptimizationDimension::Language,
        OptimizationDimension::TextureCompressionFormat,
        OptimizationDimension::DeviceTier,
    ];

    /// Canonical serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationDimension::Abi => "ABI",
            OptimizationDimension::ScreenDensity => "SCREEN_DENSITY",
            OptimizationDimension::Language => "LANGUAGE",
            OptimizationDimension::TextureCompressionFormat => "TEXTURE_COMPRESSION_FORMAT",
            OptimizationDimension::DeviceTier => "DEVICE_TIER",
        }
    }
}

impl fmt::Display for OptimizationDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dimension name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown split dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for OptimizationDimension {
    type Err = UnknownDimension;

    /// Accepts the canonical name in any case, with `-` allowed for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        OptimizationDimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
