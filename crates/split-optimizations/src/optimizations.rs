//! The resolved optimization decision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dimension::OptimizationDimension;

/// Optimizations to apply when generating split APKs.
///
/// Constructed once per resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApkOptimizations {
    split_dimensions: BTreeSet<OptimizationDimension>,
    uncompress_native_libraries: bool,
}

impl ApkOptimizations {
    pub fn new(
        split_dimensions: BTreeSet<OptimizationDimension>,
        uncompress_native_libraries: bool,
    ) -> Self {
        Self {
            split_dimensions,
            uncompress_native_libraries,
        }
    }

    /// Active split dimensions.
    pub fn split_dimensions(&self) -> &BTreeSet<OptimizationDimension> {
        &self.split_dimensions
    }

    /// Whether native libraries are stored uncompressed in the APKs.
    pub fn uncompress_native_libraries(&self) -> bool {
        self.uncompress_native_libraries
    }

    pub fn splits_by(&self, dimension: OptimizationDimension) -> bool {
        self.split_dimensions.contains(&dimension)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
