//! Default optimization policy per bundletool version
//!
//! The table is an ascending list of `(since, defaults)` entries. The defaults
//! for a version are those of the entry with the greatest `since` that is not
//! greater than the version. Changing the policy means appending an entry.

use semver::Version;
use std::collections::BTreeSet;

use crate::dimension::OptimizationDimension;
use crate::error::ResolveError;
use crate::optimizations::ApkOptimizations;

/// Split dimensions enabled by default since the first release.
const BASE_SPLIT_DIMENSIONS: &[OptimizationDimension] = &[
    OptimizationDimension::Abi,
    OptimizationDimension::ScreenDensity,
    OptimizationDimension::Language,
];

/// One row of the default policy table.
#[derive(Debug)]
struct PolicyEntry {
    since: Version,
    split_dimensions: &'static [OptimizationDimension],
    uncompress_native_libraries: bool,
}

impl PolicyEntry {
    fn to_optimizations(&self) -> ApkOptimizations {
        ApkOptimizations::new(
            self.split_dimensions.iter().copied().collect::<BTreeSet<_>>(),
            self.uncompress_native_libraries,
        )
    }
}

/// Must stay sorted by `since`, ascending.
static DEFAULT_POLICY: [PolicyEntry; 2] = [
    PolicyEntry {
        since: Version::new(0, 0, 0),
        split_dimensions: BASE_SPLIT_DIMENSIONS,
        uncompress_native_libraries: false,
    },
    // Native libraries are stored uncompressed by default from 0.6.0.
    PolicyEntry {
        since: Version::new(0, 6, 0),
        split_dimensions: BASE_SPLIT_DIMENSIONS,
        uncompress_native_libraries: true,
    },
];

/// Default optimizations that bundletool applied at the given version.
///
/// Fails with [`ResolveError::InvalidConfigurationState`] when the version is
/// older than the first table entry, which only a pre-release of `0.0.0` can be.
pub fn default_optimizations_for_version(
    version: &Version,
) -> Result<ApkOptimizations, ResolveError> {
    let entry = DEFAULT_POLICY
        .iter()
        .rev()
        .find(|entry| entry.since <= *version)
        .ok_or_else(|| ResolveError::InvalidConfigurationState {
            version: version.clone(),
        })?;

    tracing::debug!(%version, since = %entry.since, "selected default optimization policy");

    Ok(entry.to_optimizations())
}

/// Versions at which the default policy changed, ascending.
pub fn policy_thresholds() -> Vec<Version> {
    DEFAULT_POLICY.iter().map(|entry| entry.since.clone()).collect()
}
