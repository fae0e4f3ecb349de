//! Concurrent resolution
//!
//! The resolver holds no mutable state, so its inputs and outputs can be
//! shared across threads and every thread sees the same result.

use std::sync::Arc;
use std::thread;

use apk_optimizer::{
    resolve, ApkOptimizations, BundleConfig, OptimizationDimension, OptimizationResolver,
    OverrideSet, Resolution, ResolveError, Version,
};

fn assert_send_sync<T: Send + Sync>() {}

// === Thread Safety Tests ===

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<ApkOptimizations>();
    assert_send_sync::<BundleConfig>();
    assert_send_sync::<Resolution>();
    assert_send_sync::<ResolveError>();
    assert_send_sync::<OptimizationResolver>();
    assert_send_sync::<OverrideSet>();
}

// === Parallel Resolution Tests ===

fn sample_config() -> BundleConfig {
    BundleConfig::builder(Version::new(0, 6, 0))
        .add_split_dimension_negated(OptimizationDimension::Language)
        .add_split_dimension(OptimizationDimension::TextureCompressionFormat)
        .set_uncompress_native_libraries(false)
        .build()
}

#[test]
fn test_concurrent_resolve_is_identical() {
    let config = Arc::new(sample_config());
    let expected = resolve(&config, None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                (0..100).map(|_| resolve(&config, None).unwrap()).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().expect("Thread panicked");
        assert!(results.iter().all(|result| *result == expected));
    }
    assert!(!expected.uncompress_native_libraries());
}

#[test]
fn test_concurrent_override_and_explain() {
    let config = Arc::new(sample_config());
    let overrides: Arc<OverrideSet> = Arc::new([OptimizationDimension::Abi].into_iter().collect());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let config = Arc::clone(&config);
            let overrides = Arc::clone(&overrides);
            thread::spawn(move || {
                let override_set = if i % 2 == 0 { Some(overrides.as_ref()) } else { None };
                let resolver = OptimizationResolver::new();
                let resolution = resolver.explain(&config, override_set).unwrap();
                (i, resolution)
            })
        })
        .collect();

    for handle in handles {
        let (i, resolution) = handle.join().expect("Thread panicked");
        if i % 2 == 0 {
            assert_eq!(resolution.optimizations.split_dimensions(), overrides.as_ref());
        } else {
            assert_eq!(resolution.optimizations, resolve(&config, None).unwrap());
        }
        assert!(!resolution.optimizations.uncompress_native_libraries());
    }
}

#[test]
fn test_concurrent_below_table_error() {
    let version = Version::parse("0.0.0-rc1").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = BundleConfig::for_version(version.clone());
            thread::spawn(move || resolve(&config, None))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("Thread panicked");
        assert_eq!(
            result,
            Err(ResolveError::InvalidConfigurationState {
                version: version.clone()
            })
        );
    }
}
