//! Tests for identifier generation
//!
//! These tests verify:
//! - Prefix and zero-padding format
//! - Counts, ordering and offsets
//! - Width growth past eight digits
//! - Parsing identifiers back to indices

use hcademo::ids::{
    feature_id, features, parse_feature_index, parse_sample_index, sample_id, samples, ID_WIDTH,
};
use hcademo::DemoError;

// =============================================================================
// Feature Tests
// =============================================================================

#[test]
fn test_features_empty() {
    assert!(features(0).is_empty());
}

#[test]
fn test_features_format() {
    assert_eq!(
        features(3),
        vec!["ENSG00000000", "ENSG00000001", "ENSG00000002"]
    );
}

#[test]
fn test_features_strictly_increasing() {
    let ids = features(250);
    assert_eq!(ids.len(), 250);

    let indices: Vec<u64> = ids.iter().map(|id| parse_feature_index(id).unwrap()).collect();
    assert!(indices.windows(2).all(|w| w[0] + 1 == w[1]));
    assert_eq!(indices[0], 0);

    for id in &ids {
        assert_eq!(id.len(), 4 + ID_WIDTH);
        assert!(id.starts_with("ENSG"));
    }
}

#[test]
fn test_features_identical_across_calls() {
    assert_eq!(features(17), features(17));
}

// =============================================================================
// Sample Tests
// =============================================================================

#[test]
fn test_samples_empty_for_any_start() {
    assert!(samples(0, 0).unwrap().is_empty());
    assert!(samples(0, 12345).unwrap().is_empty());
    assert!(samples(0, u64::MAX).unwrap().is_empty());
}

#[test]
fn test_samples_from_zero() {
    assert_eq!(samples(2, 0).unwrap(), vec!["SMPL00000000", "SMPL00000001"]);
}

#[test]
fn test_samples_with_offset() {
    let ids = samples(3, 10).unwrap();
    assert_eq!(ids, vec!["SMPL00000010", "SMPL00000011", "SMPL00000012"]);
}

#[test]
fn test_samples_adjacent_windows_do_not_overlap() {
    let first = samples(10, 0).unwrap();
    let second = samples(10, 10).unwrap();

    assert!(first.iter().all(|id| !second.contains(id)));
    assert_eq!(first.last().unwrap(), "SMPL00000009");
    assert_eq!(second.first().unwrap(), "SMPL00000010");
}

#[test]
fn test_samples_overflow_rejected() {
    let err = samples(2, u64::MAX).unwrap_err();
    assert!(matches!(err, DemoError::InvalidParameter { name: "start", .. }));
}

// =============================================================================
// Width Tests
// =============================================================================

#[test]
fn test_width_boundary() {
    assert_eq!(sample_id(99_999_999), "SMPL99999999");
    assert_eq!(sample_id(100_000_000), "SMPL100000000");
    assert_eq!(feature_id(1_234_567_890), "ENSG1234567890");
}

#[test]
fn test_wide_ids_are_not_truncated() {
    let ids = samples(2, 99_999_999).unwrap();
    assert_eq!(ids, vec!["SMPL99999999", "SMPL100000000"]);
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_sample_index() {
    assert_eq!(parse_sample_index("SMPL00000042"), Some(42));
    assert_eq!(parse_sample_index("SMPL100000000"), Some(100_000_000));
}

#[test]
fn test_parse_rejects_foreign_ids() {
    assert_eq!(parse_sample_index("ENSG00000042"), None);
    assert_eq!(parse_sample_index("SMPL42"), None);
    assert_eq!(parse_sample_index("SMPL0000004x"), None);
    assert_eq!(parse_sample_index("SMPL000000042"), None);
    assert_eq!(parse_feature_index("SMPL00000042"), None);
}

#[test]
fn test_parse_inverts_formatting() {
    for index in [0u64, 7, 12_345_678, 99_999_999, 100_000_000, u64::MAX] {
        assert_eq!(parse_sample_index(&sample_id(index)), Some(index));
    }
}
