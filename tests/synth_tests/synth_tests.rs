//! Tests for row and matrix synthesis
//!
//! These tests verify:
//! - Row width and non-negativity
//! - Clipping produces exact zeros
//! - Rows are independent draws
//! - Matrix labels and row order
//! - Parameter validation

use hcademo::ids::{features, samples};
use hcademo::synth::{matrix, standard_normal, Partition, RowSynthesizer, FLOOR};
use hcademo::DemoError;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

// =============================================================================
// Row Tests
// =============================================================================

#[test]
fn test_row_width() {
    let synth = RowSynthesizer::default();
    let mut rng = rng(1);

    assert_eq!(synth.row(&mut rng, 0).len(), 0);
    assert_eq!(synth.row(&mut rng, 1).len(), 1);
    assert_eq!(synth.row(&mut rng, 500).len(), 500);
}

#[test]
fn test_row_values_non_negative() {
    let synth = RowSynthesizer::default();
    let mut rng = rng(2);

    for _ in 0..100 {
        for value in synth.row(&mut rng, 200) {
            assert!(value >= FLOOR, "value {} below floor", value);
            assert!(value.is_finite());
        }
    }
}

#[test]
fn test_row_clips_to_exact_zero() {
    // With location 4 and scale 10, about a third of draws are negative
    let synth = RowSynthesizer::default();
    let values = synth.row(&mut rng(3), 10_000);
    let zeros = values.iter().filter(|&&v| v == 0.0).count();

    assert!(zeros > 2_000, "expected many clipped zeros, got {}", zeros);
    assert!(zeros < 5_000, "expected many positive values, got {} zeros", zeros);
}

#[test]
fn test_row_mean_reflects_location() {
    // Clipped normal(4, 10) has mean ≈ 6.3
    let synth = RowSynthesizer::default();
    let values = synth.row(&mut rng(4), 50_000);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    assert!(mean > 5.8 && mean < 6.8, "unexpected mean {}", mean);
}

#[test]
fn test_rows_are_independent() {
    let synth = RowSynthesizer::default();
    let mut rng = rng(5);

    let first = synth.row(&mut rng, 64);
    let second = synth.row(&mut rng, 64);

    assert_ne!(first, second);
}

#[test]
fn test_same_seed_same_row() {
    let synth = RowSynthesizer::default();
    assert_eq!(synth.row(&mut rng(6), 32), synth.row(&mut rng(6), 32));
}

#[test]
fn test_standard_normal_moments() {
    let mut rng = rng(7);
    let draws: Vec<f64> = (0..50_000).map(|_| standard_normal(&mut rng)).collect();
    let mean = draws.iter().sum::<f64>() / draws.len() as f64;
    let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / draws.len() as f64;

    assert!(mean.abs() < 0.05, "mean {}", mean);
    assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    assert!(draws.iter().all(|d| d.is_finite()));
}

// =============================================================================
// Parameter Tests
// =============================================================================

#[test]
fn test_default_parameters() {
    let synth = RowSynthesizer::default();
    assert_eq!(synth.location(), 4.0);
    assert_eq!(synth.scale(), 10.0);
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(matches!(
        RowSynthesizer::new(f64::NAN, 1.0),
        Err(DemoError::InvalidParameter { name: "location", .. })
    ));
    assert!(matches!(
        RowSynthesizer::new(0.0, 0.0),
        Err(DemoError::InvalidParameter { name: "scale", .. })
    ));
    assert!(matches!(
        RowSynthesizer::new(0.0, f64::INFINITY),
        Err(DemoError::InvalidParameter { name: "scale", .. })
    ));
}

#[test]
fn test_negative_location_still_non_negative() {
    let synth = RowSynthesizer::new(-50.0, 1.0).unwrap();
    assert!(synth.row(&mut rng(8), 100).iter().all(|&v| v == 0.0));
}

// =============================================================================
// Matrix Tests
// =============================================================================

#[test]
fn test_matrix_shape_and_labels() {
    let synth = RowSynthesizer::default();
    let sample_ids = samples(4, 20).unwrap();
    let feature_ids = features(3);

    let m = matrix(&synth, &mut rng(9), sample_ids.clone(), feature_ids.clone());

    assert_eq!(m.sample_count(), 4);
    assert_eq!(m.feature_count(), 3);
    assert_eq!(m.sample_ids, sample_ids);
    assert_eq!(m.feature_ids, feature_ids);
    assert!(m.rows.iter().all(|row| row.len() == 3));
}

#[test]
fn test_matrix_empty_dimensions() {
    let synth = RowSynthesizer::default();

    let no_samples = matrix(&synth, &mut rng(10), Vec::new(), features(5));
    assert_eq!(no_samples.sample_count(), 0);
    assert!(no_samples.rows.is_empty());

    let no_features = matrix(&synth, &mut rng(10), samples(3, 0).unwrap(), Vec::new());
    assert_eq!(no_features.sample_count(), 3);
    assert!(no_features.rows.iter().all(Vec::is_empty));
}

#[test]
fn test_matrix_row_order_follows_sample_order() {
    let synth = RowSynthesizer::default();
    let reversed: Vec<String> = samples(3, 0).unwrap().into_iter().rev().collect();

    let m = matrix(&synth, &mut rng(11), reversed.clone(), features(2));

    assert_eq!(m.sample_ids, reversed);
}

#[test]
fn test_partition_from_rows_validates_shape() {
    let ok = Partition::from_rows(
        vec!["SMPL00000000".to_string()],
        vec!["ENSG00000000".to_string(), "ENSG00000001".to_string()],
        vec![vec![1.0, 2.0]],
    );
    assert!(ok.is_some());

    let bad_width = Partition::from_rows(
        vec!["SMPL00000000".to_string()],
        vec!["ENSG00000000".to_string()],
        vec![vec![1.0, 2.0]],
    );
    assert!(bad_width.is_none());

    let bad_rows = Partition::from_rows(vec![], vec![], vec![vec![]]);
    assert!(bad_rows.is_none());
}

#[test]
fn test_partition_cell_access() {
    let mut p = Partition::from_rows(
        samples(2, 0).unwrap(),
        features(2),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
    )
    .unwrap();

    assert_eq!(p.value(1, 0), Some(3.0));
    assert_eq!(p.value(2, 0), None);

    *p.value_mut(0, 1).unwrap() = 9.5;
    assert_eq!(p.value(0, 1), Some(9.5));
}
