//! Matrix synthesizer
//!
//! Composes identifiers and rows into one labeled partition.

use rand::Rng;

use super::RowSynthesizer;

/// A labeled sample × feature table
///
/// Rows follow `sample_ids` order exactly; the index artifact relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Row labels, in generation order
    pub sample_ids: Vec<String>,
    /// Column labels, shared by every partition of a run
    pub feature_ids: Vec<String>,
    /// One row per sample, each `feature_ids.len()` wide
    pub rows: Vec<Vec<f64>>,
}

impl Partition {
    /// Build a partition from explicit values
    ///
    /// Returns None when the row count or any row width disagrees with
    /// the labels.
    pub fn from_rows(
        sample_ids: Vec<String>,
        feature_ids: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Option<Self> {
        if rows.len() != sample_ids.len() || rows.iter().any(|r| r.len() != feature_ids.len()) {
            return None;
        }
        Some(Self {
            sample_ids,
            feature_ids,
            rows,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.sample_ids.len()
    }

    pub fn feature_count(&self) -> usize {
        self.feature_ids.len()
    }

    /// Value at (row, column), if in range
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Mutable access to a single cell
    pub fn value_mut(&mut self, row: usize, column: usize) -> Option<&mut f64> {
        self.rows.get_mut(row)?.get_mut(column)
    }
}

/// Synthesize a partition with one fresh row per sample id
pub fn matrix<R: Rng + ?Sized>(
    synth: &RowSynthesizer,
    rng: &mut R,
    sample_ids: Vec<String>,
    feature_ids: Vec<String>,
) -> Partition {
    let width = feature_ids.len();
    let rows = sample_ids
        .iter()
        .map(|_| synth.row(&mut *rng, width))
        .collect();
    Partition {
        sample_ids,
        feature_ids,
        rows,
    }
}
