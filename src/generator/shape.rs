//! Dataset shape
//!
//! The three counts that define a run, validated up front.

use crate::error::{DemoError, Result};

/// How many partitions to build and how big each one is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetShape {
    datasets: u64,
    samples_per_partition: u64,
    features: u64,
}

impl DatasetShape {
    /// Validate caller-supplied counts
    ///
    /// Negative counts are rejected, as is a total sample count that does
    /// not fit the identifier space.
    pub fn new(datasets: i64, samples_per_partition: i64, features: i64) -> Result<Self> {
        Self::from_counts(
            non_negative("datasets_count", datasets)?,
            non_negative("samples_per_partition", samples_per_partition)?,
            non_negative("features_count", features)?,
        )
    }

    /// Validate unsigned counts
    pub fn from_counts(datasets: u64, samples_per_partition: u64, features: u64) -> Result<Self> {
        if datasets.checked_mul(samples_per_partition).is_none() {
            return Err(DemoError::invalid(
                "samples_per_partition",
                format!(
                    "{} datasets × {} samples overflows the sample index space",
                    datasets, samples_per_partition
                ),
            ));
        }
        // Rows and columns are held in memory
        for (name, count) in [
            ("samples_per_partition", samples_per_partition),
            ("features_count", features),
        ] {
            if usize::try_from(count).is_err() {
                return Err(DemoError::invalid(
                    name,
                    format!("{} does not fit in memory on this platform", count),
                ));
            }
        }
        Ok(Self {
            datasets,
            samples_per_partition,
            features,
        })
    }

    pub fn datasets(&self) -> u64 {
        self.datasets
    }

    pub fn samples_per_partition(&self) -> u64 {
        self.samples_per_partition
    }

    pub fn features(&self) -> u64 {
        self.features
    }

    /// Samples across every partition
    pub fn total_samples(&self) -> u64 {
        // Checked in the constructor
        self.datasets * self.samples_per_partition
    }

    /// Global index of the first sample in partition `ordinal`
    pub fn first_sample(&self, ordinal: u64) -> u64 {
        ordinal * self.samples_per_partition
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| DemoError::invalid(name, format!("{} is negative", value)))
}
