//! Index lookup
//!
//! Read side of the index artifact.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{DemoError, Result};
use crate::store::BlobStore;

/// A parsed sample index
#[derive(Debug, Clone, Default)]
pub struct SampleIndex {
    /// Storage key → samples, in artifact order
    partitions: IndexMap<String, Vec<String>>,
    /// Sample id → position of its partition in `partitions`
    by_sample: HashMap<String, usize>,
}

impl SampleIndex {
    /// Parse an index artifact
    ///
    /// Fails if the bytes are not a JSON object of string arrays, or if a
    /// sample appears under more than one key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let partitions: IndexMap<String, Vec<String>> = serde_json::from_slice(bytes)?;

        let mut by_sample = HashMap::new();
        for (position, (key, samples)) in partitions.iter().enumerate() {
            for sample in samples {
                if let Some(previous) = by_sample.insert(sample.clone(), position) {
                    let other = partitions
                        .get_index(previous)
                        .map(|(k, _)| k.as_str())
                        .unwrap_or_default();
                    return Err(DemoError::Serialization(format!(
                        "sample {} listed under both {} and {}",
                        sample, other, key
                    )));
                }
            }
        }

        Ok(Self {
            partitions,
            by_sample,
        })
    }

    /// Fetch and parse the index from the application container
    pub fn load<S: BlobStore + ?Sized>(store: &S, config: &Config) -> Result<Self> {
        let bytes = store
            .get(&config.application_container, &config.index_object)?
            .ok_or_else(|| DemoError::ObjectNotFound {
                container: config.application_container.clone(),
                object: config.index_object.clone(),
            })?;
        Self::from_bytes(&bytes)
    }

    /// Storage key of the partition holding `sample_id`
    pub fn locate(&self, sample_id: &str) -> Option<&str> {
        let position = *self.by_sample.get(sample_id)?;
        self.partitions.get_index(position).map(|(k, _)| k.as_str())
    }

    /// Samples stored under `key`
    pub fn samples(&self, key: &str) -> Option<&[String]> {
        self.partitions.get(key).map(Vec::as_slice)
    }

    /// Storage keys in artifact order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.partitions.keys().map(String::as_str)
    }

    /// Number of partitions
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Total samples across all partitions
    pub fn sample_count(&self) -> usize {
        self.by_sample.len()
    }
}
