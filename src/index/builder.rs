//! Index builder

use bytes::Bytes;
use indexmap::IndexMap;

use crate::error::{DemoError, Result};
use crate::partition::{StorageKey, PARTITION_OBJECT};

/// Result of recording an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new key was added
    Inserted,
    /// The key was already present with the same samples; nothing changed
    Duplicate,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    ordinal: u64,
    samples: Vec<String>,
}

/// Accumulates `StorageKey → [SampleId]` entries for one run
///
/// Entries carry the ordinal of the partition that produced them, so the
/// finalized artifact is in generation order even when workers record out
/// of order.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: IndexMap<StorageKey, IndexEntry>,
    next_ordinal: u64,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after every entry recorded so far
    pub fn record(&mut self, key: StorageKey, samples: Vec<String>) -> Result<RecordOutcome> {
        let ordinal = self.next_ordinal;
        self.record_at(ordinal, key, samples)
    }

    /// Record an entry for partition number `ordinal`
    ///
    /// A key that is already present with a different sample list is a
    /// [`DemoError::StorageConflict`]; the existing entry is left untouched.
    pub fn record_at(
        &mut self,
        ordinal: u64,
        key: StorageKey,
        samples: Vec<String>,
    ) -> Result<RecordOutcome> {
        if self.check(&key, &samples)? == RecordOutcome::Duplicate {
            return Ok(RecordOutcome::Duplicate);
        }
        self.next_ordinal = self.next_ordinal.max(ordinal.saturating_add(1));
        self.entries.insert(key, IndexEntry { ordinal, samples });
        Ok(RecordOutcome::Inserted)
    }

    /// Check whether recording `samples` under `key` would succeed
    pub fn check(&self, key: &StorageKey, samples: &[String]) -> Result<RecordOutcome> {
        match self.entries.get(key) {
            None => Ok(RecordOutcome::Inserted),
            Some(entry) if entry.samples == samples => Ok(RecordOutcome::Duplicate),
            Some(entry) => Err(DemoError::StorageConflict {
                container: key.to_string(),
                object: PARTITION_OBJECT.to_string(),
                reason: format!(
                    "key already indexed with {} different samples",
                    entry.samples.len()
                ),
            }),
        }
    }

    /// Samples recorded under `key`
    pub fn samples(&self, key: &StorageKey) -> Option<&[String]> {
        self.entries.get(key).map(|e| e.samples.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in partition-generation order
    pub fn keys(&self) -> Vec<StorageKey> {
        self.ordered().into_iter().map(|(k, _)| k.clone()).collect()
    }

    /// Serialize every entry recorded so far as a JSON object
    ///
    /// Safe to call repeatedly; each call reflects the current state.
    pub fn finalize(&self) -> Result<Bytes> {
        let map: IndexMap<&StorageKey, &[String]> = self
            .ordered()
            .into_iter()
            .map(|(key, entry)| (key, entry.samples.as_slice()))
            .collect();
        let mut json = serde_json::to_vec_pretty(&map)?;
        json.push(b'\n');
        Ok(Bytes::from(json))
    }

    fn ordered(&self) -> Vec<(&StorageKey, &IndexEntry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.ordinal);
        entries
    }
}
