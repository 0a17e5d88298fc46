//! Run ledger
//!
//! Pairs the index builder with the keys currently being uploaded, so two
//! workers can never race to the same key with different samples.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::{DemoError, Result};
use crate::index::{IndexBuilder, RecordOutcome};
use crate::partition::{StorageKey, PARTITION_OBJECT};

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    index: IndexBuilder,
    /// Keys claimed by an upload that has not committed yet
    pending: HashMap<StorageKey, Vec<String>>,
}

impl Ledger {
    /// Reserve `key` for an upload of `samples`
    ///
    /// Fails with a conflict if the key is indexed or pending with a
    /// different sample list.
    pub fn claim(&mut self, key: &StorageKey, samples: &[String]) -> Result<()> {
        self.index.check(key, samples)?;
        match self.pending.get(key) {
            Some(pending) if pending.as_slice() != samples => Err(DemoError::StorageConflict {
                container: key.to_string(),
                object: PARTITION_OBJECT.to_string(),
                reason: "key is being written by another partition".to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.pending.insert(key.clone(), samples.to_vec());
                Ok(())
            }
        }
    }

    /// Record a persisted partition and drop its reservation
    pub fn commit(
        &mut self,
        ordinal: u64,
        key: StorageKey,
        samples: Vec<String>,
    ) -> Result<RecordOutcome> {
        self.pending.remove(&key);
        self.index.record_at(ordinal, key, samples)
    }

    /// Drop a reservation after a failed upload
    pub fn release(&mut self, key: &StorageKey) {
        self.pending.remove(key);
    }

    pub fn finalize(&self) -> Result<Bytes> {
        self.index.finalize()
    }
}
