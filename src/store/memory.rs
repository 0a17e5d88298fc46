//! In-memory blob store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::{DemoError, Result};

use super::{validate_container_name, validate_object_name, BlobStore, ContainerStatus};

/// Blob store held entirely in memory
///
/// ## Concurrency:
/// - `containers`: RwLock (concurrent readers, exclusive writer)
/// - `puts`: atomic counter of successful puts (lock-free)
#[derive(Default)]
pub struct MemoryStore {
    containers: RwLock<BTreeMap<String, BTreeMap<String, Bytes>>>,
    puts: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `put` calls so far
    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::SeqCst)
    }

    /// Total objects across all containers
    pub fn object_count(&self) -> usize {
        self.containers.read().values().map(BTreeMap::len).sum()
    }

    /// Object names inside one container, sorted
    pub fn objects(&self, container: &str) -> Vec<String> {
        self.containers
            .read()
            .get(container)
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl BlobStore for MemoryStore {
    fn ensure_container(&self, name: &str) -> Result<ContainerStatus> {
        validate_container_name(name)?;
        let mut containers = self.containers.write();
        if containers.contains_key(name) {
            return Ok(ContainerStatus::AlreadyExists);
        }
        containers.insert(name.to_string(), BTreeMap::new());
        Ok(ContainerStatus::Created)
    }

    fn put(&self, container: &str, object: &str, data: Bytes) -> Result<()> {
        validate_object_name(object)?;
        let mut containers = self.containers.write();
        let objects = containers.get_mut(container).ok_or_else(|| {
            DemoError::StorageUnavailable(format!("container '{}' does not exist", container))
        })?;
        objects.insert(object.to_string(), data);
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn get(&self, container: &str, object: &str) -> Result<Option<Bytes>> {
        Ok(self
            .containers
            .read()
            .get(container)
            .and_then(|objects| objects.get(object))
            .cloned())
    }

    fn list_containers(&self) -> Result<Vec<String>> {
        Ok(self.containers.read().keys().cloned().collect())
    }
}
