//! Blob Store Module
//!
//! Flat key-value object storage, organized into named containers.
//!
//! ## Responsibilities
//! - Create containers on demand (idempotent)
//! - Store immutable byte blobs under (container, object) names
//! - Read blobs back for conflict checks and index lookups
//!
//! ## Layout Used by the Generator
//! ```text
//! hca-application/sample_index.json      the sample → partition index
//! hca-3f1c9a0b2e4d5f60/matrix.tsv        one container per partition
//! hca-91d0c47e8a2b6f13/matrix.tsv
//! ```
//!
//! Backends: [`MemoryStore`] (tests, benchmarks) and [`FsStore`]
//! (one directory per container).

mod fs;
mod memory;

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{DemoError, Result};

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Outcome of [`BlobStore::ensure_container`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    Created,
    AlreadyExists,
}

/// Object storage collaborator
///
/// Implementations must be safe to share across worker threads. Every call
/// may block; failures surface as [`DemoError::StorageUnavailable`].
pub trait BlobStore: Send + Sync {
    /// Create a container if it does not exist yet
    fn ensure_container(&self, name: &str) -> Result<ContainerStatus>;

    /// Store `data` under `object`, replacing any previous blob
    ///
    /// The container must already exist.
    fn put(&self, container: &str, object: &str, data: Bytes) -> Result<()>;

    /// Fetch a blob; `Ok(None)` when the container or object is absent
    fn get(&self, container: &str, object: &str) -> Result<Option<Bytes>>;

    /// Check for a blob without necessarily reading it
    fn exists(&self, container: &str, object: &str) -> Result<bool> {
        Ok(self.get(container, object)?.is_some())
    }

    /// Names of all containers, sorted
    fn list_containers(&self) -> Result<Vec<String>>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn ensure_container(&self, name: &str) -> Result<ContainerStatus> {
        (**self).ensure_container(name)
    }

    fn put(&self, container: &str, object: &str, data: Bytes) -> Result<()> {
        (**self).put(container, object, data)
    }

    fn get(&self, container: &str, object: &str) -> Result<Option<Bytes>> {
        (**self).get(container, object)
    }

    fn exists(&self, container: &str, object: &str) -> Result<bool> {
        (**self).exists(container, object)
    }

    fn list_containers(&self) -> Result<Vec<String>> {
        (**self).list_containers()
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn ensure_container(&self, name: &str) -> Result<ContainerStatus> {
        (**self).ensure_container(name)
    }

    fn put(&self, container: &str, object: &str, data: Bytes) -> Result<()> {
        (**self).put(container, object, data)
    }

    fn get(&self, container: &str, object: &str) -> Result<Option<Bytes>> {
        (**self).get(container, object)
    }

    fn exists(&self, container: &str, object: &str) -> Result<bool> {
        (**self).exists(container, object)
    }

    fn list_containers(&self) -> Result<Vec<String>> {
        (**self).list_containers()
    }
}

/// Maximum container name length (S3 bucket limit)
pub const MAX_CONTAINER_NAME: usize = 63;

/// Container names: 1-63 chars of `[a-z0-9-]`, not starting or ending with `-`
pub fn validate_container_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_CONTAINER_NAME {
        return Err(DemoError::invalid(
            "container",
            format!("'{}' must be 1-{} characters", name, MAX_CONTAINER_NAME),
        ));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(DemoError::invalid(
            "container",
            format!("'{}' may only contain [a-z0-9-]", name),
        ));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(DemoError::invalid(
            "container",
            format!("'{}' must not start or end with '-'", name),
        ));
    }
    Ok(())
}

/// Object names: `[A-Za-z0-9._-]`, not `.`/`..`, not hidden
pub fn validate_object_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('.') {
        return Err(DemoError::invalid(
            "object",
            format!("'{}' must be non-empty and must not start with '.'", name),
        ));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
    {
        return Err(DemoError::invalid(
            "object",
            format!("'{}' may only contain [A-Za-z0-9._-]", name),
        ));
    }
    Ok(())
}
