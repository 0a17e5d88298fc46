//! Filesystem blob store
//!
//! One directory per container under a root directory; one file per object.
//! Writes go to a temporary file first and are renamed into place, so a
//! reader never observes a half-written blob.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;

use crate::error::{DemoError, Result};

use super::{validate_container_name, validate_object_name, BlobStore, ContainerStatus};

/// Blob store backed by a local directory tree
pub struct FsStore {
    root: PathBuf,
    /// Distinguishes temp files of concurrent writers
    next_tmp: AtomicU64,
}

impl FsStore {
    /// Open or create a store rooted at `root`
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).map_err(|e| unavailable("create store root", root, e))?;
        Ok(Self {
            root: root.to_path_buf(),
            next_tmp: AtomicU64::new(0),
        })
    }

    /// Get the root directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an object file (the object need not exist)
    pub fn object_path(&self, container: &str, object: &str) -> PathBuf {
        self.root.join(container).join(object)
    }
}

impl BlobStore for FsStore {
    fn ensure_container(&self, name: &str) -> Result<ContainerStatus> {
        validate_container_name(name)?;
        let dir = self.root.join(name);
        match fs::create_dir(&dir) {
            Ok(()) => Ok(ContainerStatus::Created),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
                Ok(ContainerStatus::AlreadyExists)
            }
            Err(e) => Err(unavailable("create container", &dir, e)),
        }
    }

    fn put(&self, container: &str, object: &str, data: Bytes) -> Result<()> {
        validate_container_name(container)?;
        validate_object_name(object)?;

        let dir = self.root.join(container);
        if !dir.is_dir() {
            return Err(DemoError::StorageUnavailable(format!(
                "container '{}' does not exist",
                container
            )));
        }

        let tmp_id = self.next_tmp.fetch_add(1, Ordering::Relaxed);
        let tmp_path = dir.join(format!(".{}.{}.{}.tmp", object, std::process::id(), tmp_id));
        let final_path = dir.join(object);

        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
            fs::rename(&tmp_path, &final_path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            unavailable("write object", &final_path, e)
        })
    }

    fn get(&self, container: &str, object: &str) -> Result<Option<Bytes>> {
        validate_container_name(container)?;
        validate_object_name(object)?;
        let path = self.object_path(container, object);
        match fs::read(&path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read object", &path, e)),
        }
    }

    fn exists(&self, container: &str, object: &str) -> Result<bool> {
        validate_container_name(container)?;
        validate_object_name(object)?;
        Ok(self.object_path(container, object).is_file())
    }

    fn list_containers(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(|e| unavailable("list", &self.root, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| unavailable("list", &self.root, e))?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

fn unavailable(action: &str, path: &Path, err: io::Error) -> DemoError {
    DemoError::StorageUnavailable(format!("{} {}: {}", action, path.display(), err))
}
