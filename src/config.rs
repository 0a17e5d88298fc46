//! Configuration for hcademo
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DemoError, Result};
use crate::partition::KEY_HASH_LEN;
use crate::store::{validate_container_name, MAX_CONTAINER_NAME};

/// Main configuration for a generation run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the filesystem blob store
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── hca-application/
    ///     │     └── sample_index.json
    ///     └── hca-<digest>/        (one container per partition)
    ///           └── matrix.tsv
    pub data_dir: PathBuf,

    /// Prefix prepended to every partition's content digest
    pub namespace: String,

    /// Container holding the sample index (never a partition container)
    pub application_container: String,

    /// Object name of the sample index inside the application container
    pub index_object: String,

    // -------------------------------------------------------------------------
    // Generation Configuration
    // -------------------------------------------------------------------------
    /// Worker threads building and uploading partitions (1 = sequential)
    pub workers: usize,

    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./hcademo_data"),
            namespace: "hca".to_string(),
            application_container: "hca-application".to_string(),
            index_object: "sample_index.json".to_string(),
            workers: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check names and counts before any generation starts
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(DemoError::Config("workers must be at least 1".to_string()));
        }
        validate_container_name(&self.namespace)
            .map_err(|e| DemoError::Config(format!("namespace: {}", e)))?;
        // Every partition container is `<namespace>-<digest>`
        let key_len = self.namespace.len() + 1 + KEY_HASH_LEN;
        if key_len > MAX_CONTAINER_NAME {
            return Err(DemoError::Config(format!(
                "namespace '{}' is too long: partition containers would be {} characters (max {})",
                self.namespace, key_len, MAX_CONTAINER_NAME
            )));
        }
        validate_container_name(&self.application_container)
            .map_err(|e| DemoError::Config(format!("application container: {}", e)))?;
        // A partition container is `<namespace>-<16 hex>`; the application
        // container must never be mistaken for one.
        if let Some(rest) = self
            .application_container
            .strip_prefix(&format!("{}-", self.namespace))
        {
            if rest.len() == KEY_HASH_LEN
                && rest.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return Err(DemoError::Config(format!(
                    "application container '{}' collides with the partition key space",
                    self.application_container
                )));
            }
        }
        crate::store::validate_object_name(&self.index_object)
            .map_err(|e| DemoError::Config(format!("index object: {}", e)))?;
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root of the filesystem store)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage key namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the container that receives the sample index
    pub fn application_container(mut self, name: impl Into<String>) -> Self {
        self.config.application_container = name.into();
        self
    }

    /// Set the object name of the sample index
    pub fn index_object(mut self, name: impl Into<String>) -> Self {
        self.config.index_object = name.into();
        self
    }

    /// Set the number of worker threads
    pub fn workers(mut self, count: usize) -> Self {
        self.config.workers = count;
        self
    }

    /// Seed the random source for reproducible output
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
