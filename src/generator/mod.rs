//! Generator Module
//!
//! Drives a full run: builds every partition, places it under its content
//! key, and publishes the sample index once all partitions are stored.
//!
//! ## Per-Partition Pipeline
//! ```text
//! ordinal i ──► samples(s, i·s) ─┐
//!               features(f) ─────┼─► matrix ─► serialize ─► digest ─► key
//!               seed_i ──────────┘                                     │
//!                                                                      ▼
//!                     ledger.claim ─► ensure_container(key) ─► put(key/matrix.tsv)
//!                                                                      │
//!                                                                      ▼
//!                                                        ledger.commit(i, key, samples)
//! ```
//! After the last partition: `finalize` ─► put(application/sample_index.json).
//!
//! ## Concurrency Model
//! - `workers == 1`: partitions run strictly in order on the caller's thread
//! - `workers > 1`: scoped threads pull ordinals from a bounded channel
//!   - the ledger (index + pending keys) sits behind one Mutex
//!   - the index is published only after every worker has joined
//!   - the first failure stops further partitions and is returned
//!
//! Per-partition seeds are drawn from the caller's random source in
//! ordinal order as partitions are handed out, so a seeded run produces the
//! same keys regardless of the worker count. Nothing is allocated per
//! partition ahead of time; memory grows only with partitions built.

mod ledger;
mod shape;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use bytes::Bytes;
use crossbeam::channel;
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DemoError, Result};
use crate::ids;
use crate::index::RecordOutcome;
use crate::partition::{self, StorageKey, PARTITION_OBJECT};
use crate::store::{BlobStore, ContainerStatus};
use crate::synth::{self, RowSynthesizer};

use ledger::Ledger;

pub use shape::DatasetShape;

/// What a run produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Partition keys, in partition order
    pub keys: Vec<StorageKey>,
    /// Container holding the index
    pub index_container: String,
    /// Object name of the index
    pub index_object: String,
    /// Samples across all partitions
    pub total_samples: u64,
    /// Partitions whose identical blob was already stored
    pub reused: usize,
}

/// Builds partitioned datasets into a blob store
pub struct Generator<S: BlobStore> {
    store: S,
    config: Config,
    synth: RowSynthesizer,
}

impl<S: BlobStore> Generator<S> {
    /// Create a generator over `store`
    ///
    /// Fails if the configuration is invalid.
    pub fn new(store: S, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            synth: RowSynthesizer::default(),
        })
    }

    /// Replace the value distribution
    pub fn with_synthesizer(mut self, synth: RowSynthesizer) -> Self {
        self.synth = synth;
        self
    }

    /// Generate `shape.datasets()` partitions and publish the index
    ///
    /// Partitions already persisted when an error occurs are left in place.
    pub fn generate<R: RngCore + ?Sized>(
        &self,
        shape: DatasetShape,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        info!(
            datasets = shape.datasets(),
            samples_per_partition = shape.samples_per_partition(),
            features = shape.features(),
            workers = self.config.workers,
            "Starting generation"
        );

        let features = ids::features(shape.features());
        let ledger = Mutex::new(Ledger::default());
        let reused = AtomicUsize::new(0);

        let job = PartitionJob {
            generator: self,
            shape,
            features: &features,
            ledger: &ledger,
            reused: &reused,
        };

        let keys = if self.config.workers <= 1 || shape.datasets() <= 1 {
            job.run_sequential(rng)?
        } else {
            job.run_parallel(rng, self.config.workers)?
        };

        // Every partition is persisted at this point
        let index_bytes = ledger.lock().finalize()?;
        self.store.ensure_container(&self.config.application_container)?;
        self.store.put(
            &self.config.application_container,
            &self.config.index_object,
            index_bytes,
        )?;

        let index_path = format!(
            "{}/{}",
            self.config.application_container, self.config.index_object
        );
        info!(partitions = keys.len(), index = %index_path, "Generation complete");

        Ok(GenerationReport {
            keys,
            index_container: self.config.application_container.clone(),
            index_object: self.config.index_object.clone(),
            total_samples: shape.total_samples(),
            reused: reused.load(Ordering::SeqCst),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn synthesizer(&self) -> &RowSynthesizer {
        &self.synth
    }
}

/// Generate with the default configuration
///
/// The entry point in its plainest form: three counts, a store and a
/// random source.
pub fn generate<S: BlobStore, R: RngCore + ?Sized>(
    store: S,
    rng: &mut R,
    datasets_count: i64,
    samples_per_partition: i64,
    features_count: i64,
) -> Result<GenerationReport> {
    let shape = DatasetShape::new(datasets_count, samples_per_partition, features_count)?;
    Generator::new(store, Config::default())?.generate(shape, rng)
}

/// Random source for a run: seeded when the config says so
pub fn rng_from_config(config: &Config) -> SmallRng {
    match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

// =============================================================================
// Partition Jobs
// =============================================================================

/// Shared, read-only state for building partitions of one run
struct PartitionJob<'a, S: BlobStore> {
    generator: &'a Generator<S>,
    shape: DatasetShape,
    features: &'a [String],
    ledger: &'a Mutex<Ledger>,
    reused: &'a AtomicUsize,
}

impl<S: BlobStore> PartitionJob<'_, S> {
    fn run_sequential<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<Vec<StorageKey>> {
        let mut keys = Vec::new();
        for ordinal in 0..self.shape.datasets() {
            let seed = rng.next_u64();
            keys.push(self.build(ordinal, seed)?);
        }
        Ok(keys)
    }

    fn run_parallel<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        workers: usize,
    ) -> Result<Vec<StorageKey>> {
        let datasets = self.shape.datasets();
        let workers = usize::try_from(datasets).map_or(workers, |d| workers.min(d));

        // Seeds are drawn by the feeder below, one per hand-out
        let (tx, rx) = channel::bounded::<(u64, u64)>(workers);
        let built: Mutex<Vec<(u64, StorageKey)>> = Mutex::new(Vec::new());
        let first_error: Mutex<Option<DemoError>> = Mutex::new(None);
        let stop = AtomicBool::new(false);

        crossbeam::thread::scope(|scope| {
            for worker in 0..workers {
                let rx = rx.clone();
                let (built, first_error, stop) = (&built, &first_error, &stop);
                scope.spawn(move |_| {
                    for (ordinal, seed) in rx.iter() {
                        if stop.load(Ordering::SeqCst) {
                            break;
                        }
                        match self.build(ordinal, seed) {
                            Ok(key) => built.lock().push((ordinal, key)),
                            Err(e) => {
                                warn!(worker, ordinal, error = %e, "Partition failed, stopping run");
                                stop.store(true, Ordering::SeqCst);
                                let mut slot = first_error.lock();
                                if slot.is_none() {
                                    *slot = Some(e);
                                }
                                break;
                            }
                        }
                    }
                });
            }
            drop(rx);

            for ordinal in 0..datasets {
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                // Fails once every worker has exited
                if tx.send((ordinal, rng.next_u64())).is_err() {
                    break;
                }
            }
            drop(tx);
        })
        .map_err(|_| DemoError::Worker("a partition worker panicked".to_string()))?;

        if let Some(err) = first_error.into_inner() {
            return Err(err);
        }

        let mut built = built.into_inner();
        if built.len() as u64 != datasets {
            return Err(DemoError::Worker(format!(
                "only {} of {} partitions were built",
                built.len(),
                datasets
            )));
        }
        built.sort_unstable_by_key(|(ordinal, _)| *ordinal);
        Ok(built.into_iter().map(|(_, key)| key).collect())
    }

    /// Build, place and record partition `ordinal`
    fn build(&self, ordinal: u64, seed: u64) -> Result<StorageKey> {
        let generator = self.generator;

        let first_sample = self.shape.first_sample(ordinal);
        let sample_ids = ids::samples(self.shape.samples_per_partition(), first_sample)?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let matrix = synth::matrix(
            &generator.synth,
            &mut rng,
            sample_ids,
            self.features.to_vec(),
        );
        let bytes = partition::serialize(&matrix);
        let key = partition::digest(&generator.config.namespace, &bytes);

        debug!(
            ordinal,
            first_sample,
            key = %key,
            bytes = bytes.len(),
            "Partition built"
        );

        self.ledger.lock().claim(&key, &matrix.sample_ids)?;

        let placed = self.place(&key, bytes, &matrix.sample_ids);
        if let Err(e) = placed {
            self.ledger.lock().release(&key);
            return Err(e);
        }

        let outcome = self
            .ledger
            .lock()
            .commit(ordinal, key.clone(), matrix.sample_ids)?;
        if outcome == RecordOutcome::Duplicate {
            warn!(ordinal, key = %key, "Partition duplicates an indexed key");
        }

        Ok(key)
    }

    /// Store the blob under its key unless an equal blob is already there
    fn place(&self, key: &StorageKey, bytes: Bytes, sample_ids: &[String]) -> Result<()> {
        let store = &self.generator.store;
        let container = key.as_str();

        if store.ensure_container(container)? == ContainerStatus::AlreadyExists {
            if let Some(existing) = store.get(container, PARTITION_OBJECT)? {
                if existing == bytes {
                    debug!(key = %key, "Identical partition already stored");
                    self.reused.fetch_add(1, Ordering::SeqCst);
                    return Ok(());
                }
                let existing_samples = partition::sample_ids_from_tsv(&existing).map_err(|e| {
                    DemoError::StorageConflict {
                        container: container.to_string(),
                        object: PARTITION_OBJECT.to_string(),
                        reason: format!("existing object is unreadable: {}", e),
                    }
                })?;
                if existing_samples.as_slice() != sample_ids {
                    return Err(DemoError::StorageConflict {
                        container: container.to_string(),
                        object: PARTITION_OBJECT.to_string(),
                        reason: format!(
                            "existing object holds {} different samples",
                            existing_samples.len()
                        ),
                    });
                }
                warn!(key = %key, "Replacing stored partition with the same samples");
            }
        }

        store.put(container, PARTITION_OBJECT, bytes)
    }
}
