//! # hcademo
//!
//! Synthetic "omics" datasets for exercising downstream analysis tooling:
//! - Deterministic, non-overlapping feature and sample identifiers
//! - Clipped-Gaussian expression values, one independent row per sample
//! - Content-addressed placement: each partition lives under a key derived
//!   from the SHA-256 of its serialized bytes
//! - A single JSON index mapping every storage key to its samples
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Generator                             │
//! │        (one job per partition, sequential or workers)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!     ┌─────────────────┼──────────────────┐
//!     │                 │                  │
//!     ▼                 ▼                  ▼
//! ┌─────────┐    ┌─────────────┐    ┌─────────────┐
//! │   ids   │───►│    synth    │───►│  partition  │
//! │ (labels)│    │  (matrix)   │    │ (TSV + key) │
//! └─────────┘    └─────────────┘    └──────┬──────┘
//!                                          │
//!                       ┌──────────────────┴──────┐
//!                       ▼                         ▼
//!                ┌─────────────┐          ┌─────────────┐
//!                │    store    │◄─────────│    index    │
//!                │ (BlobStore) │ finalize │  (builder)  │
//!                └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use hcademo::generator;
//! use hcademo::store::MemoryStore;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let store = MemoryStore::new();
//! let mut rng = SmallRng::seed_from_u64(7);
//! let report = generator::generate(&store, &mut rng, 2, 3, 4).unwrap();
//! assert_eq!(report.keys.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod ids;
pub mod synth;
pub mod partition;
pub mod store;
pub mod index;
pub mod generator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DemoError, Result};
pub use config::Config;
pub use generator::{DatasetShape, GenerationReport, Generator};
pub use index::{IndexBuilder, SampleIndex};
pub use partition::StorageKey;
pub use store::BlobStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of hcademo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
