//! Partition Module
//!
//! Turns a synthesized partition into an immutable blob and derives the
//! blob's storage key from its content.
//!
//! ## Blob Format (tab-separated text)
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────┐
//! │ (empty)      │ ENSG00000000 │ ENSG00000001 │ ... │   header
//! ├──────────────┼──────────────┼──────────────┼─────┤
//! │ SMPL00000000 │ 13.27        │ 0            │ ... │   one line per sample
//! │ SMPL00000001 │ 2.0841       │ 7.5          │ ... │
//! └──────────────┴──────────────┴──────────────┴─────┘
//! ```
//!
//! ## Key Format
//! `<namespace>-<first 16 hex chars of SHA-256(blob)>`, e.g. `hca-3f1c9a0b2e4d5f60`.
//! Identical blobs share a key; the key depends on nothing but the bytes.

mod key;
mod tsv;

pub use key::{digest, StorageKey, KEY_HASH_LEN};
pub use tsv::{sample_ids_from_tsv, serialize, DELIMITER};

/// Object name of the blob inside each partition's container
pub const PARTITION_OBJECT: &str = "matrix.tsv";
