//! Index Module
//!
//! The single artifact downstream tooling uses to find a sample.
//!
//! ## Responsibilities
//! - Accumulate one entry per partition: storage key → sample ids
//! - Refuse a second, different sample list under an existing key
//! - Serialize the mapping in partition-generation order
//! - Parse it back and answer "which partition holds this sample?"
//!
//! ## Artifact Format (JSON)
//! ```text
//! {
//!   "hca-3f1c9a0b2e4d5f60": ["SMPL00000000", "SMPL00000001"],
//!   "hca-91d0c47e8a2b6f13": ["SMPL00000002", "SMPL00000003"]
//! }
//! ```
//! The artifact grows linearly with the total sample count and is built
//! fully in memory.

mod builder;
mod lookup;

pub use builder::{IndexBuilder, RecordOutcome};
pub use lookup::SampleIndex;
