//! Identifier Module
//!
//! Deterministic textual identifiers for matrix columns (features) and
//! rows (samples).
//!
//! ## Format
//! ```text
//! ENSG00000042   feature 42   (prefix + zero-padded index)
//! SMPL00000042   sample 42
//! SMPL123456789  sample 123456789 (width grows, never truncates)
//! ```
//!
//! Features are shared columns: every partition of a run gets the same
//! `features(count)`. Samples live in a global index space, so each
//! partition asks for its own `samples(count, start)` window.

use crate::error::{DemoError, Result};

/// Prefix of every feature identifier (ENSEMBL-style gene ids)
pub const FEATURE_PREFIX: &str = "ENSG";

/// Prefix of every sample identifier
pub const SAMPLE_PREFIX: &str = "SMPL";

/// Minimum digit count; larger indices widen the field
pub const ID_WIDTH: usize = 8;

/// Format a single feature identifier
pub fn feature_id(index: u64) -> String {
    format!("{}{:0width$}", FEATURE_PREFIX, index, width = ID_WIDTH)
}

/// Format a single sample identifier
pub fn sample_id(index: u64) -> String {
    format!("{}{:0width$}", SAMPLE_PREFIX, index, width = ID_WIDTH)
}

/// Feature identifiers for indices `0..count`
pub fn features(count: u64) -> Vec<String> {
    (0..count).map(feature_id).collect()
}

/// Sample identifiers for indices `start..start + count`
///
/// Fails only when the window would run past `u64::MAX`.
pub fn samples(count: u64, start: u64) -> Result<Vec<String>> {
    let end = start.checked_add(count).ok_or_else(|| {
        DemoError::invalid(
            "start",
            format!("sample window {}+{} overflows the index space", start, count),
        )
    })?;
    Ok((start..end).map(sample_id).collect())
}

/// Recover the numeric index of a sample identifier
///
/// "SMPL00000042" → Some(42). Returns None for foreign or short ids.
pub fn parse_sample_index(id: &str) -> Option<u64> {
    parse_index(id, SAMPLE_PREFIX)
}

/// Recover the numeric index of a feature identifier
pub fn parse_feature_index(id: &str) -> Option<u64> {
    parse_index(id, FEATURE_PREFIX)
}

fn parse_index(id: &str, prefix: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.len() < ID_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u64 = digits.parse().ok()?;
    // Reject non-canonical spellings such as extra leading zeros
    (format!("{:0width$}", index, width = ID_WIDTH) == digits).then_some(index)
}
