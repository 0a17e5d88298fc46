//! TSV serializer
//!
//! Byte-stable rendering of a partition, and the reverse lookup of its
//! row labels.

use bytes::Bytes;

use crate::error::{DemoError, Result};
use crate::synth::Partition;

/// Cell separator
pub const DELIMITER: char = '\t';

/// Render a partition as tab-separated text
///
/// Values use the shortest representation that round-trips the `f64`,
/// so identical partitions always produce identical bytes.
pub fn serialize(partition: &Partition) -> Bytes {
    // Rough guess: ~12 bytes per cell
    let cells = (partition.sample_count() + 1) * (partition.feature_count() + 1);
    let mut out = String::with_capacity(cells * 12);

    // Header: empty index cell, then feature ids
    for feature in &partition.feature_ids {
        out.push(DELIMITER);
        out.push_str(feature);
    }
    out.push('\n');

    for (sample, row) in partition.sample_ids.iter().zip(&partition.rows) {
        out.push_str(sample);
        for value in row {
            out.push(DELIMITER);
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }

    Bytes::from(out)
}

/// Row labels of a serialized partition, in row order
pub fn sample_ids_from_tsv(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DemoError::Serialization(format!("partition is not UTF-8: {}", e)))?;

    let mut lines = text.lines();
    if lines.next().is_none() {
        return Err(DemoError::Serialization(
            "partition has no header line".to_string(),
        ));
    }

    Ok(lines
        .filter(|line| !line.is_empty())
        .map(|line| line.split(DELIMITER).next().unwrap_or_default().to_string())
        .collect())
}
