//! Synthesis Module
//!
//! Builds the numeric content of a partition.
//!
//! ## Responsibilities
//! - Draw one independent row of expression-like values per sample
//! - Label rows with sample ids and columns with feature ids
//!
//! ## Value Model
//! Each value is a Gaussian draw (location 4, scale 10) clipped at 0,
//! which yields the many exact zeros typical of single-cell data.

mod matrix;
mod row;

pub use matrix::{matrix, Partition};
pub use row::{standard_normal, RowSynthesizer, DEFAULT_LOCATION, DEFAULT_SCALE, FLOOR};
