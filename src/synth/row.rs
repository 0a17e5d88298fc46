//! Row synthesizer
//!
//! Clipped-Gaussian value rows.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::{DemoError, Result};

/// Default location (mean) of the value distribution
pub const DEFAULT_LOCATION: f64 = 4.0;

/// Default scale (standard deviation) of the value distribution
pub const DEFAULT_SCALE: f64 = 10.0;

/// Lower bound applied to every draw
pub const FLOOR: f64 = 0.0;

/// Draws rows of non-negative values from a clipped normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSynthesizer {
    location: f64,
    scale: f64,
}

impl Default for RowSynthesizer {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION,
            scale: DEFAULT_SCALE,
        }
    }
}

impl RowSynthesizer {
    /// Create a synthesizer with custom distribution parameters
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(DemoError::invalid("location", "must be finite"));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(DemoError::invalid("scale", "must be finite and positive"));
        }
        Ok(Self { location, scale })
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Draw `width` independent values, each clipped at [`FLOOR`]
    ///
    /// Every call consumes fresh entropy from `rng`; no row is derived
    /// from another.
    pub fn row<R: Rng + ?Sized>(&self, rng: &mut R, width: usize) -> Vec<f64> {
        (0..width).map(|_| self.value(&mut *rng)).collect()
    }

    fn value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let draw = self.location + self.scale * standard_normal(rng);
        // NaN compares false and falls through to the floor as well
        if draw > FLOOR {
            draw
        } else {
            FLOOR
        }
    }
}

/// One standard normal sample via the Box-Muller transform
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // u1 in (0, 1] keeps ln() finite
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let radius = (-2.0 * u1.ln()).sqrt();
    radius * (2.0 * PI * u2).cos()
}
