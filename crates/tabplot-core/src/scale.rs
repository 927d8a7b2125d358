// File: crates/tabplot-core/src/scale.rs
// Summary: Band (categorical) and linear (numeric) scale transforms into pixel space.

use crate::error::{ChartError, Result};

/// Maps an ordered set of category labels to equal-width pixel slots.
///
/// The range is divided into `domain.len()` equal steps; `padding` shrinks
/// each drawable band symmetrically inside its step, so the steps exactly
/// tile `[lo, hi]` and every band stays centered. Immutable after
/// construction; re-scaling means constructing a new scale.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    lo: f32,
    hi: f32,
    padding: f32,
}

impl BandScale {
    /// `padding` is a fraction of the step, clamped into [0, 1].
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f32) -> Result<Self> {
        if domain.is_empty() {
            return Err(ChartError::EmptyDomain);
        }
        let (lo, hi) = range;
        Ok(Self { domain, lo, hi, padding: padding.clamp(0.0, 1.0) })
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        (self.lo, self.hi)
    }

    /// Slot width including padding.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.hi - self.lo) / self.domain.len() as f32
    }

    /// Drawable width of one band.
    #[inline]
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Domain position of `category`.
    pub fn index(&self, category: &str) -> Result<usize> {
        self.domain
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| ChartError::UnknownCategory(category.to_string()))
    }

    /// Left edge of the band for `category`.
    pub fn position(&self, category: &str) -> Result<f32> {
        let i = self.index(category)? as f32;
        Ok(self.lo + i * self.step() + (self.step() - self.bandwidth()) * 0.5)
    }

    /// Horizontal middle of the band for `category`.
    pub fn center(&self, category: &str) -> Result<f32> {
        Ok(self.position(category)? + self.bandwidth() * 0.5)
    }
}

/// Affine map from a numeric interval to a pixel interval.
///
/// The range may be inverted (`r0 > r1`) for the usual screen-y convention.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    /// Map a domain value to pixels. A single-valued domain maps every
    /// input to the range midpoint instead of dividing by zero.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        if span.abs() < f64::EPSILON {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + ((v - self.d0) / span) as f32 * (self.r1 - self.r0)
    }
}
