use serde::{Deserialize, Serialize};

/// Closed numeric interval used for channel ranges and surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Normalized drawing-surface axis, `[-1, 1]`.
pub const SURFACE: Range = Range::new(-1.0, 1.0);

/// Normalized radius, `[0, 1]`.
pub const RADII: Range = Range::new(0.0, 1.0);

/// Default channel range, `[0, 1]`.
pub const UNIT: Range = Range::new(0.0, 1.0);

/// Hue range in degrees, `[0, 360)`.
pub const DEGREES: Range = Range::new(0.0, 360.0);

/// Linear interpolation of `value` from one interval onto another.
///
/// No clamping: out-of-range inputs produce out-of-range outputs, which
/// downstream gamut tests reject. Zero-width `from` ranges are a caller
/// error (the registry only hands out non-degenerate ranges).
pub fn scale(value: f64, from: Range, to: Range) -> f64 {
    (value - from.min) / from.width() * to.width() + to.min
}
