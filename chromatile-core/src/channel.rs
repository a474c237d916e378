//! Channel descriptors: the bidirectional mapping between the normalized
//! drawing surface and one decomposition of a three-channel color model.
//!
//! Every tile of the explorer is backed by one descriptor. Two free axes
//! span the 2D surface, the third ("held") axis is controlled by the
//! slider and number field. Rectangular models use three [`LinearChannel`]
//! descriptors; cylindrical models use [`RadialChannel`] for the radius-
//! and height-held tiles and reuse [`LinearChannel`] for the angle-held
//! tile, with the angle as a plain `[0,360)` held axis.

use crate::color::{ColorPatch, ColorRecord};
use crate::range::{scale, Range, DEGREES, RADII, SURFACE, UNIT};

/// Static description of one channel: key, display label, and the numeric
/// range the UI controls and the surface normalization use.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ChannelSpec {
    /// A channel over the default `[0, 1]` range with step `0.01`.
    pub const fn new(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            min: UNIT.min,
            max: UNIT.max,
            step: 0.01,
        }
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// A hue channel: degrees `[0, 360)`, step `1`.
    pub const fn degrees(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            min: DEGREES.min,
            max: DEGREES.max,
            step: 1.0,
        }
    }

    pub fn range(&self) -> Range {
        Range::new(self.min, self.max)
    }
}

/// A point on the normalized drawing surface. `z` is the optional depth
/// (held-axis) coordinate; pointer interactions leave it `None` so the
/// held value survives the merge untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

/// A full surface coordinate recovered from a color, all axes present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCoord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Overlay geometry marking one channel's current value on a tile, in
/// normalized surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crosshair {
    Line { start: (f64, f64), end: (f64, f64) },
    Circle { radius: f64 },
}

/// Rectangular decomposition: both free axes map affinely onto two color
/// channels, the held axis affinely onto the third.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearChannel {
    pub x: ChannelSpec,
    pub y: ChannelSpec,
    pub z: ChannelSpec,
}

impl LinearChannel {
    fn convert(&self, p: SurfacePoint) -> ColorPatch {
        let mut patch = ColorPatch::new();
        patch.push(self.x.key, scale(p.x, SURFACE, self.x.range()));
        patch.push(self.y.key, scale(p.y, SURFACE, self.y.range()));
        if let Some(z) = p.z {
            patch.push(self.z.key, scale(z, SURFACE, self.z.range()));
        }
        patch
    }

    fn unconvert(&self, color: &ColorRecord) -> SurfaceCoord {
        SurfaceCoord {
            x: scale(color.channel(self.x.key), self.x.range(), SURFACE),
            y: scale(color.channel(self.y.key), self.y.range(), SURFACE),
            z: scale(color.channel(self.z.key), self.z.range(), SURFACE),
        }
    }
}

/// Cylindrical decomposition: the free axes map through Euclidean radius
/// and `atan2` angle, the held axis affinely.
///
/// Angles live in degrees `[0, 360)` with `0°` on the +x axis, continuous
/// across the seam (`359.999°` unconverts and reconverts to `359.999°`,
/// never to `-0.001°` or `360.001°`).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialChannel {
    pub r: ChannelSpec,
    pub theta: ChannelSpec,
    pub z: ChannelSpec,
}

impl RadialChannel {
    fn convert(&self, p: SurfacePoint) -> ColorPatch {
        let mut patch = ColorPatch::new();
        patch.push(self.r.key, scale(p.y.hypot(p.x), RADII, self.r.range()));
        patch.push(self.theta.key, wrap_degrees(p.y.atan2(p.x).to_degrees()));
        if let Some(z) = p.z {
            patch.push(self.z.key, scale(z, SURFACE, self.z.range()));
        }
        patch
    }

    fn unconvert(&self, color: &ColorRecord) -> SurfaceCoord {
        let theta = color.channel(self.theta.key).to_radians();
        let radius = scale(color.channel(self.r.key), self.r.range(), RADII);
        SurfaceCoord {
            x: radius * theta.cos(),
            y: radius * theta.sin(),
            z: scale(color.channel(self.z.key), self.z.range(), SURFACE),
        }
    }
}

/// Wrap `atan2` degrees `(-180, 180]` into `[0, 360)`.
fn wrap_degrees(degrees: f64) -> f64 {
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// One tile's descriptor, either family behind a single interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    Linear(LinearChannel),
    Radial(RadialChannel),
}

impl Channel {
    /// The held channel's spec (drives the slider and number field).
    pub fn spec(&self) -> &ChannelSpec {
        match self {
            Channel::Linear(c) => &c.z,
            Channel::Radial(c) => &c.z,
        }
    }

    /// Current value of the held channel.
    pub fn get(&self, color: &ColorRecord) -> f64 {
        color.channel(self.spec().key)
    }

    /// Patch setting the held channel to `value`.
    pub fn set(&self, value: f64) -> ColorPatch {
        ColorPatch::single(self.spec().key, value)
    }

    /// Map a surface point to a partial color record covering the free
    /// axes (and the held axis when a depth coordinate is supplied).
    pub fn convert(&self, p: SurfacePoint) -> ColorPatch {
        match self {
            Channel::Linear(c) => c.convert(p),
            Channel::Radial(c) => c.convert(p),
        }
    }

    /// Map a color back to the surface coordinate it appears at.
    pub fn unconvert(&self, color: &ColorRecord) -> SurfaceCoord {
        match self {
            Channel::Linear(c) => c.unconvert(color),
            Channel::Radial(c) => c.unconvert(color),
        }
    }

    /// Specs of all three channels this descriptor touches, free axes
    /// first, held axis last.
    pub fn specs(&self) -> [&ChannelSpec; 3] {
        match self {
            Channel::Linear(c) => [&c.x, &c.y, &c.z],
            Channel::Radial(c) => [&c.r, &c.theta, &c.z],
        }
    }

    /// Overlay geometry marking channel `key`'s current value on this
    /// tile: the sweep of the shared color as `key` runs from its min to
    /// its max. `None` for the held axis (the raster itself shows it) and
    /// for keys this descriptor does not touch.
    pub fn crosshair(&self, key: &str, color: &ColorRecord) -> Option<Crosshair> {
        let spec = self.specs().into_iter().find(|s| s.key == key)?.clone();
        if spec.key == self.spec().key {
            return None;
        }
        let start = self.unconvert(&color.merge(&ColorPatch::single(spec.key, spec.min)));
        let end = self.unconvert(&color.merge(&ColorPatch::single(spec.key, spec.max)));
        match self {
            Channel::Radial(c) if key == c.theta.key => Some(Crosshair::Circle {
                radius: end.y.hypot(end.x),
            }),
            _ => Some(Crosshair::Line {
                start: (start.x, start.y),
                end: (end.x, end.y),
            }),
        }
    }
}
