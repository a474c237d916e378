//! The space registry: every color model the explorer knows, with its
//! channel decomposition.
//!
//! Rectangular models get one linear descriptor per channel; cylindrical
//! models get radial descriptors for the radius- and height-held tiles and
//! a linear descriptor for the angle-held tile (the angle is just another
//! bounded axis once it is the one being held).

use crate::channel::{Channel, ChannelSpec, LinearChannel, RadialChannel};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from the registry boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// A mode tag that no registered model carries. The registry is a
    /// closed set, so this is a programmer (or markup) error and callers
    /// should fail fast rather than fall back.
    #[error("unknown color mode `{0}`")]
    UnknownMode(String),
}

/// Tag of a registered color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Oklch,
    Okhsl,
    Okhsv,
    Oklab,
    CieLab,
    CieLch,
    CieLuv,
    CieLchuv,
    Hsluv,
    Rgb,
    #[serde(rename = "lrgb")]
    LinearRgb,
    Hsl,
    Hsv,
    Hwb,
    Xyz,
}

impl Mode {
    pub const ALL: [Mode; 15] = [
        Mode::Oklch,
        Mode::Okhsl,
        Mode::Okhsv,
        Mode::Oklab,
        Mode::CieLab,
        Mode::CieLch,
        Mode::CieLuv,
        Mode::CieLchuv,
        Mode::Hsluv,
        Mode::Rgb,
        Mode::LinearRgb,
        Mode::Hsl,
        Mode::Hsv,
        Mode::Hwb,
        Mode::Xyz,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Oklch => "oklch",
            Mode::Okhsl => "okhsl",
            Mode::Okhsv => "okhsv",
            Mode::Oklab => "oklab",
            Mode::CieLab => "cielab",
            Mode::CieLch => "cielch",
            Mode::CieLuv => "cieluv",
            Mode::CieLchuv => "cielchuv",
            Mode::Hsluv => "hsluv",
            Mode::Rgb => "rgb",
            Mode::LinearRgb => "lrgb",
            Mode::Hsl => "hsl",
            Mode::Hsv => "hsv",
            Mode::Hwb => "hwb",
            Mode::Xyz => "xyz",
        }
    }

    /// Resolve a tag, failing fast on anything outside the registry.
    pub fn from_tag(tag: &str) -> Result<Mode, SpaceError> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.tag() == tag)
            .ok_or_else(|| SpaceError::UnknownMode(tag.to_string()))
    }

    /// The model's channel keys, in record order.
    pub fn channel_keys(&self) -> [&'static str; 3] {
        match self {
            Mode::Oklch | Mode::CieLch | Mode::CieLchuv => ["l", "c", "h"],
            Mode::Okhsl | Mode::Hsl | Mode::Hsluv => ["h", "s", "l"],
            Mode::Okhsv | Mode::Hsv => ["h", "s", "v"],
            Mode::Oklab | Mode::CieLab => ["l", "a", "b"],
            Mode::CieLuv => ["l", "u", "v"],
            Mode::Rgb | Mode::LinearRgb => ["r", "g", "b"],
            Mode::Hwb => ["h", "w", "b"],
            Mode::Xyz => ["x", "y", "z"],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A model tag paired with its three tile descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceDescriptor {
    pub mode: Mode,
    pub channels: [Channel; 3],
}

impl SpaceDescriptor {
    /// Descriptor of the tile holding channel `key`, if the model has one.
    pub fn channel(&self, key: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.spec().key == key)
    }
}

/// Tiles for a rectangular model: each channel becomes the held axis of
/// one tile, the other two spanning the surface.
fn rectangular(x: ChannelSpec, y: ChannelSpec, z: ChannelSpec) -> [Channel; 3] {
    [
        Channel::Linear(LinearChannel {
            x: y.clone(),
            y: z.clone(),
            z: x.clone(),
        }),
        Channel::Linear(LinearChannel {
            x: x.clone(),
            y: z.clone(),
            z: y.clone(),
        }),
        Channel::Linear(LinearChannel { x, y, z }),
    ]
}

/// Tiles for a cylindrical model. Holding the radius channel shows the
/// height as radius; holding the height shows the radius channel; holding
/// the angle falls back to a linear tile over radius and height.
fn cylindrical(r: ChannelSpec, z: ChannelSpec, theta: ChannelSpec) -> [Channel; 3] {
    [
        Channel::Radial(RadialChannel {
            r: z.clone(),
            theta: theta.clone(),
            z: r.clone(),
        }),
        Channel::Radial(RadialChannel {
            r: r.clone(),
            theta: theta.clone(),
            z: z.clone(),
        }),
        Channel::Linear(LinearChannel {
            x: r,
            y: z,
            z: theta,
        }),
    ]
}

/// Build the descriptor set for `mode`.
///
/// Channel ranges follow the displayable extent of each model (chroma and
/// chromaticity bounds chosen so the sRGB gamut fits the tile).
pub fn space(mode: Mode) -> SpaceDescriptor {
    let channels = match mode {
        Mode::Oklch => cylindrical(
            ChannelSpec::new("c", "chroma").with_max(0.35),
            ChannelSpec::new("l", "lightness"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Okhsl => cylindrical(
            ChannelSpec::new("s", "saturation"),
            ChannelSpec::new("l", "lightness"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Okhsv => cylindrical(
            ChannelSpec::new("s", "saturation"),
            ChannelSpec::new("v", "value"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Oklab => rectangular(
            ChannelSpec::new("a", "green-red").with_range(-0.4, 0.4),
            ChannelSpec::new("b", "blue-yellow").with_range(-0.4, 0.4),
            ChannelSpec::new("l", "lightness"),
        ),
        Mode::CieLab => rectangular(
            ChannelSpec::new("a", "green-red").with_range(-100.0, 100.0),
            ChannelSpec::new("b", "blue-yellow").with_range(-100.0, 100.0),
            ChannelSpec::new("l", "lightness").with_max(100.0),
        ),
        Mode::CieLch => cylindrical(
            ChannelSpec::new("c", "chroma").with_max(150.0),
            ChannelSpec::new("l", "lightness").with_max(100.0),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::CieLuv => rectangular(
            ChannelSpec::new("u", "green-red").with_range(-84.936, 175.042),
            ChannelSpec::new("v", "blue-yellow").with_range(-125.882, 87.243),
            ChannelSpec::new("l", "lightness").with_max(100.0),
        ),
        Mode::CieLchuv => cylindrical(
            ChannelSpec::new("c", "chroma").with_max(176.956),
            ChannelSpec::new("l", "lightness").with_max(100.0),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Hsluv => cylindrical(
            ChannelSpec::new("s", "saturation").with_max(100.0),
            ChannelSpec::new("l", "lightness").with_max(100.0),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Rgb => rectangular(
            ChannelSpec::new("r", "red"),
            ChannelSpec::new("g", "green"),
            ChannelSpec::new("b", "blue"),
        ),
        Mode::LinearRgb => rectangular(
            ChannelSpec::new("r", "red"),
            ChannelSpec::new("g", "green"),
            ChannelSpec::new("b", "blue"),
        ),
        Mode::Hsl => cylindrical(
            ChannelSpec::new("s", "saturation"),
            ChannelSpec::new("l", "lightness"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Hsv => cylindrical(
            ChannelSpec::new("s", "saturation"),
            ChannelSpec::new("v", "value"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Hwb => cylindrical(
            ChannelSpec::new("w", "whiteness"),
            ChannelSpec::new("b", "blackness"),
            ChannelSpec::degrees("h", "hue"),
        ),
        Mode::Xyz => rectangular(
            ChannelSpec::new("x", "x").with_max(0.9505),
            ChannelSpec::new("y", "y"),
            ChannelSpec::new("z", "z").with_max(1.089),
        ),
    };
    SpaceDescriptor { mode, channels }
}
