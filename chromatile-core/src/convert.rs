//! Adapter between tagged [`ColorRecord`]s and the `palette` conversion
//! library.
//!
//! All conversions go through linear sRGB and stay *unclamped*
//! ([`FromColorUnclamped`]): out-of-gamut coordinates must survive to the
//! rasterizer's gamut test instead of being silently pulled into range.

use crate::color::ColorRecord;
use crate::space::Mode;
use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::D65;
use palette::{
    Hsl, Hsluv, Hsv, Hwb, Lab, Lch, Lchuv, LinSrgb, Luv, Okhsl, Okhsv, Oklab, Oklch, Srgb, Xyz,
};

/// Unclamped linear-sRGB rendition of a record, the hub all conversions
/// route through.
fn to_linear(record: &ColorRecord) -> LinSrgb<f64> {
    let [a, b, c] = record.values();
    match record.mode() {
        Mode::Oklch => LinSrgb::from_color_unclamped(Oklch::new(a, b, c)),
        Mode::Okhsl => LinSrgb::from_color_unclamped(Okhsl::new(a, b, c)),
        Mode::Okhsv => LinSrgb::from_color_unclamped(Okhsv::new(a, b, c)),
        Mode::Oklab => LinSrgb::from_color_unclamped(Oklab::new(a, b, c)),
        Mode::CieLab => {
            let lab: Lab<D65, f64> = Lab::new(a, b, c);
            LinSrgb::from_color_unclamped(lab)
        }
        Mode::CieLch => {
            let lch: Lch<D65, f64> = Lch::new(a, b, c);
            LinSrgb::from_color_unclamped(lch)
        }
        Mode::CieLuv => {
            let luv: Luv<D65, f64> = Luv::new(a, b, c);
            LinSrgb::from_color_unclamped(luv)
        }
        Mode::CieLchuv => {
            let lchuv: Lchuv<D65, f64> = Lchuv::new(a, b, c);
            LinSrgb::from_color_unclamped(lchuv)
        }
        Mode::Hsluv => {
            let hsluv: Hsluv<D65, f64> = Hsluv::new(a, b, c);
            LinSrgb::from_color_unclamped(hsluv)
        }
        Mode::Rgb => LinSrgb::from_color_unclamped(Srgb::new(a, b, c)),
        Mode::LinearRgb => LinSrgb::new(a, b, c),
        // Hsl/Hsv/Hwb are defined over gamma-encoded sRGB; palette only
        // converts them to and from `Srgb`, so they hop through it.
        Mode::Hsl => {
            let hsl: Hsl<encoding::Srgb, f64> = Hsl::new(a, b, c);
            LinSrgb::from_color_unclamped(Srgb::from_color_unclamped(hsl))
        }
        Mode::Hsv => {
            let hsv: Hsv<encoding::Srgb, f64> = Hsv::new(a, b, c);
            LinSrgb::from_color_unclamped(Srgb::from_color_unclamped(hsv))
        }
        Mode::Hwb => {
            let hwb: Hwb<encoding::Srgb, f64> = Hwb::new(a, b, c);
            LinSrgb::from_color_unclamped(Srgb::from_color_unclamped(hwb))
        }
        Mode::Xyz => {
            let xyz: Xyz<D65, f64> = Xyz::new(a, b, c);
            LinSrgb::from_color_unclamped(xyz)
        }
    }
}

/// Display (gamma-encoded) sRGB components of a record, unclamped.
///
/// In-gamut colors come back with every component in `[0, 1]`; anything
/// else is outside the displayable gamut.
pub fn to_display_rgb(record: &ColorRecord) -> [f64; 3] {
    let rgb = Srgb::from_color_unclamped(to_linear(record));
    [rgb.red, rgb.green, rgb.blue]
}

/// Convert a record into another model. Same-mode conversions are the
/// identity (no round trip through the library).
pub fn convert_record(record: &ColorRecord, target: Mode) -> ColorRecord {
    if record.mode() == target {
        return *record;
    }
    let lin = to_linear(record);
    let values = match target {
        Mode::Oklch => {
            let c = Oklch::from_color_unclamped(lin);
            [c.l, c.chroma, c.hue.into_positive_degrees()]
        }
        Mode::Okhsl => {
            let c = Okhsl::from_color_unclamped(lin);
            [c.hue.into_positive_degrees(), c.saturation, c.lightness]
        }
        Mode::Okhsv => {
            let c = Okhsv::from_color_unclamped(lin);
            [c.hue.into_positive_degrees(), c.saturation, c.value]
        }
        Mode::Oklab => {
            let c = Oklab::from_color_unclamped(lin);
            [c.l, c.a, c.b]
        }
        Mode::CieLab => {
            let c: Lab<D65, f64> = Lab::from_color_unclamped(lin);
            [c.l, c.a, c.b]
        }
        Mode::CieLch => {
            let c: Lch<D65, f64> = Lch::from_color_unclamped(lin);
            [c.l, c.chroma, c.hue.into_positive_degrees()]
        }
        Mode::CieLuv => {
            let c: Luv<D65, f64> = Luv::from_color_unclamped(lin);
            [c.l, c.u, c.v]
        }
        Mode::CieLchuv => {
            let c: Lchuv<D65, f64> = Lchuv::from_color_unclamped(lin);
            [c.l, c.chroma, c.hue.into_positive_degrees()]
        }
        Mode::Hsluv => {
            let c: Hsluv<D65, f64> = Hsluv::from_color_unclamped(lin);
            [c.hue.into_positive_degrees(), c.saturation, c.l]
        }
        Mode::Rgb => {
            let c = Srgb::from_color_unclamped(lin);
            [c.red, c.green, c.blue]
        }
        Mode::LinearRgb => [lin.red, lin.green, lin.blue],
        Mode::Hsl => {
            let c: Hsl<encoding::Srgb, f64> = Hsl::from_color_unclamped(Srgb::from_color_unclamped(lin));
            [c.hue.into_positive_degrees(), c.saturation, c.lightness]
        }
        Mode::Hsv => {
            let c: Hsv<encoding::Srgb, f64> = Hsv::from_color_unclamped(Srgb::from_color_unclamped(lin));
            [c.hue.into_positive_degrees(), c.saturation, c.value]
        }
        Mode::Hwb => {
            let c: Hwb<encoding::Srgb, f64> = Hwb::from_color_unclamped(Srgb::from_color_unclamped(lin));
            [c.hue.into_positive_degrees(), c.whiteness, c.blackness]
        }
        Mode::Xyz => {
            let c: Xyz<D65, f64> = Xyz::from_color_unclamped(lin);
            [c.x, c.y, c.z]
        }
    };
    ColorRecord::new(target, values)
}
