//! Per-tile rasterization: paint every surface pixel with the color
//! visible there, or leave it transparent when it falls outside the
//! displayable gamut.

use crate::channel::{Channel, SurfacePoint};
use crate::color::ColorRecord;
use crate::convert::to_display_rgb;

/// A color is displayable iff every sRGB component lies in `[0, 1]`.
/// NaN components (e.g. from malformed upstream input) fail the test.
pub fn in_gamut(rgb: [f64; 3]) -> bool {
    rgb.iter().all(|c| (0.0..=1.0).contains(c))
}

fn quantize(component: f64) -> u8 {
    // Round to the nearest of 256 steps, top bucket clamped, matching
    // 8-bit canvas output. Truncation would turn the epsilon left by a
    // gamma round trip (0.5 comes back as 0.4999...) into a visible step.
    (component * 256.0).round().min(255.0) as u8
}

/// RGBA buffer (`width * height * 4`) for one tile.
///
/// Pixel `(px, py)` is inverse-mapped to the surface coordinate
/// `x = 2px/width - 1`, `y = 1 - 2py/height` (image rows grow downward,
/// surface y grows upward), converted through the tile's descriptor with
/// the held channel pinned to its current value, and gamut-tested.
/// Out-of-gamut pixels stay all-zero.
pub fn rasterize(width: u32, height: u32, channel: &Channel, color: &ColorRecord) -> Vec<u8> {
    rasterize_with(width, height, channel, color, to_display_rgb)
}

/// [`rasterize`] with an explicit conversion function, so callers (and
/// tests) can observe or replace the conversion library.
pub fn rasterize_with<F>(
    width: u32,
    height: u32,
    channel: &Channel,
    color: &ColorRecord,
    to_rgb: F,
) -> Vec<u8>
where
    F: Fn(&ColorRecord) -> [f64; 3],
{
    let mut data = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let y = 1.0 - 2.0 * py as f64 / height as f64;
        for px in 0..width {
            let x = 2.0 * px as f64 / width as f64 - 1.0;
            // Merging keeps the held channel at the shared color's value.
            let pixel_color = color.merge(&channel.convert(SurfacePoint::new(x, y)));
            let rgb = to_rgb(&pixel_color);
            if in_gamut(rgb) {
                let idx = ((py * width + px) * 4) as usize;
                data[idx] = quantize(rgb[0]);
                data[idx + 1] = quantize(rgb[1]);
                data[idx + 2] = quantize(rgb[2]);
                data[idx + 3] = 255;
            }
        }
    }
    data
}

/// Cached raster for one tile, keyed on the held channel's value.
///
/// The free axes span the whole buffer, so any change to them redraws
/// overlays only; the buffer itself is stale exactly when the held value
/// (or the buffer size) changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RasterCache {
    held: Option<f64>,
    pixels: Vec<u8>,
}

impl RasterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered buffer (empty before the first refresh).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Refresh the buffer if stale. Returns whether a recompute happened.
    pub fn refresh(
        &mut self,
        width: u32,
        height: u32,
        channel: &Channel,
        color: &ColorRecord,
    ) -> bool {
        self.refresh_with(width, height, channel, color, to_display_rgb)
    }

    /// [`refresh`](Self::refresh) with an explicit conversion function.
    pub fn refresh_with<F>(
        &mut self,
        width: u32,
        height: u32,
        channel: &Channel,
        color: &ColorRecord,
        to_rgb: F,
    ) -> bool
    where
        F: Fn(&ColorRecord) -> [f64; 3],
    {
        let held = channel.get(color);
        let expected_len = (width * height * 4) as usize;
        // NaN held values always compare unequal and therefore recompute.
        let fresh = self.held == Some(held) && self.pixels.len() == expected_len;
        if fresh {
            return false;
        }
        self.pixels = rasterize_with(width, height, channel, color, to_rgb);
        self.held = Some(held);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPatch;
    use crate::space::{space, Mode};
    use std::cell::Cell;

    fn rgb_blue_tile() -> Channel {
        // Free axes red/green, held blue.
        space(Mode::Rgb).channel("b").unwrap().clone()
    }

    fn pixel(data: &[u8], width: u32, px: u32, py: u32) -> [u8; 4] {
        let idx = ((py * width + px) * 4) as usize;
        [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
    }

    #[test]
    fn gamut_accepts_boundary_values() {
        assert!(in_gamut([0.0, 0.0, 0.0]));
        assert!(in_gamut([1.0, 1.0, 1.0]));
        assert!(in_gamut([0.0, 1.0, 0.5]));
    }

    #[test]
    fn gamut_rejects_just_outside_boundary() {
        assert!(!in_gamut([-1e-6, 0.5, 0.5]));
        assert!(!in_gamut([0.5, 1.0 + 1e-6, 0.5]));
        assert!(!in_gamut([0.5, 0.5, f64::NAN]));
    }

    #[test]
    fn rgb_tile_is_fully_opaque() {
        // Every point of an RGB cross-section is displayable.
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.5, 0.5, 0.5]);
        let data = rasterize(8, 8, &tile, &color);
        assert!(data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn out_of_gamut_pixels_are_transparent_zero() {
        // An extreme-chroma oklch slice leaves most of the tile blank.
        let descriptor = space(Mode::Oklch);
        let tile = descriptor.channel("l").unwrap();
        let color = ColorRecord::new(Mode::Oklch, [0.05, 0.3, 0.0]);
        let data = rasterize(16, 16, tile, &color);
        let blank = data
            .chunks_exact(4)
            .filter(|px| *px == [0, 0, 0, 0])
            .count();
        assert!(blank > 0, "expected transparent out-of-gamut pixels");
    }

    #[test]
    fn raster_follows_the_surface_orientation() {
        // Held blue at 0; red grows rightward, green grows upward.
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.0, 0.0, 0.0]);
        let width = 10;
        let data = rasterize(width, 10, &tile, &color);
        let top_left = pixel(&data, width, 0, 0);
        let top_right = pixel(&data, width, width - 1, 0);
        let bottom_left = pixel(&data, width, 0, 9);
        assert!(top_right[0] > top_left[0], "red increases along +x");
        assert!(top_left[1] > bottom_left[1], "green increases along +y");
        assert_eq!(top_left[2], 0, "held blue stays fixed");
    }

    #[test]
    fn held_value_is_pinned_across_the_buffer() {
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.1, 0.9, 0.5]);
        let data = rasterize(4, 4, &tile, &color);
        // quantize(0.5) == 128 on every pixel.
        assert!(data.chunks_exact(4).all(|px| px[2] == 128));
    }

    #[test]
    fn quantization_rounds_to_the_nearest_byte() {
        // 0.502 * 256 = 128.512, so every blue byte lands on 129, not 128.
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.1, 0.9, 0.502]);
        let data = rasterize(4, 4, &tile, &color);
        assert!(data.chunks_exact(4).all(|px| px[2] == 129));
    }

    #[test]
    fn cache_reuses_buffer_while_held_value_is_unchanged() {
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.2, 0.2, 0.5]);
        let calls = Cell::new(0u32);
        let counting = |record: &ColorRecord| {
            calls.set(calls.get() + 1);
            to_display_rgb(record)
        };

        let mut cache = RasterCache::new();
        assert!(cache.refresh_with(4, 4, &tile, &color, counting));
        let after_first = calls.get();
        assert_eq!(after_first, 16);

        // Free-axis change only: same held value, no recompute.
        let moved = color.merge(&ColorPatch::single("r", 0.9));
        assert!(!cache.refresh_with(4, 4, &tile, &moved, counting));
        assert_eq!(calls.get(), after_first);
    }

    #[test]
    fn cache_recomputes_exactly_once_when_held_value_changes() {
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.2, 0.2, 0.5]);
        let calls = Cell::new(0u32);
        let counting = |record: &ColorRecord| {
            calls.set(calls.get() + 1);
            to_display_rgb(record)
        };

        let mut cache = RasterCache::new();
        cache.refresh_with(4, 4, &tile, &color, counting);
        calls.set(0);

        let lifted = color.merge(&ColorPatch::single("b", 0.75));
        assert!(cache.refresh_with(4, 4, &tile, &lifted, counting));
        assert_eq!(calls.get(), 16, "one conversion per pixel, once");

        assert!(!cache.refresh_with(4, 4, &tile, &lifted, counting));
        assert_eq!(calls.get(), 16);
    }

    #[test]
    fn cache_recomputes_when_resized() {
        let tile = rgb_blue_tile();
        let color = ColorRecord::new(Mode::Rgb, [0.2, 0.2, 0.5]);
        let mut cache = RasterCache::new();
        assert!(cache.refresh(4, 4, &tile, &color));
        assert!(cache.refresh(8, 8, &tile, &color));
        assert_eq!(cache.pixels().len(), 8 * 8 * 4);
    }
}
