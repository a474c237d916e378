//! One explorer tile: the raster canvas with crosshair/indicator overlay,
//! plus the slider and number field controlling the held channel.

use chromatile_core::{
    to_display_rgb, Channel, ColorPatch, ColorRecord, Crosshair, RasterCache, SurfacePoint,
};
use leptos::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, PointerEvent};

/// Tiles render on a square surface.
pub const TILE_SIZE: u32 = 200;

/// Visual radius of the current-color indicator disc, in pixels.
const INDICATOR_RADIUS: f64 = 15.0;

/// Map a pointer event offset (pixels, origin top-left) to a normalized
/// surface point. No depth coordinate: drags never move the held axis.
fn surface_from_pointer(offset_x: i32, offset_y: i32, size: u32) -> SurfacePoint {
    SurfacePoint::new(
        2.0 * f64::from(offset_x) / f64::from(size) - 1.0,
        1.0 - 2.0 * f64::from(offset_y) / f64::from(size),
    )
}

/// CSS color for the indicator fill: the shared color's sRGB rendition,
/// clamped for display only.
fn css_rgb(rgb: [f64; 3]) -> String {
    let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round();
    format!(
        "rgb({} {} {})",
        quantize(rgb[0]),
        quantize(rgb[1]),
        quantize(rgb[2])
    )
}

fn draw_crosshair(ctx: &CanvasRenderingContext2d, crosshair: Crosshair) {
    let mid = f64::from(TILE_SIZE) / 2.0;
    ctx.begin_path();
    match crosshair {
        Crosshair::Line { start, end } => {
            ctx.move_to(mid * (1.0 + start.0), mid * (1.0 - start.1));
            ctx.line_to(mid * (1.0 + end.0), mid * (1.0 - end.1));
        }
        Crosshair::Circle { radius } => {
            ctx.ellipse(
                mid,
                mid,
                radius * mid,
                radius * mid,
                0.0,
                0.0,
                std::f64::consts::TAU,
            )
            .expect("should draw crosshair circle");
        }
    }
    ctx.stroke();
}

fn draw_tile(
    ctx: &CanvasRenderingContext2d,
    channel: &Channel,
    color: &ColorRecord,
    cache: StoredValue<RasterCache>,
) {
    let size = f64::from(TILE_SIZE);
    ctx.clear_rect(0.0, 0.0, size, size);

    // Blit the (possibly cached) raster first, overlays on top.
    cache.update_value(|cache| {
        cache.refresh(TILE_SIZE, TILE_SIZE, channel, color);
    });
    cache.with_value(|cache| {
        let image =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(cache.pixels()), TILE_SIZE, TILE_SIZE)
                .expect("should create ImageData");
        ctx.put_image_data(&image, 0.0, 0.0)
            .expect("should put image data");
    });

    // Every sibling channel marks its current value on this tile.
    for spec in channel.specs() {
        if let Some(crosshair) = channel.crosshair(spec.key, color) {
            draw_crosshair(ctx, crosshair);
        }
    }

    // Indicator disc at the shared color's position, filled with it.
    let coord = channel.unconvert(color);
    ctx.begin_path();
    ctx.set_fill_style_str(&css_rgb(to_display_rgb(color)));
    ctx.arc(
        (coord.x + 1.0) * size / 2.0,
        (1.0 - coord.y) * size / 2.0,
        INDICATOR_RADIUS,
        0.0,
        std::f64::consts::TAU,
    )
    .expect("should draw indicator");
    ctx.fill();
    ctx.stroke();
}

/// A single channel tile. Owns no color state: it mirrors the shared
/// record passed in through `color` and reports interactions as
/// [`ColorPatch`]es through `on_update`.
#[component]
pub fn ChannelTile(
    /// Descriptor of the channel this tile holds
    channel: Channel,
    /// The shared color record (read-only)
    #[prop(into)]
    color: Signal<ColorRecord>,
    /// Called with the partial update from any interaction
    #[prop(into)]
    on_update: Callback<ColorPatch>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let cache = store_value(RasterCache::new());
    let spec = channel.spec().clone();
    let held_key = spec.key;

    // During a model switch this tile can briefly see a record of the new
    // model before <For> drops it; such records lack the held key.
    let held_value = create_memo(move |prev: Option<&f64>| {
        color
            .get()
            .get(held_key)
            .or_else(|| prev.copied())
            .unwrap_or(f64::NAN)
    });

    // Redraw whenever the shared color changes (or the canvas mounts).
    {
        let channel = channel.clone();
        create_effect(move |_| {
            let color = color.get();
            if color.get(held_key).is_none() {
                return;
            }
            let Some(canvas_el) = canvas_ref.get() else {
                return;
            };
            let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
            let ctx = canvas
                .get_context("2d")
                .unwrap()
                .unwrap()
                .unchecked_into::<CanvasRenderingContext2d>();
            draw_tile(&ctx, &channel, &color, cache);
        });
    }

    let on_pointer = {
        let channel = channel.clone();
        move |ev: PointerEvent| {
            // Primary button held: drag the free axes.
            if ev.buttons() & 1 != 0 {
                let point = surface_from_pointer(ev.offset_x(), ev.offset_y(), TILE_SIZE);
                on_update.call(channel.convert(point));
            }
        }
    };
    let on_pointer_down = on_pointer.clone();

    let on_held_input = {
        let channel = channel.clone();
        move |ev: web_sys::Event| {
            // Non-numeric entry is rejected; the last valid value stays.
            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                on_update.call(channel.set(value));
            }
        }
    };
    let on_number_input = on_held_input.clone();

    view! {
        <div class="flex flex-col gap-2 p-3 bg-gray-800 rounded">
            <canvas
                node_ref=canvas_ref
                width=TILE_SIZE
                height=TILE_SIZE
                class="bg-gray-900 touch-none"
                on:pointermove=on_pointer
                on:pointerdown=on_pointer_down
            />
            <div class="flex items-center gap-2">
                <div class="text-xs w-24">{spec.name}</div>
                <input
                    type="range"
                    class="flex-1 accent-white"
                    prop:min=spec.min
                    prop:max=spec.max
                    prop:step=spec.step
                    prop:value=move || held_value.get()
                    on:input=on_held_input
                />
                <input
                    type="number"
                    class="w-20 bg-gray-700 text-xs px-1"
                    prop:min=spec.min
                    prop:max=spec.max
                    prop:step=spec.step
                    prop:value=move || held_value.get()
                    on:input=on_number_input
                />
            </div>
        </div>
    }
}
