use crate::components::{ChannelTile, SpaceSelector};
use chromatile_core::{Channel, ColorPatch, Mode, Session};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    // The single serialized update point: every tile interaction and
    // every model switch goes through this session before fan-out.
    let session = create_rw_signal(Session::default());

    let color = create_memo(move |_| session.with(|s| s.color()));
    let mode = create_memo(move |_| session.with(|s| s.mode()));

    // Tiles are rebuilt (fresh raster caches included) on model switch;
    // the key ties each tile to its mode + held channel.
    let tiles = create_memo(move |_| {
        session.with(|s| {
            s.space()
                .channels
                .iter()
                .cloned()
                .map(|channel| {
                    let id = format!("{}-{}", s.mode().tag(), channel.spec().key);
                    (id, channel)
                })
                .collect::<Vec<(String, Channel)>>()
        })
    });

    // Document title follows the selected model.
    create_effect(move |_| {
        let tag = mode.get().tag();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(tag);
        }
    });

    let on_update = move |patch: ColorPatch| {
        session.update(|s| {
            s.apply(&patch);
        });
    };

    let on_select = move |new_mode: Mode| {
        log::info!("switching color space to {new_mode}");
        session.update(|s| {
            s.switch(new_mode);
        });
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100 p-4">
            <div class="mb-4">
                <SpaceSelector selected=mode on_select=on_select />
            </div>
            <div class="flex flex-wrap gap-4">
                <For
                    each=move || tiles.get()
                    key=|(id, _)| id.clone()
                    children=move |(_, channel)| {
                        view! { <ChannelTile channel=channel color=color on_update=on_update /> }
                    }
                />
            </div>
        </div>
    }
}
