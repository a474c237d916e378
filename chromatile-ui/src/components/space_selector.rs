//! Dropdown listing every registered color model.

use chromatile_core::Mode;
use leptos::*;

#[component]
pub fn SpaceSelector(
    /// Currently active model
    #[prop(into)]
    selected: Signal<Mode>,
    /// Called with the parsed model tag on change
    #[prop(into)]
    on_select: Callback<Mode>,
) -> impl IntoView {
    view! {
        <select
            class="bg-gray-800 text-gray-100 text-sm rounded px-2 py-1"
            prop:value=move || selected.get().tag()
            on:change=move |ev| {
                let tag = event_target_value(&ev);
                // The registry is a closed set; anything else is a bug.
                match Mode::from_tag(&tag) {
                    Ok(mode) => on_select.call(mode),
                    Err(err) => log::error!("space selector: {err}"),
                }
            }
        >
            {Mode::ALL
                .iter()
                .map(|mode| view! { <option value=mode.tag()>{mode.tag()}</option> })
                .collect_view()}
        </select>
    }
}
