use cloudsi_shared::Facet;
use cloudsi_shared::filter::{ALL_LABEL, FacetValue};
use leptos::prelude::*;

use crate::colors::{INK, SKY_LIGHT, SLATE};
use crate::dom;

/// Text input bound to `query`, with a clear button once something is typed.
pub fn search_box(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div style="position: relative; max-width: 28rem; margin: 0 auto;">
            <span style=format!("position: absolute; left: 16px; top: 50%; transform: translateY(-50%); color: {SLATE};")>
                "\u{1f50d}"
            </span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |e| query.set(dom::input_value(&e))
                style=format!("width: 100%; padding: 12px 40px 12px 48px; border-radius: 12px; border: 1px solid {SKY_LIGHT}; background: #ffffff; color: {INK}; font-size: 1rem; outline: none;")
            />
            <Show when=move || query.with(|q| !q.is_empty())>
                <button
                    aria-label="Clear search"
                    style=format!("position: absolute; right: 12px; top: 50%; transform: translateY(-50%); padding: 4px 8px; border: none; border-radius: 9999px; background: transparent; color: {SLATE}; cursor: pointer;")
                    on:click=move |_| query.set(String::new())
                >
                    "\u{2715}"
                </button>
            </Show>
        </div>
    }
}

/// "All" followed by one button per option; exactly one is active.
pub fn facet_chips<T>(
    options: &'static [T],
    label: fn(T) -> &'static str,
    selected: RwSignal<Facet<T>>,
    active_class: &'static str,
) -> impl IntoView
where
    T: FacetValue + Send + Sync,
{
    std::iter::once(Facet::All)
        .chain(options.iter().copied().map(Facet::Only))
        .map(|facet| {
            let text = match facet {
                Facet::All => ALL_LABEL,
                Facet::Only(value) => label(value),
            };
            view! {
                <button
                    class=move || chip_class(selected.get() == facet, active_class)
                    on:click=move |_| selected.set(facet)
                >
                    {text}
                </button>
            }
        })
        .collect_view()
}

fn chip_class(active: bool, active_class: &'static str) -> String {
    if active {
        format!("chip {active_class}")
    } else {
        "chip".to_owned()
    }
}
