use cloudsi_shared::scroll::ScrollGuard;
use leptos::prelude::*;

use crate::dom::BodyScroll;

/// Full-screen modal shell. Page scrolling is suspended while it is mounted;
/// clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Overlay(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = "640px")] max_width: &'static str,
    #[prop(default = "rgba(0, 0, 0, 0.8)")] backdrop: &'static str,
    #[prop(default = "#ffffff")] panel: &'static str,
    children: Children,
) -> impl IntoView {
    // Dropped with the component's owner, which restores scrolling.
    let _guard = StoredValue::new_local(ScrollGuard::acquire(BodyScroll));

    let header = match title {
        Some(title) => view! {
            <div style="display: flex; align-items: center; justify-content: space-between; padding: 16px 24px; border-bottom: 1px solid #e0f2fe;">
                <h3 style="margin: 0; font-size: 1.125rem; font-weight: 600; color: #1e293b;">{title}</h3>
                <CloseButton on_close=on_close floating=false />
            </div>
        }
        .into_any(),
        None => view! { <CloseButton on_close=on_close floating=true /> }.into_any(),
    };

    view! {
        <div
            class="overlay-fade"
            role="dialog"
            aria-modal="true"
            style=format!("position: fixed; inset: 0; z-index: 60; display: flex; align-items: center; justify-content: center; padding: 16px; background: {backdrop}; backdrop-filter: blur(4px);")
            on:click=move |_| on_close.run(())
        >
            <div
                style=format!("position: relative; width: 100%; max-width: {max_width}; max-height: 90vh; background: {panel}; border-radius: 16px; box-shadow: 0 25px 50px rgba(0,0,0,0.25); overflow: hidden; display: flex; flex-direction: column;")
                on:click=|e| e.stop_propagation()
            >
                {header}
                <div style="overflow-y: auto; max-height: 80vh;">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn CloseButton(on_close: Callback<()>, floating: bool) -> impl IntoView {
    let style = if floating {
        "position: absolute; top: 16px; right: 16px; z-index: 10; width: 36px; height: 36px; border: none; border-radius: 9999px; background: rgba(255,255,255,0.9); box-shadow: 0 4px 12px rgba(0,0,0,0.15); cursor: pointer; color: #64748b; font-size: 18px;"
    } else {
        "width: 36px; height: 36px; border: none; border-radius: 9999px; background: transparent; cursor: pointer; color: #64748b; font-size: 18px;"
    };
    view! {
        <button style=style aria-label="Close modal" on:click=move |_| on_close.run(())>
            "\u{2715}"
        </button>
    }
}
