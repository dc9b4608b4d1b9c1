use cloudsi_shared::site;
use cloudsi_shared::upload::LOGO_PUBLIC_PATH;
use leptos::prelude::*;

use crate::app::MobileMenuOpen;
use crate::colors::{INK, OCEAN, SKY};
use crate::dom;

#[component]
pub fn Navbar() -> impl IntoView {
    let MobileMenuOpen(open) = expect_context();
    let links = &site().nav_links;

    let go = move |target: String| {
        if dom::scroll_to_section(&target) {
            open.set(false);
        }
    };

    let desktop_links = links
        .iter()
        .map(|link| {
            let target = link.target_id().to_owned();
            view! {
                <button
                    style="background: none; border: none; cursor: pointer; color: #475569; font-weight: 500; padding: 4px 0;"
                    on:click=move |_| go(target.clone())
                >
                    {link.label.clone()}
                </button>
            }
        })
        .collect_view();

    let mobile_links = move || {
        links
            .iter()
            .map(|link| {
                let target = link.target_id().to_owned();
                view! {
                    <button
                        style="display: block; width: 100%; text-align: left; padding: 12px; background: none; border: none; border-radius: 6px; font-size: 1rem; font-weight: 500; color: #475569; cursor: pointer;"
                        on:click=move |_| go(target.clone())
                    >
                        {link.label.clone()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav style="position: fixed; top: 0; width: 100%; z-index: 50; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); border-bottom: 1px solid #e2e8f0;">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px; display: flex; justify-content: space-between; align-items: center; height: 64px;">
                <div
                    style="display: flex; align-items: center; gap: 8px; cursor: pointer;"
                    on:click=move |_| go("home".to_owned())
                >
                    <img
                        src=LOGO_PUBLIC_PATH
                        alt="CloudSI Logo"
                        style="width: 56px; height: 56px; object-fit: contain;"
                    />
                    <span style=format!("font-weight: 700; font-size: 1.25rem; color: {INK}; letter-spacing: -0.02em;")>
                        "CloudSI"
                        <span style=format!("color: {SKY};")>"25"</span>
                    </span>
                </div>

                <div class="nav-desktop" style="gap: 32px;">{desktop_links}</div>

                <button
                    class="nav-mobile-toggle"
                    aria-label="Toggle menu"
                    style=format!("background: none; border: none; cursor: pointer; color: {OCEAN}; font-size: 24px;")
                    on:click=move |_| open.update(|v| *v = !*v)
                >
                    {move || if open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <div style="background: #ffffff; border-top: 1px solid #e2e8f0; padding: 8px 16px 24px;">
                    {mobile_links()}
                </div>
            </Show>
        </nav>
    }
}
