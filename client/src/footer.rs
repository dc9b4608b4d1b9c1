use std::cell::RefCell;

use chrono::Datelike;
use cloudsi_shared::site;
use cloudsi_shared::upload::LOGO_PUBLIC_PATH;
use leptos::prelude::*;

use crate::colors::{OCEAN, SKY};
use crate::contact::{CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF};
use crate::dom;
use crate::icons;

/// Scroll offset past which the back-to-top button shows up.
const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

const SOCIAL: [(&str, &str); 4] = [
    ("instagram", "https://www.instagram.com/cloudsi.25"),
    ("github", "https://github.com/cloudsi-untan"),
    ("linkedin", "https://linkedin.com/company/cloudsi-untan"),
    ("email", "mailto:cloudsi2025@untan.ac.id"),
];

const RESOURCES: [(&str, &str); 4] = [
    ("UNTAN Official", "https://www.untan.ac.id"),
    ("Fakultas MIPA", "https://mipa.untan.ac.id"),
    ("Sistem Informasi UNTAN", "https://hmsifmipauntan.com/"),
    ("SIAKAD UNTAN", "https://siakad.untan.ac.id"),
];

struct ScrollBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn()>,
}

thread_local! {
    static SCROLL_BINDING: RefCell<Option<ScrollBinding>> = const { RefCell::new(None) };
}

fn shows_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} CloudSI UNTAN. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let show_top = RwSignal::new(shows_back_to_top(dom::window_scroll_y()));
    let year = chrono::Local::now().year();

    Effect::new(move || {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };

        SCROLL_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "scroll",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler = Closure::<dyn Fn()>::new(move || {
            let visible = shows_back_to_top(dom::window_scroll_y());
            if show_top.get_untracked() != visible {
                show_top.set(visible);
            }
        });

        if window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            SCROLL_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(ScrollBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    let heading = "margin: 0 0 16px; font-size: 1.125rem; font-weight: 600; color: #ffffff;";
    let link_style = "color: #cbd5e1; text-decoration: none; font-size: 0.875rem;";

    let quick_links = site()
        .nav_links
        .iter()
        .map(|link| {
            let target = link.target_id().to_owned();
            view! {
                <li>
                    <button
                        style="background: none; border: none; padding: 0; cursor: pointer; color: #cbd5e1; font-size: 0.875rem;"
                        on:click=move |_| {
                            dom::scroll_to_section(&target);
                        }
                    >
                        {link.label.clone()}
                    </button>
                </li>
            }
        })
        .collect_view();

    let resources = RESOURCES
        .iter()
        .map(|(label, href)| {
            view! {
                <li>
                    <a href=*href target="_blank" rel="noopener noreferrer" style=link_style>{*label}</a>
                </li>
            }
        })
        .collect_view();

    let socials = SOCIAL
        .iter()
        .map(|(platform, href)| {
            let badge = if *platform == "email" {
                icons::glyph("mail")
            } else {
                icons::social_badge(platform)
            };
            view! {
                <a
                    href=*href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=*platform
                    style="width: 40px; height: 40px; border-radius: 8px; background: #1e293b; color: #ffffff; display: flex; align-items: center; justify-content: center; text-decoration: none; font-weight: 700; font-size: 0.8rem;"
                >
                    {badge}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer style="background: #0f172a; color: #ffffff; position: relative;">
            <div style="max-width: 1280px; margin: 0 auto; padding: 48px 16px;">
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 32px;">
                    <div>
                        <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                            <img src=LOGO_PUBLIC_PATH alt="CloudSI" style="width: 40px; height: 40px; object-fit: contain;" />
                            <span style="font-size: 1.5rem; font-weight: 700;">
                                "Cloud"<span style=format!("color: {SKY};")>"SI"</span>
                            </span>
                        </div>
                        <p style="margin: 0 0 16px; color: #94a3b8; font-size: 0.875rem; line-height: 1.6;">
                            "Website resmi CloudSI - Angkatan 2025 Program Studi Sistem Informasi Universitas Tanjungpura. Rumah kami untuk tumbuh bersama."
                        </p>
                        <div style="display: flex; gap: 12px;">{socials}</div>
                    </div>
                    <div>
                        <h3 style=heading>"Quick Links"</h3>
                        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                            {quick_links}
                        </ul>
                    </div>
                    <div>
                        <h3 style=heading>"Resources"</h3>
                        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                            {resources}
                        </ul>
                    </div>
                    <div>
                        <h3 style=heading>"Contact"</h3>
                        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 12px; font-size: 0.875rem; color: #cbd5e1;">
                            <li>
                                <a href=format!("mailto:{CONTACT_EMAIL}") style=link_style>{CONTACT_EMAIL}</a>
                            </li>
                            <li>
                                <a href=CONTACT_PHONE_HREF style=link_style>{CONTACT_PHONE}</a>
                            </li>
                            <li>"Fakultas MIPA, Universitas Tanjungpura, Pontianak"</li>
                        </ul>
                    </div>
                </div>
                <div style="margin-top: 48px; padding-top: 24px; border-top: 1px solid #1e293b; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 12px; font-size: 0.875rem; color: #94a3b8;">
                    <p style="margin: 0;">
                        "Made with "<span style="color: #ef4444;">"\u{2665}"</span>" by CloudSI UNTAN 2025"
                    </p>
                    <p style="margin: 0;">{copyright_line(year)}</p>
                </div>
            </div>
            <Show when=move || show_top.get()>
                <button
                    aria-label="Back to top"
                    on:click=|_| dom::scroll_to_top()
                    style=format!("position: fixed; right: 32px; bottom: 32px; width: 48px; height: 48px; border-radius: 9999px; border: none; background: {OCEAN}; color: #ffffff; font-size: 1.25rem; cursor: pointer; box-shadow: 0 10px 15px rgba(0,0,0,0.2); z-index: 40;")
                >
                    "\u{2191}"
                </button>
            </Show>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_appears_past_threshold() {
        assert!(!shows_back_to_top(0.0));
        assert!(!shows_back_to_top(300.0));
        assert!(shows_back_to_top(300.5));
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026),
            "\u{a9} 2026 CloudSI UNTAN. All rights reserved."
        );
    }

    #[test]
    fn social_links_cover_every_badge() {
        for (platform, href) in SOCIAL {
            assert!(href.starts_with("https://") || href.starts_with("mailto:"));
            assert!(!icons::social_badge(platform).is_empty());
        }
    }
}
