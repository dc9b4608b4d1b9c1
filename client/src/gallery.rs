use cloudsi_shared::reveal::ViewportOptions;
use cloudsi_shared::{
    Facet, FacetValue, FilterState, GalleryPhoto, Lightbox, PhotoCategory, PhotoFacets,
    apply_filters, site,
};
use leptos::prelude::*;

use crate::about::SectionHeader;
use crate::app::GalleryLightbox;
use crate::colors::{INK, OCEAN, SLATE};
use crate::filter_controls::{facet_chips, search_box};
use crate::icons;
use crate::overlay::Overlay;
use crate::viewport::{in_view_signal, reveal_class};

#[component]
pub fn GallerySection() -> impl IntoView {
    let GalleryLightbox(lightbox) = expect_context();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(Facet::<PhotoCategory>::All);

    let filtered = Memo::new(move |_| {
        let state = FilterState::new(query.get(), PhotoFacets {
            category: category.get(),
        });
        apply_filters(&site().gallery, &state)
    });

    // Keep the navigator bound to the list it is browsing.
    Effect::new(move || {
        let len = filtered.with(Vec::len);
        lightbox.update(|l| l.sync_len(len));
    });

    view! {
        <section id="gallery" style="position: relative; padding: 96px 0; background: #ffffff;">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <SectionHeader
                    badge="Gallery"
                    title="Momen-Momen Berharga"
                    lead="Dokumentasi dari perjalanan kisah kebersamaan Mahasiswa Sistem Informasi UNTAN 2025"
                />

                <div style="display: flex; flex-direction: column; gap: 24px; margin-bottom: 40px;">
                    {search_box(query, "Search photos...")}
                    <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 8px;">
                        {facet_chips(PhotoCategory::VARIANTS, PhotoCategory::label, category, "active")}
                    </div>
                </div>

                <div style="margin-bottom: 80px;">
                    <PhotoGrid filtered=filtered lightbox=lightbox />
                </div>

                <VideoGallery />
            </div>
            <Show when=move || lightbox.with(Lightbox::is_open)>
                <LightboxView filtered=filtered lightbox=lightbox />
            </Show>
        </section>
    }
}

#[component]
fn PhotoGrid(
    filtered: Memo<Vec<&'static GalleryPhoto>>,
    lightbox: RwSignal<Lightbox>,
) -> impl IntoView {
    let open_at = move |index: usize| {
        let len = filtered.with_untracked(Vec::len);
        lightbox.update(|l| {
            l.sync_len(len);
            l.open(index);
        });
    };

    let empty = || {
        view! {
            <div style="text-align: center; padding: 64px 0;">
                <p style=format!("font-size: 1.125rem; color: {SLATE};")>
                    "No photos found in this category."
                </p>
            </div>
        }
    };

    view! {
        <Show when=move || !filtered.with(Vec::is_empty) fallback=empty>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;">
                <For
                    each=move || filtered.get().into_iter().enumerate()
                    key=|(index, photo)| (*index, photo.id.clone())
                    children=move |(index, photo)| {
                        view! {
                            <div
                                class="card-hover"
                                style="position: relative; aspect-ratio: 4 / 3; border-radius: 12px; overflow: hidden; cursor: pointer; background: #e0f2fe;"
                                on:click=move |_| open_at(index)
                            >
                                <img
                                    src=photo.url.clone()
                                    alt=photo.alt_text.clone()
                                    loading="lazy"
                                    style="width: 100%; height: 100%; object-fit: cover;"
                                />
                                <div style="position: absolute; inset: auto 0 0 0; padding: 16px; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);">
                                    <p style="margin: 0; color: #ffffff; font-weight: 500; font-size: 0.875rem;">
                                        {photo.caption.clone()}
                                    </p>
                                    <span style="display: inline-block; margin-top: 4px; padding: 2px 8px; border-radius: 9999px; background: rgba(255,255,255,0.2); color: #ffffff; font-size: 0.75rem;">
                                        {photo.category.label()}
                                    </span>
                                </div>
                            </div>
                        }
                    }
                />
                // Rows are three wide; pad a ragged last row.
                <Show when=move || filtered.with(|photos| photos.len() % 3 != 0)>
                    <div style="position: relative; aspect-ratio: 4 / 3; border-radius: 12px; overflow: hidden; background: linear-gradient(135deg, #e0f2fe, #87ceeb); display: flex; align-items: flex-end;">
                        <div style="padding: 16px;">
                            <p style="margin: 0; color: #ffffff; font-weight: 500; font-size: 0.875rem;">"Album Kelas B"</p>
                            <span style="display: inline-block; margin-top: 4px; padding: 2px 8px; border-radius: 9999px; background: rgba(255,255,255,0.2); color: #ffffff; font-size: 0.75rem;">
                                "Potret"
                            </span>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn LightboxView(
    filtered: Memo<Vec<&'static GalleryPhoto>>,
    lightbox: RwSignal<Lightbox>,
) -> impl IntoView {
    let nav_button = move |label: &'static str, glyph: &'static str, side: &'static str, step: fn(&mut Lightbox)| {
        view! {
            <button
                aria-label=label
                style=format!("position: absolute; {side}: 8px; top: 50%; transform: translateY(-50%); width: 48px; height: 48px; border: none; border-radius: 9999px; background: rgba(255,255,255,0.1); color: #ffffff; font-size: 24px; cursor: pointer;")
                on:click=move |_| lightbox.update(step)
            >
                {glyph}
            </button>
        }
    };

    view! {
        <Overlay
            on_close=move || lightbox.update(Lightbox::close)
            max_width="1100px"
            backdrop="rgba(0, 0, 0, 0.95)"
            panel="transparent"
        >
            {move || {
                let current = lightbox.with(|l| filtered.with(|photos| l.current_item(photos).copied()));
                current.map(|photo| view! {
                    <div style="position: relative; display: flex; flex-direction: column; align-items: center; padding: 48px 64px 24px;">
                        <img
                            src=photo.url.clone()
                            alt=photo.alt_text.clone()
                            style="max-width: 100%; max-height: 75vh; object-fit: contain; border-radius: 8px;"
                        />
                        <p style="margin: 16px 0 4px; color: #ffffff; font-size: 1.125rem; font-weight: 500; text-align: center;">
                            {photo.caption.clone()}
                        </p>
                        <p style="margin: 0; color: rgba(255,255,255,0.6); font-size: 0.875rem;">
                            {move || lightbox.with(Lightbox::position_label)}
                        </p>
                    </div>
                })
            }}
            <Show when=move || lightbox.with(|l| l.list_len() > 1)>
                {nav_button("Previous photo", "\u{2039}", "left", Lightbox::previous)}
                {nav_button("Next photo", "\u{203a}", "right", Lightbox::next)}
            </Show>
        </Overlay>
    }
}

#[component]
fn VideoGallery() -> impl IntoView {
    let in_view = in_view_signal("gallery-videos", ViewportOptions::threshold(0.2));
    let cards = site()
        .videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            let style = format!("transition-delay: {}ms;", index * 100);
            view! {
                <a
                    href=video.video_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=move || format!("{} card-hover", reveal_class(in_view.get()))
                    style=format!("{style} display: block; border-radius: 16px; overflow: hidden; background: #ffffff; border: 1px solid #e0f2fe; text-decoration: none;")
                >
                    <div style="position: relative; aspect-ratio: 16 / 9; background: #0f172a;">
                        <img
                            src=video.thumbnail_url.clone()
                            alt=video.title.clone()
                            loading="lazy"
                            style="width: 100%; height: 100%; object-fit: cover; opacity: 0.85;"
                        />
                        <div style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;">
                            <span style=format!("width: 64px; height: 64px; border-radius: 9999px; background: rgba(255,255,255,0.9); color: {OCEAN}; display: flex; align-items: center; justify-content: center; font-size: 24px;")>
                                {icons::glyph("play")}
                            </span>
                        </div>
                    </div>
                    <div style=format!("padding: 16px; font-weight: 600; color: {INK};")>
                        {video.title.clone()}
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <div>
            <h3 style=format!("text-align: center; margin: 0 0 40px; font-size: 1.875rem; font-weight: 700; color: {INK};")>
                "Video Dokumentasi"
            </h3>
            <div
                id="gallery-videos"
                style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px;"
            >
                {cards}
            </div>
        </div>
    }
}
