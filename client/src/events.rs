use cloudsi_shared::{Event, FacetValue, Selection, site};
use leptos::prelude::*;

use crate::about::SectionHeader;
use crate::app::EventSelection;
use crate::colors::{INK, OCEAN, SKY, SKY_LIGHT, SLATE};
use crate::date_format::{format_long, format_short};
use crate::icons;
use crate::overlay::Overlay;

pub(crate) fn participants_label(count: u32) -> String {
    format!("{count} peserta")
}

#[component]
pub fn EventsSection() -> impl IntoView {
    let EventSelection(selection) = expect_context();
    let cards = site()
        .events
        .iter()
        .map(|event| view! { <EventCard event=event selection=selection /> })
        .collect_view();

    view! {
        <section id="events" style="position: relative; padding: 96px 0; background: #ffffff;">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <SectionHeader
                    badge="Events"
                    title="Kegiatan & Acara"
                    lead="Berbagai kegiatan dan acara yang telah kami selenggarakan bersama."
                />
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px;">
                    {cards}
                </div>
            </div>
            <Show when=move || selection.with(Selection::is_open)>
                <EventModal selection=selection />
            </Show>
        </section>
    }
}

fn meta_item(glyph: &'static str, text: String) -> impl IntoView {
    view! {
        <span style=format!("display: inline-flex; align-items: center; gap: 6px; font-size: 0.875rem; color: {SLATE};")>
            <span style=format!("color: {SKY};")>{glyph}</span>
            {text}
        </span>
    }
}

#[component]
fn EventCard(event: &'static Event, selection: RwSignal<Selection<String>>) -> impl IntoView {
    let id = event.id.clone();
    view! {
        <div
            class="card-hover"
            style=format!("background: #ffffff; border-radius: 16px; overflow: hidden; border: 1px solid {SKY_LIGHT}; cursor: pointer;")
            on:click=move |_| selection.update(|s| s.open(id.clone()))
        >
            <div style="position: relative; aspect-ratio: 16 / 9; overflow: hidden; background: #e0f2fe;">
                <img
                    src=event.featured_image.clone()
                    alt=event.title.clone()
                    loading="lazy"
                    style="width: 100%; height: 100%; object-fit: cover;"
                />
                <div style="position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);" />
                <span style=format!("position: absolute; top: 16px; left: 16px; padding: 6px 12px; border-radius: 8px; background: rgba(255,255,255,0.9); font-size: 0.875rem; font-weight: 600; color: {OCEAN};")>
                    {format_short(event.date)}
                </span>
            </div>
            <div style="padding: 20px;">
                <h4 style=format!("margin: 0 0 8px; font-size: 1.125rem; font-weight: 700; color: {INK}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;")>
                    {event.title.clone()}
                </h4>
                <p style=format!("margin: 0 0 16px; font-size: 0.875rem; color: {SLATE}; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;")>
                    {event.description.clone()}
                </p>
                <div style="display: flex; flex-wrap: wrap; gap: 16px;">
                    {meta_item(icons::glyph("map-pin"), event.location.clone())}
                    {meta_item(icons::glyph("users"), participants_label(event.participants_count))}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EventModal(selection: RwSignal<Selection<String>>) -> impl IntoView {
    let event = move || selection.with(|s| s.current().and_then(|id| site().event(id)));

    view! {
        <Overlay
            on_close=move || selection.update(Selection::close)
            max_width="720px"
            backdrop="rgba(0, 0, 0, 0.6)"
        >
            {move || event().map(|event| {
                let photos = event
                    .photos
                    .iter()
                    .enumerate()
                    .map(|(index, photo)| view! {
                        <div style="aspect-ratio: 16 / 9; border-radius: 8px; overflow: hidden; background: #e0f2fe;">
                            <img
                                src=photo.clone()
                                alt=format!("{} photo {}", event.title, index + 1)
                                loading="lazy"
                                style="width: 100%; height: 100%; object-fit: cover;"
                            />
                        </div>
                    })
                    .collect_view();
                let divisi = event
                    .divisi_involved
                    .iter()
                    .map(|d| view! {
                        <span style=format!("padding: 4px 12px; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; background: {SKY_LIGHT}; color: {OCEAN};")>
                            {d.as_str()}
                        </span>
                    })
                    .collect_view();

                view! {
                    <div style="position: relative; aspect-ratio: 16 / 9; background: #e0f2fe;">
                        <img
                            src=event.featured_image.clone()
                            alt=event.title.clone()
                            style="width: 100%; height: 100%; object-fit: cover;"
                        />
                        <div style="position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);" />
                    </div>
                    <div style="padding: 24px;">
                        <h3 style=format!("margin: 0 0 16px; font-size: 1.5rem; font-weight: 700; color: {INK};")>
                            {event.title.clone()}
                        </h3>
                        <div style="display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 24px;">
                            {meta_item(icons::glyph("calendar"), format_long(event.date))}
                            {meta_item(icons::glyph("map-pin"), event.location.clone())}
                            {meta_item(icons::glyph("users"), participants_label(event.participants_count))}
                        </div>
                        {(!event.divisi_involved.is_empty()).then(|| view! {
                            <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 24px;">
                                {divisi}
                            </div>
                        })}
                        <p style=format!("margin: 0 0 24px; line-height: 1.7; color: {SLATE};")>
                            {event.description.clone()}
                        </p>
                        {(!event.photos.is_empty()).then(|| view! {
                            <div style="margin-bottom: 24px;">
                                <h4 style=format!("margin: 0 0 12px; font-weight: 600; color: {INK};")>"Dokumentasi"</h4>
                                <div style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;">
                                    {photos}
                                </div>
                            </div>
                        })}
                        {event.video_url.clone().map(|url| view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                style=format!("display: inline-flex; align-items: center; gap: 8px; padding: 12px 20px; border-radius: 12px; background: {OCEAN}; color: #ffffff; text-decoration: none; font-weight: 500;")
                            >
                                {icons::glyph("play")}
                                " Tonton Video"
                            </a>
                        })}
                    </div>
                }
            })}
        </Overlay>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_label_uses_indonesian_unit() {
        assert_eq!(participants_label(76), "76 peserta");
    }

    #[test]
    fn first_event_card_date() {
        let first = &site().events[0];
        assert_eq!(format_short(first.date), "15 Okt 2025");
        assert_eq!(format_long(first.date), "Rabu, 15 Oktober 2025");
    }
}
