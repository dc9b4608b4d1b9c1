use std::cell::Cell;

use cloudsi_shared::counter::{COUNTER_DURATION_MS, COUNTER_STAGGER_MS, CounterAnimation, OneShot};
use cloudsi_shared::reveal::ViewportOptions;
use cloudsi_shared::{Stat, site};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::colors::{INK, OCEAN, SKY_LIGHT, SLATE};
use crate::icons;
use crate::render_loop::FrameLoop;
use crate::viewport::{in_view_signal, reveal_class};

/// Badge, heading and lead paragraph shared by every home section.
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div style="text-align: center; margin-bottom: 64px;">
            <span style=format!("display: inline-block; padding: 6px 16px; margin-bottom: 16px; font-size: 0.875rem; font-weight: 600; color: {OCEAN}; background: {SKY_LIGHT}; border-radius: 9999px;")>
                {badge}
            </span>
            <h2 style=format!("margin: 0 0 24px; font-size: clamp(1.875rem, 4vw, 3rem); font-weight: 700; color: {INK};")>
                {title}
            </h2>
            {lead.map(|lead| view! {
                <p style=format!("max-width: 48rem; margin: 0 auto; font-size: 1.125rem; line-height: 1.7; color: {SLATE};")>
                    {lead}
                </p>
            })}
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" style="position: relative; padding: 96px 0; background: linear-gradient(to bottom, #ffffff, #f8fbff, #ffffff);">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <SectionHeader
                    badge="Tentang CloudSI"
                    title="Rumah Kami, CloudSI"
                    lead="Kami adalah mahasiswa Program Studi Sistem Informasi Universitas Tanjungpura angkatan 2025. CloudSI adalah rumah kami: tempat berpulang, tempat menyalurkan aspirasi, dan tempat saling mendukung dalam menjalani perjalanan akademik kami menuju masa depan digital yang lebih baik."
                />
                <Stats />
                <Timeline />
                <Achievements />
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    let in_view = in_view_signal("about-stats", ViewportOptions::threshold(0.2));
    let cards = site()
        .stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let delay_ms = index as u32 * COUNTER_STAGGER_MS;
            view! { <StatCard stat=stat.clone() delay_ms=delay_ms in_view=in_view /> }
        })
        .collect_view();

    view! {
        <div
            id="about-stats"
            style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px; margin-bottom: 96px;"
        >
            {cards}
        </div>
    }
}

/// Counts from 0 to the stat's value the first time the panel is seen,
/// starting `delay_ms` after it enters the viewport.
#[component]
fn StatCard(stat: Stat, delay_ms: u32, in_view: ReadSignal<bool>) -> impl IntoView {
    let displayed = RwSignal::new(0i64);
    let animation = CounterAnimation::new(0, i64::from(stat.value), COUNTER_DURATION_MS);
    let latch = StoredValue::new(OneShot::default());
    let pending = StoredValue::new_local(None::<Timeout>);
    let frames = StoredValue::new_local(None::<FrameLoop>);

    Effect::new(move || {
        if !in_view.get() || !latch.try_update_value(OneShot::fire).unwrap_or(false) {
            return;
        }
        let timeout = Timeout::new(delay_ms, move || {
            let started = Cell::new(None::<f64>);
            let frame_loop = FrameLoop::new(move |now| {
                let t0 = started.get().unwrap_or(now);
                started.set(Some(t0));
                let elapsed = now - t0;
                displayed.set(animation.value_at(elapsed));
                !animation.is_finished(elapsed)
            });
            frame_loop.start();
            frames.set_value(Some(frame_loop));
        });
        pending.set_value(Some(timeout));
    });

    let card_style = format!(
        "transition-delay: {delay_ms}ms; background: #ffffff; border-radius: 16px; padding: 24px; border: 1px solid {SKY_LIGHT}; box-shadow: 0 1px 2px rgba(0,0,0,0.04);"
    );

    view! {
        <div class=move || format!("{} card-hover", reveal_class(in_view.get())) style=card_style>
            <div style="display: flex; align-items: center; gap: 16px;">
                <div style="width: 56px; height: 56px; border-radius: 12px; background: linear-gradient(135deg, #e0f2fe, rgba(135,206,235,0.3)); display: flex; align-items: center; justify-content: center; font-size: 26px;">
                    {icons::glyph(&stat.icon)}
                </div>
                <div>
                    <div style=format!("font-size: 1.875rem; font-weight: 700; color: {INK};")>
                        {move || displayed.get()}
                        <span style=format!("color: {OCEAN};")>{stat.suffix.clone()}</span>
                    </div>
                    <div style=format!("font-size: 0.875rem; font-weight: 500; color: {SLATE};")>
                        {stat.label.clone()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    let in_view = in_view_signal("about-timeline", ViewportOptions::threshold(0.1));
    let items = site()
        .timeline
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = format!(
                "transition-delay: {}ms; position: relative; margin-left: 48px; margin-bottom: 32px;",
                index * 150
            );
            view! {
                <div class=move || reveal_class(in_view.get()) style=style>
                    <div style="position: absolute; left: -48px; top: 20px; width: 32px; height: 32px; border-radius: 9999px; background: #ffffff; border: 4px solid #87ceeb; display: flex; align-items: center; justify-content: center; font-size: 12px;">
                        {icons::glyph("calendar")}
                    </div>
                    <div class="card-hover" style=format!("background: #ffffff; border-radius: 12px; padding: 20px; border: 1px solid {SKY_LIGHT};")>
                        <span style=format!("display: inline-block; padding: 4px 12px; margin-bottom: 12px; font-size: 0.75rem; font-weight: 600; color: {OCEAN}; background: {SKY_LIGHT}; border-radius: 9999px;")>
                            {item.year.clone()}
                        </span>
                        <h4 style=format!("margin: 0 0 8px; font-size: 1.125rem; font-weight: 700; color: {INK};")>
                            {item.title.clone()}
                        </h4>
                        <p style=format!("margin: 0; font-size: 0.875rem; line-height: 1.6; color: {SLATE};")>
                            {item.description.clone()}
                        </p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div style="margin-bottom: 96px;">
            <h3 style=format!("text-align: center; margin: 0 0 48px; font-size: 1.875rem; font-weight: 700; color: {INK};")>
                "Perjalanan CloudSI"
            </h3>
            <div id="about-timeline" style="position: relative; max-width: 720px; margin: 0 auto;">
                <div style="position: absolute; left: 15px; top: 0; bottom: 0; width: 2px; background: linear-gradient(to bottom, #87ceeb, #e0f2fe, #87ceeb);" />
                {items}
            </div>
        </div>
    }
}

#[component]
fn Achievements() -> impl IntoView {
    let in_view = in_view_signal("about-achievements", ViewportOptions::threshold(0.2));
    let cards = site()
        .achievements
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            let style = format!(
                "transition-delay: {}ms; height: 100%; background: linear-gradient(135deg, #e0f2fe, #ffffff); border-radius: 16px; padding: 24px; border: 1px solid {SKY_LIGHT};",
                index * 100
            );
            view! {
                <div class=move || format!("{} card-hover", reveal_class(in_view.get())) style=style>
                    <div style="width: 48px; height: 48px; border-radius: 12px; background: rgba(255,255,255,0.8); display: flex; align-items: center; justify-content: center; margin-bottom: 16px; font-size: 22px;">
                        {icons::glyph(&achievement.icon)}
                    </div>
                    <h4 style=format!("margin: 0 0 8px; font-weight: 700; color: {INK};")>
                        {achievement.title.clone()}
                    </h4>
                    <p style=format!("margin: 0; font-size: 0.875rem; line-height: 1.6; color: {SLATE};")>
                        {achievement.description.clone()}
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div>
            <h3 style=format!("text-align: center; margin: 0 0 48px; font-size: 1.875rem; font-weight: 700; color: {INK};")>
                "Pencapaian"
            </h3>
            <div
                id="about-achievements"
                style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px;"
            >
                {cards}
            </div>
        </div>
    }
}
