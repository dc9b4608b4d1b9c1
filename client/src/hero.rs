use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::colors::{INK, OCEAN, SKY_LIGHT, SLATE, rgba_css};
use crate::dom;
use crate::particles::{PARTICLE_ALPHA, PARTICLE_COUNT, PARTICLE_RGB, ParticleField, SPREAD};
use crate::render_loop::FrameLoop;

const MAX_DPR: f64 = 1.5;
const FIELD_SEED: u64 = 0x0c10_5d25;

fn paint(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, MAX_DPR);
    let w = canvas.client_width() as f64;
    let h = canvas.client_height() as f64;
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let pw = (w * dpr).round() as u32;
    let ph = (h * dpr).round() as u32;
    if canvas.width() != pw || canvas.height() != ph {
        canvas.set_width(pw);
        canvas.set_height(ph);
    }

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
    ctx.clear_rect(0.0, 0.0, w, h);
    let (r, g, b) = PARTICLE_RGB;
    ctx.set_fill_style_str(&rgba_css(r, g, b, PARTICLE_ALPHA));
    for particle in field.particles() {
        let Some(p) = field.project(particle, w, h) else {
            continue;
        };
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let field = Rc::new(RefCell::new(ParticleField::new(
        PARTICLE_COUNT,
        SPREAD,
        FIELD_SEED,
    )));
    let frame_loop = StoredValue::new_local(None::<FrameLoop>);

    Effect::new({
        let field = field.clone();
        move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                dom::log_error("[hero] 2d canvas context unavailable");
                return;
            };
            let field = field.clone();
            let frames = FrameLoop::new(move |now| {
                let mut field = field.borrow_mut();
                field.step(now / 1000.0);
                paint(&canvas, &ctx, &field);
                true
            });
            frames.start();
            frame_loop.set_value(Some(frames));
        }
    });

    let on_pointer_move = move |e: web_sys::MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let nx = (e.client_x() as f64 / w - 0.5) * 2.0;
        let ny = (e.client_y() as f64 / h - 0.5) * 2.0;
        field.borrow_mut().set_pointer(nx, ny);
    };

    view! {
        <section
            id="home"
            style="position: relative; width: 100%; height: 100vh; min-height: 600px; overflow: hidden; background: linear-gradient(to bottom, #e0f2fe, #ffffff);"
            on:mousemove=on_pointer_move
        >
            <canvas
                node_ref=canvas_ref
                style="position: absolute; inset: 0; width: 100%; height: 100%; z-index: 0;"
            />
            <div style="position: absolute; inset: 0; z-index: 10; pointer-events: none; background: linear-gradient(to bottom, rgba(255,255,255,0.4), transparent, rgba(255,255,255,0.8));" />

            <div style="position: relative; z-index: 20; display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; padding: 0 16px; text-align: center;">
                <div style=format!("display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; margin-bottom: 24px; background: {SKY_LIGHT}; border-radius: 9999px; border: 1px solid rgba(135,206,235,0.3);")>
                    <span style=format!("width: 8px; height: 8px; border-radius: 9999px; background: {OCEAN};") />
                    <span style=format!("font-size: 0.875rem; font-weight: 500; color: {OCEAN};")>
                        "Universitas Tanjungpura"
                    </span>
                </div>

                <h1 style=format!("margin: 0 0 16px; font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 700; color: {INK}; letter-spacing: -0.02em;")>
                    <span style="display: block;">"Sistem Informasi"</span>
                    <span style="display: block; margin-top: 8px; background: linear-gradient(90deg, #0369a1, #87ceeb); -webkit-background-clip: text; background-clip: text; color: transparent;">
                        "CloudSI 2025"
                    </span>
                </h1>

                <p style=format!("max-width: 42rem; margin: 0 auto 32px; font-size: 1.125rem; line-height: 1.7; color: {SLATE};")>
                    "Cloud: Rumah, SI: Sistem Informasi. Bersama membangun masa depan digital. Selamat datang di perjalanan kami sebagai generasi inovator."
                </p>

                <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 16px;">
                    <button
                        style=format!("padding: 16px 32px; background: {OCEAN}; color: #ffffff; font-weight: 600; border: none; border-radius: 12px; cursor: pointer; box-shadow: 0 10px 25px rgba(3,105,161,0.25);")
                        on:click=|_| {
                            dom::scroll_to_section("gallery");
                        }
                    >
                        "Explore Gallery"
                    </button>
                    <button
                        style=format!("padding: 16px 32px; background: rgba(255,255,255,0.8); color: {OCEAN}; font-weight: 600; border: 2px solid {SKY_LIGHT}; border-radius: 12px; cursor: pointer;")
                        on:click=|_| {
                            dom::scroll_to_section("about");
                        }
                    >
                        "Tentang CloudSI"
                    </button>
                </div>

                <div
                    style="position: absolute; bottom: 32px; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; gap: 8px; cursor: pointer;"
                    on:click=|_| {
                        dom::scroll_to_section("about");
                    }
                >
                    <span style=format!("font-size: 0.75rem; color: {SLATE}; text-transform: uppercase; letter-spacing: 0.2em;")>
                        "Scroll"
                    </span>
                    <div style="width: 24px; height: 40px; border: 2px solid #87ceeb; border-radius: 9999px; display: flex; justify-content: center; padding-top: 8px;">
                        <div style=format!("width: 6px; height: 6px; border-radius: 9999px; background: {OCEAN};") />
                    </div>
                </div>
            </div>
        </section>
    }
}
