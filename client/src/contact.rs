use cloudsi_shared::contact::{
    ContactErrors, ContactField, ContactForm, SUBMIT_DELAY_MS, SUCCESS_BANNER_MS,
};
use cloudsi_shared::{Role, site};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::about::SectionHeader;
use crate::colors::{INK, OCEAN, SKY_LIGHT, SLATE};
use crate::dom;
use crate::icons;

pub(crate) const CONTACT_EMAIL: &str = "cloudsi2025@untan.ac.id";
pub(crate) const CONTACT_PHONE: &str = "+62 561-XXX-XXXX";
pub(crate) const CONTACT_PHONE_HREF: &str = "tel:+62561123456";

const ERROR_RED: &str = "#ef4444";

fn field_value(form: &ContactForm, field: ContactField) -> &str {
    match field {
        ContactField::Name => &form.name,
        ContactField::Email => &form.email,
        ContactField::Subject => &form.subject,
        ContactField::Message => &form.message,
    }
}

fn set_field(form: &mut ContactForm, field: ContactField, value: String) {
    let slot = match field {
        ContactField::Name => &mut form.name,
        ContactField::Email => &mut form.email,
        ContactField::Subject => &mut form.subject,
        ContactField::Message => &mut form.message,
    };
    *slot = value;
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ContactErrors::default());
    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(found) = form.with_untracked(ContactForm::validate) {
            errors.set(found);
            return;
        }
        errors.set(ContactErrors::default());
        submitting.set(true);
        // Nothing is sent anywhere; the delay only mimics a round trip.
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            submitting.set(false);
            sent.set(true);
            form.set(ContactForm::default());
            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            sent.set(false);
        });
    };

    view! {
        <section id="contact" style="position: relative; padding: 96px 0; background: linear-gradient(to bottom, #f8fbff, #ffffff);">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <SectionHeader
                    badge="Contact Us"
                    title="Hubungi CloudSI"
                    lead="Ada pertanyaan atau ingin berkolaborasi dengan CloudSI? Jangan ragu untuk menghubungi kami."
                />
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 32px; align-items: start;">
                    <ContactInfo />
                    <div style=format!("background: #ffffff; border-radius: 16px; padding: 32px; border: 1px solid {SKY_LIGHT}; box-shadow: 0 1px 2px rgba(0,0,0,0.04);")>
                        <Show
                            when=move || sent.get()
                            fallback=move || view! {
                                <form on:submit=on_submit novalidate=true style="display: flex; flex-direction: column; gap: 20px;">
                                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px;">
                                        {input_row("Nama", ContactField::Name, "text", "Nama lengkap", form, errors)}
                                        {input_row("Email", ContactField::Email, "email", "email@example.com", form, errors)}
                                    </div>
                                    {input_row("Subject", ContactField::Subject, "text", "Subject pesan", form, errors)}
                                    {input_row("Message", ContactField::Message, "textarea", "Tulis pesan Anda...", form, errors)}
                                    <label style=format!("display: flex; align-items: center; gap: 8px; font-size: 0.875rem; color: {SLATE}; cursor: pointer;")>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.newsletter)
                                            on:change=move |e| {
                                                let checked = dom::input_checked(&e);
                                                form.update(|f| f.newsletter = checked);
                                            }
                                        />
                                        "Subscribe to our newsletter for updates"
                                    </label>
                                    <button
                                        type="submit"
                                        disabled=move || submitting.get()
                                        style=move || format!(
                                            "padding: 16px; border: none; border-radius: 12px; background: {OCEAN}; color: #ffffff; font-weight: 600; cursor: pointer; opacity: {};",
                                            if submitting.get() { "0.7" } else { "1" }
                                        )
                                    >
                                        {move || if submitting.get() { "Mengirim..." } else { "Kirim Pesan" }}
                                    </button>
                                </form>
                            }
                        >
                            <div style="text-align: center; padding: 48px 0;">
                                <div style="width: 64px; height: 64px; margin: 0 auto 16px; border-radius: 9999px; background: #dcfce7; color: #16a34a; display: flex; align-items: center; justify-content: center; font-size: 32px;">
                                    "\u{2714}"
                                </div>
                                <h3 style=format!("margin: 0 0 8px; font-size: 1.25rem; font-weight: 700; color: {INK};")>
                                    "Pesan Terkirim!"
                                </h3>
                                <p style=format!("margin: 0; color: {SLATE};")>
                                    "Terima kasih! Kami akan segera menghubungi Anda."
                                </p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn input_row(
    label: &'static str,
    field: ContactField,
    kind: &'static str,
    placeholder: &'static str,
    form: RwSignal<ContactForm>,
    errors: RwSignal<ContactErrors>,
) -> impl IntoView {
    let on_input = move |e: web_sys::Event| {
        let value = dom::input_value(&e);
        form.update(|f| set_field(f, field, value));
        if errors.with_untracked(|errs| errs.get(field).is_some()) {
            errors.update(|errs| errs.clear(field));
        }
    };
    let error = move || errors.with(|errs| errs.get(field));
    let border = move || if error().is_some() { ERROR_RED } else { SKY_LIGHT };
    let value = move || form.with(|f| field_value(f, field).to_owned());

    let control = if kind == "textarea" {
        view! {
            <textarea
                rows=5
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                style=move || format!("width: 100%; padding: 12px 16px; border-radius: 12px; border: 1px solid {}; font: inherit; color: {INK}; resize: vertical; outline: none;", border())
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                style=move || format!("width: 100%; padding: 12px 16px; border-radius: 12px; border: 1px solid {}; font: inherit; color: {INK}; outline: none;", border())
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label style=format!("display: block; margin-bottom: 8px; font-size: 0.875rem; font-weight: 500; color: {INK};")>
                {label}
            </label>
            {control}
            {move || error().map(|err| view! {
                <p style=format!("margin: 6px 0 0; font-size: 0.875rem; color: {ERROR_RED};")>{err.to_string()}</p>
            })}
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let ketua = site()
        .members
        .iter()
        .find(|m| m.role == Some(Role::KetuaAngkatan))
        .map(|m| m.name.clone());

    let row = |glyph: &'static str, title: &'static str, body: AnyView| {
        view! {
            <div style="display: flex; gap: 16px; align-items: flex-start;">
                <div style=format!("width: 40px; height: 40px; flex-shrink: 0; border-radius: 8px; background: {SKY_LIGHT}; color: {OCEAN}; display: flex; align-items: center; justify-content: center;")>
                    {glyph}
                </div>
                <div>
                    <p style=format!("margin: 0 0 2px; font-weight: 500; color: {INK};")>{title}</p>
                    {body}
                </div>
            </div>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px;">
            <div style=format!("background: #ffffff; border-radius: 16px; padding: 24px; border: 1px solid {SKY_LIGHT}; display: flex; flex-direction: column; gap: 20px;")>
                <h3 style=format!("margin: 0; font-size: 1.25rem; font-weight: 700; color: {INK};")>"Informasi Kontak"</h3>
                {row(icons::glyph("mail"), "Email", view! {
                    <a href=format!("mailto:{CONTACT_EMAIL}") style=format!("color: {SLATE}; text-decoration: none;")>{CONTACT_EMAIL}</a>
                }.into_any())}
                {row(icons::glyph("phone"), "Phone", view! {
                    <a href=CONTACT_PHONE_HREF style=format!("color: {SLATE}; text-decoration: none;")>{CONTACT_PHONE}</a>
                }.into_any())}
                {row(icons::glyph("map-pin"), "Location", view! {
                    <p style=format!("margin: 0; color: {SLATE}; line-height: 1.6;")>
                        "Fakultas MIPA, Universitas Tanjungpura"<br />
                        "Jl. Daya Nasional, Pontianak 78124"<br />
                        "Kalimantan Barat, Indonesia"
                    </p>
                }.into_any())}
            </div>
            {ketua.map(|name| view! {
                <div style=format!("background: #ffffff; border-radius: 16px; padding: 24px; border: 1px solid {SKY_LIGHT};")>
                    <h3 style=format!("margin: 0 0 16px; font-size: 1.125rem; font-weight: 700; color: {INK};")>"Ketua Angkatan"</h3>
                    <p style=format!("margin: 0; font-weight: 500; color: {INK};")>{name}</p>
                    <p style=format!("margin: 0; font-size: 0.875rem; color: {SLATE};")>"CloudSI 2025"</p>
                </div>
            })}
        </div>
    }
}
