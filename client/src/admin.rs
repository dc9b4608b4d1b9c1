use cloudsi_shared::upload::{
    LOGO_FORM_FIELD, LOGO_PUBLIC_PATH, UPLOAD_FAILED_MESSAGE, UploadAccepted, UploadRejected,
};
use leptos::prelude::*;

use crate::colors::{INK, SKY, SLATE};
use crate::dom;

const UPLOAD_ENDPOINT: &str = "/api/upload-logo";

/// Status line for a finished upload request; `Err` carries the failure text.
fn upload_status(ok: bool, body: &str) -> Result<String, String> {
    if ok {
        return serde_json::from_str::<UploadAccepted>(body)
            .map(|accepted| format!("Logo berhasil di-upload. URL: {}", accepted.path))
            .map_err(|_| UPLOAD_FAILED_MESSAGE.to_owned());
    }
    let reason = serde_json::from_str::<UploadRejected>(body)
        .map(|rejected| rejected.error)
        .unwrap_or_else(|_| "Unknown error".to_owned());
    Err(format!("Upload gagal: {reason}"))
}

async fn send_logo(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| UPLOAD_FAILED_MESSAGE.to_owned())?;
    form.append_with_blob(LOGO_FORM_FIELD, &file)
        .map_err(|_| UPLOAD_FAILED_MESSAGE.to_owned())?;
    let request = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| {
            dom::log_error(&format!("upload request: {e}"));
            UPLOAD_FAILED_MESSAGE.to_owned()
        })?;
    let resp = request.send().await.map_err(|e| {
        dom::log_error(&format!("upload failed: {e}"));
        UPLOAD_FAILED_MESSAGE.to_owned()
    })?;
    let ok = resp.ok();
    let body = resp.text().await.unwrap_or_default();
    upload_status(ok, &body)
}

/// A logo counts as present only when the public path answers with an image.
fn logo_present(ok: bool, content_type: Option<&str>) -> bool {
    ok && content_type
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
}

fn logo_src(version: u32) -> String {
    format!("{LOGO_PUBLIC_PATH}?v={version}")
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let logo_exists = RwSignal::new(false);
    let logo_version = RwSignal::new(0u32);

    // Probe the public path once so the page can say whether a logo is set.
    wasm_bindgen_futures::spawn_local(async move {
        let exists = match gloo_net::http::Request::get(LOGO_PUBLIC_PATH).send().await {
            Ok(resp) => {
                let content_type = resp.headers().get("content-type");
                logo_present(resp.ok(), content_type.as_deref())
            }
            Err(_) => false,
        };
        logo_exists.set(exists);
    });

    let on_uploaded = Callback::new(move |()| {
        logo_version.update(|v| *v += 1);
        logo_exists.set(true);
    });

    view! {
        <div style="max-width: 896px; margin: 0 auto; padding: 32px 16px;">
            <h2 style=format!("margin: 0 0 16px; font-size: 1.5rem; font-weight: 700; color: {INK};")>
                "Admin - Upload Logo"
            </h2>
            <p style=format!("margin: 0 0 24px; color: {SLATE};")>
                "Upload logo baru untuk otomatis tampil di website. File akan disimpan ke: "
                <code>{LOGO_PUBLIC_PATH}</code>
            </p>
            <div style="margin-bottom: 24px;">
                <LogoUploader on_uploaded=on_uploaded />
            </div>
            <div>
                <h3 style=format!("margin: 0 0 8px; font-weight: 600; color: {INK};")>"Current logo"</h3>
                <Show
                    when=move || logo_exists.get()
                    fallback=|| view! {
                        <div style="font-size: 0.875rem; color: #4b5563;">"Belum ada logo. Silahkan upload."</div>
                    }
                >
                    <img
                        src=move || logo_src(logo_version.get())
                        alt="Current logo"
                        style="height: 96px; object-fit: contain; border: 1px solid #e2e8f0; border-radius: 4px;"
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LogoUploader(#[prop(into)] on_uploaded: Callback<()>) -> impl IntoView {
    let file = StoredValue::new_local(None::<web_sys::File>);
    let preview = RwSignal::new(None::<String>);
    let status = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let replace_preview = move |next: Option<String>| {
        if let Some(old) = preview.get_untracked() {
            web_sys::Url::revoke_object_url(&old).ok();
        }
        preview.set(next);
    };

    let on_change = move |e: web_sys::Event| {
        let picked = dom::input_file(&e);
        let url = picked
            .as_ref()
            .and_then(|f| web_sys::Url::create_object_url_with_blob(f).ok());
        file.set_value(picked);
        replace_preview(url);
        status.set(None);
    };

    let on_upload = move |_| {
        let Some(picked) = file.get_value() else {
            status.set(Some("Pilih file terlebih dulu.".to_owned()));
            return;
        };
        loading.set(true);
        status.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let message = match send_logo(picked).await {
                Ok(message) => {
                    on_uploaded.run(());
                    message
                }
                Err(message) => message,
            };
            status.set(Some(message));
            loading.set(false);
        });
    };

    let on_clear = move |_| {
        file.set_value(None);
        replace_preview(None);
        status.set(None);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <div style="max-width: 576px; padding: 24px; background: #ffffff; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);">
            <h3 style=format!("margin: 0 0 12px; font-size: 1.125rem; font-weight: 700; color: {INK};")>
                "Upload Logo Angkatan"
            </h3>
            <p style="margin: 0 0 16px; font-size: 0.875rem;">
                "Upload PNG atau JPG agar tampil otomatis sebagai logo."
            </p>
            <input node_ref=input_ref type="file" accept="image/png,image/jpeg" on:change=on_change />
            {move || preview.get().map(|url| view! {
                <div style="margin-top: 16px;">
                    <div style="margin-bottom: 8px;">"Preview:"</div>
                    <img src=url alt="preview" style="height: 112px; object-fit: contain; border: 1px solid #e2e8f0; border-radius: 4px;" />
                </div>
            })}
            <div style="margin-top: 16px; display: flex; align-items: center; gap: 8px;">
                <button
                    on:click=on_upload
                    disabled=move || loading.get()
                    style=move || format!(
                        "padding: 4px 12px; background: {SKY}; color: #ffffff; border: none; border-radius: 4px; cursor: pointer; opacity: {};",
                        if loading.get() { "0.5" } else { "1" }
                    )
                >
                    {move || if loading.get() { "Uploading\u{2026}" } else { "Upload" }}
                </button>
                <button
                    on:click=on_clear
                    style="padding: 4px 12px; background: none; border: 1px solid #cbd5e1; border-radius: 4px; cursor: pointer;"
                >
                    "Clear"
                </button>
            </div>
            {move || status.get().map(|text| view! {
                <div style="margin-top: 12px; font-size: 0.875rem;">{text}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_response_reports_path() {
        let body = serde_json::to_string(&UploadAccepted::default()).unwrap();
        assert_eq!(
            upload_status(true, &body),
            Ok(format!("Logo berhasil di-upload. URL: {LOGO_PUBLIC_PATH}"))
        );
    }

    #[test]
    fn rejected_response_reports_reason() {
        let body = r#"{"error":"Only PNG/JPEG images are allowed"}"#;
        assert_eq!(
            upload_status(false, body),
            Err("Upload gagal: Only PNG/JPEG images are allowed".to_owned())
        );
        assert_eq!(
            upload_status(false, "<html>"),
            Err("Upload gagal: Unknown error".to_owned())
        );
    }

    #[test]
    fn unreadable_success_body_counts_as_failure() {
        assert_eq!(upload_status(true, ""), Err(UPLOAD_FAILED_MESSAGE.to_owned()));
    }

    #[test]
    fn only_image_responses_count_as_a_logo() {
        assert!(logo_present(true, Some("image/png")));
        assert!(logo_present(true, Some("Image/JPEG")));
        assert!(!logo_present(true, Some("text/html; charset=utf-8")));
        assert!(!logo_present(true, None));
        assert!(!logo_present(false, Some("image/png")));
    }

    #[test]
    fn logo_src_busts_cache() {
        assert_eq!(logo_src(3), "/images/logos/logo-angkatan-25.png?v=3");
    }
}
