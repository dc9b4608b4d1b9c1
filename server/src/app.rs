use std::path::Path;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::{any, get, post},
};
use cloudsi_shared::upload::LOGO_DIR;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::MULTIPART_OVERHEAD_BYTES;
use crate::routes;
use crate::state::AppState;

/// Paths the client router renders itself; they get the SPA shell.
const SPA_ROUTES: [&str; 2] = ["/admin", "/admin/"];

pub(crate) fn build_app(state: AppState) -> Router {
    // Built bundle first, then user-visible uploads. Anything missing from
    // both is a 404, so an absent logo or photo never comes back as HTML.
    let spa_shell = ServeFile::new(state.static_dir.join("index.html"));
    let static_assets = SPA_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route_service(route, spa_shell.clone())
        })
        .fallback_service(
            ServeDir::new(&state.static_dir)
                .precompressed_br()
                .precompressed_gzip()
                .fallback(ServeDir::new(&state.public_dir)),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let read_api = Router::new()
        .route("/api/site", get(routes::api::get_site))
        .route("/api/members", get(routes::api::get_members))
        .route("/api/gallery", get(routes::api::get_gallery))
        .route("/api/events", get(routes::api::get_events))
        .route("/api/health", get(routes::api::health))
        .route("/api/metrics", get(routes::api::metrics))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    let upload_limit = state.max_logo_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);
    let app = Router::new()
        .merge(read_api)
        .route(
            "/api/upload-logo",
            post(routes::upload::upload_logo).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/{*rest}", any(routes::api::not_found));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    // The logo is replaced in place under a fixed name.
    if path
        .strip_prefix('/')
        .is_some_and(|rest| rest.starts_with(LOGO_DIR))
    {
        return Some("no-cache");
    }

    if is_hashed_bundle_asset(path) {
        return Some("public, max-age=31536000, immutable");
    }

    if path.starts_with("/images/")
        || path.starts_with("/gallery/")
        || path.starts_with("/videos/")
        || path.starts_with("/fonts/")
    {
        return Some("public, max-age=86400");
    }

    None
}

fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{embedded_state, spawn_test_server, state_with_dirs, temp_dir};
    use axum::body::{Body, to_bytes};
    use axum::http::StatusCode;
    use cloudsi_shared::upload::{LOGO_FILE_NAME, LOGO_PUBLIC_PATH};
    use tower::ServiceExt;

    #[test]
    fn immutable_cache_for_hashed_bundle_assets() {
        assert_eq!(
            cache_control_for_path("/cloudsi-client-71578f6b278221f3_bg.wasm"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(
            cache_control_for_path("/input-a93762ff3bf6d63a.css"),
            Some("public, max-age=31536000, immutable")
        );
    }

    #[test]
    fn short_cache_for_unhashed_static_assets() {
        assert_eq!(
            cache_control_for_path("/gallery/cloudsi-1.jpg"),
            Some("public, max-age=86400")
        );
        assert_eq!(
            cache_control_for_path("/images/members/phasacola.jpg"),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn uploaded_logo_is_always_revalidated() {
        assert_eq!(
            cache_control_for_path("/images/logos/logo-angkatan-25.png"),
            Some("no-cache")
        );
    }

    #[test]
    fn no_cache_header_override_for_html() {
        assert_eq!(cache_control_for_path("/"), None);
        assert_eq!(cache_control_for_path("/index.html"), None);
        assert_eq!(cache_control_for_path("/admin"), None);
    }

    #[tokio::test]
    async fn read_api_allows_any_origin() {
        let response = build_app(embedded_state())
            .oneshot(
                Request::builder()
                    .uri("/api/site")
                    .header(header::ORIGIN, "https://example.org")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404_not_spa_shell() {
        let response = build_app(embedded_state())
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["error"], "Not found");
    }

    #[tokio::test]
    async fn missing_media_is_404_without_cache_header() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        std::fs::write(static_dir.path().join("index.html"), "<html>shell</html>")
            .expect("write index");

        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let (addr, server_handle) = spawn_test_server(state).await;
        let base_url = format!("http://{addr}");
        let client = reqwest::Client::new();

        for path in [LOGO_PUBLIC_PATH, "/gallery/missing.jpg", "/videos/none.mp4"] {
            let response = client
                .get(format!("{base_url}{path}"))
                .send()
                .await
                .expect("media request");
            assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND, "{path}");
            assert!(
                response.headers().get(reqwest::header::CACHE_CONTROL).is_none(),
                "{path}"
            );
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            assert!(!content_type.starts_with("text/html"), "{path}");
        }

        let home = client
            .get(format!("{base_url}/"))
            .send()
            .await
            .expect("home request");
        assert_eq!(home.status(), reqwest::StatusCode::OK);
        assert_eq!(home.text().await.expect("home body"), "<html>shell</html>");

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn uploaded_logo_is_served_as_image_and_revalidated() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        std::fs::write(static_dir.path().join("index.html"), "<html>shell</html>")
            .expect("write index");
        std::fs::create_dir_all(public_dir.path().join(LOGO_DIR)).expect("logo dir");
        std::fs::write(
            public_dir.path().join(LOGO_DIR).join(LOGO_FILE_NAME),
            [0x89, b'P', b'N', b'G'],
        )
        .expect("write logo");

        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let (addr, server_handle) = spawn_test_server(state).await;

        let response = reqwest::get(format!("http://{addr}{LOGO_PUBLIC_PATH}"))
            .await
            .expect("logo request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("image/png")
        );
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-cache")
        );

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn static_lookup_prefers_bundle_then_public_then_spa_shell() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        std::fs::write(static_dir.path().join("index.html"), "<html>shell</html>")
            .expect("write index");
        std::fs::write(static_dir.path().join("robots.txt"), "bundle").expect("write bundle");
        std::fs::write(public_dir.path().join("robots.txt"), "public").expect("write public");
        std::fs::create_dir_all(public_dir.path().join("gallery")).expect("gallery dir");
        std::fs::write(public_dir.path().join("gallery/cloudsi-1.jpg"), "jpg")
            .expect("write photo");

        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let (addr, server_handle) = spawn_test_server(state).await;
        let base_url = format!("http://{addr}");
        let client = reqwest::Client::new();

        let robots = client
            .get(format!("{base_url}/robots.txt"))
            .send()
            .await
            .expect("robots request")
            .text()
            .await
            .expect("robots body");
        assert_eq!(robots, "bundle");

        let photo = client
            .get(format!("{base_url}/gallery/cloudsi-1.jpg"))
            .send()
            .await
            .expect("photo request");
        assert_eq!(photo.status(), reqwest::StatusCode::OK);
        assert_eq!(
            photo
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=86400")
        );

        let admin = client
            .get(format!("{base_url}/admin"))
            .send()
            .await
            .expect("admin request");
        assert_eq!(admin.status(), reqwest::StatusCode::OK);
        assert_eq!(admin.text().await.expect("admin body"), "<html>shell</html>");

        let unknown = client
            .get(format!("{base_url}/not-a-page"))
            .send()
            .await
            .expect("unknown request");
        assert_eq!(unknown.status(), reqwest::StatusCode::NOT_FOUND);

        server_handle.abort();
        let _ = server_handle.await;
    }
}
