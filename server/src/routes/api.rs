use std::fmt::Write as _;

use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;
use cloudsi_shared::filter::FacetParseError;
use cloudsi_shared::{
    Facet, FilterState, FilteredPage, GalleryPhoto, Member, MemberFacets, PhotoFacets,
    apply_filters,
};
use serde::Deserialize;
use tracing::debug;

use crate::config::{LISTING_CACHE_CONTROL, SITE_CACHE_CONTROL};
use crate::state::{AppState, ObservabilitySnapshot, PreSerialized};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

type ApiError = (StatusCode, Json<serde_json::Value>);

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let logo_present = logo_present(&state).await;
    let observability = state.observability.snapshot();
    Json(serde_json::json!({
        "status": "ok",
        "members": state.site.members.len(),
        "photos": state.site.gallery.len(),
        "videos": state.site.videos.len(),
        "events": state.site.events.len(),
        "logo_present": logo_present,
        "started_at": state.started_at.to_rfc3339(),
        "observability": {
            "site_requests_total": observability.site_requests_total,
            "member_queries_total": observability.member_queries_total,
            "gallery_queries_total": observability.gallery_queries_total,
            "rejected_queries_total": observability.rejected_queries_total,
            "logo_uploads_total": observability.logo_uploads_total,
            "logo_upload_rejections_total": observability.logo_upload_rejections_total,
            "logo_upload_failures_total": observability.logo_upload_failures_total,
        }
    }))
}

/// Whole dataset, pre-serialized at startup.
pub async fn get_site(State(state): State<AppState>, headers: HeaderMap) -> Response {
    state.observability.record_site_request();
    conditional_json(&state.site_payload, &headers, SITE_CACHE_CONTROL)
}

pub async fn get_events(State(state): State<AppState>, headers: HeaderMap) -> Response {
    conditional_json(&state.events_payload, &headers, SITE_CACHE_CONTROL)
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub konsentrasi: String,
    #[serde(default)]
    pub divisi: String,
    #[serde(default)]
    pub role: String,
}

impl MemberQuery {
    fn into_filter(self) -> Result<FilterState<MemberFacets>, FacetParseError> {
        let facets = MemberFacets {
            konsentrasi: Facet::parse(&self.konsentrasi)?,
            divisi: Facet::parse(&self.divisi)?,
            role: Facet::parse(&self.role)?,
        };
        Ok(FilterState::new(self.q, facets))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

impl GalleryQuery {
    fn into_filter(self) -> Result<FilterState<PhotoFacets>, FacetParseError> {
        let facets = PhotoFacets {
            category: Facet::parse(&self.category)?,
        };
        Ok(FilterState::new(self.q, facets))
    }
}

pub async fn get_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state.observability.record_member_query();
    let filter = query
        .into_filter()
        .map_err(|e| rejected_query(&state, &e))?;
    let matches = apply_filters(&state.site.members, &filter);
    let page: FilteredPage<Member> = FilteredPage::from_matches(state.site.members.len(), &matches);
    Ok((
        [(header::CACHE_CONTROL, LISTING_CACHE_CONTROL)],
        Json(page),
    ))
}

pub async fn get_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state.observability.record_gallery_query();
    let filter = query
        .into_filter()
        .map_err(|e| rejected_query(&state, &e))?;
    let matches = apply_filters(&state.site.gallery, &filter);
    let page: FilteredPage<GalleryPhoto> =
        FilteredPage::from_matches(state.site.gallery.len(), &matches);
    Ok((
        [(header::CACHE_CONTROL, LISTING_CACHE_CONTROL)],
        Json(page),
    ))
}

/// Unmatched `/api/*` paths must not fall through to the SPA shell.
pub async fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus_metrics(
        &SiteGauges {
            members: state.site.members.len(),
            photos: state.site.gallery.len(),
            events: state.site.events.len(),
            logo_present: logo_present(&state).await,
            uptime_secs: (Utc::now() - state.started_at).num_seconds().max(0),
        },
        state.observability.snapshot(),
    );

    (
        [
            (header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
}

struct SiteGauges {
    members: usize,
    photos: usize,
    events: usize,
    logo_present: bool,
    uptime_secs: i64,
}

fn render_prometheus_metrics(gauges: &SiteGauges, observability: ObservabilitySnapshot) -> String {
    let mut body = String::new();
    write_metric(
        &mut body,
        "cloudsi_members",
        "gauge",
        "Number of members in the dataset.",
        gauges.members,
    );
    write_metric(
        &mut body,
        "cloudsi_gallery_photos",
        "gauge",
        "Number of gallery photos in the dataset.",
        gauges.photos,
    );
    write_metric(
        &mut body,
        "cloudsi_events",
        "gauge",
        "Number of events in the dataset.",
        gauges.events,
    );
    write_metric(
        &mut body,
        "cloudsi_logo_present",
        "gauge",
        "Whether a cohort logo has been uploaded (1 or 0).",
        u8::from(gauges.logo_present),
    );
    write_metric(
        &mut body,
        "cloudsi_uptime_seconds",
        "gauge",
        "Seconds since the server started.",
        gauges.uptime_secs,
    );

    write_metric(
        &mut body,
        "cloudsi_site_requests_total",
        "counter",
        "Total /api/site requests.",
        observability.site_requests_total,
    );
    write_metric(
        &mut body,
        "cloudsi_member_queries_total",
        "counter",
        "Total /api/members queries.",
        observability.member_queries_total,
    );
    write_metric(
        &mut body,
        "cloudsi_gallery_queries_total",
        "counter",
        "Total /api/gallery queries.",
        observability.gallery_queries_total,
    );
    write_metric(
        &mut body,
        "cloudsi_rejected_queries_total",
        "counter",
        "Total listing queries rejected for an unknown facet value.",
        observability.rejected_queries_total,
    );
    write_metric(
        &mut body,
        "cloudsi_logo_uploads_total",
        "counter",
        "Total successful logo uploads.",
        observability.logo_uploads_total,
    );
    write_metric(
        &mut body,
        "cloudsi_logo_upload_rejections_total",
        "counter",
        "Total logo uploads rejected for a missing file or unsupported type.",
        observability.logo_upload_rejections_total,
    );
    write_metric(
        &mut body,
        "cloudsi_logo_upload_failures_total",
        "counter",
        "Total logo uploads that failed while storing the file.",
        observability.logo_upload_failures_total,
    );

    body
}

fn write_metric(
    body: &mut String,
    name: &str,
    kind: &str,
    help: &str,
    value: impl std::fmt::Display,
) {
    let _ = writeln!(body, "# HELP {name} {help}");
    let _ = writeln!(body, "# TYPE {name} {kind}");
    let _ = writeln!(body, "{name} {value}");
}

async fn logo_present(state: &AppState) -> bool {
    tokio::fs::try_exists(state.logo_path())
        .await
        .unwrap_or(false)
}

fn rejected_query(state: &AppState, error: &FacetParseError) -> ApiError {
    state.observability.record_rejected_query();
    debug!(value = %error.value, "rejected listing query");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
}

fn conditional_json(payload: &PreSerialized, headers: &HeaderMap, cache_control: &'static str) -> Response {
    if if_none_match_matches(headers, &payload.etag) {
        return not_modified_response(cache_control, Some(payload.etag.as_str()));
    }
    json_bytes_response(payload.json.clone(), cache_control, Some(payload.etag.as_str()))
}

fn json_bytes_response(body: Bytes, cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn not_modified_response(cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn normalize_etag(candidate: &str) -> &str {
    candidate.strip_prefix("W/").unwrap_or(candidate).trim()
}

fn if_none_match_matches(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(header::IF_NONE_MATCH) else {
        return false;
    };
    let Ok(raw) = value.to_str() else {
        return false;
    };

    raw.split(',').any(|candidate| {
        let candidate = candidate.trim();
        candidate == "*" || normalize_etag(candidate) == normalize_etag(etag)
    })
}
