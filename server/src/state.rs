use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use cloudsi_shared::SiteData;
use cloudsi_shared::dataset::payload_etag;
use cloudsi_shared::upload::{LOGO_DIR, LOGO_FILE_NAME};

use crate::config::AppConfig;

/// A JSON body serialized once at startup and shared by every request via Arc.
#[derive(Debug, Clone)]
pub struct PreSerialized {
    pub json: Bytes,
    pub etag: String,
}

impl PreSerialized {
    pub fn new<T: serde::Serialize>(kind: &str, value: &T) -> Result<Self, serde_json::Error> {
        let json = Bytes::from(serde_json::to_vec(value)?);
        let etag = payload_etag(kind, &json);
        Ok(Self { json, etag })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteData>,
    pub site_payload: Arc<PreSerialized>,
    pub events_payload: Arc<PreSerialized>,
    pub static_dir: PathBuf,
    /// Root for user-visible uploads. The cohort logo lives under `images/logos/`.
    pub public_dir: PathBuf,
    pub max_logo_bytes: usize,
    pub started_at: DateTime<Utc>,
    pub observability: Arc<ObservabilityCounters>,
}

#[derive(Debug, Default)]
pub struct ObservabilityCounters {
    site_requests_total: AtomicU64,
    member_queries_total: AtomicU64,
    gallery_queries_total: AtomicU64,
    rejected_queries_total: AtomicU64,
    logo_uploads_total: AtomicU64,
    logo_upload_rejections_total: AtomicU64,
    logo_upload_failures_total: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ObservabilitySnapshot {
    pub site_requests_total: u64,
    pub member_queries_total: u64,
    pub gallery_queries_total: u64,
    pub rejected_queries_total: u64,
    pub logo_uploads_total: u64,
    pub logo_upload_rejections_total: u64,
    pub logo_upload_failures_total: u64,
}

impl ObservabilityCounters {
    pub fn snapshot(&self) -> ObservabilitySnapshot {
        ObservabilitySnapshot {
            site_requests_total: self.site_requests_total.load(Ordering::Relaxed),
            member_queries_total: self.member_queries_total.load(Ordering::Relaxed),
            gallery_queries_total: self.gallery_queries_total.load(Ordering::Relaxed),
            rejected_queries_total: self.rejected_queries_total.load(Ordering::Relaxed),
            logo_uploads_total: self.logo_uploads_total.load(Ordering::Relaxed),
            logo_upload_rejections_total: self
                .logo_upload_rejections_total
                .load(Ordering::Relaxed),
            logo_upload_failures_total: self.logo_upload_failures_total.load(Ordering::Relaxed),
        }
    }

    pub fn record_site_request(&self) {
        self.site_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_member_query(&self) {
        self.member_queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_gallery_query(&self) {
        self.gallery_queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_query(&self) {
        self.rejected_queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_logo_upload(&self) {
        self.logo_uploads_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_logo_upload_rejection(&self) {
        self.logo_upload_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_logo_upload_failure(&self) {
        self.logo_upload_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }
}

impl AppState {
    pub fn new(site: SiteData, config: &AppConfig) -> Result<Self, serde_json::Error> {
        let site_payload = PreSerialized::new("site", &site)?;
        let events_payload = PreSerialized::new("events", &site.events)?;
        Ok(Self {
            site: Arc::new(site),
            site_payload: Arc::new(site_payload),
            events_payload: Arc::new(events_payload),
            static_dir: config.static_dir.clone(),
            public_dir: config.public_dir.clone(),
            max_logo_bytes: config.max_logo_bytes,
            started_at: Utc::now(),
            observability: Arc::new(ObservabilityCounters::default()),
        })
    }

    pub fn logo_dir(&self) -> PathBuf {
        self.public_dir.join(LOGO_DIR)
    }

    pub fn logo_path(&self) -> PathBuf {
        self.logo_dir().join(LOGO_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_are_serialized_with_stable_etags() {
        let site = cloudsi_shared::site().clone();
        let first = AppState::new(site.clone(), &AppConfig::default()).expect("state");
        let second = AppState::new(site, &AppConfig::default()).expect("state");

        assert_eq!(first.site_payload.etag, second.site_payload.etag);
        assert!(first.site_payload.etag.starts_with("\"site-"));
        assert!(first.events_payload.etag.starts_with("\"events-"));
        assert_ne!(first.site_payload.etag, first.events_payload.etag);
    }

    #[test]
    fn logo_path_lives_under_public_dir() {
        let config = AppConfig {
            public_dir: PathBuf::from("/srv/public"),
            ..AppConfig::default()
        };
        let state = AppState::new(cloudsi_shared::site().clone(), &config).expect("state");
        assert_eq!(
            state.logo_path(),
            PathBuf::from("/srv/public/images/logos/logo-angkatan-25.png")
        );
    }

    #[test]
    fn counters_accumulate() {
        let counters = ObservabilityCounters::default();
        counters.record_site_request();
        counters.record_site_request();
        counters.record_logo_upload_rejection();
        let snapshot = counters.snapshot();
        assert_eq!(snapshot.site_requests_total, 2);
        assert_eq!(snapshot.logo_upload_rejections_total, 1);
        assert_eq!(snapshot.logo_uploads_total, 0);
    }
}
