use std::net::SocketAddr;

use cloudsi_shared::SiteData;
use tempfile::TempDir;

use crate::config::AppConfig;
use crate::state::AppState;

pub(crate) async fn spawn_test_server(state: AppState) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let app = crate::app::build_app(state);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    (addr, handle)
}

/// Fresh temporary directory, removed when the handle drops.
pub(crate) fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub(crate) fn state_with_dirs(site: SiteData, static_dir: &TempDir, public_dir: &TempDir) -> AppState {
    let config = AppConfig {
        static_dir: static_dir.path().to_path_buf(),
        public_dir: public_dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    AppState::new(site, &config).expect("build test state")
}

pub(crate) fn embedded_state() -> AppState {
    AppState::new(cloudsi_shared::site().clone(), &AppConfig::default()).expect("build test state")
}
