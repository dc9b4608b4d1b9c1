mod app;
mod config;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let site = match cloudsi_shared::dataset::load_embedded() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!(error = %e, "embedded site dataset is invalid");
            return;
        }
    };
    tracing::info!(
        members = site.members.len(),
        photos = site.gallery.len(),
        events = site.events.len(),
        "Site dataset loaded"
    );

    let config = AppConfig::from_env();
    tracing::info!(
        static_dir = %config.static_dir.display(),
        public_dir = %config.public_dir.display(),
        max_logo_bytes = config.max_logo_bytes,
        "Configuration resolved"
    );

    let state = match AppState::new(site, &config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to pre-serialize site payloads");
            return;
        }
    };
    if !state.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %state.static_dir.display(),
            "static bundle directory is missing; only the API will be useful"
        );
    }

    let app = app::build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("CloudSI server listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind TCP listener");
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
    }

    tracing::info!("Server shut down gracefully");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
