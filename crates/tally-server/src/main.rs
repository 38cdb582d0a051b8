//! tally server binary.
//!
//! Boot order: logging, config, store selection, router, listen. The store
//! decision happens exactly once here; nothing re-evaluates it later.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state::AppState, config, router, store};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = config::from_env().expect("config load failed");
    let store = store::select(&cfg).await;
    let state = AppState::new(cfg, store);

    let listen = SocketAddr::from(([0, 0, 0, 0], state.cfg().port));
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server listening");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, shutting down");
}
