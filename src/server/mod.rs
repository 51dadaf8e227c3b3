//! HTTP front end for the index
//!
//! The index is loaded once and shared read-only across requests:
//!
//! - `GET /search?q=..[&mode=word|context][&radius=N][&limit=N]` - JSON array of snippets
//! - `GET /stats` - index and server statistics
//! - `GET /health` - liveness probe
//! - anything else - files from the static directory

mod error;
mod handlers;
pub mod protocol;

pub use error::ApiError;
pub use protocol::{SearchParams, ServerLimits, StatusResponse};

use crate::index::Index;
use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Listener and routing settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for every path without a route
    pub static_dir: PathBuf,
    pub limits: ServerLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            static_dir: PathBuf::from("./static"),
            limits: ServerLimits::default(),
        }
    }
}

/// State shared by all handlers
pub(crate) struct AppState {
    pub(crate) index: Arc<Index>,
    pub(crate) limits: ServerLimits,
    pub(crate) start_time: Instant,
    pub(crate) queries_served: AtomicU64,
}

/// Build the application router
pub fn router(index: Arc<Index>, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        index,
        limits: config.limits,
        start_time: Instant::now(),
        queries_served: AtomicU64::new(0),
    });

    Router::new()
        .route("/search", get(handlers::search))
        .route("/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .with_state(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C (blocking the current task)
pub async fn serve(index: Arc<Index>, config: ServerConfig) -> Result<()> {
    let listener = bind(&config).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, static_dir = %config.static_dir.display(), "listening");

    axum::serve(listener, router(index, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

/// A server running in the background on the current tokio runtime
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl ServerHandle {
    /// Bind and start serving in a spawned task.
    ///
    /// Port 0 picks a free port; see [`ServerHandle::addr`].
    pub async fn spawn(index: Arc<Index>, config: ServerConfig) -> Result<Self> {
        let listener = bind(&config).await?;
        let addr = listener.local_addr()?;
        let app = router(index, &config);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                tracing::error!(error = %e, "server error");
            }
        });

        Ok(Self {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) {
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
