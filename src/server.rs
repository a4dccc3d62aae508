use appinfo_provider::AppInfo;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::health;

/// Owns the listener configuration and serves the health router with it.
pub struct AppInfoServer {
    config: ServerConfig,
}

impl AppInfoServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Consumes the server and serves `app_info` until a shutdown signal arrives.
    pub async fn serve(self, app_info: AppInfo) -> Result<()> {
        serve(app_info, self.config).await
    }
}

/// Binds `config.bind_addr` and serves `app_info` on it.
///
/// Failing to bind is returned to the caller; there is no retry.
pub async fn serve(app_info: AppInfo, config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "appinfo listening");

    serve_listener(listener, health::router(app_info)).await
}

/// Serves `router` on an already bound listener.
pub async fn serve_listener(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("appinfo stopped");
    Ok(())
}

/// Takes the [`AppInfo`] snapshot from the process environment and serves it on `0.0.0.0:8080`.
pub async fn run() -> Result<()> {
    let (config, app_info) = startup();
    tracing::info!(
        app_name = app_info.name(),
        version = app_info.version(),
        environment = app_info.environment(),
        "captured app info"
    );

    serve(app_info, config).await
}

/// The listener configuration and metadata snapshot used by [`run`].
///
/// Only the process environment feeds the snapshot; no file is read.
pub(crate) fn startup() -> (ServerConfig, AppInfo) {
    (ServerConfig::default(), AppInfo::from_env())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = wait_for_ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        wait_for_ctrl_c().await;
    }

    tracing::info!("shutdown signal received");
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
