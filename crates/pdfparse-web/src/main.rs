use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pdfparse_core::{ServerConfig, config_file};
use pdfparse_lopdf::LopdfBackend;
use pdfparse_web::state::AppState;

/// Verbose by default; `RUST_LOG` replaces this entirely.
const DEFAULT_LOG_FILTER: &str =
    "pdfparse_web=debug,pdfparse_lopdf=debug,pdfparse_core=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = ServerConfig::from_file(&config_file::load_config());
    config.apply_env(|key| std::env::var(key).ok());

    let state = Arc::new(AppState::new(Box::new(LopdfBackend::new())));
    let app = pdfparse_web::app(state, &config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        allowed_origin = %config.allowed_origin,
        max_upload_mb = config.max_upload_mb,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
