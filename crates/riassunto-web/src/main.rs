use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riassunto_core::{Config, SummaryClient};
use riassunto_pdf_mupdf::MupdfBackend;
use riassunto_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riassunto_web=info,riassunto_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();
    tracing::debug!(?config, "resolved configuration");

    // Not fatal: without a key the endpoint answers 401 and the page shows it.
    if config.summarizer.api_key.is_none() {
        tracing::warn!("CEREBRAS_API_KEY is not set; summarization requests will be rejected");
    }

    let summarizer = SummaryClient::new(&config.summarizer)?;
    tracing::info!(
        endpoint = %summarizer.endpoint(),
        model = %config.summarizer.model,
        "summarization endpoint configured"
    );

    let state = Arc::new(AppState::new(summarizer, Arc::new(MupdfBackend::new())));
    let app = riassunto_web::router(state, config.server.max_upload_bytes());

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
