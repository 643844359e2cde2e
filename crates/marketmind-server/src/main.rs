// MarketMind API server entry point.
//
// Startup sequence:
// 1. Load .env (if present) and initialize tracing
// 2. Load config
// 3. Build the upstream client
// 4. Bind and serve until Ctrl+C / SIGTERM

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use marketmind_core::config;
use marketmind_llm::GeminiClient;
use marketmind_server::app::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and tracing
    dotenvy::dotenv().ok();
    init_tracing();
    info!("MarketMind API starting up");

    // 2. Config
    let config = config::load_config().context("failed to load configuration")?;
    let addr = config.server.socket_addr().context("invalid bind address")?;
    info!("Config loaded: model={}, bind={}", config.llm.model, addr);

    if config.credentials.is_placeholder() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail upstream authentication");
    }

    // 3. Upstream client
    let generator = GeminiClient::from_config(&config);
    let state = AppState::new(Arc::new(generator));
    let router = app::build_router(state, config.server.max_body_bytes);

    // 4. Serve
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("MarketMind API shut down cleanly");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("marketmind_server=info,marketmind_llm=info,tower_http=info,warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {e}");
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

    info!("shutdown signal received");
}
