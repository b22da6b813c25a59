//! Grader HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use grader::analysis::Grader;
use grader::config::Config;
use grader::embedding::{EncoderConfig, SentenceEncoder};
use grader::gateway::{HEALTH_PATH, HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        max_text_bytes = config.max_text_bytes,
        "Grader starting"
    );

    let encoder_config = if let Some(path) = &config.model_path {
        EncoderConfig::new(path.clone())
    } else {
        tracing::warn!("No GRADER_MODEL_PATH configured, running encoder in stub mode");
        EncoderConfig::stub()
    };

    // Model loading is blocking file and tensor work.
    let encoder = tokio::task::spawn_blocking(move || SentenceEncoder::load(encoder_config)).await??;
    tracing::info!(
        embedding_dim = encoder.embedding_dim(),
        stub = encoder.is_stub(),
        "Sentence encoder ready"
    );

    let state = HandlerState::new(Arc::new(Grader::new(encoder)), config.max_text_bytes);
    let app = create_router_with_state(state, &config.cors_origins);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Grader shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("GRADER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(grader::config::DEFAULT_PORT);

    let url = format!("http://127.0.0.1:{}{}", port, HEALTH_PATH);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
