//! Warden Server
//!
//! Composition root: loads the catalog and settings, wires resolver,
//! registry, interpreter and sweeper together, and serves the chat webhook.
//!
//! Routes:
//! - `POST /webhook`: one `{player_name, message}` chat line per call
//! - `GET /health`: liveness plus claim counts
//! - `GET /claims`: snapshot of active claims

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod sink;

use config::{ConfigError, ServerConfig};
use handlers::{create_router, AppState};
use sink::HttpSink;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warden_domain::{Clock, LogSink, MessageSink, SystemClock};
use warden_interpreter::CommandInterpreter;
use warden_registry::ClaimRegistry;
use warden_resolver::NameResolver;
use warden_sweeper::{Sweeper, SweeperWorker};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Outbound channel setup error
    #[error("Outbound channel error: {0}")]
    Outbound(#[from] warden_domain::DeliveryError),

    /// Sweeper setup error
    #[error("Sweeper error: {0}")]
    Sweeper(#[from] warden_sweeper::SweeperError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Initialize tracing with `RUST_LOG`, defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build the outbound sink described by the configuration
pub fn build_sink(config: &ServerConfig) -> Result<Arc<dyn MessageSink>, ServerError> {
    match &config.outbound_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.outbound_timeout_secs);
            Ok(Arc::new(HttpSink::new(url.clone(), timeout)?))
        }
        None => Ok(Arc::new(LogSink)),
    }
}

/// Wire application state and the expiry sweeper around one shared registry
pub fn build_app(
    config: &ServerConfig,
    sink: Arc<dyn MessageSink>,
    clock: Arc<dyn Clock>,
) -> Result<(AppState, Sweeper), ServerError> {
    config.validate()?;

    let catalog = Arc::new(config.catalog().map_err(ConfigError::from)?);
    let resolver = Arc::new(
        NameResolver::new(&catalog, config.resolver.clone()).map_err(ConfigError::from)?,
    );
    let registry = Arc::new(ClaimRegistry::new());

    let interpreter = CommandInterpreter::new(
        catalog.clone(),
        resolver,
        registry.clone(),
        clock.clone(),
    )
    .with_claim_ttl(config.sweeper.claim_ttl());

    let sweeper = Sweeper::new(
        config.sweeper.clone(),
        registry.clone(),
        catalog.clone(),
        sink.clone(),
        clock.clone(),
    );

    let state = AppState {
        catalog,
        registry,
        interpreter,
        sink,
        clock,
    };

    Ok((state, sweeper))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}

/// Start the HTTP server and the expiry sweeper
///
/// Both run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing();

    info!("Starting Warden server");
    info!("Bind address: {}", config.bind_addr());
    info!("POIs in catalog: {}", config.pois.len());
    info!(
        "Claim TTL: {:?}, sweep interval: {:?}",
        config.sweeper.claim_ttl(),
        config.sweeper.sweep_interval()
    );
    match &config.outbound_url {
        Some(url) => info!("Outbound messages: {}", url),
        None => info!("Outbound messages: log only"),
    }

    let sink = build_sink(&config)?;
    let (state, sweeper) = build_app(&config, sink, Arc::new(SystemClock))?;

    let mut worker = SweeperWorker::new(sweeper)?;
    let sweeper_task = tokio::spawn(async move { worker.run().await });

    let app = create_router(state, config.max_concurrent_requests);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    sweeper_task
        .await
        .map_err(|e| ServerError::Server(format!("Sweeper task failed: {}", e)))?;

    Ok(())
}
