//! HTTP request handlers for the server.
//!
//! Implements the chat webhook plus read-only health and claim listings
//! using axum.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use warden_domain::{Catalog, ChatEvent, Clock, MessageSink};
use warden_interpreter::CommandInterpreter;
use warden_registry::ClaimRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Static POI catalog
    pub catalog: Arc<Catalog>,
    /// Shared claim registry
    pub registry: Arc<ClaimRegistry>,
    /// Chat command interpreter
    pub interpreter: CommandInterpreter,
    /// Outbound message channel
    pub sink: Arc<dyn MessageSink>,
    /// Time source for claim ages
    pub clock: Arc<dyn Clock>,
}

/// Webhook reply; `response` is null for ordinary chat
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Response line, also forwarded to the outbound channel
    pub response: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of POIs in the catalog
    pub poi_count: usize,
    /// Number of POIs currently claimed
    pub active_claims: usize,
}

/// One active claim in the `/claims` listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimView {
    /// Canonical POI id
    pub poi: String,
    /// Primary display name
    pub display_name: String,
    /// Current owner
    pub owner: String,
    /// Seconds since the claim was acquired
    pub age_secs: u64,
}

/// POST /webhook - Handle one chat line
///
/// Any response is forwarded to the outbound channel on a spawned task;
/// the HTTP reply never waits for delivery.
async fn webhook(
    State(state): State<AppState>,
    Json(event): Json<ChatEvent>,
) -> Json<WebhookResponse> {
    let response = state.interpreter.handle(&event).await;

    if let Some(message) = response.clone() {
        let sink = Arc::clone(&state.sink);
        tokio::spawn(async move {
            if let Err(e) = sink.send(&message).await {
                tracing::warn!("Failed to deliver response: {}", e);
            }
        });
    }

    Json(WebhookResponse { response })
}

/// GET /health - Liveness and claim counts
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        poi_count: state.catalog.len(),
        active_claims: state.registry.active_count(),
    })
}

/// GET /claims - Snapshot of active claims
async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimView>> {
    let now = state.clock.now();
    let claims = state
        .registry
        .snapshot()
        .into_iter()
        .map(|(id, claim)| ClaimView {
            display_name: state.catalog.display_name(&id).to_string(),
            poi: id.to_string(),
            owner: claim.owner().to_string(),
            age_secs: claim.age(now).as_secs(),
        })
        .collect();
    Json(claims)
}

/// Create the axum router with all routes
///
/// At most `max_concurrent_requests` requests are processed at once; the
/// rest wait for a slot.
pub fn create_router(state: AppState, max_concurrent_requests: usize) -> AxumRouter {
    AxumRouter::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health_check))
        .route("/claims", get(list_claims))
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt; // for oneshot
    use warden_domain::{Poi, RecordingSink, SystemClock};
    use warden_resolver::{NameResolver, ResolverConfig};

    fn create_test_state() -> AppState {
        let catalog = Arc::new(Catalog::new(vec![Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"])]).unwrap());
        let resolver = Arc::new(NameResolver::new(&catalog, ResolverConfig::default()).unwrap());
        let registry = Arc::new(ClaimRegistry::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let interpreter =
            CommandInterpreter::new(catalog.clone(), resolver, registry.clone(), clock.clone());

        AppState {
            catalog,
            registry,
            interpreter,
            sink: Arc::new(RecordingSink::new()),
            clock,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state(), 4);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_webhook_rejects_malformed_body() {
        let app = create_router(create_test_state(), 4);

        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"player": "Alice"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
