//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, metrics)
//! - Inject the upstream client into handler state
//! - Bind server to listener and drain on shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::observability::metrics;
use crate::swapi::SwapiClient;

/// Prefix for the entity routes.
pub const API_PREFIX: &str = "/api/v1";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn SwapiClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn SwapiClient>) -> Self {
        Self { client }
    }
}

/// HTTP server for the SWAPI façade.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving data from `client`.
    pub fn new(config: AppConfig, client: Arc<dyn SwapiClient>) -> Self {
        let router = Self::build_router(&config, AppState::new(client));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/starships", get(handlers::get_starships))
            .route("/starships/{id}", get(handlers::get_starship))
            .route("/people", get(handlers::get_people_list))
            .route("/people/{id}", get(handlers::get_person))
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .with_state(state);

        Router::new()
            .nest(API_PREFIX, api)
            .route("/health", get(handlers::health))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// Run the server until `shutdown` fires, accepting connections on `listener`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a clone of the router, e.g. to drive it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
