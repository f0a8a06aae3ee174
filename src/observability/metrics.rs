//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (requests, latency, upstream outcomes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `swapi_proxy_requests_total` (counter): inbound requests by method, route, status
//! - `swapi_proxy_request_duration_seconds` (histogram): inbound latency
//! - `swapi_proxy_upstream_requests_total` (counter): upstream calls by operation, outcome
//! - `swapi_proxy_upstream_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Route label is the matched pattern, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::swapi::Operation;

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed inbound request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "swapi_proxy_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "swapi_proxy_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call. `outcome` is "ok" or an error kind name.
pub fn record_upstream(operation: Operation, outcome: &'static str, start: Instant) {
    counter!(
        "swapi_proxy_upstream_requests_total",
        "operation" => operation.as_str(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "swapi_proxy_upstream_duration_seconds",
        "operation" => operation.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Route-level middleware recording request count and latency.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, &route, response.status().as_u16(), start);
    response
}
