//! Route handlers.
//!
//! Every entity handler follows the same shape: validate the path, call the
//! injected client once, translate the result.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::request::parse_id;
use crate::http::response::respond;
use crate::http::server::AppState;

/// `GET /api/v1/starships/{id}`
pub async fn get_starship(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    tracing::debug!(id, "Fetching starship");
    respond(state.client.get_starship(id).await)
}

/// `GET /api/v1/starships`
pub async fn get_starships(State(state): State<AppState>) -> Response {
    respond(state.client.get_starships().await)
}

/// `GET /api/v1/people/{id}`
pub async fn get_person(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    tracing::debug!(id, "Fetching person");
    respond(state.client.get_person(id).await)
}

/// `GET /api/v1/people`
pub async fn get_people_list(State(state): State<AppState>) -> Response {
    respond(state.client.get_people_list().await)
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`. Does not touch upstream.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
