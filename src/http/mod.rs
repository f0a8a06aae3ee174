//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, path id validation)
//!     → handlers.rs (one call into the SwapiClient)
//!     → response.rs (model → JSON, error kind → status)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{parse_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer, API_PREFIX};
