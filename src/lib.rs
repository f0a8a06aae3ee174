//! SWAPI proxy library.
//!
//! An HTTP façade over the Star Wars API: each route validates its input,
//! delegates to a [`swapi::SwapiClient`], and translates the result into a
//! fixed JSON schema or an HTTP status.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod swapi;

pub use config::schema::AppConfig;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use swapi::{HttpSwapiClient, MockSwapiClient, SwapiClient};
