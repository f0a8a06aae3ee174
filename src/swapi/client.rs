//! Production SWAPI client.
//!
//! # Responsibilities
//! - Issue GET requests against the configured SWAPI base URL
//! - Decode upstream JSON into the local models
//! - Classify failures: upstream 404 → NotFound, everything else → Internal
//!
//! # Design Decisions
//! - Timeouts are enforced by the reqwest client, not by the handlers
//! - Exactly one request per call; no retries, no pagination walking

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{PeopleList, Person, Starship, Starships};
use crate::observability::metrics;
use crate::swapi::{Operation, SwapiClient};

/// SWAPI client backed by reqwest.
#[derive(Clone)]
pub struct HttpSwapiClient {
    client: Client,
    /// Base URL without trailing slash.
    base_url: String,
    config: UpstreamConfig,
}

impl HttpSwapiClient {
    /// Create a new client from the upstream configuration.
    pub fn new(config: UpstreamConfig) -> ApiResult<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone());

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::internal_with(format!("failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "SWAPI client initialized"
        );

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `path` relative to the base URL and decode it as `T`.
    ///
    /// `resource` names what was asked for, used in the not-found detail.
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        resource: &str,
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let start = Instant::now();

        tracing::debug!(operation = %operation, url = %url, "Calling upstream");

        let result = self.get_json(&url, resource).await;

        match &result {
            Ok(_) => {
                metrics::record_upstream(operation, "ok", start);
            }
            Err(e) => {
                metrics::record_upstream(operation, e.kind().as_str(), start);
                tracing::warn!(
                    operation = %operation,
                    url = %url,
                    kind = %e.kind(),
                    detail = %e.detail(),
                    "Upstream call failed"
                );
            }
        }

        result
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::internal_with(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found("Not found", format!("{} not found", resource)));
        }
        if !status.is_success() {
            return Err(ApiError::internal_with(format!(
                "upstream returned {} for {}",
                status, url
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::internal_with(format!("invalid payload from {}: {}", url, e)))
    }
}

#[async_trait]
impl SwapiClient for HttpSwapiClient {
    async fn get_starship(&self, id: i64) -> ApiResult<Starship> {
        self.fetch(
            Operation::GetStarship,
            &format!("starships/{}/", id),
            &format!("starship {}", id),
        )
        .await
    }

    async fn get_starships(&self) -> ApiResult<Starships> {
        self.fetch(Operation::GetStarships, "starships/", "starships")
            .await
    }

    async fn get_person(&self, id: i64) -> ApiResult<Person> {
        self.fetch(
            Operation::GetPerson,
            &format!("people/{}/", id),
            &format!("person {}", id),
        )
        .await
    }

    async fn get_people_list(&self) -> ApiResult<PeopleList> {
        self.fetch(Operation::GetPeopleList, "people/", "people")
            .await
    }
}

impl std::fmt::Debug for HttpSwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSwapiClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .field("connect_timeout_secs", &self.config.connect_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = UpstreamConfig {
            base_url: "http://localhost:9999/api/".to_string(),
            ..UpstreamConfig::default()
        };
        let client = HttpSwapiClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_internal() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
            use_system_proxy: false,
            ..UpstreamConfig::default()
        };
        let client = HttpSwapiClient::new(config).unwrap();

        let err = client.get_starship(9).await.unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Internal);
        assert!(err.detail().contains("request to"));
    }
}
