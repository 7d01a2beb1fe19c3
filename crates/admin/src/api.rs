//! Admin API HTTP client.
//!
//! All admin endpoints live under an `/admin` namespace and require the
//! shared-secret `admin_key` query parameter; the client appends it to every
//! request.

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Connection settings for the admin API.
#[derive(Debug, Clone)]
pub struct AdminApiConfig {
    /// Backend base URL, e.g. `http://localhost:8698`.
    pub base_url: String,

    /// Shared admin secret sent as the `admin_key` query parameter.
    pub admin_key: String,
}

/// Errors from talking to the admin API.
#[derive(Debug, Error)]
pub enum AdminApiError {
    /// The request never produced a usable response (connect failure,
    /// timeout, or an undecodable body).
    #[error("admin api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("admin api returned status {0}")]
    Status(StatusCode),
}

/// HTTP client for the admin REST API.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    config: AdminApiConfig,
    http: Client,
}

impl AdminApiClient {
    /// Create a client from the given configuration.
    #[must_use]
    pub fn new(config: AdminApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Absolute URL for an admin endpoint path such as `/orders`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/admin{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// GET a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminApiError`] on transport failure or a non-success
    /// status.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(&[("admin_key", &self.config.admin_key)])
            .send()
            .await?;

        Self::decode(response).await
    }

    /// PUT a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminApiError`] on transport failure or a non-success
    /// status.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AdminApiError> {
        let response = self
            .http
            .put(self.url(path))
            .query(&[("admin_key", &self.config.admin_key)])
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminApiError`] on transport failure or a non-success
    /// status.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AdminApiError> {
        let response = self
            .http
            .post(self.url(path))
            .query(&[("admin_key", &self.config.admin_key)])
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AdminApiError> {
        let status = response.status();

        if !status.is_success() {
            return Err(AdminApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}

/// Whether an API failure should degrade to the bundled sample view.
///
/// Transport failures and backend 5xx responses fall back; client errors
/// (wrong key, bad request) surface, since hiding them would mask
/// configuration mistakes.
#[must_use]
pub fn should_fall_back(error: &AdminApiError) -> bool {
    match error {
        AdminApiError::Transport(_) => true,
        AdminApiError::Status(status) => status.is_server_error(),
    }
}
