//! HTTP client for the multi-vendor marketplace (MVM) REST API.
//!
//! Wraps `reqwest` with bearer-token auth, retry on 429/5xx, and typed
//! response deserialization. One [`MvmClient`] (and its connection pool) is
//! shared by every call in a sweep.

mod sellers;
mod shipping;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::MvmError;
use crate::retry::retry_with_backoff;

pub(crate) const DEFAULT_BASE_URL: &str = "https://mvmapi.webkul.com/api/v2/";

/// Custom-field ids under which sellers record their registration numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomFieldIds {
    pub fr_epr_reg_number: u64,
    pub de_lucid_reg_number: u64,
}

/// Client for the MVM REST API.
///
/// Use [`MvmClient::from_config`] in the binary or [`MvmClient::new`] to
/// point at a mock server in tests.
pub struct MvmClient {
    client: Client,
    base_url: Url,
    custom_fields: CustomFieldIds,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay for exponential backoff: `backoff_base_ms * 2^(attempt-1)`.
    backoff_base_ms: u64,
    /// Pause before every request, to stay under the API rate limit.
    inter_request_delay_ms: u64,
}

impl MvmClient {
    /// Creates a client with retries disabled and no request throttling.
    ///
    /// # Errors
    ///
    /// Returns [`MvmError::InvalidConfig`] if `base_url` is not a valid URL or
    /// `bearer_token` is not a valid header value, and [`MvmError::Http`] if
    /// the underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        bearer_token: &str,
        timeout_secs: u64,
        custom_fields: CustomFieldIds,
    ) -> Result<Self, MvmError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|e| MvmError::InvalidConfig(format!("bearer token: {e}")))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("epr-audit/0.1 (compliance-bot)")
            .default_headers(headers)
            .build()?;

        // Normalise to exactly one trailing slash so `Url::join` appends
        // endpoint paths instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MvmError::InvalidConfig(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            custom_fields,
            max_retries: 0,
            backoff_base_ms: 0,
            inter_request_delay_ms: 0,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`MvmClient::new`].
    pub fn from_config(config: &epr_core::AppConfig) -> Result<Self, MvmError> {
        let custom_fields = CustomFieldIds {
            fr_epr_reg_number: config.fr_epr_reg_number_custom_field_id,
            de_lucid_reg_number: config.de_lucid_reg_number_custom_field_id,
        };
        Ok(Self::new(
            &config.mvm_api_base_url,
            &config.mvm_api_bearer_token,
            config.request_timeout_secs,
            custom_fields,
        )?
        .with_retries(config.max_retries, config.retry_backoff_base_ms)
        .with_inter_request_delay(config.inter_request_delay_ms))
    }

    /// Creates a client pointed at the production MVM API.
    ///
    /// # Errors
    ///
    /// See [`MvmClient::new`].
    pub fn production(
        bearer_token: &str,
        timeout_secs: u64,
        custom_fields: CustomFieldIds,
    ) -> Result<Self, MvmError> {
        Self::new(DEFAULT_BASE_URL, bearer_token, timeout_secs, custom_fields)
    }

    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn with_inter_request_delay(mut self, delay_ms: u64) -> Self {
        self.inter_request_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn custom_fields(&self) -> CustomFieldIds {
        self.custom_fields
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, MvmError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| MvmError::InvalidConfig(format!("invalid endpoint path '{path}': {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authenticated GET with retry, asserts a 2xx status and parses
    /// the body as `T`.
    ///
    /// # Errors
    ///
    /// - [`MvmError::RateLimited`] for 429 after all retries.
    /// - [`MvmError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`MvmError::Http`] on network failure.
    /// - [`MvmError::Deserialize`] if the body does not match `T` (not retried).
    async fn get_json<T: DeserializeOwned>(&self, url: &Url, context: &str) -> Result<T, MvmError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            if self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(MvmError::RateLimited {
                    url: url.to_string(),
                });
            }

            if !status.is_success() {
                return Err(MvmError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let body = response.text().await?;
            serde_json::from_str::<T>(&body).map_err(|e| MvmError::Deserialize {
                context: context.to_owned(),
                source: e,
            })
        })
        .await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
