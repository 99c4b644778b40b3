//! Internal HTTP client for the console REST API.

use crate::core::domain::{
    error::{ConsoleError, ConsoleResult, ValidationError},
    model::config::ClientConfig,
    value_object::{AccessToken, ConsoleUrl},
};
use crate::operations::application::response::operation_response::ErrorResponse;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

/// Internal HTTP client that authenticates and rate-limits requests to the console API.
///
/// Every request carries the bearer token. Responses are mapped to `ConsoleError`:
/// `401` to `Authentication`, `403` to `Forbidden` (with the backend's error details)
/// and any other non-success status to `Api`.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: ConsoleUrl,
    token: AccessToken,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `ConsoleError::Validation` for an invalid configuration and
    /// `ConsoleError::Connection` if the HTTP client cannot be built.
    pub fn new(
        base_url: ConsoleUrl,
        token: AccessToken,
        config: &ClientConfig,
    ) -> ConsoleResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConsoleError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero(rl.requests_per_second, "requests_per_second")?;
                let quota = Quota::per_second(per_second)
                    .allow_burst(non_zero(rl.burst_size, "burst_size")?);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url,
            token,
            rate_limiter,
        })
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &ConsoleUrl {
        &self.base_url
    }

    /// Performs an authenticated GET request on the endpoint made of `segments`.
    ///
    /// # Errors
    /// Returns `ConsoleError` if the request fails or the response cannot be parsed.
    pub async fn get<T>(&self, segments: &[&str]) -> ConsoleResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(reqwest::Method::GET, segments, None::<&()>)
            .await
    }

    /// Performs an authenticated POST request with a JSON body.
    ///
    /// # Errors
    /// Returns `ConsoleError` if the request fails or the response cannot be parsed.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> ConsoleResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(reqwest::Method::POST, segments, Some(body))
            .await
    }

    async fn execute_request<B, T>(
        &self,
        method: reqwest::Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> ConsoleResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.base_url.endpoint(segments)?;
        debug!(%method, %url, "sending request");

        let mut req_builder = self
            .http_client
            .request(method, url.clone())
            .header(AUTHORIZATION, self.token.as_bearer_header());

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| ConsoleError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            warn!(%status, %url, "request rejected");
            return Err(map_error_status(status, &error_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ConsoleError::Connection(format!("Failed to parse response: {}", e)))
    }
}

fn non_zero(value: u32, field: &str) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: "Value must be greater than 0".to_string(),
    })
}

fn map_error_status(status: StatusCode, body: &str) -> ConsoleError {
    match status {
        StatusCode::UNAUTHORIZED => {
            ConsoleError::Authentication("Access token rejected".to_string())
        }
        StatusCode::FORBIDDEN => ConsoleError::Forbidden {
            errors: ErrorResponse::parse(body).into_messages(),
        },
        status => ConsoleError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        },
    }
}
