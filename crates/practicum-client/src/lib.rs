//! # Practicum homework API client
//!
//! Implements [`HomeworkApi`] over HTTP: one authenticated GET per call, no retries.
//!
//! ## Example
//!
//! ```rust,no_run
//! use homework_core::HomeworkApi;
//! use practicum_client::PracticumClient;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PracticumClient::new(
//!         practicum_client::DEFAULT_ENDPOINT.to_string(),
//!         "your-oauth-token".to_string(),
//!         std::time::Duration::from_secs(30),
//!     )?;
//!     let answer = client.get_api_answer(0).await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! - non-200 answers become [`HomeworkError::InvalidResponseCode`] with status, reason and body;
//! - transport failures and undecodable bodies become [`HomeworkError::RequestFailed`].

use std::time::Duration;

use async_trait::async_trait;
use homework_core::{HomeworkApi, HomeworkError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

/// Production homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Masks a token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// HTTP client for the homework statuses API.
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Builds a client for `endpoint` authenticating with `token`; every request is bounded by `timeout`.
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HomeworkError::Config(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    /// Sends `GET <endpoint>?from_date=<from_date>` with `Authorization: OAuth <token>`.
    ///
    /// Returns the parsed JSON body verbatim on HTTP 200.
    async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        info!(
            url = %self.endpoint,
            authorization = %format!("OAuth {}", mask_token(&self.token)),
            from_date = from_date,
            "Requesting homework statuses"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| HomeworkError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(HomeworkError::InvalidResponseCode {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let answer: Value = response
            .json()
            .await
            .map_err(|e| HomeworkError::RequestFailed(e.to_string()))?;

        debug!(answer = %answer, "Homework statuses received");
        Ok(answer)
    }
}
