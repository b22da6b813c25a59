//! HTTP client helpers for tests.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use grader::gateway::{ANALYZE_PATH, HEALTH_PATH, SubmissionResult};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url(HEALTH_PATH)).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn analyze(&self, request: Value) -> Result<SubmissionResult, TestClientError> {
        let resp = self
            .client
            .post(self.url(ANALYZE_PATH))
            .json(&request)
            .send()
            .await?;

        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bad request: {0:?}")]
    BadRequest(ErrorBody),
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}
