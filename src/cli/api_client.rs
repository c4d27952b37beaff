use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::error::{CliError, CliResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Thin client for a running `tsf api` server.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// `api_url` comes from `--api-url` or `TSF_API_URL`; absent means
    /// `http://localhost:8000`.
    pub fn new(api_url: Option<String>) -> Self {
        crate::http::install_crypto_provider();

        let base_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a 2xx body, or turn anything else into [`CliError::ApiError`]
    /// carrying the server's `{"error": ...}` message when it sent one.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| CliError::InvalidResponse {
                message: e.to_string(),
            });
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(String::from))
            .unwrap_or(text);
        Err(CliError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}
