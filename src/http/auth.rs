//! Authentication header resolution.
//!
//! Key modes map straight to a header. The password mode exchanges the
//! credentials for a bearer token once and reuses it for the lifetime of
//! the process.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::error::{PipelineError, PipelineResult};
use crate::config::{AuthConfig, PasswordCredentials};

/// `X-SF-APIKEY`
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-sf-apikey");
/// `X-SF-Access-Key`
pub const ACCESS_KEY_HEADER: HeaderName = HeaderName::from_static("x-sf-access-key");

/// Path of the OpenID Connect token endpoint, relative to the site URL.
pub const TOKEN_PATH: &str = "/Sitefinity/Authenticate/OpenID/connect/token";

const TOKEN_SCOPE: &str = "openid offline_access";

/// Single-entry, write-once bearer token store.
///
/// Concurrent callers that find it empty share one in-flight exchange.
/// A failed exchange leaves it empty so a later call can try again.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: OnceCell<String>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get_or_exchange<F, Fut>(&self, exchange: F) -> PipelineResult<&str>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PipelineResult<String>>,
    {
        self.token
            .get_or_try_init(exchange)
            .await
            .map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Produces the auth headers for every outbound request.
#[derive(Debug, Clone)]
pub struct AuthResolver {
    config: AuthConfig,
    token_url: String,
    http: reqwest::Client,
    timeout: Duration,
    cache: Arc<TokenCache>,
}

impl AuthResolver {
    pub fn new(
        config: AuthConfig,
        site_url: &str,
        http: reqwest::Client,
        timeout: Duration,
        cache: Arc<TokenCache>,
    ) -> Self {
        Self {
            config,
            token_url: format!("{}{}", site_url.trim_end_matches('/'), TOKEN_PATH),
            http,
            timeout,
            cache,
        }
    }

    /// Headers to attach to a request. Never fails: a missing key or a
    /// failed token exchange is logged and yields an empty map.
    pub async fn headers(&self) -> HeaderMap {
        match &self.config {
            AuthConfig::None => HeaderMap::new(),
            AuthConfig::ApiKey { key } => key_header(API_KEY_HEADER, key.as_deref()),
            AuthConfig::AccessKey { key } => key_header(ACCESS_KEY_HEADER, key.as_deref()),
            AuthConfig::UsernamePassword(creds) => self.bearer_header(creds).await,
        }
    }

    async fn bearer_header(&self, creds: &PasswordCredentials) -> HeaderMap {
        let token = match self
            .cache
            .get_or_exchange(|| self.exchange_token(creds))
            .await
        {
            Ok(token) => token,
            Err(e) => {
                error!(error = %e, "Token exchange failed, continuing unauthenticated");
                return HeaderMap::new();
            }
        };

        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Bearer token contains characters not allowed in a header"),
        }
        headers
    }

    async fn exchange_token(&self, creds: &PasswordCredentials) -> PipelineResult<String> {
        info!(url = %self.token_url, username = %creds.username, "Exchanging credentials for a bearer token");

        let form = [
            ("grant_type", "password"),
            ("username", creds.username.as_str()),
            ("password", creds.password.as_str()),
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("scope", TOKEN_SCOPE),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PipelineError::transport(&self.token_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::HttpStatus {
                url: self.token_url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::transport(&self.token_url, e))?;
        let token: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| PipelineError::decode(&self.token_url, e.to_string()))?;

        debug!(expires_in = ?token.expires_in, "Bearer token acquired");
        Ok(token.access_token)
    }
}

fn key_header(name: HeaderName, key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(key) = key else {
        warn!(header = %name, "Auth key is not configured, sending request without it");
        return headers;
    };
    match HeaderValue::from_str(key) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Err(_) => warn!(header = %name, "Auth key contains characters not allowed in a header"),
    }
    headers
}
