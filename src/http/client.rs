//! Retrying JSON client for the CMS.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};
use tracing::debug;

use super::Method;
use super::auth::{AuthResolver, TokenCache};
use super::error::{PipelineError, PipelineResult};
use super::headers::{default_headers, merge_headers};
use super::retry::RetryPolicy;
use crate::config::{ConfigError, ConfigResult, Settings};

/// Parsed body of a successful response.
pub type ResponseEnvelope = Map<String, Value>;

/// One outbound call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            query: Vec::new(),
            body: Some(body),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Shared entry point for every CMS call.
///
/// Cheap to clone: the connection pool and the token cache are shared
/// between clones.
#[derive(Debug, Clone)]
pub struct SitefinityClient {
    http: reqwest::Client,
    auth: Arc<AuthResolver>,
    retry: RetryPolicy,
    timeout: Duration,
    defaults: HeaderMap,
    site_url: String,
}

impl SitefinityClient {
    pub fn from_settings(settings: &Settings) -> ConfigResult<Self> {
        super::install_crypto_provider();

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        let auth = AuthResolver::new(
            settings.auth.clone(),
            &settings.site_url,
            http.clone(),
            settings.request_timeout,
            Arc::new(TokenCache::new()),
        );

        Ok(Self {
            http,
            auth: Arc::new(auth),
            retry: settings.retry,
            timeout: settings.request_timeout,
            defaults: default_headers(),
            site_url: settings.site_url.clone(),
        })
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub async fn get(&self, url: &str, params: &[(&str, String)]) -> PipelineResult<ResponseEnvelope> {
        let spec = params
            .iter()
            .fold(RequestSpec::get(url), |spec, (name, value)| {
                spec.with_query(*name, value.clone())
            });
        self.execute(&spec).await
    }

    pub async fn post(&self, url: &str, body: Value) -> PipelineResult<ResponseEnvelope> {
        self.execute(&RequestSpec::post(url, body)).await
    }

    /// Send `spec` with retries and normalize the response.
    ///
    /// Auth headers are resolved once per call, not per attempt.
    pub async fn execute(&self, spec: &RequestSpec) -> PipelineResult<ResponseEnvelope> {
        let auth = self.auth.headers().await;
        let headers = &merge_headers(&self.defaults, &spec.headers, &auth);
        let label = format!("{} {}", spec.method, spec.url);

        self.retry
            .run(
                &label,
                |attempt| self.attempt(spec, headers, attempt),
                |e: &PipelineError| e.is_retryable(spec.method),
            )
            .await
    }

    async fn attempt(
        &self,
        spec: &RequestSpec,
        headers: &HeaderMap,
        attempt: u32,
    ) -> PipelineResult<ResponseEnvelope> {
        debug!(method = %spec.method, url = %spec.url, attempt, "Sending request");

        let mut request = match spec.method {
            Method::Get => self.http.get(&spec.url),
            Method::Post => self.http.post(&spec.url),
        }
        .headers(headers.clone())
        .timeout(self.timeout);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PipelineError::transport(&spec.url, e))?;

        let status = response.status();
        let json_body = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::HttpStatus {
                url: spec.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::transport(&spec.url, e))?;

        normalize(spec.method, &spec.url, status.as_u16(), json_body, &bytes)
    }
}

/// Turn a 2xx body into a mapping.
///
/// GET bodies must be a JSON object whatever the declared content type.
/// POST bodies that are empty or not declared as JSON become a success
/// marker carrying the status code.
fn normalize(
    method: Method,
    url: &str,
    status: u16,
    json_body: bool,
    bytes: &[u8],
) -> PipelineResult<ResponseEnvelope> {
    let blank = bytes.iter().all(u8::is_ascii_whitespace);
    if method == Method::Post && (!json_body || blank) {
        let mut envelope = Map::new();
        envelope.insert("status".to_string(), Value::from("success"));
        envelope.insert("status_code".to_string(), Value::from(status));
        return Ok(envelope);
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PipelineError::decode(
            url,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(PipelineError::decode(url, e.to_string())),
    }
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
