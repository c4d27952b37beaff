//! Process configuration.
//!
//! Settings are read once at startup and never mutated afterwards.
//! Precedence: CLI flag > environment > `.env` file > default.

mod error;

#[cfg(test)]
mod config_test;

pub use error::{ConfigError, ConfigResult};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::http::RetryPolicy;

pub const ENV_SITE_PREFIX: &str = "SITEFINITY_SITE_PREFIX";
pub const ENV_AUTH_TYPE: &str = "SITEFINITY_AUTH_TYPE";
pub const ENV_API_KEY: &str = "SITEFINITY_API_KEY";
pub const ENV_ACCESS_KEY: &str = "SITEFINITY_ACCESS_KEY";
pub const ENV_USERNAME: &str = "SITEFINITY_USERNAME";
pub const ENV_PASSWORD: &str = "SITEFINITY_PASSWORD";
pub const ENV_CLIENT_ID: &str = "SITEFINITY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SITEFINITY_CLIENT_SECRET";
pub const ENV_RETRY_MAX_ATTEMPTS: &str = "RETRY_MAX_ATTEMPTS";
pub const ENV_RETRY_MIN_SECONDS: &str = "RETRY_MIN_SECONDS";
pub const ENV_RETRY_MAX_SECONDS: &str = "RETRY_MAX_SECONDS";
pub const ENV_REQUEST_TIMEOUT: &str = "SITEFINITY_REQUEST_TIMEOUT";

const DEFAULT_CLIENT_ID: &str = "sitefinity";
const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 30.0;

/// Credentials for the OAuth password grant.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// How requests to the CMS authenticate.
///
/// One variant per mode, each carrying the credential it needs. The key
/// modes tolerate an absent key: requests then go out unauthenticated and
/// the resolver logs a warning for each one.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum AuthConfig {
    #[default]
    None,
    ApiKey {
        key: Option<String>,
    },
    AccessKey {
        key: Option<String>,
    },
    UsernamePassword(PasswordCredentials),
}

impl AuthConfig {
    /// Short mode name, as accepted in `SITEFINITY_AUTH_TYPE`.
    pub fn mode(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::ApiKey { .. } => "apikey",
            AuthConfig::AccessKey { .. } => "accesskey",
            AuthConfig::UsernamePassword(_) => "usernamepassword",
        }
    }

    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let raw = non_empty(lookup(ENV_AUTH_TYPE)).unwrap_or_default();
        let normalized: String = raw
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect();

        match normalized.as_str() {
            "" | "none" | "anonymous" => Ok(AuthConfig::None),
            "apikey" => {
                let key = non_empty(lookup(ENV_API_KEY));
                if key.is_none() {
                    warn!("Auth type is apikey but {} is not set", ENV_API_KEY);
                }
                Ok(AuthConfig::ApiKey { key })
            }
            "accesskey" => {
                let key = non_empty(lookup(ENV_ACCESS_KEY));
                if key.is_none() {
                    warn!("Auth type is accesskey but {} is not set", ENV_ACCESS_KEY);
                }
                Ok(AuthConfig::AccessKey { key })
            }
            "usernamepassword" => {
                let require = |name: &str| {
                    non_empty(lookup(name)).ok_or_else(|| ConfigError::MissingCredential {
                        mode: "usernamepassword".to_string(),
                        name: name.to_string(),
                    })
                };
                Ok(AuthConfig::UsernamePassword(PasswordCredentials {
                    username: require(ENV_USERNAME)?,
                    password: require(ENV_PASSWORD)?,
                    client_id: non_empty(lookup(ENV_CLIENT_ID))
                        .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
                    client_secret: lookup(ENV_CLIENT_SECRET).unwrap_or_default(),
                }))
            }
            _ => Err(ConfigError::UnknownAuthType { value: raw }),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::ApiKey { key } => f
                .debug_struct("ApiKey")
                .field("key", &key.as_ref().map(|_| "<redacted>"))
                .finish(),
            AuthConfig::AccessKey { key } => f
                .debug_struct("AccessKey")
                .field("key", &key.as_ref().map(|_| "<redacted>"))
                .finish(),
            AuthConfig::UsernamePassword(creds) => {
                f.debug_tuple("UsernamePassword").field(creds).finish()
            }
        }
    }
}

/// Complete runtime settings for the request pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    /// CMS base URL without a trailing slash
    pub site_url: String,
    pub auth: AuthConfig,
    pub retry: RetryPolicy,
    /// Upper bound on a single HTTP attempt
    pub request_timeout: Duration,
}

impl Settings {
    /// Settings for `site_url` with default auth, retry and timeout.
    pub fn new(site_url: &str) -> ConfigResult<Self> {
        Ok(Self {
            site_url: parse_site_url(site_url)?,
            auth: AuthConfig::None,
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs_f64(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory is read first; variables
    /// already present in the environment win over it. `site_url` (from
    /// the `--site-url` flag) overrides `SITEFINITY_SITE_PREFIX`.
    pub fn load(site_url: Option<String>) -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(site_url, &|name| std::env::var(name).ok())
    }

    /// Load settings from an arbitrary variable source.
    pub fn from_lookup(
        site_url: Option<String>,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let raw_url = site_url
            .and_then(|url| non_empty(Some(url)))
            .or_else(|| non_empty(lookup(ENV_SITE_PREFIX)))
            .ok_or_else(|| ConfigError::Missing {
                name: ENV_SITE_PREFIX.to_string(),
            })?;

        let max_attempts: u32 = parse_var(lookup, ENV_RETRY_MAX_ATTEMPTS, 3)?;
        let min_secs: f64 = parse_var(lookup, ENV_RETRY_MIN_SECONDS, 1.0)?;
        let max_secs: f64 = parse_var(lookup, ENV_RETRY_MAX_SECONDS, 5.0)?;
        let timeout_secs: f64 =
            parse_var(lookup, ENV_REQUEST_TIMEOUT, DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            site_url: parse_site_url(&raw_url)?,
            auth: AuthConfig::from_lookup(lookup)?,
            retry: retry_policy(max_attempts, min_secs, max_secs)?,
            request_timeout: request_timeout(timeout_secs)?,
        })
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(lookup: &dyn Fn(&str) -> Option<String>, name: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match non_empty(lookup(name)) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn seconds(name: &str, value: f64) -> ConfigResult<Duration> {
    Duration::try_from_secs_f64(value).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn request_timeout(secs: f64) -> ConfigResult<Duration> {
    let timeout = seconds(ENV_REQUEST_TIMEOUT, secs)?;
    if timeout.is_zero() {
        return Err(ConfigError::InvalidValue {
            name: ENV_REQUEST_TIMEOUT.to_string(),
            value: secs.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(timeout)
}

fn retry_policy(max_attempts: u32, min_secs: f64, max_secs: f64) -> ConfigResult<RetryPolicy> {
    if max_attempts == 0 {
        return Err(ConfigError::InvalidRetry {
            message: format!("{} must be at least 1", ENV_RETRY_MAX_ATTEMPTS),
        });
    }
    let min = seconds(ENV_RETRY_MIN_SECONDS, min_secs)?;
    let max = seconds(ENV_RETRY_MAX_SECONDS, max_secs)?;
    if min > max {
        return Err(ConfigError::InvalidRetry {
            message: format!(
                "{} ({}) is greater than {} ({})",
                ENV_RETRY_MIN_SECONDS, min_secs, ENV_RETRY_MAX_SECONDS, max_secs
            ),
        });
    }
    Ok(RetryPolicy::new(max_attempts, min, max))
}

fn parse_site_url(raw: &str) -> ConfigResult<String> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: "expected an http(s) URL with a host".to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: "a base URL cannot carry a query or fragment".to_string(),
        });
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
