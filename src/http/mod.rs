//! Outbound request pipeline to the CMS.
//!
//! Every call goes through the same steps: resolve auth headers, merge them
//! over the defaults and caller headers, send with bounded retries, and
//! normalize the body into a JSON object.

mod auth;
mod client;
mod error;
mod headers;
mod retry;


pub use auth::{ACCESS_KEY_HEADER, API_KEY_HEADER, AuthResolver, TOKEN_PATH, TokenCache};
pub use client::{RequestSpec, ResponseEnvelope, SitefinityClient};
pub use error::{PipelineError, PipelineResult};
pub use headers::{default_headers, merge_headers};
pub use retry::RetryPolicy;

use std::fmt;

/// HTTP methods the pipeline issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install the ring crypto provider for rustls.
///
/// reqwest is built without a default provider, so this must run before the
/// first client is constructed. Repeated calls are harmless.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
