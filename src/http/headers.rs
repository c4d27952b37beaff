//! Final header set for an outbound call.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Headers sent with every request unless overridden.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Merge defaults, caller headers and auth headers, later layers winning
/// on name collisions. Auth is applied last so a caller header can never
/// displace credentials.
pub fn merge_headers(defaults: &HeaderMap, caller: &HeaderMap, auth: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    overlay(&mut merged, caller);
    overlay(&mut merged, auth);
    merged
}

fn overlay(target: &mut HeaderMap, layer: &HeaderMap) {
    for name in layer.keys() {
        target.remove(name);
        for value in layer.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}
