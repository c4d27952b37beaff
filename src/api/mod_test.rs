use std::net::IpAddr;

use utoipa::OpenApi;

use super::{ApiDoc, Config};

#[test]
fn test_config_default_binds_all_interfaces() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
    assert_eq!(config.port, 8000);
}

#[test]
fn test_openapi_documents_tool_routes() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();

    for expected in ["/", "/health", "/api/list-tools", "/api/run-tool"] {
        assert!(
            paths.iter().any(|p| p.as_str() == expected),
            "missing {} in {:?}",
            expected,
            paths
        );
    }
}
