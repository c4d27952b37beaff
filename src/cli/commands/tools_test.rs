use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::api;
use crate::cli::api_client::ApiClient;
use crate::cli::commands::tools::*;
use crate::cli::error::CliError;
use crate::sitefinity::{SitefinityTools, TOOL_NAMES};
use crate::test_support::{FakeCms, Scripted, test_client};

// =============================================================================
// Integration Tests - CLI against a live REST server backed by a fake CMS
// =============================================================================

/// Spawn the REST API on an ephemeral port
async fn spawn_test_server(cms: &FakeCms) -> String {
    let tools = SitefinityTools::new(test_client(&cms.spawn().await));
    let app = api::app(tools);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tools_table() {
    let url = spawn_test_server(&FakeCms::new()).await;
    let api_client = ApiClient::new(Some(url));

    let output = list_tools(&api_client, "table").await.unwrap();

    assert!(output.contains("╭"));
    assert!(output.contains("get_blog_post_by_id"));
    assert!(output.contains("post_id"));
    assert!(output.contains("create_event"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tools_json() {
    let url = spawn_test_server(&FakeCms::new()).await;
    let api_client = ApiClient::new(Some(url));

    let output = list_tools(&api_client, "json").await.unwrap();

    let tools: Vec<Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(tools.len(), TOOL_NAMES.len());
    assert!(tools.iter().all(|t| t["input_schema"].is_object()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_tool_text_result() {
    let cms = FakeCms::new().route(
        "/api/default/templates",
        Scripted::json(
            200,
            json!({"value": [{"Title": "Default", "Framework": "MVC", "Renderer": null}]}),
        ),
    );
    let url = spawn_test_server(&cms).await;
    let api_client = ApiClient::new(Some(url));

    let output = run_tool(&api_client, "get_page_templates", None)
        .await
        .unwrap();

    assert_eq!(output, "Title: Default\n Framework: MVC\n Renderer: \n\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_tool_unknown_is_api_error() {
    let url = spawn_test_server(&FakeCms::new()).await;
    let api_client = ApiClient::new(Some(url));

    let err = run_tool(&api_client, "get_nothing", Some("{}"))
        .await
        .unwrap_err();

    match err {
        CliError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("get_nothing"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_tool_rejects_bad_params_locally() {
    let cms = FakeCms::new();
    let url = spawn_test_server(&cms).await;
    let api_client = ApiClient::new(Some(url));

    let err = run_tool(&api_client, "get_news", Some("[]")).await.unwrap_err();

    assert!(matches!(err, CliError::InvalidParams { .. }));
    assert!(cms.requests().is_empty());
}

#[tokio::test]
async fn test_server_not_running_is_connection_failed() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api_client = ApiClient::new(Some(format!("http://{}", addr)));

    let err = list_tools(&api_client, "table").await.unwrap_err();

    assert!(matches!(err, CliError::ConnectionFailed { .. }));
}
