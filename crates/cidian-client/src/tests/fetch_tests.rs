use cidian_config::Config;
use serde_json::json;

use cidian_test_server::{closed_port, serve_once, serve_silence};
use crate::{FetchError, YoudaoClient};

fn client_for(url: &str) -> YoudaoClient {
    YoudaoClient::new(&Config::with_api_url(url)).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_parsed_json() {
    let body = json!({"ec": {"word": [{"trs": []}]}, "input": "test"});
    let server = serve_once("200 OK", body.to_string()).await;

    let value = client_for(&server.url).fetch("test").await.unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn test_fetch_sends_encoded_word() {
    let server = serve_once("200 OK", "{}").await;

    client_for(&server.url).fetch("give up").await.unwrap();

    let request_line = server.request_line.await.unwrap();
    assert_eq!(request_line, "GET /jsonapi?q=give+up HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_non_json_body() {
    let server = serve_once("200 OK", "<html>busy</html>").await;

    let err = client_for(&server.url).fetch("test").await.unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.to_string(), "Failed to parse API response");
}

#[tokio::test]
async fn test_fetch_http_error_is_transport_error() {
    let server = serve_once("500 Internal Server Error", "{}").await;

    let err = client_for(&server.url).fetch("test").await.unwrap_err();
    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
    assert!(!err.is_parse_error());
    assert!(err.to_string().starts_with("Network error: HTTP 500"));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let url = closed_port().await;

    let err = client_for(&url).fetch("test").await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let url = serve_silence().await;
    let config = Config {
        timeout_seconds: 1,
        ..Config::with_api_url(url)
    };
    let client = YoudaoClient::new(&config).unwrap();

    let err = client.fetch("test").await.unwrap_err();
    match err {
        FetchError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other}"),
    }
}
