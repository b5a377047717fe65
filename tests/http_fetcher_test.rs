//! Tests for the HTTP detail fetcher against a mock directory API

use mockito::Server;
use providerscrape::config::ScrapeConfig;
use providerscrape::detail_fetcher::{DetailFetcher, FetchErrorKind, HttpDetailFetcher};
use serde_json::json;

mod common;
use common::*;

fn fetcher_for(server: &Server) -> HttpDetailFetcher {
    let config = ScrapeConfig::builder()
        .input_path("in.json")
        .output_path("out.csv")
        .endpoint_template(mock_template(server))
        .request_timeout_secs(5)
        .build()
        .unwrap();
    HttpDetailFetcher::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetches_json_detail() {
    let mut server = Server::new_async().await;
    let mock = create_detail_mock(&mut server, "QA1234", "WFA", &detail_json("Acme")).await;

    let fetcher = fetcher_for(&server);
    let detail = fetcher.fetch("QA1234", "WFA").await.unwrap();

    mock.assert_async().await;
    assert_eq!(detail.site_data("name").as_deref(), Some("Acme"));
    assert_eq!(detail.contact_data("phone").as_deref(), Some("02 9000 0000"));
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/providers/QA1/WFA/undefined")
        .match_header("user-agent", mockito::Matcher::Regex("Chrome/".to_string()))
        .with_status(200)
        .with_body(detail_json("Acme").to_string())
        .create_async()
        .await;

    let fetcher = fetcher_for(&server);
    assert!(fetcher.fetch("QA1", "WFA").await.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reads_json_wrapped_in_pre() {
    let mut server = Server::new_async().await;
    let page = format!(
        "<html><body><pre>{}</pre></body></html>",
        json!({"siteData": {"name": "Wrapped"}})
    );
    let _mock = server
        .mock("GET", "/providers/QA2/DES/undefined")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page)
        .create_async()
        .await;

    let fetcher = fetcher_for(&server);
    let detail = fetcher.fetch("QA2", "DES").await.unwrap();
    assert_eq!(detail.site_data("name").as_deref(), Some("Wrapped"));
}

#[tokio::test]
async fn test_error_status_is_failure() {
    let mut server = Server::new_async().await;
    let _mock = create_error_mock(&mut server, "QA3", "WFA", 404).await;

    let fetcher = fetcher_for(&server);
    let failure = fetcher.fetch("QA3", "WFA").await.unwrap_err();

    assert_eq!(failure.site_code, "QA3");
    assert_eq!(failure.provider_type, "WFA");
    assert!(matches!(failure.kind, FetchErrorKind::Status(404)));
}

#[tokio::test]
async fn test_non_json_body_is_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/providers/QA4/WFA/undefined")
        .with_status(200)
        .with_body("<html><body>Service unavailable</body></html>")
        .create_async()
        .await;

    let fetcher = fetcher_for(&server);
    let failure = fetcher.fetch("QA4", "WFA").await.unwrap_err();
    assert!(matches!(failure.kind, FetchErrorKind::InvalidJson(_)));
    assert!(failure.to_string().starts_with("Error fetching details for QA4 - WFA:"));
}

#[tokio::test]
async fn test_empty_object_is_failure() {
    let mut server = Server::new_async().await;
    let _mock = create_detail_mock(&mut server, "QA5", "WFA", &json!({})).await;

    let fetcher = fetcher_for(&server);
    let failure = fetcher.fetch("QA5", "WFA").await.unwrap_err();
    assert!(matches!(failure.kind, FetchErrorKind::EmptyDocument));
}

#[tokio::test]
async fn test_non_object_documents_are_failures() {
    let mut server = Server::new_async().await;
    let _array = create_detail_mock(&mut server, "QA6", "WFA", &json!([1, 2])).await;
    let _string = create_detail_mock(&mut server, "QA7", "WFA", &json!("Not found")).await;

    let fetcher = fetcher_for(&server);
    for site_code in ["QA6", "QA7"] {
        let failure = fetcher.fetch(site_code, "WFA").await.unwrap_err();
        assert!(matches!(failure.kind, FetchErrorKind::NotAnObject));
        assert_eq!(failure.site_code, site_code);
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    let config = ScrapeConfig::builder()
        .input_path("in.json")
        .output_path("out.csv")
        .endpoint_template("http://127.0.0.1:1/providers/{site_code}/{provider_type}")
        .request_timeout_secs(2)
        .build()
        .unwrap();
    let fetcher = HttpDetailFetcher::new(&config).unwrap();

    let failure = fetcher.fetch("QA6", "WFA").await.unwrap_err();
    assert!(failure.is_transport());
}

#[tokio::test]
async fn test_fetch_after_close_fails_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.close().await;
    fetcher.close().await;
    assert!(fetcher.is_closed());

    let failure = fetcher.fetch("QA7", "WFA").await.unwrap_err();
    assert!(matches!(failure.kind, FetchErrorKind::Closed));
    mock.assert_async().await;
}
