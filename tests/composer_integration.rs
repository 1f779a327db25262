//! End-to-end rating flow: search, select, fetch, analyze, compose.
//!
//! Runs real catalog clients against wiremock endpoints and checks the
//! composed summaries, including the two distinct empty-result cases.

use std::sync::Arc;

use bookwarden_core::{
    Analyzer, Catalog, GoogleBooksClient, OpenLibraryClient, RatingComposer, ResultAggregator,
    Taxonomy, WarningReason,
};
use wiremock::matchers::{method, path, query_param, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn composer_for(catalog: Arc<Catalog>) -> RatingComposer {
    RatingComposer::new(catalog, Analyzer::new(Arc::new(Taxonomy::builtin())))
}

#[tokio::test]
async fn test_rate_google_record_with_violent_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param_contains("q", "intitle:"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"volumeInfo": {
                "title": "Small Town Blood",
                "authors": ["A. Writer"],
                "infoLink": "https://books.example/stb",
                "industryIdentifiers": [{"type": "ISBN_13", "identifier": "9781111111111"}]
            }}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "isbn:9781111111111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"volumeInfo": {
                "title": "Small Town Blood",
                "description": "The story depicts a brutal murder and graphic violence in a small town",
                "imageLinks": {"thumbnail": "https://img.example/stb.jpg"}
            }}]
        })))
        .mount(&server)
        .await;

    let catalog = Arc::new(Catalog::from_clients(vec![Box::new(
        GoogleBooksClient::with_base_url(server.uri()).unwrap(),
    )]));
    let aggregator = ResultAggregator::new(Arc::clone(&catalog));

    let candidates = aggregator.aggregate("Small Town Blood", "").await;
    assert_eq!(candidates.len(), 1);

    let summary = composer_for(catalog).rate(&candidates[0]).await.unwrap();

    assert!(summary.result.contains("Homicide/Gun Violence"));
    assert!(summary.result.contains("Violence & Graphic Content"));
    assert_eq!(summary.rating, summary.result.len());
    assert!(matches!(summary.reason, WarningReason::Warnings(_)));
    assert_eq!(summary.cover_url.as_deref(), Some("https://img.example/stb.jpg"));
    assert_eq!(summary.record.info_link.as_deref(), Some("https://books.example/stb"));
}

#[tokio::test]
async fn test_rate_open_library_record_scrapes_work_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "docs": [{
                "key": "/works/OL9W",
                "title": "Cookie Days",
                "author_name": ["B. Baker"]
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works/OL9W"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <div class="work-description-content restricted-view">
                <p>A gentle tale about friendship and baking cookies</p>
            </div>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let catalog = Arc::new(Catalog::from_clients(vec![Box::new(
        OpenLibraryClient::with_base_url(server.uri()).unwrap(),
    )]));
    let aggregator = ResultAggregator::new(Arc::clone(&catalog));

    let candidates = aggregator.aggregate("Cookie Days", "").await;
    assert_eq!(candidates.len(), 1);

    let summary = composer_for(catalog).rate(&candidates[0]).await.unwrap();

    // Description was fetched and analyzed; nothing triggered.
    assert!(summary.has_description());
    assert_eq!(summary.reason, WarningReason::NoWarnings);
    assert_eq!(summary.rating, 0);
    assert!(summary.cover_url.is_none());
}

#[tokio::test]
async fn test_rate_with_failed_fetch_reports_no_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "docs": [{
                "key": "/works/OLGONE",
                "title": "Vanished Book",
                "author_name": ["C. Lost"]
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works/OLGONE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = Arc::new(Catalog::from_clients(vec![Box::new(
        OpenLibraryClient::with_base_url(server.uri()).unwrap(),
    )]));
    let aggregator = ResultAggregator::new(Arc::clone(&catalog));

    let candidates = aggregator.aggregate("Vanished Book", "").await;
    assert_eq!(candidates.len(), 1);

    let summary = composer_for(catalog).rate(&candidates[0]).await.unwrap();

    // The outage degrades to "no description", distinct from "no warnings".
    assert_eq!(summary.reason, WarningReason::NoDescription);
    assert_ne!(summary.reason, WarningReason::NoWarnings);
    assert!(!summary.has_description());
    assert_eq!(summary.rating, 0);
}

#[tokio::test]
async fn test_rate_google_record_without_description_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"volumeInfo": {
                "title": "Blurbless",
                "industryIdentifiers": [{"type": "ISBN_10", "identifier": "1234567890"}]
            }}]
        })))
        .mount(&server)
        .await;

    let catalog = Arc::new(Catalog::from_clients(vec![Box::new(
        GoogleBooksClient::with_base_url(server.uri()).unwrap(),
    )]));
    let aggregator = ResultAggregator::new(Arc::clone(&catalog));

    let candidates = aggregator.aggregate("Blurbless", "").await;
    let summary = composer_for(catalog).rate(&candidates[0]).await.unwrap();

    assert_eq!(summary.reason, WarningReason::NoDescription);
}
