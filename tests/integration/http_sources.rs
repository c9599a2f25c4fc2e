//! Data-source fallback over HTTP.

use std::time::Duration;

use linkpage::error::LinkError;
use linkpage::loader::{Fetcher, SourceFetcher, load_first};
use linkpage::locale::Locale;
use linkpage::pipeline::{Pipeline, RunState};
use linkpage::render::{Page, ids};
use linkpage::source::{CandidateOrigin, SourceInputs, resolve_candidates};
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::fixtures::sample_document;
use crate::common::init_test_logging;

fn page_inputs(server: &MockServer, query: &str) -> SourceInputs {
    let location = Url::parse(&format!("{}/links/index.html{query}", server.uri())).unwrap();
    SourceInputs::new(location)
}

#[tokio::test]
async fn primary_404_falls_back_to_parent_directory() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/links.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/links.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;

    let inputs = page_inputs(&server, "");
    let candidates = resolve_candidates(&inputs);
    let fetcher = SourceFetcher::new(Some(Duration::from_secs(5))).unwrap();

    let loaded = load_first(&fetcher, &candidates).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::ParentDir);
    assert_eq!(loaded.source.url, format!("{}/links.json", server.uri()));
    assert!(loaded.document.find_profile("pupuwaifu").is_ok());
}

#[tokio::test]
async fn requests_disable_caching() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/links.json"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "profiles": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let inputs = page_inputs(&server, "");
    let fetcher = SourceFetcher::new(None).unwrap();
    let loaded = load_first(&fetcher, &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::PageRelative);
}

#[tokio::test]
async fn data_url_query_wins_over_page_candidates() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/custom.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/links/links.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let query = format!("?dataUrl={}/cdn/custom.json&id=bare", server.uri());
    let inputs = page_inputs(&server, &query);
    let fetcher = SourceFetcher::new(None).unwrap();

    let outcome = Pipeline::new(fetcher, Locale::En)
        .run(&inputs, Page::new(Locale::En))
        .await;
    assert_eq!(outcome.state, RunState::Rendered);
    assert_eq!(outcome.profile_id, "bare");
    assert_eq!(
        outcome.source.unwrap().origin,
        CandidateOrigin::DataUrlOverride
    );
}

#[tokio::test]
async fn invalid_json_is_skipped() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/links.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/pages/links.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .mount(&server)
        .await;

    let inputs = page_inputs(&server, "");
    let fetcher = SourceFetcher::new(None).unwrap();
    let loaded = load_first(&fetcher, &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::DataPages);
}

#[tokio::test]
async fn all_candidates_failing_reports_last_status() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(4)
        .mount(&server)
        .await;

    let inputs = page_inputs(&server, "");
    let fetcher = SourceFetcher::new(None).unwrap();
    let outcome = Pipeline::new(fetcher, Locale::Zh)
        .run(&inputs, Page::new(Locale::Zh))
        .await;

    assert_eq!(outcome.state, RunState::Failed);
    match outcome.error {
        Some(LinkError::HttpStatus { url, status }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/public/data/pages/links.json"));
        }
        other => panic!("expected HTTP status error, got {other:?}"),
    }
    assert_eq!(
        outcome.page.element(ids::STATUS).unwrap().text_content(),
        "配置加载失败：HTTP 503"
    );
}

#[tokio::test]
async fn slow_candidate_times_out_and_falls_back() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/links.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/links.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .mount(&server)
        .await;

    let inputs = page_inputs(&server, "");
    let fetcher = SourceFetcher::new(Some(Duration::from_millis(200))).unwrap();
    let loaded = load_first(&fetcher, &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::ParentDir);

    let err = fetcher
        .fetch_document(&format!("{}/links/links.json", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, LinkError::Timeout { .. }));
    assert!(err.to_string().ends_with("after 200ms"), "{err}");
}
