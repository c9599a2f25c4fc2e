//! Path-based fallbacks inside a local site.

use linkpage::error::LinkError;
use linkpage::loader::{SourceFetcher, load_first};
use linkpage::source::{CandidateOrigin, SourceInputs, resolve_candidates};
use serde_json::json;

use crate::common::fixtures::{TestSite, sample_document};
use crate::common::init_test_logging;

fn fetcher() -> SourceFetcher {
    SourceFetcher::new(None).unwrap()
}

#[tokio::test]
async fn page_directory_file_is_preferred() {
    init_test_logging();
    let site = TestSite::new();
    site.write_json("links/links.json", &json!({ "profiles": { "default": { "name": "Here" } } }));
    site.write_json("links.json", &sample_document());

    let inputs = SourceInputs::new(site.page_url());
    let loaded = load_first(&fetcher(), &resolve_candidates(&inputs)).await.unwrap();

    assert_eq!(loaded.source.origin, CandidateOrigin::PageRelative);
    assert!(loaded.document.find_profile("default").is_ok());
}

#[tokio::test]
async fn falls_back_through_each_directory() {
    init_test_logging();
    let site = TestSite::new();

    site.write_json("public/data/pages/links.json", &sample_document());
    let inputs = SourceInputs::new(site.page_url());
    let loaded = load_first(&fetcher(), &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::PublicDataPages);

    site.write_json("data/pages/links.json", &sample_document());
    let loaded = load_first(&fetcher(), &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::DataPages);

    site.write_json("links.json", &sample_document());
    let loaded = load_first(&fetcher(), &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::ParentDir);
}

#[tokio::test]
async fn malformed_file_falls_through() {
    init_test_logging();
    let site = TestSite::new();
    site.write_raw("links/links.json", "{ not json");
    site.write_json("links.json", &sample_document());

    let inputs = SourceInputs::new(site.page_url());
    let loaded = load_first(&fetcher(), &resolve_candidates(&inputs)).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::ParentDir);
}

#[tokio::test]
async fn custom_data_file_name_is_used_everywhere() {
    init_test_logging();
    let site = TestSite::new();
    site.write_json("data/pages/site.json", &sample_document());

    let mut inputs = SourceInputs::new(site.page_url());
    inputs.config.data_file = Some("site.json".to_string());
    let candidates = resolve_candidates(&inputs);
    assert!(candidates.iter().all(|c| c.url.ends_with("/site.json")));

    let loaded = load_first(&fetcher(), &candidates).await.unwrap();
    assert_eq!(loaded.source.origin, CandidateOrigin::DataPages);
}

#[tokio::test]
async fn empty_site_reports_last_failure() {
    init_test_logging();
    let site = TestSite::new();

    let inputs = SourceInputs::new(site.page_url());
    let err = load_first(&fetcher(), &resolve_candidates(&inputs))
        .await
        .unwrap_err();
    match err {
        LinkError::Transport { url, .. } => {
            assert!(url.ends_with("/public/data/pages/links.json"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
