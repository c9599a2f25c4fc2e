//! Full page renders from a sample data file.

use linkpage::locale::Locale;
use linkpage::loader::SourceFetcher;
use linkpage::pipeline::{Pipeline, RunOutcome, RunState};
use linkpage::render::{Page, ids};
use linkpage::source::SourceInputs;
use serde_json::json;
use url::Url;

use crate::common::fixtures::{TestSite, sample_document};
use crate::common::init_test_logging;

async fn render(site: &TestSite, query: &str, locale: Locale) -> RunOutcome {
    let mut location = site.page_url();
    if !query.is_empty() {
        location.set_query(Some(query));
    }
    let inputs = SourceInputs::new(location);
    Pipeline::new(SourceFetcher::new(None).unwrap(), locale)
        .run(&inputs, Page::new(locale))
        .await
}

fn site_with_sample() -> TestSite {
    let site = TestSite::new();
    site.write_json("links/links.json", &sample_document());
    site
}

#[tokio::test]
async fn full_profile_renders_merged_content() {
    init_test_logging();
    let site = site_with_sample();
    let outcome = render(&site, "id=pupuwaifu", Locale::En).await;
    assert_eq!(outcome.state, RunState::Rendered);

    let page = &outcome.page;
    assert_eq!(page.title, "Pupu's links");
    assert_eq!(page.style_property("--accent"), Some("#7c5cff"));
    assert_eq!(page.style_property("--bg"), None);
    assert_eq!(page.element(ids::AVATAR).unwrap().attr("src"), Some("assets/pupu.png"));
    assert_eq!(page.element(ids::TAGLINE).unwrap().text_content(), "Cosplay & art");

    // Two profile links with URLs plus the common telegram link
    let social = page.element(ids::SOCIAL_LINKS).unwrap();
    let hrefs: Vec<_> = social.child_elements().filter_map(|a| a.attr("href")).collect();
    assert_eq!(
        hrefs,
        ["https://instagram.com/pupu", "https://x.com/pupu", "https://t.me/common"]
    );

    let buttons: Vec<_> = page.element(ids::CTA_LIST).unwrap().child_elements().collect();
    assert_eq!(buttons.len(), 4);
    assert!(buttons[0].has_class("outline"));
    assert_eq!(buttons[1].attr("href"), Some("#"));
    assert_eq!(buttons[1].attr("aria-disabled"), Some("true"));
    assert!(buttons[2].has_class("cta-divider"));
    assert_eq!(buttons[3].text_content(), "Contact");

    let cta = page.element(ids::FOOTER_CTA).unwrap();
    assert!(!cta.is_hidden());
    assert_eq!(cta.attr("href"), Some("https://example.com/about"));
    assert!(page.element(ids::STATUS).unwrap().is_hidden());
}

#[tokio::test]
async fn html_output_escapes_and_carries_theme() {
    init_test_logging();
    let site = site_with_sample();
    let outcome = render(&site, "id=pupuwaifu", Locale::En).await;
    let html = outcome.page.to_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\" style=\"--accent: #7c5cff;\">"));
    assert!(html.contains("<title>Pupu&#39;s links</title>"));
    assert!(html.contains("Cosplay &amp; art"));
    assert!(html.contains("<svg"));
    for id in ids::ALL {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[tokio::test]
async fn legacy_top_level_profile_renders() {
    init_test_logging();
    let site = site_with_sample();
    let outcome = render(&site, "id=legacy", Locale::Zh).await;
    assert_eq!(outcome.state, RunState::Rendered);

    let page = &outcome.page;
    assert_eq!(page.element(ids::NAME).unwrap().text_content(), "Old Style");
    assert_eq!(page.title, "Old Style");
    let social = page.element(ids::SOCIAL_LINKS).unwrap();
    assert_eq!(
        social.child_elements().next().and_then(|a| a.attr("href")),
        Some("https://old.example.com")
    );
}

#[tokio::test]
async fn sparse_profile_inherits_common_defaults() {
    init_test_logging();
    let site = site_with_sample();
    let outcome = render(&site, "id=bare", Locale::Zh).await;

    let page = &outcome.page;
    assert_eq!(page.title, "Bare");
    assert_eq!(page.element(ids::TAGLINE).unwrap().text_content(), "Shared tagline");
    assert_eq!(page.element(ids::AVATAR).unwrap().attr("src"), Some("assets/common.png"));
    assert_eq!(page.style_property("--bg"), Some("#101014"));

    // Only common buttons, so no divider
    let list = page.element(ids::CTA_LIST).unwrap();
    assert!(list.child_elements().all(|el| !el.has_class("cta-divider")));
    assert_eq!(
        page.element(ids::FOOTER_LINE_2).unwrap().text_content(),
        "© 2026"
    );
}

#[tokio::test]
async fn unknown_profile_leaves_template_and_shows_error() {
    init_test_logging();
    let site = site_with_sample();
    let outcome = render(&site, "id=nobody", Locale::Zh).await;

    assert_eq!(outcome.state, RunState::Failed);
    let status = outcome.page.element(ids::STATUS).unwrap();
    assert!(status.has_class("error"));
    assert_eq!(status.text_content(), "配置加载失败：Profile not found: nobody");
    assert_eq!(outcome.page.element(ids::NAME).unwrap().text_content(), "");
    assert!(outcome.page.root_style().is_empty());
}

#[tokio::test]
async fn malformed_sibling_profile_does_not_block_render() {
    init_test_logging();
    let site = TestSite::new();
    site.write_json(
        "links/links.json",
        &json!({
            "profiles": {
                "good": {
                    "name": "Good",
                    "social": [null, { "url": "https://good.example.com" }],
                    "buttons": [{ "label": "Soon", "url": "https://soon.example.com", "locked": 1 }]
                },
                "other": { "name": 42, "buttons": [{ "locked": "yes", "label": true }] }
            }
        }),
    );
    site.write_json("links.json", &json!({ "profiles": { "good": { "name": "Wrong file" } } }));

    let outcome = render(&site, "id=good", Locale::En).await;
    assert_eq!(outcome.state, RunState::Rendered);
    assert!(outcome.source.unwrap().url.ends_with("/links/links.json"));

    let page = &outcome.page;
    assert_eq!(page.element(ids::NAME).unwrap().text_content(), "Good");
    assert_eq!(page.element(ids::SOCIAL_LINKS).unwrap().child_elements().count(), 1);
    let button = page.element(ids::CTA_LIST).unwrap().child_elements().next().unwrap();
    assert_eq!(button.attr("href"), Some("#"));
}

#[tokio::test]
async fn body_attribute_selects_profile_without_query() {
    init_test_logging();
    let site = site_with_sample();
    let inputs = SourceInputs::new(Url::from_file_path(site.page_path()).unwrap());
    let page = Page::new(Locale::En).with_profile_attribute("bare");

    let outcome = Pipeline::new(SourceFetcher::new(None).unwrap(), Locale::En)
        .run(&inputs, page)
        .await;
    assert_eq!(outcome.profile_id, "bare");
    assert_eq!(
        outcome.page.element(ids::NAME).unwrap().text_content(),
        "Bare"
    );
}
