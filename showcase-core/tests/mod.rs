use showcase_core::catalog::{Catalog, LinkKind, Sample};
use showcase_core::config::{ShowcaseConfig, asset_path};
use showcase_core::filter::{FilterState, Selection, StatusLine, filter_samples, normalize_query};
use showcase_core::loader::{
    CatalogSource, FileSource, HttpSource, LOAD_FAILURE_MESSAGE, LoadError, load_catalog, source_for,
};

use serde_json::json;
use std::io::Write;

fn catalog_from(value: serde_json::Value) -> Catalog {
    Catalog::from_slice(value.to_string().as_bytes()).unwrap()
}

fn demo_catalog() -> Catalog {
    catalog_from(json!({
        "samples": [
            {
                "title": "Demo",
                "platform": "ios",
                "technologies": ["Swift", "UIKit"],
                "links": { "code": "http://x" }
            },
            {
                "title": "Widget Gallery",
                "platform": "android",
                "technologies": ["Kotlin", "Compose"],
                "links": { "code": "http://y", "video": "http://v" }
            },
            {
                "title": "Swift Charts",
                "platform": "ios",
                "technologies": ["Swift", "SwiftUI"],
                "links": {}
            },
            {
                "title": "Web Dashboard",
                "platform": "web",
                "technologies": ["TypeScript", "React"],
                "links": { "documentation": "http://d" }
            }
        ]
    }))
}

fn titles<'a>(samples: &[&'a Sample]) -> Vec<&'a str> {
    samples.iter().map(|s| s.title.as_str()).collect()
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_sample_minimal_fields() {
    let catalog = catalog_from(json!({
        "samples": [{ "title": "Bare", "platform": "ios" }]
    }));
    let sample = &catalog.samples()[0];
    assert_eq!(sample.title, "Bare");
    assert!(sample.technologies.is_empty());
    assert!(sample.specials.is_empty());
    assert!(sample.screenshots.is_empty());
    assert_eq!(sample.links.iter().count(), 0);
}

#[test]
fn test_links_falsy_values_are_absent() {
    let catalog = catalog_from(json!({
        "samples": [{
            "title": "Links",
            "platform": "ios",
            "links": {
                "code": "",
                "documentation": null,
                "video": false,
                "homepage": "http://ignored"
            }
        }]
    }));
    let links = &catalog.samples()[0].links;
    assert!(links.code.is_none());
    assert!(links.documentation.is_none());
    assert!(links.video.is_none());
}

#[test]
fn test_links_iterate_in_fixed_order() {
    let catalog = catalog_from(json!({
        "samples": [{
            "title": "Order",
            "platform": "ios",
            "links": { "video": "v", "code": "c", "documentation": "d" }
        }]
    }));
    let kinds: Vec<LinkKind> = catalog.samples()[0].links.iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![LinkKind::Code, LinkKind::Documentation, LinkKind::Video]
    );
}

#[test]
fn test_link_kind_labels() {
    assert_eq!(LinkKind::Code.label(), "Code");
    assert_eq!(LinkKind::Documentation.label(), "Documentation");
    assert_eq!(LinkKind::Video.label(), "Video");
    assert_eq!(LinkKind::Documentation.key(), "documentation");
}

#[test]
fn test_special_link_optional() {
    let catalog = catalog_from(json!({
        "samples": [{
            "title": "Specials",
            "platform": "ios",
            "specials": [
                { "title": "Linked", "link": "http://s" },
                { "title": "Plain" },
                { "title": "Empty link", "link": "" }
            ]
        }]
    }));
    let specials = &catalog.samples()[0].specials;
    assert_eq!(specials.len(), 3);
    assert_eq!(specials[0].link.as_deref(), Some("http://s"));
    assert!(specials[1].link.is_none());
    assert!(specials[2].link.is_none());
}

#[test]
fn test_null_lists_read_as_empty() {
    let catalog = catalog_from(json!({
        "samples": [{
            "title": "Nulls",
            "platform": "ios",
            "specials": null,
            "screenshots": null
        }]
    }));
    assert!(catalog.samples()[0].specials.is_empty());
    assert!(catalog.samples()[0].screenshots.is_empty());
}

#[test]
fn test_legacy_screenshot_key() {
    let catalog = catalog_from(json!({
        "samples": [{
            "title": "Legacy",
            "platform": "ios",
            "scrreenshots": ["a.png", "b.png"]
        }]
    }));
    assert_eq!(catalog.samples()[0].screenshots, vec!["a.png", "b.png"]);
}

#[test]
fn test_both_screenshot_keys_keep_catalog() {
    let catalog = catalog_from(json!({
        "samples": [
            {
                "title": "A",
                "platform": "ios",
                "screenshots": ["a.png"],
                "scrreenshots": ["b.png"]
            },
            {
                "title": "B",
                "platform": "ios",
                "screenshots": [],
                "scrreenshots": ["c.png"]
            },
            { "title": "C", "platform": "android" }
        ]
    }));
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.samples()[0].screenshots, vec!["a.png"]);
    assert_eq!(catalog.samples()[1].screenshots, vec!["c.png"]);
    assert!(catalog.samples()[2].screenshots.is_empty());
}

#[test]
fn test_missing_title_is_parse_error() {
    let result = Catalog::from_slice(br#"{"samples":[{"platform":"ios"}]}"#);
    assert!(result.is_err());
}

#[test]
fn test_catalog_distinct_tags_first_seen_order() {
    let catalog = demo_catalog();
    assert_eq!(
        catalog.technologies(),
        vec!["Swift", "UIKit", "Kotlin", "Compose", "SwiftUI", "TypeScript", "React"]
    );
    assert_eq!(catalog.platforms(), vec!["ios", "android", "web"]);
}

// ============================================================================
// Selection / Query Tests
// ============================================================================

#[test]
fn test_selection_all_sentinel() {
    assert_eq!(Selection::from_control("all"), Selection::All);
    assert_eq!(
        Selection::from_control("Swift"),
        Selection::Only("Swift".to_string())
    );
    assert_eq!(Selection::from_control("Swift").as_control(), "Swift");
    assert_eq!(Selection::All.as_control(), "all");
}

#[test]
fn test_normalize_query() {
    assert_eq!(normalize_query("  UIKit  "), "uikit");
    assert_eq!(normalize_query("   "), "");
}

// ============================================================================
// FilterEngine Tests
// ============================================================================

#[test]
fn test_default_state_shows_everything() {
    let catalog = demo_catalog();
    let state = FilterState::new();
    let out = filter_samples(&catalog, &state);
    assert_eq!(out.len(), catalog.len());
    assert_eq!(StatusLine::for_result(out.len(), &state), StatusLine::Hidden);
    assert_eq!(StatusLine::Hidden.to_string(), "");
}

#[test]
fn test_framework_filter_is_case_sensitive() {
    let catalog = demo_catalog();
    let exact = FilterState::new().with_framework("Swift");
    assert_eq!(
        titles(&filter_samples(&catalog, &exact)),
        vec!["Demo", "Swift Charts"]
    );

    let lower = FilterState::new().with_framework("swift");
    assert!(filter_samples(&catalog, &lower).is_empty());
}

#[test]
fn test_framework_filter_needs_whole_tag() {
    let catalog = demo_catalog();
    // "Swift" must not match "SwiftUI" by prefix, only exact tags count.
    let state = FilterState::new().with_framework("SwiftUI");
    assert_eq!(titles(&filter_samples(&catalog, &state)), vec!["Swift Charts"]);
}

#[test]
fn test_version_filter() {
    let catalog = demo_catalog();
    let state = FilterState::new().with_version("ios");
    assert_eq!(
        titles(&filter_samples(&catalog, &state)),
        vec!["Demo", "Swift Charts"]
    );
}

#[test]
fn test_search_matches_title_or_technology() {
    let catalog = demo_catalog();
    let by_title = FilterState::new().with_search("DASH");
    assert_eq!(titles(&filter_samples(&catalog, &by_title)), vec!["Web Dashboard"]);

    let by_tech = FilterState::new().with_search("compose");
    assert_eq!(titles(&filter_samples(&catalog, &by_tech)), vec!["Widget Gallery"]);
}

#[test]
fn test_spec_example_demo_included() {
    let catalog = demo_catalog();
    let state = FilterState::new()
        .with_framework("Swift")
        .with_version("all")
        .with_search("ui");
    // "UIKit" contains "ui"; "SwiftUI" too.
    assert_eq!(
        titles(&filter_samples(&catalog, &state)),
        vec!["Demo", "Swift Charts"]
    );
}

#[test]
fn test_axes_combine_with_and() {
    let catalog = demo_catalog();
    let state = FilterState::new()
        .with_framework("Swift")
        .with_version("android");
    assert!(filter_samples(&catalog, &state).is_empty());
}

#[test]
fn test_conjunction_independent_of_order() {
    let catalog = demo_catalog();
    let frameworks = ["all", "Swift", "Kotlin", "React", "Missing"];
    let versions = ["all", "ios", "android", "web"];
    let searches = ["", "ui", "gallery", "zzz"];

    for fw in frameworks {
        for v in versions {
            for q in searches {
                let state = FilterState::new()
                    .with_framework(fw)
                    .with_version(v)
                    .with_search(q);
                let combined = filter_samples(&catalog, &state);

                // Apply the axes one at a time in reverse order.
                let staged: Vec<&Sample> = catalog
                    .iter()
                    .filter(|s| state.matches_search(s))
                    .filter(|s| state.matches_version(s))
                    .filter(|s| state.matches_framework(s))
                    .collect();

                assert_eq!(combined, staged, "fw={} v={} q={}", fw, v, q);
            }
        }
    }
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = demo_catalog();
    let state = FilterState::new().with_search("s");
    let out = filter_samples(&catalog, &state);
    let positions: Vec<usize> = out
        .iter()
        .map(|s| catalog.iter().position(|c| c == *s).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_whitespace_only_search_is_default() {
    let state = FilterState::new().with_search("   ");
    assert!(state.is_default());
}

// ============================================================================
// StatusLine Tests
// ============================================================================

#[test]
fn test_status_singular() {
    let state = FilterState::new().with_search("demo");
    assert_eq!(StatusLine::for_result(1, &state).to_string(), "Found 1 sample");
}

#[test]
fn test_status_plural() {
    let state = FilterState::new().with_framework("Swift");
    assert_eq!(StatusLine::for_result(2, &state).to_string(), "Found 2 samples");
}

#[test]
fn test_status_zero_is_no_results() {
    let state = FilterState::new().with_search("zzz");
    let status = StatusLine::for_result(0, &state);
    assert_eq!(status, StatusLine::NoResults);
    assert_eq!(status.to_string(), "No samples found");
}

#[test]
fn test_status_zero_count_never_renders_count() {
    assert_eq!(StatusLine::Found(0).to_string(), "No samples found");
}

#[test]
fn test_status_hidden_when_default_even_if_empty() {
    let state = FilterState::new();
    assert_eq!(StatusLine::for_result(0, &state), StatusLine::Hidden);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = ShowcaseConfig::default();
    assert_eq!(config.data, "data.json");
    assert_eq!(config.assets_dir, "assets");
    assert!(!config.is_remote());
}

#[test]
fn test_config_remote_detection() {
    let config = ShowcaseConfig {
        data: "https://example.com/data.json".to_string(),
        ..ShowcaseConfig::default()
    };
    assert!(config.is_remote());
}

#[test]
fn test_asset_path_trims_trailing_slash() {
    assert_eq!(asset_path("assets/", "a.png"), "assets/a.png");
    assert_eq!(asset_path("", "a.png"), "a.png");
}

#[test]
fn test_config_from_partial_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "assets_dir": "static", "versions": ["ios"] }}"#).unwrap();

    let config = ShowcaseConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.assets_dir, "static");
    assert_eq!(config.versions, vec!["ios"]);
    assert_eq!(config.data, "data.json");
}

#[test]
fn test_config_from_missing_file_fails() {
    let result = ShowcaseConfig::from_json_file("/definitely/not/here.json");
    assert!(result.is_err());
}

// ============================================================================
// Loader Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({ "samples": [{ "title": "Demo", "platform": "ios", "technologies": ["Swift"] }] })
    )
    .unwrap();

    let source = FileSource::new(file.path());
    let catalog = load_catalog(&source).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.samples()[0].title, "Demo");
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let source = FileSource::new("/definitely/not/here/data.json");
    let err = load_catalog(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.user_message(), LOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_load_malformed_json_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let source = FileSource::new(file.path());
    let err = load_catalog(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert_eq!(err.user_message(), LOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_load_wrong_shape_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "items": [] }}"#).unwrap();

    let source = FileSource::new(file.path());
    assert!(load_catalog(&source).await.is_err());
}

#[test]
fn test_source_for_picks_by_scheme() {
    let local = source_for(&ShowcaseConfig::default());
    assert_eq!(local.describe(), "data.json");

    let remote = source_for(&ShowcaseConfig {
        data: "http://localhost:9/data.json".to_string(),
        ..ShowcaseConfig::default()
    });
    assert_eq!(remote.describe(), "http://localhost:9/data.json");
}

#[test]
fn test_status_error_message() {
    let err = LoadError::Status {
        url: "http://x/data.json".to_string(),
        status: 404,
    };
    assert!(err.to_string().contains("404"));
    assert_eq!(err.user_message(), LOAD_FAILURE_MESSAGE);
}

// ============================================================================
// HttpSource Tests (one-shot local server)
// ============================================================================

async fn serve_once(status_line: &'static str, body: String) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/data.json", addr)
}

fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_http_source_loads_catalog() {
    let body = json!({ "samples": [{ "title": "Remote", "platform": "web" }] }).to_string();
    let url = serve_once("200 OK", body).await;

    let source = HttpSource::with_client(&url, local_client());
    let catalog = load_catalog(&source).await.unwrap();
    assert_eq!(catalog.samples()[0].title, "Remote");
}

#[tokio::test]
async fn test_http_error_status_is_failure() {
    let url = serve_once("404 Not Found", "{}".to_string()).await;

    let source = HttpSource::with_client(&url, local_client());
    let err = load_catalog(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
    assert_eq!(err.user_message(), LOAD_FAILURE_MESSAGE);
}
