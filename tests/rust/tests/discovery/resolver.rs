//! IndexResolver integration tests with mock HTTP server

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use regdir_core::{IndexResolver, JsonTransport, ReqwestTransport};
use tests::fixtures::index_body;
use tests::init_test_tracing;

fn resolver() -> IndexResolver {
    init_test_tracing();
    let transport: Arc<dyn JsonTransport> = Arc::new(ReqwestTransport::new().unwrap());
    IndexResolver::new(transport).with_timeout(Duration::from_millis(500))
}

async fn mount_index(server: &MockServer, index_path: &str, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(index_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(names)))
        .mount(server)
        .await;
}

// =============================================================================
// Candidate probing
// =============================================================================

#[tokio::test]
async fn test_first_candidate_wins_and_later_paths_are_not_requested() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["button", "card"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["other"])))
        .expect(0)
        .mount(&server)
        .await;

    let items = resolver().resolve(&server.uri()).await;

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["button", "card"]);
    assert_eq!(items[0].item_type.as_deref(), Some("registry:ui"));
}

#[tokio::test]
async fn test_unusable_candidates_fall_through_to_last_path() {
    let server = MockServer::start().await;

    // /registry/index.json: unmatched, so 404
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"name": "x"}]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/registry.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "untitled"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/components"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    mount_index(&server, "/r/index.json", &["marquee"]).await;

    let found = resolver().discover(&server.uri()).await.unwrap();

    assert_eq!(found.index_url, format!("{}/r/index.json", server.uri()));
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].name, "marquee");
}

#[tokio::test]
async fn test_non_200_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(ResponseTemplate::new(203).set_body_json(index_body(&["ignored"])))
        .mount(&server)
        .await;
    mount_index(&server, "/index.json", &["accepted"]).await;

    let items = resolver().resolve(&server.uri()).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "accepted");
}

#[tokio::test]
async fn test_slow_candidate_times_out_and_next_is_tried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(index_body(&["slow"]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    mount_index(&server, "/index.json", &["fast"]).await;

    let resolver = resolver().with_timeout(Duration::from_millis(200));
    let items = resolver.resolve(&server.uri()).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "fast");
}

#[tokio::test]
async fn test_unreachable_registry_resolves_to_empty() {
    // Nothing listens on port 9 in the test environment
    let items = resolver().resolve("http://127.0.0.1:9").await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_malformed_entries_are_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "button", "files": [{"path": "ui/button.tsx"}, "ui/button.css", 3]},
            {"name": ""},
            {"name": 42},
            "bare string",
            {"name": "card", "description": 7}
        ])))
        .mount(&server)
        .await;

    let items = resolver().resolve(&server.uri()).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].files, vec!["ui/button.tsx", "ui/button.css"]);
    assert_eq!(items[1].name, "card");
    assert_eq!(items[1].description, None);
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn test_resolve_is_cached_per_normalized_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["button"])))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver();
    let first = resolver.resolve(&server.uri()).await;
    let second = resolver.resolve(&format!("{}/", server.uri())).await;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.cache().len().await, 1);
}

#[tokio::test]
async fn test_negative_result_is_not_cached() {
    let server = MockServer::start().await;
    let resolver = resolver();

    assert!(resolver.resolve(&server.uri()).await.is_empty());
    assert!(resolver.cache().is_empty().await);

    // The registry publishes an index later
    mount_index(&server, "/registry.json", &["late"]).await;

    let items = resolver.resolve(&server.uri()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "late");
}

#[tokio::test]
async fn test_discover_bypasses_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["button"])))
        .expect(2)
        .mount(&server)
        .await;

    let resolver = resolver();
    assert!(resolver.discover(&server.uri()).await.is_some());
    assert!(resolver.discover(&server.uri()).await.is_some());
    assert!(resolver.cache().is_empty().await);
}
