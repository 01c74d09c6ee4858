//! Two-phase component search tests

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use regdir_core::{
    ComponentMatch, ComponentSearchService, ComponentSnapshot, IndexResolver, SnapshotComponent,
};
use tests::fixtures::{
    index_body, test_catalog, test_snapshot, ACETERNITY_URL, MAGIC_URL, SHADCN_URL, TREMOR_URL,
};
use tests::MockTransport;

fn index_url(base: &str) -> String {
    format!("{}/registry/index.json", base)
}

/// Every catalog registry serves an index at its first candidate path
fn populated_transport() -> MockTransport {
    MockTransport::new()
        .with_json(&index_url(SHADCN_URL), index_body(&["button", "dialog"]))
        .with_json(&index_url(MAGIC_URL), index_body(&["marquee", "shimmer-button"]))
        .with_json(
            &index_url(ACETERNITY_URL),
            json!([
                {"name": "moving-border", "description": "A button with a MOVING border"},
                {"name": "sparkles"}
            ]),
        )
        .with_json(&index_url(TREMOR_URL), index_body(&["area-chart"]))
}

fn search_service(
    transport: Arc<MockTransport>,
    snapshot: ComponentSnapshot,
) -> ComponentSearchService {
    let resolver = IndexResolver::new(transport).with_timeout(Duration::from_millis(200));
    ComponentSearchService::new(
        Arc::new(test_catalog()),
        Arc::new(snapshot),
        Arc::new(resolver),
    )
}

fn names(results: &[ComponentMatch]) -> Vec<(&str, &str)> {
    results
        .iter()
        .map(|m| (m.registry_name.as_str(), m.component_name.as_str()))
        .collect()
}

#[tokio::test]
async fn test_snapshot_hits_come_first_and_skip_remote_probe() {
    let transport = Arc::new(populated_transport());
    let search = search_service(Arc::clone(&transport), test_snapshot());

    let results = search.search("marquee").await;

    assert_eq!(names(&results), vec![("Magic UI", "marquee")]);
    assert_eq!(results[0].description, "Infinite scrolling");
    assert_eq!(results[0].url, "https://magicui.design/r/marquee.json");

    // Magic UI matched in the snapshot, so its live index was never fetched
    assert_eq!(transport.requests_to(MAGIC_URL), 0);
    assert_eq!(transport.requests_to(SHADCN_URL), 1);
    assert_eq!(transport.requests_to(TREMOR_URL), 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let transport = Arc::new(populated_transport());
    let search = search_service(transport, ComponentSnapshot::default());

    let lower = search.search("button").await;
    let upper = search.search("BUTTON").await;

    assert_eq!(lower, upper);
    assert_eq!(
        names(&lower),
        vec![
            ("shadcn/ui", "button"),
            ("Magic UI", "shimmer-button"),
            ("Aceternity UI", "moving-border"),
        ]
    );
}

#[tokio::test]
async fn test_empty_query_matches_everything() {
    let transport = Arc::new(populated_transport());
    let search = search_service(Arc::clone(&transport), test_snapshot());

    let results = search.search("").await;

    // Both snapshot entries, then every index except Magic UI's
    assert_eq!(
        names(&results),
        vec![
            ("Magic UI", "marquee"),
            ("Magic UI", "animated-beam"),
            ("shadcn/ui", "button"),
            ("shadcn/ui", "dialog"),
            ("Aceternity UI", "moving-border"),
            ("Aceternity UI", "sparkles"),
            ("Tremor", "area-chart"),
        ]
    );
}

#[tokio::test]
async fn test_failing_registry_does_not_affect_others() {
    let transport = MockTransport::new()
        .with_json(&index_url(SHADCN_URL), index_body(&["button"]))
        .with_status(&index_url(MAGIC_URL), 500)
        .with_delayed_json(
            &index_url(ACETERNITY_URL),
            Duration::from_secs(5),
            index_body(&["button-slow"]),
        )
        .with_json(&index_url(TREMOR_URL), json!({"not": "an array"}));
    let transport = Arc::new(transport);
    let search = search_service(Arc::clone(&transport), ComponentSnapshot::default());

    let results = search.search("button").await;

    assert_eq!(names(&results), vec![("shadcn/ui", "button")]);
    // Broken registries were probed through every candidate path
    assert_eq!(transport.requests_to(MAGIC_URL), 5);
    assert_eq!(transport.requests_to(ACETERNITY_URL), 5);
}

#[tokio::test]
async fn test_remote_results_grouped_in_catalog_order() {
    // shadcn/ui answers last, but is listed first in the catalog
    let transport = MockTransport::new()
        .with_delayed_json(
            &index_url(SHADCN_URL),
            Duration::from_millis(100),
            index_body(&["card"]),
        )
        .with_json(&index_url(TREMOR_URL), index_body(&["bar-card"]));
    let search = search_service(Arc::new(transport), ComponentSnapshot::default());

    let results = search.search("card").await;

    assert_eq!(names(&results), vec![("shadcn/ui", "card"), ("Tremor", "bar-card")]);
}

#[tokio::test]
async fn test_duplicates_collapsed_and_unknown_snapshot_registries_skipped() {
    let snapshot = ComponentSnapshot::new(vec![
        SnapshotComponent::new("Magic UI", "marquee"),
        SnapshotComponent::new("Magic UI", "marquee").with_description("duplicate"),
        SnapshotComponent::new("Retired UI", "marquee"),
    ]);
    let transport = MockTransport::new().with_json(
        &index_url(TREMOR_URL),
        index_body(&["marquee-chart", "marquee-chart"]),
    );
    let search = search_service(Arc::new(transport), snapshot);

    let results = search.search("marquee").await;

    assert_eq!(
        names(&results),
        vec![("Magic UI", "marquee"), ("Tremor", "marquee-chart")]
    );
}

#[tokio::test]
async fn test_index_is_resolved_once_across_searches() {
    let transport = Arc::new(populated_transport());
    let search = search_service(Arc::clone(&transport), ComponentSnapshot::default());

    search.search("button").await;
    search.search("chart").await;

    assert_eq!(transport.requests_to(SHADCN_URL), 1);
    assert_eq!(search.resolver().cache().len().await, 4);
}

#[tokio::test]
async fn test_cancelled_search_still_fills_index_cache() {
    let transport = MockTransport::new().with_delayed_json(
        &index_url(TREMOR_URL),
        Duration::from_millis(100),
        index_body(&["bar-card"]),
    );
    let search = Arc::new(search_service(
        Arc::new(transport),
        ComponentSnapshot::default(),
    ));

    let pending = tokio::spawn({
        let search = Arc::clone(&search);
        async move { search.search("card").await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    // The in-flight index fetch outlives its caller
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(search.resolver().cache().len().await, 1);
    assert!(search.resolver().cache().get(TREMOR_URL).await.is_some());
}
