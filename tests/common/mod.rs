//! Common test utilities for pubplans integration tests

use pubplans::{CatalogClient, PlanAggregator, PublisherDirectory};
use serde_json::json;
use url::Url;
use wiremock::MockServer;

/// Bytes served as a stand-in cover image
pub const COVER_BYTES: &[u8] = b"\xff\xd8\xff\xe0 not really a jpeg";

/// Start a mock catalog and an aggregator pointed at it
///
/// Both the API origin and the image origin resolve to the mock server, so
/// plan, detail, and cover requests all land on it.
pub async fn mock_catalog() -> (MockServer, PlanAggregator) {
    let server = MockServer::start().await;
    let origin = Url::parse(&server.uri()).expect("mock server URI parses");
    let client =
        CatalogClient::with_origins(origin.clone(), origin.clone()).expect("client builds");
    let directory = PublisherDirectory::new(&origin).expect("directory builds");
    (server, PlanAggregator::new(client, directory))
}

/// A plan-list body with the given book objects
pub fn plan_body(publisher: &str, books: &[serde_json::Value]) -> serde_json::Value {
    json!({ "pub_name": publisher, "objects": books })
}

/// A book object that links to a catalog work
pub fn book_with_work(title: &str, work_id: i64) -> serde_json::Value {
    json!({
        "autors": "A. Author",
        "date": "2025",
        "edition_id": work_id,
        "name": title,
        "series": "",
        "the_only_work": { "work_id": work_id }
    })
}

/// A book object with no catalog work entry
pub fn book_without_work(title: &str) -> serde_json::Value {
    json!({
        "autors": "B. Author",
        "date": "2026",
        "edition_id": 0,
        "name": title,
        "series": ""
    })
}

/// A work-detail body with a rating and a preview cover fragment
pub fn detail_body(rating: serde_json::Value, preview_cover: &str) -> serde_json::Value {
    json!({
        "rating": { "rating": rating },
        "image_preview": preview_cover
    })
}
