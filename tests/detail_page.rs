//! Integration tests for the book detail page collaborator

mod common;

use common::{COVER_BYTES, mock_catalog};
use pubplans::Error;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn detail_page_fetches_extended_detail_and_cover() {
    let (server, aggregator) = mock_catalog().await;

    Mock::given(method("GET"))
        .and(path("/work/801"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": "/images/801.jpg",
            "work_description": "A long description",
            "work_name_orig": "Original Title"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/801.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(COVER_BYTES))
        .mount(&server)
        .await;

    let page = aggregator.fetch_book_page(801).await.unwrap();

    assert_eq!(page.details.description.as_deref(), Some("A long description"));
    assert_eq!(page.details.original_title.as_deref(), Some("Original Title"));
    assert_eq!(page.cover.as_deref(), Some(COVER_BYTES));
}

#[tokio::test]
async fn detail_page_propagates_bad_status() {
    let (server, aggregator) = mock_catalog().await;

    Mock::given(method("GET"))
        .and(path("/work/802"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = aggregator.fetch_book_page(802).await.unwrap_err();
    assert!(matches!(
        err,
        Error::BadStatus { status, .. } if status.as_u16() == 404
    ));
}

#[tokio::test]
async fn detail_page_absorbs_cover_fetch_failure() {
    let (server, aggregator) = mock_catalog().await;

    Mock::given(method("GET"))
        .and(path("/work/803"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": "/images/803.jpg",
            "work_description": "desc"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/803.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = aggregator.fetch_book_page(803).await.unwrap();
    assert_eq!(page.details.description.as_deref(), Some("desc"));
    assert!(page.cover.is_none());
}

#[tokio::test]
async fn detail_page_without_cover_path_skips_the_cover_fetch() {
    let (server, aggregator) = mock_catalog().await;

    Mock::given(method("GET"))
        .and(path("/work/804"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "work_description": "desc only"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/images/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(COVER_BYTES))
        .expect(0)
        .mount(&server)
        .await;

    let page = aggregator.fetch_book_page(804).await.unwrap();
    assert!(page.cover.is_none());
}
