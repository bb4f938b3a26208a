//! API integration tests, run in-process against the router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use citekit_server::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(&AppConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Failed to parse response");
    (status, body)
}

fn post_normalize(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/citations/normalize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_item_types() {
    let request = Request::builder().uri("/api/v1/item-types").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let types = body.as_array().unwrap();
    assert_eq!(types.len(), 5);
    assert_eq!(types[0]["itemType"], "book");
    assert!(types[0]["fields"].as_array().unwrap().contains(&json!("ISBN")));
}

#[tokio::test]
async fn test_normalize_worldcat_record() {
    let (status, body) = send(post_normalize(json!({
        "id_type": "isbn",
        "id_value": "9780307593313",
        "sources": [{
            "source": "WorldCat",
            "payload": {
                "stat": "ok",
                "list": [{
                    "form": ["BA"],
                    "title": "1Q84",
                    "author": "Haruki Murakami ; translated from the Japanese by Jay Rubin and Philip Gabriel.",
                    "year": "2011",
                    "publisher": "Alfred A. Knopf",
                    "city": "New York",
                    "lang": "eng",
                    "isbn": ["9780307593313"]
                }]
            }
        }]
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["idType"], "isbn");
    assert_eq!(body["isbn"], "9780307593313");
    assert!(body["doi"].is_null());
    assert_eq!(body["itemType"], "book");
    assert_eq!(body["responseCode"], 200);
    assert_eq!(body["source"], json!(["WorldCat"]));
    assert_eq!(body["content"]["title"], "1Q84");
    assert_eq!(body["content"]["language"], "en");
    assert_eq!(body["content"]["ISBN"], json!(["9780307593313"]));
    assert_eq!(
        body["content"]["creators"],
        json!([
            {"creatorType": "author", "firstName": "Haruki", "lastName": "Murakami"},
            {"creatorType": "translator", "firstName": "Jay", "lastName": "Rubin"},
            {"creatorType": "translator", "firstName": "Philip", "lastName": "Gabriel"}
        ])
    );
}

#[tokio::test]
async fn test_malformed_payload_reported_in_citation() {
    let (status, body) = send(post_normalize(json!({
        "id_type": "isbn",
        "id_value": "9780307593313",
        "sources": [{"source": "WorldCat", "payload": ["not", "an", "object"]}]
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], 520);
    assert_eq!(body["content"], json!({}));
}

#[tokio::test]
async fn test_empty_identifier_rejected() {
    let (status, body) = send(post_normalize(json!({
        "id_type": "doi",
        "id_value": "",
        "sources": []
    })))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_blank_identifier_rejected() {
    let (status, body) = send(post_normalize(json!({
        "id_type": "isbn",
        "id_value": "   ",
        "sources": [{"source": "WorldCat", "payload": {"list": [{"title": "Linux"}]}}]
    })))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 1);
}
