//! Integration tests for the static host router.

use a2_backend::{
    config::{Config, Environment},
    create_router,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>A2</body></html>";

/// Creates a static directory with an index page and one asset.
fn create_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(dir.path().join("cars")).unwrap();
    fs::write(dir.path().join("cars").join("sonata.jpg"), b"jpeg").unwrap();
    dir
}

fn test_config(dir: &TempDir) -> Config {
    Config {
        environment: Environment::Production,
        host: "127.0.0.1".into(),
        port: 0,
        static_dir: dir.path().to_path_buf(),
        static_max_age: 600,
    }
}

async fn get(dir: &TempDir, uri: &str) -> Response {
    create_router(test_config(dir))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let site = create_site();
    let response = get(&site, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "a2-backend");
    assert_eq!(json["environment"], "production");
}

#[tokio::test]
async fn test_root_serves_index() {
    let site = create_site();
    let response = get(&site, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INDEX);
}

#[tokio::test]
async fn test_existing_asset_is_served_with_cache_header() {
    let site = create_site();
    let response = get(&site, "/cars/sonata.jpg").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/jpeg"
    );
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=600"
    );
    assert_eq!(body_string(response).await, "jpeg");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let site = create_site();
    let response = get(&site, "/tariffs/business").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INDEX);
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let site = create_site();
    for uri in ["/health", "/", "/cars/sonata.jpg", "/missing"] {
        let response = get(&site, uri).await;
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{uri}");
        assert_eq!(
            response.headers()[header::REFERRER_POLICY],
            "strict-origin-when-cross-origin",
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_health_is_not_cached_as_static() {
    let site = create_site();
    let response = get(&site, "/health").await;

    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}
