use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::json;
use storefront::app::navigation::default_menu;
use storefront::{build_router, AppState, CmsClient, MemoryContactStore};
use tower::ServiceExt;

fn state_for(server: &MockServer) -> AppState {
    let client = CmsClient::new(&server.base_url(), Some("token".into())).unwrap();
    AppState::new(
        Arc::new(client),
        Arc::new(MemoryContactStore::new()),
        default_menu(),
    )
}

async fn get_page(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = build_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn mock_navigation(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(200).json_body(json!({
                "data": [{"Title": "Feeds", "categoryId": "feeds"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/project-categories");
            then.status(200).json_body(json!({
                "data": [{"Title": "Barns", "projCatId": "barns"}]
            }));
        })
        .await;
}

#[tokio::test]
async fn test_service_page_renders_hero() {
    let server = MockServer::start_async().await;
    mock_navigation(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services/abc123");
            then.status(200).json_body(json!({
                "data": {"name": "Milking Service", "documentId": "abc123", "heroHeadings": "Welcome"}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(json!({
                "data": [{"name": "Milking Service", "documentId": "abc123"}]
            }));
        })
        .await;

    let (status, html) = get_page(state_for(&server), "/abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Welcome</h1>"));
    assert!(html.contains(r#"alt="Welcome""#));
    assert!(!html.contains("Error fetching"));
    assert!(html.contains("<title>Milking Service</title>"));
}

#[tokio::test]
async fn test_listing_failure_does_not_hide_hero() {
    let server = MockServer::start_async().await;
    mock_navigation(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services/abc123");
            then.status(200).json_body(json!({
                "data": {"name": "Milking Service", "documentId": "abc123", "heroHeadings": "Welcome"}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(500);
        })
        .await;

    let (status, html) = get_page(state_for(&server), "/abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Welcome</h1>"));
    assert!(html.contains("No services available"));
    // the services branch failed too; its entry stays a plain placeholder
    assert!(html.contains(r##"<a href="#">Services</a>"##));
    assert!(!html.contains(r#"href="/services""#));
    assert!(html.contains(r#"href="/product/category/feeds""#));
}

#[tokio::test]
async fn test_home_sections_fail_independently() {
    let server = MockServer::start_async().await;
    mock_navigation(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let (status, html) = get_page(state_for(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No services available at the moment."));
    assert!(html.contains(r#"href="/projects/category/barns""#));
    assert!(html.contains(r#"<h3>Feeds</h3>"#));
}

#[tokio::test]
async fn test_menu_query_opens_dropdown() {
    let server = MockServer::start_async().await;
    mock_navigation(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let (status, html) = get_page(state_for(&server), "/product?menu=all-products").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<ul class="dropdown">"#));
    assert!(html.contains("No products available at the moment."));
    assert!(html.contains("<h1>All Products</h1>"));
}

#[tokio::test]
async fn test_category_page_uses_filter_lookup() {
    let server = MockServer::start_async().await;
    // filtered mocks go first so they win over the navigation ones
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/categories")
                .query_param("filters[categoryId][$eq]", "feeds");
            then.status(200).json_body(json!({
                "data": [{"Title": "Animal Feeds", "categoryId": "feeds"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/products")
                .query_param("filters[category][categoryId][$eq]", "feeds");
            then.status(200).json_body(json!({
                "data": [{"productTitle": "Hay Bale", "productPrice": 4}]
            }));
        })
        .await;
    mock_navigation(&server).await;

    let (status, html) = get_page(state_for(&server), "/product/category/feeds").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Animal Feeds</h1>"));
    assert!(html.contains(r#"alt="Hay Bale""#));
    assert!(html.contains("4.00"));
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_dropdown_toggle_link_opens_and_closes() {
    let server = MockServer::start_async().await;
    mock_navigation(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;
    let state = state_for(&server);

    let (_, closed) = get_page(state.clone(), "/product").await;
    let toggle = r#"<a class="dropdown-toggle" href="/product?menu=all-products" aria-expanded="false">"#;
    assert!(closed.contains(toggle));
    assert!(!closed.contains(r#"<ul class="dropdown">"#));

    let (status, opened) = get_page(state, "/product?menu=all-products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(opened.contains(r#"<ul class="dropdown"><li"#));
    assert!(opened.contains(r#"href="/product/category/feeds""#));
    assert!(opened.contains(
        r#"<a class="dropdown-toggle" href="/product" aria-expanded="true">"#
    ));
}

#[tokio::test]
async fn test_stray_file_paths_skip_the_cms() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services/favicon.ico");
            then.status(404);
        })
        .await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let (status, _) = get_page(state_for(&server), "/favicon.ico").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(detail.hits_async().await, 0);
    assert_eq!(listing.hits_async().await, 0);
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start_async().await;
    let (status, body) = get_page(state_for(&server), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_shutdown_cancels_page_render() {
    let server = MockServer::start_async().await;
    let state = state_for(&server);
    state.shutdown.cancel();

    let (status, _) = get_page(state, "/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
