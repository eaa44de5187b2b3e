use axum::{
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::{contact, pages, AppState};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the full router. Static paths win over the catch-all service route.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/product", get(pages::products))
        .route("/product/category/{category_id}", get(pages::product_category))
        .route("/projects", get(pages::projects))
        .route("/projects/category/{proj_cat_id}", get(pages::project_category))
        .route("/contactus", get(pages::contact_form).post(pages::submit_contact))
        .route("/{service_id}", get(pages::service));

    let api = Router::new()
        .route(
            "/api/contact",
            get(contact::list_contacts).post(contact::create_contact),
        )
        .route("/api/contact/{id}", delete(contact::delete_contact));

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .merge(api)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
