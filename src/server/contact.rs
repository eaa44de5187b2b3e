use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::domain::model::{Contact, NewContact};
use crate::utils::error::{Result, SiteError};

/// `POST /api/contact`. Malformed bodies are validation errors (400).
pub async fn create_contact(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>)> {
    let Json(payload) = payload.map_err(|e| SiteError::validation("body", e.body_text()))?;
    let contact = state.contacts.create(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    Ok(Json(state.contacts.list().await?))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.contacts.delete(&id).await?;
    Ok(Json(json!({ "id": id })))
}
