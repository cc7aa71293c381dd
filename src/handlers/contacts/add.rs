use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};

use crate::database::models::{Contact, ContactFields};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /api/contacts/add - create a contact owned by the caller
///
/// `name` is required; every other field is stored as sent.
pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(fields) = payload?;
    let contact = state.contacts.add(user.user_id, fields).await?;
    Ok(Json(contact))
}
