use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::parse_contact_id;

/// DELETE /api/contacts/delete/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_contact_id(&id)?;
    state.contacts.delete(user.user_id, id).await?;
    Ok(Json(json!({ "msg": "Contact removed" })))
}
