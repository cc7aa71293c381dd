use axum::{extract::State, Extension, Json};

use crate::database::models::Contact;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/contacts/all - every contact of the caller, newest first
pub async fn all(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.contacts.list(user.user_id).await?;
    Ok(Json(contacts))
}
