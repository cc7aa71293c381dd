use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};

use crate::database::models::{Contact, ContactFields, ContactPatch};
use crate::error::ApiError;
use crate::services::ContactError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::parse_contact_id;

/// PUT /api/contacts/update/:id - change only the fields present in the body
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_contact_id(&id)?;
    let Json(fields) = payload?;

    let patch = ContactPatch::try_from(fields).map_err(ContactError::from)?;
    let contact = state.contacts.update(user.user_id, id, patch).await?;
    Ok(Json(contact))
}
