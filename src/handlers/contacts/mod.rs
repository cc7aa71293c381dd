// handlers/contacts - /api/contacts/* (token required)
//
// The auth middleware puts `AuthUser` into the request extensions before any
// of these run; every operation is scoped to that user.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

pub use add::add;
pub use delete::delete;
pub use list::all;
pub use update::update;

use uuid::Uuid;

use crate::error::ApiError;

/// A path id that is not a UUID cannot name any contact
pub(crate) fn parse_contact_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::contact_not_found())
}
