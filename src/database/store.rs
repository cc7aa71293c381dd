use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactPatch, NewContact};

/// Id-keyed contact persistence with an owner-filtered listing.
///
/// Implementations assign `id` on create. `update_by_id` and `delete_by_id`
/// report a missing row as `None` / `false` instead of an error.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts owned by `owner`, newest `created_at` first
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Contact>, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DatabaseError>;

    async fn create(&self, contact: NewContact) -> Result<Contact, DatabaseError>;

    /// Apply `patch` in one step and return the post-update record
    async fn update_by_id(&self, id: Uuid, patch: &ContactPatch) -> Result<Option<Contact>, DatabaseError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
