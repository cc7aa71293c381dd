use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactFields, ContactPatch, FieldTypeError, NewContact};
use crate::database::store::ContactStore;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("Contact not found: {0}")]
    NotFound(Uuid),
    #[error("Contact {id} is not owned by {caller}")]
    NotAuthorized { id: Uuid, caller: Uuid },
    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}

impl From<FieldTypeError> for ContactError {
    fn from(err: FieldTypeError) -> Self {
        ContactError::Validation {
            field: err.field,
            message: err.to_string(),
        }
    }
}

/// True when `caller` owns `contact`
pub fn is_owner(contact: &Contact, caller: Uuid) -> bool {
    contact.owner == caller
}

/// Ownership-checked contact operations over an injected store
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ContactStore> {
        &self.store
    }

    pub async fn list(&self, caller: Uuid) -> Result<Vec<Contact>, ContactError> {
        let contacts = self.store.find_by_owner(caller).await?;
        tracing::debug!("Listed {} contacts for user {}", contacts.len(), caller);
        Ok(contacts)
    }

    pub async fn add(&self, caller: Uuid, fields: ContactFields) -> Result<Contact, ContactError> {
        fields.ensure_strings()?;

        let name = match fields.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ContactError::Validation {
                    field: "name",
                    message: "Name is required".to_string(),
                })
            }
        };

        let new_contact = NewContact {
            owner: caller,
            name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            city: fields.city,
            state: fields.state,
            country: fields.country,
            postal_code: fields.postal_code,
            created_at: Utc::now(),
        };

        let contact = self.store.create(new_contact).await?;
        tracing::info!("Created contact {} for user {}", contact.id, caller);
        Ok(contact)
    }

    pub async fn update(&self, caller: Uuid, id: Uuid, patch: ContactPatch) -> Result<Contact, ContactError> {
        self.owned(caller, id).await?;

        // The record may have been deleted since the ownership check
        let contact = self
            .store
            .update_by_id(id, &patch)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        tracing::info!("Updated contact {} fields {:?}", id, patch.field_names());
        Ok(contact)
    }

    pub async fn delete(&self, caller: Uuid, id: Uuid) -> Result<(), ContactError> {
        self.owned(caller, id).await?;

        if !self.store.delete_by_id(id).await? {
            return Err(ContactError::NotFound(id));
        }

        tracing::info!("Deleted contact {}", id);
        Ok(())
    }

    async fn owned(&self, caller: Uuid, id: Uuid) -> Result<Contact, ContactError> {
        let contact = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        if !is_owner(&contact, caller) {
            tracing::warn!("User {} attempted to modify contact {} owned by another user", caller, id);
            return Err(ContactError::NotAuthorized { id, caller });
        }

        Ok(contact)
    }
}
