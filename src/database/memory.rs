use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactPatch, NewContact};
use crate::database::store::ContactStore;

/// In-process `ContactStore`. Records are kept in insertion order.
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Contact>, DatabaseError> {
        let contacts = self.contacts.read().await;
        // Newest insert first, then a stable sort so equal timestamps keep that order
        let mut owned: Vec<Contact> = contacts
            .iter()
            .rev()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DatabaseError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, DatabaseError> {
        let mut contacts = self.contacts.write().await;
        let mut id = Uuid::new_v4();
        while contacts.iter().any(|c| c.id == id) {
            id = Uuid::new_v4();
        }
        let contact = contact.into_contact(id);
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update_by_id(&self, id: Uuid, patch: &ContactPatch) -> Result<Option<Contact>, DatabaseError> {
        let mut contacts = self.contacts.write().await;
        Ok(contacts.iter_mut().find(|c| c.id == id).map(|contact| {
            patch.apply_to(contact);
            contact.clone()
        }))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() != before)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
