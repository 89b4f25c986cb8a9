use std::sync::Arc;

use uuid::Uuid;

use crate::log_debug;
use crate::modules::contact::domain::{Contact, ContactRepository};
use crate::shared::application::QueryParameter;
use crate::shared::errors::AppResult;

/// Use-case orchestrator for the contact aggregate.
///
/// Validation already happened when the value objects were built, so the
/// service sequences repository calls and owns nothing mutable itself.
pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// Create one or more contacts through the bulk path.
    pub async fn create(&self, contacts: Vec<Contact>) -> AppResult<Vec<Contact>> {
        if contacts.is_empty() {
            return Ok(Vec::new());
        }

        log_debug!("Creating {} contact(s)", contacts.len());
        self.contact_repo.create(&contacts).await
    }

    /// Whole-aggregate replacement; the stored `created_at` survives.
    pub async fn update(&self, contact: Contact) -> AppResult<Contact> {
        log_debug!("Updating contact {}", contact.id());
        self.contact_repo.update(&contact).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting contact {}", id);
        self.contact_repo.delete(id).await
    }

    pub async fn read_by_id(&self, id: &Uuid) -> AppResult<Contact> {
        self.contact_repo.read_by_id(id).await
    }

    pub async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Contact>> {
        self.contact_repo.list(params).await
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.contact_repo.count().await
    }
}
