use std::sync::Arc;

use uuid::Uuid;

use crate::modules::contact::domain::{Contact, ContactRepository};
use crate::modules::group::domain::{Group, GroupRepository};
use crate::shared::application::QueryParameter;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Use-case orchestrator for groups and group membership. Holds both
/// repositories because linking needs the contact side checked too.
pub struct GroupService {
    group_repo: Arc<dyn GroupRepository>,
    contact_repo: Arc<dyn ContactRepository>,
}

impl GroupService {
    pub fn new(group_repo: Arc<dyn GroupRepository>, contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self {
            group_repo,
            contact_repo,
        }
    }

    pub async fn create(&self, group: Group) -> AppResult<Group> {
        log_debug!("Creating group '{}'", group.name());
        self.group_repo.create(&group).await
    }

    pub async fn update(&self, group: Group) -> AppResult<Group> {
        log_debug!("Updating group {}", group.id());
        self.group_repo.update(&group).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting group {}", id);
        self.group_repo.delete(id).await
    }

    pub async fn read_by_id(&self, id: &Uuid) -> AppResult<Group> {
        self.group_repo.read_by_id(id).await
    }

    pub async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Group>> {
        self.group_repo.list(params).await
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.group_repo.count().await
    }

    /// Link an existing contact to an existing group.
    pub async fn add_contact_to_group(&self, group_id: &Uuid, contact_id: &Uuid) -> AppResult<()> {
        // Both sides must exist, and duplicate membership is a caller fault
        let group = self.group_repo.read_by_id(group_id).await?;
        self.contact_repo.read_by_id(contact_id).await?;

        if group.contains_contact(contact_id) {
            return Err(AppError::ValidationError(
                "Contact already exists in this group".to_string(),
            ));
        }

        self.group_repo
            .add_contact_to_group(group_id, contact_id)
            .await?;

        log_info!("Added contact {} to group {}", contact_id, group_id);
        Ok(())
    }

    pub async fn delete_contact_from_group(
        &self,
        group_id: &Uuid,
        contact_id: &Uuid,
    ) -> AppResult<()> {
        self.group_repo
            .delete_contact_from_group(group_id, contact_id)
            .await
    }

    /// Create a brand-new contact directly inside a group, atomically.
    pub async fn create_contact_into_group(
        &self,
        group_id: &Uuid,
        contact: Contact,
    ) -> AppResult<Contact> {
        let created = self
            .group_repo
            .create_contact_into_group(group_id, &contact)
            .await?;

        log_info!("Created contact {} into group {}", created.id(), group_id);
        Ok(created)
    }
}
