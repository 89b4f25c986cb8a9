use async_trait::async_trait;
use uuid::Uuid;

use super::group::Group;
use crate::modules::contact::domain::Contact;
use crate::shared::application::QueryParameter;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(&self, group: &Group) -> AppResult<Group>;

    /// Whole-aggregate replacement of the group row (membership links are
    /// managed through the dedicated operations below). `NotFound` if the
    /// id does not exist.
    async fn update(&self, group: &Group) -> AppResult<Group>;

    /// Delete a group and, in the same transaction, its membership links.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    /// `NotFound` if absent.
    async fn read_by_id(&self, id: &Uuid) -> AppResult<Group>;

    async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Group>>;

    async fn count(&self) -> AppResult<u64>;

    /// Link an existing contact to an existing group. Idempotent at the
    /// storage level: a concurrent duplicate insert is a no-op.
    async fn add_contact_to_group(&self, group_id: &Uuid, contact_id: &Uuid) -> AppResult<()>;

    /// Remove a membership link. `NotFound` when the link does not exist.
    async fn delete_contact_from_group(&self, group_id: &Uuid, contact_id: &Uuid) -> AppResult<()>;

    /// Insert a new contact and its membership link as one atomic unit.
    /// A failure on either step leaves no partial state behind.
    async fn create_contact_into_group(
        &self,
        group_id: &Uuid,
        contact: &Contact,
    ) -> AppResult<Contact>;
}
