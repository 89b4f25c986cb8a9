use async_trait::async_trait;
use uuid::Uuid;

use super::contact::Contact;
use crate::shared::application::QueryParameter;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist the given contacts through the streaming bulk path.
    ///
    /// All-or-nothing: a failure on any row leaves no rows committed. The
    /// returned set preserves input order.
    async fn create(&self, contacts: &[Contact]) -> AppResult<Vec<Contact>>;

    /// Whole-aggregate replacement. `NotFound` if the id does not exist.
    async fn update(&self, contact: &Contact) -> AppResult<Contact>;

    /// Delete a contact and, in the same transaction, every group
    /// membership link referencing it.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    /// `NotFound` if absent.
    async fn read_by_id(&self, id: &Uuid) -> AppResult<Contact>;

    async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Contact>>;

    async fn count(&self) -> AppResult<u64>;
}
