pub mod factories;
pub mod test_db;

use std::sync::Arc;

use rolodex::modules::contact::{ContactRepositoryImpl, ContactService};
use rolodex::modules::group::{GroupRepositoryImpl, GroupService};
use rolodex::{ContactRepository, GroupRepository};

use test_db::TestDb;

pub struct TestServices {
    pub contact_service: ContactService,
    pub group_service: GroupService,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub group_repo: Arc<dyn GroupRepository>,
}

/// Build the full service stack against an isolated test database.
pub fn build_test_services(test_db: &TestDb) -> TestServices {
    let db = Arc::new(test_db.database());

    let contact_repo: Arc<dyn ContactRepository> = Arc::new(ContactRepositoryImpl::new(db.clone()));
    let group_repo: Arc<dyn GroupRepository> = Arc::new(GroupRepositoryImpl::new(db));

    TestServices {
        contact_service: ContactService::new(contact_repo.clone()),
        group_service: GroupService::new(group_repo.clone(), contact_repo.clone()),
        contact_repo,
        group_repo,
    }
}
