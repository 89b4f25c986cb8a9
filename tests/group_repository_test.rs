/// Group repository and membership integration tests
///
/// These tests need a running Postgres server reachable through
/// TEST_DATABASE_URL; run them with `cargo test -- --ignored`.
mod utils;

use uuid::Uuid;

use rolodex::modules::group::domain::GroupName;
use rolodex::AppError;
use utils::factories::{ContactFactory, GroupFactory};
use utils::test_db::TestDb;

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn group_round_trips_through_storage() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group = GroupFactory::new().with_name("Family").build();
    let created = services.group_service.create(group).await.unwrap();

    let read_back = services
        .group_service
        .read_by_id(&created.id())
        .await
        .unwrap();

    assert_eq!(read_back.id(), created.id());
    assert_eq!(read_back.name().value(), "Family");
    assert_eq!(read_back.member_count(), 0);
    assert_eq!(services.group_service.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn group_rename_is_whole_aggregate_replacement() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let created = services
        .group_service
        .create(GroupFactory::new().with_name("Old").build())
        .await
        .unwrap();

    let renamed = created.with_name(GroupName::new("New").unwrap());
    let updated = services.group_service.update(renamed).await.unwrap();

    assert_eq!(updated.name().value(), "New");

    let missing = GroupFactory::new().build();
    let err = services.group_service.update(missing).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn membership_add_and_remove() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();
    let contact = services
        .contact_service
        .create(vec![ContactFactory::new().build()])
        .await
        .unwrap()
        .remove(0);

    services
        .group_service
        .add_contact_to_group(&group.id(), &contact.id())
        .await
        .unwrap();

    let read_back = services.group_service.read_by_id(&group.id()).await.unwrap();
    assert!(read_back.contains_contact(&contact.id()));

    // Linking twice is a caller fault
    let err = services
        .group_service
        .add_contact_to_group(&group.id(), &contact.id())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    services
        .group_service
        .delete_contact_from_group(&group.id(), &contact.id())
        .await
        .unwrap();

    let read_back = services.group_service.read_by_id(&group.id()).await.unwrap();
    assert!(!read_back.contains_contact(&contact.id()));

    // Removing an absent link is NotFound
    let err = services
        .group_service
        .delete_contact_from_group(&group.id(), &contact.id())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn linking_requires_existing_contact() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();

    let err = services
        .group_service
        .add_contact_to_group(&group.id(), &Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn create_contact_into_group_commits_both_or_nothing() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();

    // Happy path: contact and membership are both visible
    let contact = ContactFactory::new().build();
    let created = services
        .group_service
        .create_contact_into_group(&group.id(), contact)
        .await
        .unwrap();

    assert!(services
        .contact_service
        .read_by_id(&created.id())
        .await
        .is_ok());
    let read_back = services.group_service.read_by_id(&group.id()).await.unwrap();
    assert!(read_back.contains_contact(&created.id()));

    // Forced failure on the link step: the group does not exist, so the
    // foreign key rejects the membership row after the contact insert
    let orphan = ContactFactory::new().build();
    let orphan_id = orphan.id();
    let err = services
        .group_service
        .create_contact_into_group(&Uuid::new_v4(), orphan)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // No partial state: the contact insert was rolled back
    let err = services
        .contact_service
        .read_by_id(&orphan_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn deleting_contact_clears_its_memberships() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group_a = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();
    let group_b = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();
    let contact = services
        .contact_service
        .create(vec![ContactFactory::new().build()])
        .await
        .unwrap()
        .remove(0);

    for group in [&group_a, &group_b] {
        services
            .group_service
            .add_contact_to_group(&group.id(), &contact.id())
            .await
            .unwrap();
    }

    services.contact_service.delete(&contact.id()).await.unwrap();

    // No dangling membership rows in any group
    for group in [&group_a, &group_b] {
        let read_back = services.group_service.read_by_id(&group.id()).await.unwrap();
        assert!(!read_back.contains_contact(&contact.id()));
    }
}

#[tokio::test]
#[ignore] // requires Postgres via TEST_DATABASE_URL
async fn deleting_group_keeps_member_contacts() {
    let test_db = TestDb::new();
    let services = utils::build_test_services(&test_db);

    let group = services
        .group_service
        .create(GroupFactory::new().build())
        .await
        .unwrap();
    let contact = services
        .contact_service
        .create(vec![ContactFactory::new().build()])
        .await
        .unwrap()
        .remove(0);

    services
        .group_service
        .add_contact_to_group(&group.id(), &contact.id())
        .await
        .unwrap();

    services.group_service.delete(&group.id()).await.unwrap();

    let err = services
        .group_service
        .read_by_id(&group.id())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Groups hold references, not ownership: the contact survives
    assert!(services
        .contact_service
        .read_by_id(&contact.id())
        .await
        .is_ok());
}
