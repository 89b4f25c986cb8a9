use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::GroupName;

/// Group aggregate root.
///
/// Owns the set of membership links (contact ids), never the contacts
/// themselves. Membership order is irrelevant and duplicates are not
/// representable in storage (composite primary key).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: Uuid,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    name: GroupName,
    contact_ids: Vec<Uuid>,
}

impl Group {
    /// Create a fresh, empty group.
    pub fn new(name: GroupName) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            modified_at: now,
            name,
            contact_ids: Vec::new(),
        }
    }

    /// Rebuild a group with externally supplied identity and membership.
    pub fn restore(
        id: Uuid,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        name: GroupName,
        contact_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            id,
            created_at,
            modified_at,
            name,
            contact_ids,
        }
    }

    /// Replacement-style rename: consumes the group, refreshes `modified_at`.
    pub fn with_name(self, name: GroupName) -> Self {
        Self {
            name,
            modified_at: Utc::now(),
            ..self
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn contact_ids(&self) -> &[Uuid] {
        &self.contact_ids
    }

    pub fn contains_contact(&self, contact_id: &Uuid) -> bool {
        self.contact_ids.contains(contact_id)
    }

    pub fn member_count(&self) -> usize {
        self.contact_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_is_empty() {
        let group = Group::new(GroupName::new("Friends").unwrap());
        assert_eq!(group.member_count(), 0);
        assert!(!group.id().is_nil());
    }

    #[test]
    fn membership_lookup_works_on_restored_groups() {
        let member = Uuid::new_v4();
        let group = Group::restore(
            Uuid::new_v4(),
            Utc::now(),
            Utc::now(),
            GroupName::new("Friends").unwrap(),
            vec![member],
        );

        assert!(group.contains_contact(&member));
        assert!(!group.contains_contact(&Uuid::new_v4()));
    }

    #[test]
    fn rename_replaces_name_and_touches_modified_at() {
        let group = Group::new(GroupName::new("Old").unwrap());
        let created_at = group.created_at();

        let renamed = group.with_name(GroupName::new("New").unwrap());

        assert_eq!(renamed.name().value(), "New");
        assert_eq!(renamed.created_at(), created_at);
        assert!(renamed.modified_at() >= created_at);
    }
}
