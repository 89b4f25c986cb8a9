use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::group::domain::{Group, GroupName};
use crate::schema::{group_contact, groups};
use crate::shared::errors::{AppError, AppResult};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = groups)]
pub struct GroupRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = groups)]
pub struct NewGroupRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = groups)]
pub struct GroupChangeset {
    pub modified_at: DateTime<Utc>,
    pub name: String,
}

/// Membership link row; the composite primary key makes duplicates
/// unrepresentable.
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(table_name = group_contact)]
#[diesel(primary_key(group_id, contact_id))]
#[diesel(belongs_to(GroupRow, foreign_key = group_id))]
pub struct GroupContactRow {
    pub group_id: Uuid,
    pub contact_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = group_contact)]
pub struct NewGroupContactRow {
    pub group_id: Uuid,
    pub contact_id: Uuid,
}

impl NewGroupRow {
    pub fn from_domain(entity: &Group) -> Self {
        Self {
            id: entity.id(),
            created_at: entity.created_at(),
            modified_at: entity.modified_at(),
            name: entity.name().value().to_string(),
        }
    }
}

impl GroupChangeset {
    pub fn from_domain(entity: &Group) -> Self {
        Self {
            modified_at: Utc::now(),
            name: entity.name().value().to_string(),
        }
    }
}

impl GroupRow {
    pub fn into_domain(self, contact_ids: Vec<Uuid>) -> AppResult<Group> {
        let name = GroupName::new(&self.name).map_err(|e| {
            AppError::ReconstructionError(format!(
                "Stored group {} violates domain rules: {}",
                self.id, e
            ))
        })?;

        Ok(Group::restore(
            self.id,
            self.created_at,
            self.modified_at,
            name,
            contact_ids,
        ))
    }
}
