use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{GroupChangeset, GroupContactRow, GroupRow, NewGroupContactRow, NewGroupRow};
use crate::log_debug;
use crate::modules::contact::domain::Contact;
use crate::modules::contact::infrastructure::models::NewContactRow;
use crate::modules::group::domain::{Group, GroupRepository};
use crate::schema::{contact, group_contact, groups};
use crate::shared::application::{QueryParameter, Sort, SortDirection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{transaction, Database};

pub struct GroupRepositoryImpl {
    db: Arc<Database>,
}

impl GroupRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryImpl {
    async fn create(&self, group: &Group) -> AppResult<Group> {
        let db = Arc::clone(&self.db);
        let new_row = NewGroupRow::from_domain(group);

        let row = task::spawn_blocking(move || -> AppResult<GroupRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(groups::table)
                .values(&new_row)
                .get_result::<GroupRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        row.into_domain(Vec::new())
    }

    async fn update(&self, group: &Group) -> AppResult<Group> {
        let db = Arc::clone(&self.db);
        let id = group.id();
        let changes = GroupChangeset::from_domain(group);

        let result = task::spawn_blocking(move || -> AppResult<Option<(GroupRow, Vec<Uuid>)>> {
            let mut conn = db.get_connection()?;

            let row = diesel::update(groups::table.filter(groups::id.eq(id)))
                .set(&changes)
                .get_result::<GroupRow>(&mut conn)
                .optional()?;

            match row {
                Some(row) => {
                    let members = load_member_ids(&mut conn, id)?;
                    Ok(Some((row, members)))
                }
                None => Ok(None),
            }
        })
        .await??;

        match result {
            Some((row, members)) => row.into_domain(members),
            None => Err(AppError::NotFound(format!("Group with ID {} not found", id))),
        }
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            transaction::begin(&mut conn)?;
            let result = delete_group_with_links(&mut conn, id);
            transaction::finish(&mut conn, result)
        })
        .await?
    }

    async fn read_by_id(&self, id: &Uuid) -> AppResult<Group> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let result = task::spawn_blocking(move || -> AppResult<Option<(GroupRow, Vec<Uuid>)>> {
            let mut conn = db.get_connection()?;

            let row = groups::table
                .filter(groups::id.eq(id))
                .first::<GroupRow>(&mut conn)
                .optional()?;

            match row {
                Some(row) => {
                    let members = load_member_ids(&mut conn, id)?;
                    Ok(Some((row, members)))
                }
                None => Ok(None),
            }
        })
        .await??;

        match result {
            Some((row, members)) => row.into_domain(members),
            None => Err(AppError::NotFound(format!("Group with ID {} not found", id))),
        }
    }

    async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Group>> {
        let db = Arc::clone(&self.db);
        let params = params.clone();

        let batches = task::spawn_blocking(move || -> AppResult<Vec<(GroupRow, Vec<Uuid>)>> {
            let mut conn = db.get_connection()?;

            let mut query = groups::table.into_boxed();
            if params.sorts().is_empty() {
                query = query.order_by(groups::created_at.asc());
            } else {
                for sort in params.sorts() {
                    query = apply_group_sort(query, sort)?;
                }
            }

            let rows = query
                .then_order_by(groups::id.asc())
                .offset(params.pagination().offset())
                .limit(params.pagination().limit())
                .load::<GroupRow>(&mut conn)?;

            // Batch-load membership links, grouped per group row
            let links: Vec<GroupContactRow> = GroupContactRow::belonging_to(&rows)
                .order(group_contact::created_at.asc())
                .load::<GroupContactRow>(&mut conn)?;
            let grouped = links.grouped_by(&rows);

            Ok(rows
                .into_iter()
                .zip(grouped)
                .map(|(row, links)| (row, links.into_iter().map(|l| l.contact_id).collect()))
                .collect())
        })
        .await??;

        batches
            .into_iter()
            .map(|(row, members)| row.into_domain(members))
            .collect()
    }

    async fn count(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let n = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = groups::table.count().get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(n as u64)
    }

    async fn add_contact_to_group(&self, group_id: &Uuid, contact_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let new_link = NewGroupContactRow {
            group_id: *group_id,
            contact_id: *contact_id,
        };

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            // Relies on PK (group_id, contact_id); a concurrent duplicate
            // insert becomes a no-op instead of an error
            diesel::insert_into(group_contact::table)
                .values(&new_link)
                .on_conflict((group_contact::group_id, group_contact::contact_id))
                .do_nothing()
                .execute(&mut conn)?;

            Ok(())
        })
        .await?
    }

    async fn delete_contact_from_group(
        &self,
        group_id: &Uuid,
        contact_id: &Uuid,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let group_id = *group_id;
        let contact_id = *contact_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let n = diesel::delete(
                group_contact::table
                    .filter(group_contact::group_id.eq(group_id))
                    .filter(group_contact::contact_id.eq(contact_id)),
            )
            .execute(&mut conn)?;

            if n == 0 {
                return Err(AppError::NotFound("Contact not found in group".into()));
            }
            Ok(())
        })
        .await?
    }

    async fn create_contact_into_group(
        &self,
        group_id: &Uuid,
        contact: &Contact,
    ) -> AppResult<Contact> {
        let db = Arc::clone(&self.db);
        let group_id = *group_id;
        let new_row = NewContactRow::from_domain(contact);
        let created = contact.clone();

        log_debug!(
            "Creating contact {} into group {}",
            created.id(),
            group_id
        );

        task::spawn_blocking(move || -> AppResult<Contact> {
            let mut conn = db.get_connection()?;

            transaction::begin(&mut conn)?;
            let result = insert_contact_with_link(&mut conn, group_id, new_row, created);
            transaction::finish(&mut conn, result)
        })
        .await?
    }
}

/// Contact insert plus membership link, one unit of work. No existence
/// pre-check on the group: a missing group fails the link insert with a
/// foreign-key violation and the whole unit rolls back, so readers never
/// observe the contact without its membership.
fn insert_contact_with_link(
    conn: &mut PgConnection,
    group_id: Uuid,
    new_row: NewContactRow,
    created: Contact,
) -> AppResult<Contact> {
    diesel::copy_from(contact::table)
        .from_insertable(vec![new_row])
        .execute(conn)?;

    diesel::insert_into(group_contact::table)
        .values(&NewGroupContactRow {
            group_id,
            contact_id: created.id(),
        })
        .execute(conn)?;

    Ok(created)
}

fn delete_group_with_links(conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
    diesel::delete(group_contact::table.filter(group_contact::group_id.eq(id))).execute(conn)?;

    let deleted = diesel::delete(groups::table.filter(groups::id.eq(id))).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Group with ID {} not found", id)));
    }
    Ok(())
}

fn load_member_ids(conn: &mut PgConnection, group_id: Uuid) -> AppResult<Vec<Uuid>> {
    let ids = group_contact::table
        .filter(group_contact::group_id.eq(group_id))
        .order(group_contact::created_at.asc())
        .select(group_contact::contact_id)
        .load::<Uuid>(conn)?;
    Ok(ids)
}

fn apply_group_sort<'a>(
    query: groups::BoxedQuery<'a, Pg>,
    sort: &Sort,
) -> AppResult<groups::BoxedQuery<'a, Pg>> {
    let query = match (sort.field(), sort.direction()) {
        ("name", SortDirection::Asc) => query.then_order_by(groups::name.asc()),
        ("name", SortDirection::Desc) => query.then_order_by(groups::name.desc()),
        (field, _) => {
            return Err(AppError::ValidationError(format!(
                "Field '{}' is not sortable",
                field
            )))
        }
    };
    Ok(query)
}
