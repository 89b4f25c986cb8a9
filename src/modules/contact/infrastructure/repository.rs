use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{ContactChangeset, ContactRow, NewContactRow};
use crate::log_debug;
use crate::modules::contact::domain::{Contact, ContactRepository};
use crate::schema::{contact, group_contact};
use crate::shared::application::{QueryParameter, Sort, SortDirection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{transaction, Database};

pub struct ContactRepositoryImpl {
    db: Arc<Database>,
}

impl ContactRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn create(&self, contacts: &[Contact]) -> AppResult<Vec<Contact>> {
        if contacts.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let rows: Vec<NewContactRow> = contacts.iter().map(NewContactRow::from_domain).collect();
        let created = contacts.to_vec();

        log_debug!("Bulk-inserting {} contacts via COPY", rows.len());

        task::spawn_blocking(move || -> AppResult<Vec<Contact>> {
            let mut conn = db.get_connection()?;

            transaction::begin(&mut conn)?;
            let result = copy_contacts(&mut conn, rows).map(|_| created);
            transaction::finish(&mut conn, result)
        })
        .await?
    }

    async fn update(&self, contact: &Contact) -> AppResult<Contact> {
        let db = Arc::clone(&self.db);
        let id = contact.id();
        let changes = ContactChangeset::from_domain(contact);

        let row = task::spawn_blocking(move || -> AppResult<Option<ContactRow>> {
            let mut conn = db.get_connection()?;
            let row = diesel::update(contact::table.filter(contact::id.eq(id)))
                .set(&changes)
                .get_result::<ContactRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        match row {
            Some(row) => row.into_domain(),
            None => Err(AppError::NotFound(format!(
                "Contact with ID {} not found",
                id
            ))),
        }
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            transaction::begin(&mut conn)?;
            let result = delete_contact_with_links(&mut conn, id);
            transaction::finish(&mut conn, result)
        })
        .await?
    }

    async fn read_by_id(&self, id: &Uuid) -> AppResult<Contact> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let row = task::spawn_blocking(move || -> AppResult<Option<ContactRow>> {
            let mut conn = db.get_connection()?;
            let row = contact::table
                .filter(contact::id.eq(id))
                .first::<ContactRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        match row {
            Some(row) => row.into_domain(),
            None => Err(AppError::NotFound(format!(
                "Contact with ID {} not found",
                id
            ))),
        }
    }

    async fn list(&self, params: &QueryParameter) -> AppResult<Vec<Contact>> {
        let db = Arc::clone(&self.db);
        let params = params.clone();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<ContactRow>> {
            let mut conn = db.get_connection()?;

            let mut query = contact::table.into_boxed();
            if params.sorts().is_empty() {
                query = query.order_by(contact::created_at.asc());
            } else {
                for sort in params.sorts() {
                    query = apply_contact_sort(query, sort)?;
                }
            }

            // Unique tie-breaker keeps pagination deterministic
            let rows = query
                .then_order_by(contact::id.asc())
                .offset(params.pagination().offset())
                .limit(params.pagination().limit())
                .load::<ContactRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        rows.into_iter().map(ContactRow::into_domain).collect()
    }

    async fn count(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let n = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = contact::table.count().get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(n as u64)
    }
}

/// Streaming bulk insert. One COPY statement for the whole batch: row
/// order follows input order and a failure on any row aborts the lot.
fn copy_contacts(conn: &mut PgConnection, rows: Vec<NewContactRow>) -> AppResult<usize> {
    let inserted = diesel::copy_from(contact::table)
        .from_insertable(rows)
        .execute(conn)?;
    Ok(inserted)
}

/// Membership links go first so no dangling `group_contact` row can survive
/// the transaction.
fn delete_contact_with_links(conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
    diesel::delete(group_contact::table.filter(group_contact::contact_id.eq(id)))
        .execute(conn)?;

    let deleted = diesel::delete(contact::table.filter(contact::id.eq(id))).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!(
            "Contact with ID {} not found",
            id
        )));
    }
    Ok(())
}

/// Second line of defense behind `SortOptions`: an unlisted field is an
/// error here too, never a silently ignored clause.
fn apply_contact_sort<'a>(
    query: contact::BoxedQuery<'a, Pg>,
    sort: &Sort,
) -> AppResult<contact::BoxedQuery<'a, Pg>> {
    let query = match (sort.field(), sort.direction()) {
        ("name", SortDirection::Asc) => query.then_order_by(contact::name.asc()),
        ("name", SortDirection::Desc) => query.then_order_by(contact::name.desc()),
        ("surname", SortDirection::Asc) => query.then_order_by(contact::surname.asc()),
        ("surname", SortDirection::Desc) => query.then_order_by(contact::surname.desc()),
        ("patronymic", SortDirection::Asc) => query.then_order_by(contact::patronymic.asc()),
        ("patronymic", SortDirection::Desc) => query.then_order_by(contact::patronymic.desc()),
        ("phone_number", SortDirection::Asc) => query.then_order_by(contact::phone_number.asc()),
        ("phone_number", SortDirection::Desc) => query.then_order_by(contact::phone_number.desc()),
        ("email", SortDirection::Asc) => query.then_order_by(contact::email.asc()),
        ("email", SortDirection::Desc) => query.then_order_by(contact::email.desc()),
        ("gender", SortDirection::Asc) => query.then_order_by(contact::gender.asc()),
        ("gender", SortDirection::Desc) => query.then_order_by(contact::gender.desc()),
        ("age", SortDirection::Asc) => query.then_order_by(contact::age.asc()),
        ("age", SortDirection::Desc) => query.then_order_by(contact::age.desc()),
        (field, _) => {
            return Err(AppError::ValidationError(format!(
                "Field '{}' is not sortable",
                field
            )))
        }
    };
    Ok(query)
}
