use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::contact::domain::{
    Age, Contact, Email, Gender, Name, Patronymic, PhoneNumber, Surname,
};
use crate::schema::contact;
use crate::shared::errors::{AppError, AppResult};

/// Storage representation of a contact. Field order matches the column
/// order in `schema.rs`, which also fixes the COPY column order.
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = contact)]
pub struct ContactRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub phone_number: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewContactRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub phone_number: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i32,
    pub gender: String,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = contact)]
pub struct ContactChangeset {
    pub modified_at: DateTime<Utc>,
    pub phone_number: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub age: i32,
    pub gender: String,
}

impl NewContactRow {
    pub fn from_domain(entity: &Contact) -> Self {
        Self {
            id: entity.id(),
            created_at: entity.created_at(),
            modified_at: entity.modified_at(),
            phone_number: entity.phone_number().value().to_string(),
            email: entity.email().value().to_string(),
            name: entity.name().value().to_string(),
            surname: entity.surname().value().to_string(),
            patronymic: entity.patronymic().value().to_string(),
            age: entity.age().value(),
            gender: entity.gender().as_str().to_string(),
        }
    }
}

impl ContactChangeset {
    /// Full replacement: every mutable column is written, `id` and
    /// `created_at` are never part of the changeset.
    pub fn from_domain(entity: &Contact) -> Self {
        Self {
            modified_at: Utc::now(),
            phone_number: entity.phone_number().value().to_string(),
            email: entity.email().value().to_string(),
            name: entity.name().value().to_string(),
            surname: entity.surname().value().to_string(),
            patronymic: entity.patronymic().value().to_string(),
            age: entity.age().value(),
            gender: entity.gender().as_str().to_string(),
        }
    }
}

impl ContactRow {
    /// Rebuild the domain aggregate, re-running every field validator.
    ///
    /// Stored data that no longer passes validation is a data integrity
    /// fault, not a caller fault, so failures are reported as
    /// `ReconstructionError`.
    pub fn into_domain(self) -> AppResult<Contact> {
        let id = self.id;

        let phone_number =
            PhoneNumber::new(&self.phone_number).map_err(|e| reconstruction(id, e))?;
        let email = Email::new(&self.email).map_err(|e| reconstruction(id, e))?;
        let name = Name::new(&self.name).map_err(|e| reconstruction(id, e))?;
        let surname = Surname::new(&self.surname).map_err(|e| reconstruction(id, e))?;
        let patronymic = Patronymic::new(&self.patronymic).map_err(|e| reconstruction(id, e))?;
        let age = Age::new(self.age).map_err(|e| reconstruction(id, e))?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|e| reconstruction(id, e))?;

        Ok(Contact::restore(
            id,
            self.created_at,
            self.modified_at,
            phone_number,
            email,
            name,
            surname,
            patronymic,
            age,
            gender,
        ))
    }
}

fn reconstruction(id: Uuid, err: AppError) -> AppError {
    AppError::ReconstructionError(format!("Stored contact {} violates domain rules: {}", id, err))
}
