use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{Age, Email, Gender, Name, Patronymic, PhoneNumber, Surname};

/// Contact aggregate root.
///
/// Every scalar field is a validated value object, so an instance cannot
/// exist with invalid data. Fields are private; changes happen by building
/// a replacement via [`Contact::restore`] with the same id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: Uuid,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    phone_number: PhoneNumber,
    email: Email,
    name: Name,
    surname: Surname,
    patronymic: Patronymic,
    age: Age,
    gender: Gender,
}

impl Contact {
    /// Create a fresh contact: generates identity and timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phone_number: PhoneNumber,
        email: Email,
        name: Name,
        surname: Surname,
        patronymic: Patronymic,
        age: Age,
        gender: Gender,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            modified_at: now,
            phone_number,
            email,
            name,
            surname,
            patronymic,
            age,
            gender,
        }
    }

    /// Rebuild a contact with externally supplied identity and timestamps,
    /// for rehydration from storage and for whole-aggregate updates.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        phone_number: PhoneNumber,
        email: Email,
        name: Name,
        surname: Surname,
        patronymic: Patronymic,
        age: Age,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            created_at,
            modified_at,
            phone_number,
            email,
            name,
            surname,
            patronymic,
            age,
            gender,
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

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn surname(&self) -> &Surname {
        &self.surname
    }

    pub fn patronymic(&self) -> &Patronymic {
        &self.patronymic
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// "Surname Name Patronymic" display form.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.patronymic)
    }
}
