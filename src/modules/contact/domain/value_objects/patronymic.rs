use std::fmt;

use serde::Serialize;

use super::person_name_re;
use crate::shared::errors::{AppError, AppResult};

pub const PATRONYMIC_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Patronymic(String);

impl Patronymic {
    pub fn new(raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(AppError::ValidationError(
                "Patronymic cannot be empty".to_string(),
            ));
        }
        if value.chars().count() > PATRONYMIC_MAX_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Patronymic too long (max {} characters)",
                PATRONYMIC_MAX_LENGTH
            )));
        }
        if !person_name_re().is_match(value) {
            return Err(AppError::ValidationError(
                "Patronymic contains invalid characters".to_string(),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Patronymic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
