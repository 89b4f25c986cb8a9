use std::fmt;

use serde::Serialize;

use super::person_name_re;
use crate::shared::errors::{AppError, AppResult};

pub const NAME_MAX_LENGTH: usize = 50;

/// A person's given name. Construction is the only way in; the wrapped
/// value never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(AppError::ValidationError("Name cannot be empty".to_string()));
        }
        if value.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Name too long (max {} characters)",
                NAME_MAX_LENGTH
            )));
        }
        if !person_name_re().is_match(value) {
            return Err(AppError::ValidationError(
                "Name contains invalid characters".to_string(),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
