use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

pub const GROUP_NAME_MAX_LENGTH: usize = 100;

static GROUP_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn group_name_re() -> &'static Regex {
    GROUP_NAME_RE
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("group name pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    pub fn new(raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(AppError::ValidationError(
                "Group name cannot be empty".to_string(),
            ));
        }
        if value.chars().count() > GROUP_NAME_MAX_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Group name too long (max {} characters)",
                GROUP_NAME_MAX_LENGTH
            )));
        }
        if !group_name_re().is_match(value) {
            return Err(AppError::ValidationError(
                "Group name contains invalid characters".to_string(),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
