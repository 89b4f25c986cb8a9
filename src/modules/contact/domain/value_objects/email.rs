use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

pub const EMAIL_MAX_LENGTH: usize = 255;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        if value.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Email too long (max {} characters)",
                EMAIL_MAX_LENGTH
            )));
        }
        if !email_re().is_match(value) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                raw
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
