use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern is valid"))
}

/// A phone number, normalized at construction.
///
/// Separators (spaces, dashes, parentheses) are stripped; what remains must
/// be an optional `+` followed by 10-15 digits. Construction rejects
/// anything else, so downstream formatting can rely on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> AppResult<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();

        if !phone_re().is_match(&normalized) {
            return Err(AppError::ValidationError(format!(
                "Phone number '{}' is not a valid international number",
                raw
            )));
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
