use serde::Serialize;
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

pub const AGE_MAX: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    pub fn new(raw: i32) -> AppResult<Self> {
        if !(0..=AGE_MAX).contains(&raw) {
            return Err(AppError::ValidationError(format!(
                "Age must be between 0 and {}",
                AGE_MAX
            )));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
