/// Sorting and pagination parameters for listing queries.
///
/// Sortable fields are declared per entity through a closed [`SortOptions`]
/// allow-list; anything outside the list is rejected up front so no caller
/// input can reach the query builder as a raw column name.
use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

/// Limit applied when a caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Hard server-side ceiling. Requests above it are clamped, not rejected.
pub const MAX_LIMIT: u32 = 100;

// No `Deserialize`: the clamping constructor is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    limit: u32,
    offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u64) -> Self {
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            n if n > MAX_LIMIT => MAX_LIMIT,
            n => n,
        };
        Self { limit, offset }
    }

    /// Limit for database queries.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Offset for database queries.
    pub fn offset(&self) -> i64 {
        self.offset as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single validated (field, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    field: String,
    direction: SortDirection,
}

impl Sort {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Closed set of sortable field names for one entity.
#[derive(Debug, Clone, Copy)]
pub struct SortOptions(&'static [&'static str]);

impl SortOptions {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    /// Validate a requested sort field against the allow-list.
    pub fn parse(&self, field: &str, direction: SortDirection) -> AppResult<Sort> {
        if !self.0.contains(&field) {
            return Err(AppError::ValidationError(format!(
                "Field '{}' is not sortable",
                field
            )));
        }
        Ok(Sort {
            field: field.to_string(),
            direction,
        })
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.0
    }
}

/// Everything a listing query accepts from the outside.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryParameter {
    sorts: Vec<Sort>,
    pagination: Pagination,
}

impl QueryParameter {
    pub fn new(sorts: Vec<Sort>, pagination: Pagination) -> Self {
        Self { sorts, pagination }
    }

    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}
