//! Contact directory core.
//!
//! Validated contact and group aggregates, a Postgres-backed repository
//! layer with atomic multi-step writes, and allow-listed sorting and
//! pagination. Transport adapters (HTTP/gRPC) sit outside this crate and
//! talk to [`ContactService`](modules::contact::ContactService) and
//! [`GroupService`](modules::group::GroupService).

pub mod modules;
pub mod schema;
pub mod shared;

pub use modules::contact::{Contact, ContactRepository, ContactRepositoryImpl, ContactService};
pub use modules::group::{Group, GroupRepository, GroupRepositoryImpl, GroupService};
pub use shared::application::{Pagination, QueryParameter, Sort, SortDirection, SortOptions};
pub use shared::errors::{AppError, AppResult};
pub use shared::{Database, DatabaseConfig};

/// Sortable fields of the contact listing, as exposed to transport adapters.
pub const CONTACT_SORT_OPTIONS: SortOptions = SortOptions::new(&[
    "name",
    "surname",
    "patronymic",
    "phone_number",
    "email",
    "gender",
    "age",
]);

/// Sortable fields of the group listing.
pub const GROUP_SORT_OPTIONS: SortOptions = SortOptions::new(&["name"]);
