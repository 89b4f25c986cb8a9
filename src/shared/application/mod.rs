pub mod query;

pub use query::{Pagination, QueryParameter, Sort, SortDirection, SortOptions};
