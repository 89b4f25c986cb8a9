// Shared kernel: everything more than one bounded context needs.

pub mod application; // query parameters (sorting, pagination)
pub mod errors; // error taxonomy
pub mod infrastructure; // database pool, config, transaction boundary
pub mod utils; // logging

// Re-exports for convenience
pub use infrastructure::{Database, DatabaseConfig};
