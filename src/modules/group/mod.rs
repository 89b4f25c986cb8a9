pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::GroupService;
pub use domain::{Group, GroupName, GroupRepository};
pub use infrastructure::GroupRepositoryImpl;
