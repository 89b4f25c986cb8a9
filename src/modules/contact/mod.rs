pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ContactService;
pub use domain::{Contact, ContactRepository};
pub use infrastructure::ContactRepositoryImpl;
