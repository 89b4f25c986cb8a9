pub mod group;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use group::Group;
pub use repository::GroupRepository;
pub use value_objects::GroupName;
