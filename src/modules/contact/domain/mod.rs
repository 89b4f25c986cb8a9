pub mod contact;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use contact::Contact;
pub use repository::ContactRepository;
pub use value_objects::{Age, Email, Gender, Name, Patronymic, PhoneNumber, Surname};
