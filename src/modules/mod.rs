pub mod contact;
pub mod group;
