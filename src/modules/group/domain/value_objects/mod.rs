pub mod group_name;

pub use group_name::GroupName;
