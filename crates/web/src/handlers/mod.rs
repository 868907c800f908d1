pub mod home;
pub mod records;
