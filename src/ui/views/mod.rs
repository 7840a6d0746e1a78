pub mod end;
pub mod home;
pub mod quiz;
