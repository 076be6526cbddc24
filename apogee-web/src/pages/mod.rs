pub mod contact;
pub mod home;
pub mod launches;
pub mod not_found;
pub mod rockets;
