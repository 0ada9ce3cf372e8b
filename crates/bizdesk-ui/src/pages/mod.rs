pub mod dashboard;
pub mod login;
pub mod master_data;
pub mod master_resource;
pub mod not_found;
pub mod profile;
pub mod reports;
pub mod signup;
