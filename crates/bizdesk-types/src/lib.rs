pub mod auth;
pub mod envelope;
pub mod master_data;
pub mod profile;
pub mod validation;

pub use auth::*;
pub use envelope::*;
pub use master_data::*;
pub use profile::*;
pub use validation::*;
