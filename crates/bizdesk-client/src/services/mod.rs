pub mod auth;
pub mod profile;

pub use auth::AuthService;
pub use profile::{ProfileService, PROFILE_QUERY_KEY};
