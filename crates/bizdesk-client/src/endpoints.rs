pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";

pub const PROFILE: &str = "/profile";
pub const PROFILE_PERSONAL: &str = "/profile/personal";
pub const PROFILE_COMPANY: &str = "/profile/company";
pub const PROFILE_PASSWORD: &str = "/profile/password";
