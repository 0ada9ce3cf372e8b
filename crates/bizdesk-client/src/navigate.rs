pub const LOGIN_PATH: &str = "/login";

/// Where the app currently is, and how to force it somewhere else.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}
