use bizdesk_types::{LoginData, User};
use serde_json::Value;
use tracing::{debug, info};

use crate::storage::Storage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// The signed-in session: a bearer token and a user snapshot, both persisted.
///
/// Storage is the source of truth; nothing is cached here, so a login or logout in
/// another tab is seen on the next read.
#[derive(Clone)]
pub struct SessionContext {
    storage: Storage,
}

impl SessionContext {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Startup entry point: wraps the persisted state and reports what was found.
    pub fn restore(storage: Storage) -> Self {
        let session = Self::new(storage);
        if session.is_authenticated() {
            info!("restored persisted session");
        } else {
            debug!("no persisted session");
        }
        session
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_raw(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.storage.get_as(USER_KEY)
    }

    /// The snapshot's `full_name`, read loosely so a partial snapshot still shows a name.
    pub fn display_name(&self) -> Option<String> {
        match self.storage.get(USER_KEY)? {
            Value::Object(fields) => fields
                .get("full_name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Persists whatever parts of a login response are present.
    pub fn establish(&self, data: &LoginData) {
        if let Some(token) = data.access_token.as_deref() {
            self.storage.set(TOKEN_KEY, token);
        }
        if let Some(user) = data.user.as_ref() {
            self.storage.set(USER_KEY, user);
        }
        info!(authenticated = self.is_authenticated(), "session established");
    }

    pub fn teardown(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_user;
    use serde_json::json;

    #[test]
    fn test_establish_then_teardown() {
        let session = SessionContext::restore(Storage::in_memory());
        assert!(!session.is_authenticated());

        session.establish(&LoginData {
            access_token: Some("tok-123".into()),
            user: Some(json!(sample_user())),
        });
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        assert_eq!(session.user(), Some(sample_user()));
        assert_eq!(session.display_name().as_deref(), Some("Nimal Perera"));

        session.teardown();
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn test_establish_keeps_absent_parts_untouched() {
        let session = SessionContext::new(Storage::in_memory());
        session.establish(&LoginData {
            access_token: None,
            user: Some(json!(sample_user())),
        });
        assert!(!session.is_authenticated());
        assert!(session.user().is_some());
    }

    #[test]
    fn test_numeric_looking_token_stays_a_string() {
        let storage = Storage::in_memory();
        storage.set(TOKEN_KEY, "123456");
        let session = SessionContext::new(storage);
        assert_eq!(session.token().as_deref(), Some("123456"));
    }

    #[test]
    fn test_display_name_from_partial_snapshot() {
        let storage = Storage::in_memory();
        storage.set(USER_KEY, &json!({ "full_name": "Kamala" }));
        let session = SessionContext::new(storage);
        assert_eq!(session.user(), None);
        assert_eq!(session.display_name().as_deref(), Some("Kamala"));
    }
}
