use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Raw string key/value persistence, e.g. browser `localStorage`.
pub trait KeyValueBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-memory backend for tests and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    fn with_entries<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> Result<R, StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_entries(HashMap::clear)
    }
}

#[cfg(feature = "browser")]
mod local {
    use super::{KeyValueBackend, StorageError};

    /// Browser `localStorage`. Looked up on every call so the handle stays `Send + Sync`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorageBackend;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }

    fn operation_failed(e: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Operation(format!("{e:?}"))
    }

    impl KeyValueBackend for LocalStorageBackend {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?.get_item(key).map_err(operation_failed)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?.set_item(key, value).map_err(operation_failed)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            local_storage()?.remove_item(key).map_err(operation_failed)
        }

        fn clear(&self) -> Result<(), StorageError> {
            local_storage()?.clear().map_err(operation_failed)
        }
    }
}

#[cfg(feature = "browser")]
pub use local::LocalStorageBackend;

/// Best-effort JSON-aware storage helper.
///
/// Non-string values are written as JSON text and read back parsed; text that is not
/// JSON reads back as a string. Backend failures are logged and never surface: reads
/// return `None`, writes become no-ops.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueBackend>,
}

impl Storage {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let text = match serde_json::to_value(value) {
            Ok(Value::String(text)) => text,
            Ok(other) => other.to_string(),
            Err(e) => {
                error!("error serializing storage key \"{key}\": {e}");
                return;
            }
        };

        if let Err(e) = self.backend.set_item(key, &text) {
            error!("error setting storage key \"{key}\": {e}");
        }
    }

    /// Stored text exactly as written. Missing and empty entries are `None`.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                error!("error getting storage key \"{key}\": {e}");
                None
            }
        }
    }

    /// Parsed value; a stored JSON `null` reads the same as a missing key.
    ///
    /// Strings are written raw, so a string that is itself JSON text comes back parsed:
    /// `"42"` reads as the number 42 and `"null"` as `None`. Use [`Storage::get_raw`]
    /// when the exact string matters, as for the session token.
    pub fn get(&self, key: &str) -> Option<Value> {
        let text = self.get_raw(key)?;
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(_) => Some(Value::String(text)),
        }
    }

    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!("storage key \"{key}\" has an unexpected shape: {e}");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            error!("error removing storage key \"{key}\": {e}");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            error!("error clearing storage: {e}");
        }
    }
}
