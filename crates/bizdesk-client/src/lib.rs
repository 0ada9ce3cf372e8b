#![allow(non_snake_case)]

pub mod cache;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod navigate;
pub mod notify;
pub mod request;
pub mod services;
pub mod session;
pub mod storage;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::QueryCache;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use navigate::{Navigator, LOGIN_PATH};
pub use notify::{Notifier, TracingNotifier, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use request::{ApiRequest, FormPart, MultipartForm, PreparedRequest, RequestBody, RequestOptions};
pub use services::{AuthService, ProfileService};
pub use session::SessionContext;
pub use storage::{KeyValueBackend, MemoryBackend, Storage, StorageError};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};

#[cfg(feature = "browser")]
pub use storage::LocalStorageBackend;
