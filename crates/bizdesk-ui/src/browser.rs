//! Glue between the API client's seams and the page environment.

use std::future::Future;
use std::sync::Arc;

use bizdesk_client::{ApiClient, ClientConfig, Navigator, ReqwestTransport, SessionContext, Storage};

use crate::components::toast::{ToastContext, ToastNotifier};

/// Hard navigation through `window.location`, used for session expiry.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(path, "no window to redirect");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            tracing::warn!(path, "redirect failed: {e:?}");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        String::new()
    }

    fn redirect(&self, path: &str) {
        tracing::debug!(path, "redirect requested during server render");
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Storage {
    Storage::new(bizdesk_client::LocalStorageBackend)
}

#[cfg(not(feature = "hydrate"))]
fn session_storage() -> Storage {
    Storage::in_memory()
}

#[cfg(feature = "hydrate")]
fn client_config() -> ClientConfig {
    ClientConfig::from_build_env()
}

/// The console server provides its resolved config as context.
#[cfg(not(feature = "hydrate"))]
fn client_config() -> ClientConfig {
    leptos::prelude::use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_env)
}

pub fn build_api_client(toasts: ToastContext) -> ApiClient {
    let config = client_config();
    tracing::debug!(base_url = %config.base_url, "api client ready");

    ApiClient::new(
        config,
        SessionContext::restore(session_storage()),
        Arc::new(ReqwestTransport::new()),
        Arc::new(ToastNotifier(toasts)),
        Arc::new(BrowserNavigator),
    )
}

/// Runs a page task on the browser event loop. Server renders never run page tasks.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(task);

    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
