//! Fakes for the client's seams, shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bizdesk_types::User;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::navigate::Navigator;
use crate::notify::Notifier;
use crate::request::PreparedRequest;
use crate::session::SessionContext;
use crate::storage::Storage;
use crate::transport::{RawResponse, Transport, TransportError};

pub const TEST_BASE_URL: &str = "http://api.test/api/v1";

pub fn sample_user() -> User {
    User {
        id: 4,
        full_name: "Nimal Perera".into(),
        email: "nimal@example.com".into(),
        mobile_number: "0712345678".into(),
        business_id: 9,
        created_at: "2025-01-02T10:00:00Z".into(),
        updated_at: "2025-01-02T10:00:00Z".into(),
        business: None,
    }
}

/// Replays queued results in order and records what was sent.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl ScriptedTransport {
    pub fn push(&self, result: Result<RawResponse, TransportError>) {
        self.responses.lock().expect("lock").push_back(result);
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.lock().expect("lock").clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().expect("lock").push(request);
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".into())))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Toast {
    Success(String),
    Error(String),
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push(Toast::Success(message.into()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push(Toast::Error(message.into()));
    }
}

#[derive(Clone)]
pub struct RecordingNavigator {
    path: Arc<Mutex<String>>,
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: Arc::new(Mutex::new(path.into())),
            redirects: Arc::default(),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().expect("lock").clone()
    }

    fn redirect(&self, path: &str) {
        *self.path.lock().expect("lock") = path.into();
        self.redirects.lock().expect("lock").push(path.into());
    }
}

pub fn client_with(
    transport: ScriptedTransport,
    navigator: RecordingNavigator,
) -> (ApiClient, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let client = ApiClient::new(
        ClientConfig::new(TEST_BASE_URL),
        SessionContext::new(Storage::in_memory()),
        Arc::new(transport),
        Arc::new(notifier.clone()),
        Arc::new(navigator),
    );
    (client, notifier)
}

/// A client wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub client: ApiClient,
    pub transport: ScriptedTransport,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
}

impl Harness {
    pub fn new(currentPath: &str) -> Self {
        let transport = ScriptedTransport::default();
        let navigator = RecordingNavigator::at(currentPath);
        let (client, notifier) = client_with(transport.clone(), navigator.clone());
        Self {
            client,
            transport,
            notifier,
            navigator,
        }
    }
}
