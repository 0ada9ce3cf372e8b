use tracing::{info, warn};

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Surface for transient success/error notifications (toasts in the browser).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes notifications to the log. Used where no toast surface exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = "success", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(notification = "error", "{message}");
    }
}
