use std::{fmt, sync::Arc};

use leptos::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("No window to show the notification in")]
    Unavailable,
    #[error("Notification was rejected by the host: {0}")]
    Rejected(String),
}

/// A blocking, modal notice. `notify` returns once the user has dismissed it.
pub trait Notify: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// `window.alert` in the browser. Without a window (server render, native
/// tests) the message is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notify for BrowserAlert {
    #[cfg(feature = "hydrate")]
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        web_sys::window()
            .ok_or(NotifyError::Unavailable)?
            .alert_with_message(message)
            .map_err(|e| NotifyError::Rejected(format!("{e:?}")))
    }

    #[cfg(not(feature = "hydrate"))]
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        log::info!("alert: {message}");
        Ok(())
    }
}

#[derive(Clone)]
pub struct Notifier(Arc<dyn Notify>);

impl Notifier {
    pub fn new(inner: impl Notify + 'static) -> Self {
        Self(Arc::new(inner))
    }

    pub fn notify(&self, message: &str) -> Result<(), NotifyError> {
        self.0.notify(message)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(BrowserAlert)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Notifier")
    }
}

pub fn provide_notifier(notifier: Notifier) {
    provide_context(notifier);
}

/// The notifier provided by an ancestor, or the browser alert.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}
