//! Thin wrappers over the browser APIs the dashboard uses.
//!
//! Native builds fall back to logging so components stay testable off wasm32.

use admin_core::Session;
#[cfg(target_arch = "wasm32")]
use admin_core::SessionStore;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            tracing::warn!("alert failed: {message}");
        }
        return;
    }

    tracing::warn!("{message}");
}

/// Ask the admin for a line of text. `None` when dismissed.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.prompt_with_message(message).ok().flatten())
            .filter(|s| !s.trim().is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("prompt unavailable natively: {message}");
        None
    }
}

/// Wait `ms` milliseconds without blocking the UI.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// [`SessionStore`] over `window.localStorage`.
///
/// Values are stored as plain strings, not JSON.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!("Failed to persist {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Open the admin session persisted on this target.
pub fn restore_session() -> Session {
    #[cfg(target_arch = "wasm32")]
    let session = Session::new(BrowserStore);

    #[cfg(not(target_arch = "wasm32"))]
    let session = Session::in_memory();

    session
}
