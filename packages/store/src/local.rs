//! # Local storage store — browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It reads and writes the window's `localStorage` through [`web_sys::Storage`].
//!
//! ## Handle management
//!
//! `LocalStore` is a zero-size struct that looks the storage object up on every call.
//! `web_sys::Storage` is not `Send`, and keeping no handle lets the store be copied
//! freely into Dioxus signals and event handlers.
//!
//! ## Error handling
//!
//! Every failure (no window, storage disabled by privacy settings, quota exceeded) is
//! swallowed: reads return `None`, writes do nothing. The client treats that exactly
//! like a first visit.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to local storage", key);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
