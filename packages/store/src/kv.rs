//! # Key-value persistence seam
//!
//! Everything the client keeps between page loads lives under three string keys in
//! the browser's local storage: the two halves of the token pair and the serialised
//! cart. [`KeyValueStore`] is the minimal contract over that storage so the cart and
//! token logic can run against [`crate::MemoryStore`] in tests and on native targets,
//! and against [`crate::LocalStore`] in the browser.
//!
//! No error conditions are modelled. A backend that fails to read reports the value
//! as absent, and a backend that fails to write drops the write. Callers already have
//! to cope with a missing value (first visit, cleared storage), so a storage failure
//! degrades to the same empty/guest state.

/// Key holding the bearer token attached to authenticated requests.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Key holding the token exchanged for a fresh access token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key holding the JSON array of cart items.
pub const CART_KEY: &str = "cart";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
