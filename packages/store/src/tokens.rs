//! Access/refresh token pair kept in the key-value store.
//!
//! The two tokens are stored as independent entries. Holding an access token says
//! nothing about whether the server still accepts it; that is only learned by making
//! a request.

use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Tokens issued by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Typed view over the token entries of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Tokens<S> {
    store: S,
}

impl<S: KeyValueStore> Tokens<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Overwrite the access token, leaving the refresh token untouched.
    pub fn set_access(&self, token: &str) {
        self.store.set(ACCESS_TOKEN_KEY, token);
    }

    /// Store a freshly issued pair. A pair without a refresh token keeps the old one.
    pub fn store_pair(&self, pair: &TokenPair) {
        self.store.set(ACCESS_TOKEN_KEY, &pair.access_token);
        if let Some(refresh) = &pair.refresh_token {
            self.store.set(REFRESH_TOKEN_KEY, refresh);
        }
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    /// Whether an access token is stored (not whether it is valid).
    pub fn is_present(&self) -> bool {
        self.access().is_some()
    }
}
