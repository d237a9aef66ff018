//! # Client configuration — `bookstore.toml`
//!
//! Defines the TOML document the web client is built with (filename:
//! [`ClientConfig::filename`] = `"bookstore.toml"`). It tells the client where the
//! REST API lives, how long to wait before navigating away after a successful
//! submission, and how prices are labelled.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""              # empty = same origin as the page
//!
//! [checkout]
//! redirect_delay_ms = 1500
//!
//! [display]
//! currency = "лв."
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config, parsed from TOML. |
//! | [`ApiConfig`] | Base URL prepended to every endpoint path. |
//! | [`CheckoutConfig`] | Delay before redirecting after an order or reloading after a review. |
//! | [`DisplayConfig`] | Currency suffix used when formatting prices. |
//!
//! Every section defaults, so a missing or partial file equals the default configuration.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `bookstore.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// REST API location.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin of the API, without trailing slash. Empty means the page's origin.
    #[serde(default)]
    pub base_url: String,
}

/// Post-submission behaviour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u32,
}

fn default_redirect_delay() -> u32 {
    1500
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

/// Price presentation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "лв.".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bookstore.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
