//! Platform glue shared by every view.
//!
//! Returns the [`store::KeyValueStore`] and the API client appropriate for the build:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native** (tests, tooling): an in-memory [`store::MemoryStore`]
//!
//! Also wraps the few browser calls views need outside the router: a hard
//! navigation, a page reload, and a timer.

use api::{AuthClient, ReqwestTransport};
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// API client used by the UI.
pub type Client = AuthClient<ReqwestTransport, PlatformStore>;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_store() -> PlatformStore {
    store::LocalStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_store() -> PlatformStore {
    thread_local! {
        static STORE: store::MemoryStore = store::MemoryStore::new();
    }
    STORE.with(Clone::clone)
}

/// Build a client for the configured API origin.
///
/// An empty `base_url` resolves to the page's own origin, since `reqwest` needs an
/// absolute URL even when running on top of `fetch`.
pub fn make_client(config: &ClientConfig, on_signed_out: impl Fn() + 'static) -> Client {
    let base_url = if config.api.base_url.is_empty() {
        page_origin()
    } else {
        config.api.base_url.clone()
    };
    AuthClient::new(ReqwestTransport::new(base_url), make_store()).on_signed_out(on_signed_out)
}

fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Leave the single-page app and load `path` from the server.
pub fn hard_navigate(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Navigation to {} requested outside the browser", path);
    }
}

pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Wait `millis` milliseconds. Resolves immediately outside the browser.
pub async fn delay(millis: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(millis).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = millis;
}
