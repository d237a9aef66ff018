use dioxus::prelude::*;

use store::ClientConfig;
use ui::{CartProvider, ConfigProvider, Navbar, SessionProvider, ToastHost, ToastProvider};
use views::{BookPage, CartPage, Home, Login, Orders, Search};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/search?:..query")]
        Search { query: String },
        #[route("/books/:id")]
        BookPage { id: u64 },
        #[route("/cart")]
        CartPage {},
        #[route("/orders")]
        Orders {},
        #[route("/login")]
        Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../assets/bookstore.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Falling back to the default {}: {}", ClientConfig::filename(), e);
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider { config,
            ToastProvider {
                SessionProvider {
                    CartProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Navbar and toasts around every page.
#[component]
fn Layout() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        ToastHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.checkout.redirect_delay_ms, 1500);
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_routes_render_paths() {
        assert_eq!(Route::BookPage { id: 7 }.to_string(), "/books/7");
        assert_eq!(Route::CartPage {}.to_string(), "/cart");
    }
}
