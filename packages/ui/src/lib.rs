//! This crate contains all shared UI for the bookstore client.
//!
//! State lives in context signals owned by the providers below; mount them once
//! around the router:
//!
//! ```ignore
//! ConfigProvider { config,
//!     ToastProvider {
//!         SessionProvider {
//!             CartProvider { Router::<Route> {} }
//!         }
//!     }
//! }
//! ```

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod platform;
pub use platform::{delay, hard_navigate, make_client, make_store, reload_page, Client, PlatformStore};

mod config;
pub use config::{use_config, ConfigProvider};

pub mod toast;
pub use toast::{notify, notify_opt, use_toasts, ToastHost, ToastProvider, Toasts};

mod session;
pub use session::{
    use_client, use_session, AuthRequired, GuestOnly, LogoutButton, SessionProvider, StaffOnly,
    UserBadge,
};

mod cart;
pub use cart::{use_cart, AddToCartButton, CartBadge, CartProvider, CartSignal};

mod confirm;
pub use confirm::{ConfirmDialog, ModalOverlay};

pub mod format;
pub use format::{format_date, format_price};

mod book_card;
pub use book_card::{star_slots, BookCard, PriceTag, StarRating, StarSlots, STAR_SLOTS};

mod cart_view;
pub use cart_view::{parse_quantity_input, CartView};

mod navbar;
pub use navbar::Navbar;
