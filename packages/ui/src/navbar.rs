use dioxus::prelude::*;

use crate::cart::CartBadge;
use crate::icons::FaBookOpen;
use crate::session::{AuthRequired, GuestOnly, LogoutButton, StaffOnly, UserBadge};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar: brand, the auth/guest/staff gated links, the user badge and the cart.
/// `children` are extra links inserted after the catalogue links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            Link {
                to: "/",
                class: "navbar-brand",
                Icon { icon: FaBookOpen, width: 18, height: 18 }
                span { "Bookstore" }
            }
            div {
                class: "navbar-links",
                Link { to: "/", "Books" }
                Link { to: "/search", "Search" }
                {children}
                AuthRequired {
                    Link { to: "/orders", "My orders" }
                }
                StaffOnly {
                    a { href: "/admin", class: "navbar-staff", "Admin" }
                }
            }
            div {
                class: "navbar-account",
                UserBadge {}
                GuestOnly {
                    Link { to: "/login", class: "btn btn-sm btn-outline-primary", "Sign in" }
                }
                AuthRequired {
                    LogoutButton { class: "btn btn-sm btn-outline-secondary" }
                }
                Link {
                    to: "/cart",
                    class: "navbar-cart",
                    CartBadge {}
                }
            }
        }
    }
}
