//! Cart context and the components that mutate it.

use dioxus::prelude::*;
use store::CartManager;

use crate::icons::FaCartShopping;
use crate::platform::{make_store, PlatformStore};
use crate::toast::{notify, use_toasts};
use crate::Icon;

pub type CartSignal = Signal<CartManager<PlatformStore>>;

pub fn use_cart() -> CartSignal {
    use_context::<CartSignal>()
}

/// Load the persisted cart once and share it with every descendant.
#[component]
pub fn CartProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(CartManager::load(make_store())));

    rsx! {
        {children}
    }
}

/// Item-count indicator shown in the navbar.
#[component]
pub fn CartBadge() -> Element {
    let cart = use_cart();
    let count = cart.read().cart().item_count();

    rsx! {
        span {
            class: "cart-badge",
            Icon { icon: FaCartShopping, width: 16, height: 16 }
            span { class: "cart-count", "{count}" }
        }
    }
}

#[component]
pub fn AddToCartButton(
    book_id: u64,
    title: String,
    price: f64,
    #[props(default = 1)] quantity: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = "btn btn-primary".to_string())] class: String,
) -> Element {
    let mut cart = use_cart();
    let mut toasts = use_toasts();

    let onclick = move |_| {
        let notice = cart.write().add_item(book_id, &title, price, quantity);
        notify(&mut toasts, notice);
    };

    rsx! {
        button {
            class: "{class}",
            disabled,
            onclick: onclick,
            "Add to cart"
        }
    }
}
