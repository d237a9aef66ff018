//! # Cart page body
//!
//! [`CartView`] renders straight from the cart context, so every mutation made
//! anywhere in the app re-renders it. An empty cart shows a message and disables the
//! checkout and clear actions. Otherwise each line gets decrement, increment and a
//! direct quantity entry plus its subtotal, followed by the grand-total summary.
//!
//! Quantity entry never goes below one by accident: text that does not parse as a
//! number counts as `1`. Explicit values of zero or less remove the line.

use dioxus::prelude::*;
use store::CartItem;

use crate::cart::use_cart;
use crate::config::use_config;
use crate::format::format_price;
use crate::icons::{FaMinus, FaPlus, FaTrashCan};
use crate::toast::{notify_opt, use_toasts};
use crate::Icon;

const CART_CSS: Asset = asset!("/assets/styling/cart.css");

/// Interpret the quantity input box: the leading integer, so `"2.5"` is 2.
/// Input without leading digits counts as 1.
pub fn parse_quantity_input(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 1;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[component]
pub fn CartView(on_checkout: EventHandler<()>, on_clear: EventHandler<()>) -> Element {
    let cart = use_cart();
    let currency = use_config().display.currency;

    let snapshot = cart.read().cart().clone();
    let empty = snapshot.is_empty();
    let count = snapshot.item_count();
    let total = format_price(snapshot.total(), &currency);

    rsx! {
        document::Stylesheet { href: CART_CSS }

        div {
            class: "cart-view",
            if empty {
                div {
                    class: "cart-empty",
                    p { "Your cart is empty." }
                    Link { to: "/", class: "btn btn-primary", "Browse books" }
                }
            } else {
                table {
                    class: "cart-table",
                    thead {
                        tr {
                            th { "Book" }
                            th { "Price" }
                            th { "Quantity" }
                            th { "Subtotal" }
                            th {}
                        }
                    }
                    tbody {
                        for item in snapshot.items().iter().cloned() {
                            CartRow { key: "{item.book_id}", item, currency: currency.clone() }
                        }
                    }
                }
            }

            div {
                class: "cart-summary",
                div {
                    class: "cart-summary-line",
                    span { "Items" }
                    span { class: "cart-summary-count", "{count}" }
                }
                div {
                    class: "cart-summary-line cart-summary-total",
                    span { "Total" }
                    span { "{total}" }
                }
                div {
                    class: "cart-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: empty,
                        onclick: move |_| on_checkout.call(()),
                        "Checkout"
                    }
                    button {
                        class: "btn btn-outline-danger",
                        disabled: empty,
                        onclick: move |_| on_clear.call(()),
                        "Clear cart"
                    }
                }
            }
        }
    }
}

#[component]
fn CartRow(item: CartItem, currency: String) -> Element {
    let mut cart = use_cart();
    let mut toasts = use_toasts();

    let book_id = item.book_id;
    let quantity = i64::from(item.quantity);
    let price = format_price(item.price, &currency);
    let subtotal = format_price(item.subtotal(), &currency);
    let href = format!("/books/{book_id}");

    let mut set_quantity = move |quantity: i64| {
        let notice = cart.write().update_quantity(book_id, quantity);
        notify_opt(&mut toasts, notice);
    };

    rsx! {
        tr {
            class: "cart-row",
            td {
                Link { to: href, "{item.title}" }
            }
            td { "{price}" }
            td {
                div {
                    class: "quantity-control",
                    button {
                        class: "btn btn-sm",
                        "aria-label": "Decrease quantity",
                        onclick: move |_| set_quantity(quantity - 1),
                        Icon { icon: FaMinus, width: 12, height: 12 }
                    }
                    input {
                        r#type: "number",
                        class: "quantity-input",
                        value: "{quantity}",
                        onchange: move |evt: Event<FormData>| {
                            set_quantity(parse_quantity_input(&evt.value()));
                        },
                    }
                    button {
                        class: "btn btn-sm",
                        "aria-label": "Increase quantity",
                        onclick: move |_| set_quantity(quantity + 1),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                    }
                }
            }
            td { class: "cart-subtotal", "{subtotal}" }
            td {
                button {
                    class: "btn btn-sm btn-outline-danger",
                    "aria-label": "Remove",
                    onclick: move |_| {
                        let notice = cart.write().remove_item(book_id);
                        notify_opt(&mut toasts, notice);
                    },
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_quantity_is_one() {
        assert_eq!(parse_quantity_input(""), 1);
        assert_eq!(parse_quantity_input("abc"), 1);
        assert_eq!(parse_quantity_input("-"), 1);
        assert_eq!(parse_quantity_input(".5"), 1);
    }

    #[test]
    fn test_leading_integer_is_used() {
        assert_eq!(parse_quantity_input("2.5"), 2);
        assert_eq!(parse_quantity_input("3 books"), 3);
        assert_eq!(parse_quantity_input("-1.9"), -1);
        assert_eq!(parse_quantity_input("+7"), 7);
        assert_eq!(parse_quantity_input("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_quantity_is_parsed() {
        assert_eq!(parse_quantity_input(" 4 "), 4);
        assert_eq!(parse_quantity_input("0"), 0);
        assert_eq!(parse_quantity_input("-3"), -3);
    }
}
