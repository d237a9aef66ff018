//! Cart page: the cart table, clearing behind a confirmation, and checkout.

use api::models::ShippingAddress;
use api::{submit_order, OrderForm};
use dioxus::prelude::*;
use store::Notice;
use ui::{
    delay, notify, use_cart, use_client, use_config, use_session, use_toasts, ConfirmDialog,
    CartView,
};

use crate::Route;

#[component]
pub fn CartPage() -> Element {
    let mut cart = use_cart();
    let mut toasts = use_toasts();
    let mut confirm_clear = use_signal(|| false);
    let mut show_checkout = use_signal(|| false);

    rsx! {
        h1 { "Shopping cart" }

        CartView {
            on_checkout: move |_| show_checkout.set(true),
            on_clear: move |_| confirm_clear.set(true),
        }

        if confirm_clear() {
            ConfirmDialog {
                title: "Clear cart",
                message: "Remove every item from your cart?",
                confirm_label: "Clear",
                on_result: move |confirmed: bool| {
                    confirm_clear.set(false);
                    if confirmed {
                        let notice = cart.write().clear();
                        notify(&mut toasts, notice);
                    }
                },
            }
        }

        if show_checkout() {
            CheckoutForm {}
        }
    }
}

#[component]
fn CheckoutForm() -> Element {
    let client = use_client();
    let config = use_config();
    let session = use_session();
    let mut cart = use_cart();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let prefill = session().user;
    let mut full_name = use_signal(|| {
        prefill
            .as_ref()
            .and_then(|user| user.full_name.clone())
            .unwrap_or_default()
    });
    let mut email = use_signal(|| {
        prefill
            .as_ref()
            .and_then(|user| user.email.clone())
            .unwrap_or_default()
    });
    let mut phone = use_signal(|| {
        prefill
            .as_ref()
            .and_then(|user| user.phone.clone())
            .unwrap_or_default()
    });
    let mut street = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let client = client.clone();
        let redirect_delay = config.checkout.redirect_delay_ms;
        async move {
            let signed_in = session().is_signed_in();
            let form = OrderForm {
                full_name: full_name(),
                email: email(),
                phone: phone(),
                shipping_address: ShippingAddress {
                    street: street(),
                    city: city(),
                    postal_code: postal_code(),
                },
            };
            let lines = cart.read().cart().clone();

            submitting.set(true);
            match submit_order(&client, &lines, &form, signed_in).await {
                Ok(receipt) => {
                    let cleared = cart.write().clear();
                    notify(&mut toasts, cleared);
                    let message = receipt
                        .message
                        .unwrap_or_else(|| format!("Order #{} was placed.", receipt.id));
                    notify(&mut toasts, Notice::success("Order placed", message));
                    delay(redirect_delay).await;
                    if signed_in {
                        nav.push(Route::Orders {});
                    } else {
                        nav.push(Route::Home {});
                    }
                }
                Err(e) => {
                    tracing::warn!("Order submission failed: {}", e);
                    notify(&mut toasts, e.notice("Order failed", "Could not place the order"));
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        form {
            class: "checkout-form",
            onsubmit: onsubmit,
            h2 { "Delivery details" }

            label { "Full name" }
            input {
                required: true,
                value: "{full_name}",
                oninput: move |evt| full_name.set(evt.value()),
            }
            label { "Email" }
            input {
                r#type: "email",
                required: true,
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            label { "Phone" }
            input {
                r#type: "tel",
                required: true,
                value: "{phone}",
                oninput: move |evt| phone.set(evt.value()),
            }
            label { "Street" }
            input {
                required: true,
                value: "{street}",
                oninput: move |evt| street.set(evt.value()),
            }
            label { "City" }
            input {
                required: true,
                value: "{city}",
                oninput: move |evt| city.set(evt.value()),
            }
            label { "Postal code" }
            input {
                required: true,
                value: "{postal_code}",
                oninput: move |evt| postal_code.set(evt.value()),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Placing order..." } else { "Place order" }
            }
        }
    }
}
