use api::list_orders;
use dioxus::prelude::*;
use ui::{format_date, format_price, use_client, use_config, use_session};

use crate::Route;

/// Order history of the signed-in user.
#[component]
pub fn Orders() -> Element {
    let client = use_client();
    let session = use_session();
    let currency = use_config().display.currency;

    let orders = use_resource(move || {
        let client = client.clone();
        async move {
            // Wait until the session is known so guests never hit the endpoint.
            let state = session();
            if state.loading || !state.is_signed_in() {
                return None;
            }
            Some(
                list_orders(&client)
                    .await
                    .map_err(|e| e.user_message("Could not load your orders")),
            )
        }
    });

    let state = session();
    if !state.loading && !state.is_signed_in() {
        return rsx! {
            div {
                class: "alert alert-info",
                "Sign in to see your orders. "
                Link { to: Route::Login {}, "Sign in" }
            }
        };
    }

    let body = match orders.cloned().flatten() {
        None => rsx! {
            p { class: "loading", "Loading orders..." }
        },
        Some(Err(message)) => rsx! {
            div { class: "alert alert-error", "{message}" }
        },
        Some(Ok(orders)) if orders.is_empty() => rsx! {
            p { class: "empty-state", "You have no orders yet." }
        },
        Some(Ok(orders)) => rsx! {
            table {
                class: "orders-table",
                thead {
                    tr {
                        th { "Order" }
                        th { "Placed" }
                        th { "Items" }
                        th { "Total" }
                        th { "Status" }
                    }
                }
                tbody {
                    for order in orders {
                        tr {
                            key: "{order.id}",
                            td { "#{order.id}" }
                            td { {format_date(&order.created_at)} }
                            td { "{order.items_count}" }
                            td { {format_price(order.total_price, &currency)} }
                            td { class: "order-status", {order.status.label()} }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h1 { "My orders" }
        {body}
    }
}
