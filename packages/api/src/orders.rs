//! # Order submission
//!
//! Checkout posts the form fields plus the cart lines to one of two endpoints:
//! `/api/orders` for a signed-in user and `/api/guest-orders` for a guest. An empty
//! cart is rejected before anything is sent.
//!
//! The backend reads `items` and `shipping_address` as JSON documents embedded in
//! the form body, so both are serialised with `serde_json` before encoding.

use store::{Cart, KeyValueStore};

use crate::client::AuthClient;
use crate::endpoints;
use crate::error::{ApiError, ValidationError};
use crate::models::{OrderForm, OrderReceipt, OrderSummary};
use crate::transport::{HttpRequest, Transport};

/// Endpoint an order is posted to.
pub fn order_endpoint(signed_in: bool) -> &'static str {
    if signed_in {
        endpoints::ORDERS
    } else {
        endpoints::GUEST_ORDERS
    }
}

pub async fn submit_order<T, S>(
    client: &AuthClient<T, S>,
    cart: &Cart,
    form: &OrderForm,
    signed_in: bool,
) -> Result<OrderReceipt, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart.into());
    }

    let items = serde_json::to_string(&cart.order_lines())?;
    let shipping_address = serde_json::to_string(&form.shipping_address)?;
    let request = HttpRequest::post_form(
        order_endpoint(signed_in),
        [
            ("full_name", form.full_name.trim().to_string()),
            ("email", form.email.trim().to_string()),
            ("phone", form.phone.trim().to_string()),
            ("shipping_address", shipping_address),
            ("items", items),
        ],
    );

    let receipt: OrderReceipt = client
        .request(request)
        .await?
        .error_for_status()?
        .json()?;
    tracing::info!("Order {} placed", receipt.id);
    Ok(receipt)
}

/// Orders of the signed-in user, newest first as returned by the server.
pub async fn list_orders<T, S>(client: &AuthClient<T, S>) -> Result<Vec<OrderSummary>, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    client
        .request(HttpRequest::get(endpoints::ORDERS))
        .await?
        .error_for_status()?
        .json()
}
