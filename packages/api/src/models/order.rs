//! Order payloads and responses.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

/// Delivery address, sent as a JSON object in the `shipping_address` form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// Checkout form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: ShippingAddress,
}

/// Body returned by both order endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: u64,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub message: Option<String>,
    /// Only guest orders get a reference.
    #[serde(default)]
    pub order_reference: Option<String>,
}

/// Entry of `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: u64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(default)]
    pub items_count: u32,
}
