//! Data models for the bookstore API.

mod book;
mod order;
mod user;

pub use book::{Book, BookDetail, Category, Promotion, ReviewInfo};
pub use order::{OrderForm, OrderReceipt, OrderStatus, OrderSummary, ShippingAddress};
pub use user::{Role, UserInfo};
