//! Paths of the bookstore REST API, relative to the API origin.

pub const CURRENT_USER: &str = "/api/users/me";
pub const TOKEN: &str = "/api/token";
pub const TOKEN_REFRESH: &str = "/api/token/refresh";
pub const TOKEN_VERIFY_2FA: &str = "/api/token/verify-2fa";
pub const BOOKS: &str = "/api/books";
pub const CATEGORIES: &str = "/api/categories";
pub const ORDERS: &str = "/api/orders";
pub const GUEST_ORDERS: &str = "/api/guest-orders";

pub fn book(id: u64) -> String {
    format!("{BOOKS}/{id}")
}

pub fn book_reviews(id: u64) -> String {
    format!("{BOOKS}/{id}/reviews")
}
