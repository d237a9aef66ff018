//! # API crate — bookstore REST client
//!
//! Everything the browser client says to the backend goes through this crate. It has
//! no UI dependencies: requests leave through the [`Transport`] trait and credentials
//! live in a [`store::KeyValueStore`], so every flow below is unit-tested against a
//! scripted transport and an in-memory store.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | Request/response types, the [`Transport`] trait and the `reqwest` implementation |
//! | [`client`] | [`AuthClient`]: bearer token attachment and the single refresh-and-retry cycle |
//! | [`session`] | Current-user loading, logout, and the derived [`Visibility`] of gated elements |
//! | [`auth`] | Password login and two-factor verification |
//! | [`catalog`] | Book list, book detail and category reads |
//! | [`orders`] | Checkout for signed-in users and guests, order history |
//! | [`reviews`] | Posting a review on a book |
//! | [`search`] | Rebuilding the search page query string from the filter controls |
//! | [`models`] | Server-supplied records (`UserInfo`, `Book`, `OrderReceipt`, …) |
//!
//! ## Errors
//!
//! [`ApiError`] separates transport failures, non-success statuses (carrying the
//! server's `detail` message), unexpected bodies, and validation failures caught
//! before any request is made ([`ValidationError`]).

pub mod auth;
pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod orders;
pub mod reviews;
pub mod search;
pub mod session;
pub mod transport;

pub use auth::{login, verify_two_factor, LoginOutcome};
pub use catalog::{get_book, list_books, list_categories};
pub use client::AuthClient;
pub use error::{ApiError, ValidationError};
pub use models::{Book, BookDetail, Category, OrderForm, OrderReceipt, OrderSummary, Role, UserInfo};
pub use orders::{list_orders, submit_order};
pub use reviews::{submit_review, ReviewForm, ReviewReceipt};
pub use search::{keyword_path, SearchFilters, SortOrder};
pub use session::{load_session, logout, SessionState, Visibility};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::error::ApiError;
    use crate::transport::{HttpRequest, HttpResponse, Transport};

    /// Transport that replays queued responses and records what was sent.
    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, response: HttpResponse) -> Self {
            self.responses.borrow_mut().push_back(Ok(response));
            self
        }

        pub fn fail(self, reason: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Network(reason.to_string())));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn calls_to(&self, path: &str) -> usize {
            self.requests
                .borrow()
                .iter()
                .filter(|request| request.path == path)
                .count()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
        }
    }
}
