//! Error types for calls against the bookstore REST API.

use store::Notice;
use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("You need to be signed in to leave a review")]
    NotSignedIn,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    /// The response was not the JSON document the endpoint promises.
    #[error("unexpected response: {0}")]
    UnexpectedContent(String),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a toast. Server details are passed through as-is.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Toast for a failed action. Input the user can correct is a warning.
    pub fn notice(&self, title: &str, fallback: &str) -> Notice {
        let message = self.user_message(fallback);
        match self {
            ApiError::Validation(_) => Notice::warning(title, message),
            _ => Notice::error(title, message),
        }
    }
}
