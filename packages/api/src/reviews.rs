//! Review submission. Only signed-in users may post; the check happens before
//! any request is built.

use serde::{Deserialize, Serialize};
use store::KeyValueStore;

use crate::client::AuthClient;
use crate::endpoints;
use crate::error::{ApiError, ValidationError};
use crate::transport::{HttpRequest, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    /// One to five stars.
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: 5,
            comment: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewReceipt {
    pub id: u64,
    pub book_id: u64,
    pub rating: u8,
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn submit_review<T, S>(
    client: &AuthClient<T, S>,
    signed_in: bool,
    book_id: u64,
    form: &ReviewForm,
) -> Result<ReviewReceipt, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    if !signed_in {
        return Err(ValidationError::NotSignedIn.into());
    }

    let request = HttpRequest::post_form(
        endpoints::book_reviews(book_id),
        [
            ("rating", form.rating.clamp(1, 5).to_string()),
            ("comment", form.comment.trim().to_string()),
        ],
    );
    client
        .request(request)
        .await?
        .error_for_status()?
        .json()
}
