//! # Session state and loading
//!
//! The signed-in user is never persisted. It is derived again on every page load by
//! asking `GET /api/users/me` with the stored access token. [`load_session`] applies a
//! fail-safe policy: a missing token means guest without any request, and any failure
//! of the lookup (non-success status, non-JSON body, network error) clears both tokens
//! and also means guest.
//!
//! [`Visibility`] is what the page toggles from the session: elements for signed-in
//! users, elements for guests, and staff-only elements.

use store::KeyValueStore;

use crate::client::AuthClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::UserInfo;
use crate::transport::{HttpRequest, Transport};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn guest() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_user(self.user.as_ref())
    }
}

/// Which of the three gated element groups are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub authenticated: bool,
    pub guest: bool,
    pub staff: bool,
}

impl Visibility {
    pub fn for_user(user: Option<&UserInfo>) -> Self {
        match user {
            Some(user) => Self {
                authenticated: true,
                guest: false,
                staff: user.role.is_staff(),
            },
            None => Self {
                authenticated: false,
                guest: true,
                staff: false,
            },
        }
    }
}

/// Resolve the current user from the stored access token.
pub async fn load_session<T, S>(client: &AuthClient<T, S>) -> Option<UserInfo>
where
    T: Transport,
    S: KeyValueStore,
{
    if !client.tokens().is_present() {
        return None;
    }

    match fetch_current_user(client).await {
        Ok(user) => {
            tracing::debug!("Signed in as {}", user.username);
            Some(user)
        }
        Err(e) => {
            tracing::warn!("Could not load current user, continuing as guest: {}", e);
            client.tokens().clear();
            None
        }
    }
}

async fn fetch_current_user<T, S>(client: &AuthClient<T, S>) -> Result<UserInfo, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let response = client
        .request(HttpRequest::get(endpoints::CURRENT_USER))
        .await?
        .error_for_status()?;

    if !response.is_json() {
        return Err(ApiError::UnexpectedContent(format!(
            "expected JSON, got {}",
            response.content_type.as_deref().unwrap_or("no content type")
        )));
    }

    response.json()
}

/// Forget the stored tokens. Safe to call when already signed out.
pub fn logout<T, S>(client: &AuthClient<T, S>)
where
    T: Transport,
    S: KeyValueStore,
{
    client.tokens().clear();
}

#[cfg(test)]
mod tests {
    use store::{MemoryStore, TokenPair};

    use super::*;
    use crate::models::Role;
    use crate::testing::ScriptedTransport;
    use crate::transport::HttpResponse;

    const ME: &str = r#"{"id":1,"username":"ivan","role":"admin","email":"ivan@example.com"}"#;

    fn signed_in_client(transport: ScriptedTransport) -> AuthClient<ScriptedTransport, MemoryStore> {
        let client = AuthClient::new(transport, MemoryStore::new());
        client.tokens().store_pair(&TokenPair {
            access_token: "a".to_string(),
            refresh_token: Some("r".to_string()),
        });
        client
    }

    #[tokio::test]
    async fn test_no_token_is_guest_without_request() {
        let client = AuthClient::new(ScriptedTransport::new(), MemoryStore::new());
        assert!(load_session(&client).await.is_none());
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_loads_user() {
        let client =
            signed_in_client(ScriptedTransport::new().respond(HttpResponse::json_body(200, ME)));

        let user = load_session(&client).await.unwrap();
        assert_eq!(user.username, "ivan");
        assert_eq!(user.role, Role::Admin);
        assert!(client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_wrong_content_type_clears_tokens() {
        let response = HttpResponse {
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: "<html></html>".to_string(),
        };
        let client = signed_in_client(ScriptedTransport::new().respond(response));

        assert!(load_session(&client).await.is_none());
        assert!(!client.tokens().is_present());
        assert!(client.tokens().refresh().is_none());
    }

    #[tokio::test]
    async fn test_server_error_clears_tokens() {
        let client = signed_in_client(
            ScriptedTransport::new().respond(HttpResponse::json_body(500, r#"{"detail":"boom"}"#)),
        );
        assert!(load_session(&client).await.is_none());
        assert!(!client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_network_error_clears_tokens() {
        let client = signed_in_client(ScriptedTransport::new().fail("offline"));
        assert!(load_session(&client).await.is_none());
        assert!(!client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_during_load() {
        let transport = ScriptedTransport::new()
            .respond(HttpResponse::json_body(401, "{}"))
            .respond(HttpResponse::json_body(200, r#"{"access_token":"b"}"#))
            .respond(HttpResponse::json_body(200, ME));
        let client = signed_in_client(transport);

        assert!(load_session(&client).await.is_some());
        assert_eq!(client.tokens().access().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let client = signed_in_client(ScriptedTransport::new());
        logout(&client);
        logout(&client);
        assert!(!client.tokens().is_present());
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_visibility() {
        let guest = SessionState::guest().visibility();
        assert_eq!(
            guest,
            Visibility {
                authenticated: false,
                guest: true,
                staff: false
            }
        );

        let mut user: UserInfo = serde_json::from_str(ME).unwrap();
        let admin = SessionState::signed_in(user.clone()).visibility();
        assert!(admin.authenticated && !admin.guest && admin.staff);

        user.role = Role::User;
        let customer = SessionState::signed_in(user).visibility();
        assert!(customer.authenticated && !customer.guest && !customer.staff);
    }
}
