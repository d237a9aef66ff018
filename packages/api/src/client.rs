//! # Authenticated request client
//!
//! [`AuthClient`] attaches the stored access token to outgoing requests and recovers
//! from an expired token with a single refresh-and-retry cycle:
//!
//! 1. No access token stored: the request is sent unmodified.
//! 2. Otherwise it is sent with `Authorization: Bearer <token>`.
//! 3. A `401` response triggers [`AuthClient::refresh`]. When the refresh succeeds the
//!    request is re-sent once with the new token and that response is returned, even
//!    if it is another `401`. When the refresh fails the original `401` is returned.
//!
//! The refresh completes before the retry is issued; there is never more than one
//! retry per call.
//!
//! ## Refresh failures
//!
//! A refresh that cannot produce a new access token (network error, non-success
//! status, body without `access_token`) clears both stored tokens and fires the
//! sign-out hook, so the UI drops its in-memory user and shows the guest view. A
//! missing refresh token fails without touching the network or the store.

use std::rc::Rc;

use serde::Deserialize;
use store::{KeyValueStore, Tokens};

use crate::endpoints;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

const UNAUTHORIZED: u16 = 401;

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
}

/// HTTP client that manages the bearer token lifecycle.
pub struct AuthClient<T, S> {
    transport: T,
    tokens: Tokens<S>,
    on_signed_out: Option<Rc<dyn Fn()>>,
}

impl<T: Clone, S: Clone> Clone for AuthClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            tokens: self.tokens.clone(),
            on_signed_out: self.on_signed_out.clone(),
        }
    }
}

impl<T: Transport, S: KeyValueStore> AuthClient<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self {
            transport,
            tokens: Tokens::new(store),
            on_signed_out: None,
        }
    }

    /// Called after a failed refresh has cleared the stored tokens.
    pub fn on_signed_out(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_signed_out = Some(Rc::new(hook));
        self
    }

    pub fn tokens(&self) -> &Tokens<S> {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request, authenticating it when a token is stored.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let Some(token) = self.tokens.access() else {
            return self.transport.send(request).await;
        };

        let response = self
            .transport
            .send(request.clone().with_bearer(&token))
            .await?;
        if response.status != UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!("{} returned 401, refreshing access token", request.path);
        if !self.refresh().await {
            return Ok(response);
        }
        let Some(token) = self.tokens.access() else {
            return Ok(response);
        };
        self.transport.send(request.with_bearer(&token)).await
    }

    /// Exchange the stored refresh token for a new access token.
    pub async fn refresh(&self) -> bool {
        let Some(refresh_token) = self.tokens.refresh() else {
            return false;
        };

        match self.exchange(&refresh_token).await {
            Ok(access_token) => {
                self.tokens.set_access(&access_token);
                true
            }
            Err(e) => {
                tracing::warn!("Token refresh failed: {}", e);
                self.sign_out();
                false
            }
        }
    }

    async fn exchange(&self, refresh_token: &str) -> Result<String, ApiError> {
        let request =
            HttpRequest::post_form(endpoints::TOKEN_REFRESH, [("refresh_token", refresh_token)]);
        let response = self.transport.send(request).await?.error_for_status()?;
        let body: RefreshResponse = response.json()?;
        if body.access_token.is_empty() {
            return Err(ApiError::UnexpectedContent(
                "refresh response carried an empty access token".to_string(),
            ));
        }
        Ok(body.access_token)
    }

    /// Forget both tokens and notify the sign-out hook.
    pub fn sign_out(&self) {
        self.tokens.clear();
        if let Some(hook) = &self.on_signed_out {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::{MemoryStore, TokenPair};

    use super::*;
    use crate::testing::ScriptedTransport;

    fn client_with_tokens(
        transport: ScriptedTransport,
        refresh: Option<&str>,
    ) -> AuthClient<ScriptedTransport, MemoryStore> {
        let client = AuthClient::new(transport, MemoryStore::new());
        client.tokens().store_pair(&TokenPair {
            access_token: "expired".to_string(),
            refresh_token: refresh.map(str::to_string),
        });
        client
    }

    #[tokio::test]
    async fn test_no_token_sends_request_unmodified() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(200, "[]"));
        let client = AuthClient::new(transport, MemoryStore::new());

        let response = client.request(HttpRequest::get("/api/books")).await.unwrap();
        assert_eq!(response.status, 200);

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_token_is_attached() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(200, "{}"));
        let client = client_with_tokens(transport, Some("r"));

        client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(
            client.transport().requests()[0].header("Authorization"),
            Some("Bearer expired")
        );
    }

    #[tokio::test]
    async fn test_401_refreshes_and_retries_once() {
        let transport = ScriptedTransport::new()
            .respond(HttpResponse::json_body(401, r#"{"detail":"expired"}"#))
            .respond(HttpResponse::json_body(200, r#"{"access_token":"fresh","token_type":"bearer"}"#))
            .respond(HttpResponse::json_body(200, r#"[{"id":1}]"#));
        let client = client_with_tokens(transport, Some("refresh-1"));

        let response = client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"[{"id":1}]"#);

        let transport = client.transport();
        assert_eq!(transport.calls_to(endpoints::TOKEN_REFRESH), 1);
        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(
            sent[1].encoded_form().as_deref(),
            Some("refresh_token=refresh-1")
        );
        assert_eq!(sent[2].header("Authorization"), Some("Bearer fresh"));

        assert_eq!(client.tokens().access().as_deref(), Some("fresh"));
        assert_eq!(client.tokens().refresh().as_deref(), Some("refresh-1"));
    }

    #[tokio::test]
    async fn test_failed_refresh_returns_original_401_and_clears_tokens() {
        let signed_out = Rc::new(Cell::new(0));
        let counter = signed_out.clone();
        let transport = ScriptedTransport::new()
            .respond(HttpResponse::json_body(401, r#"{"detail":"expired"}"#))
            .respond(HttpResponse::json_body(401, r#"{"detail":"bad refresh token"}"#));
        let client = client_with_tokens(transport, Some("refresh-1"))
            .on_signed_out(move || counter.set(counter.get() + 1));

        let response = client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(response.body, r#"{"detail":"expired"}"#);

        assert!(client.tokens().access().is_none());
        assert!(client.tokens().refresh().is_none());
        assert_eq!(signed_out.get(), 1);
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_retry_that_is_still_401_is_not_retried_again() {
        let transport = ScriptedTransport::new()
            .respond(HttpResponse::json_body(401, "{}"))
            .respond(HttpResponse::json_body(200, r#"{"access_token":"fresh"}"#))
            .respond(HttpResponse::json_body(401, r#"{"detail":"still no"}"#));
        let client = client_with_tokens(transport, Some("r"));

        let response = client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(client.transport().requests().len(), 3);
        assert_eq!(client.transport().calls_to(endpoints::TOKEN_REFRESH), 1);
    }

    #[tokio::test]
    async fn test_missing_refresh_token_skips_network() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(401, "{}"));
        let client = client_with_tokens(transport, None);

        let response = client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(client.transport().calls_to(endpoints::TOKEN_REFRESH), 0);
        assert_eq!(client.tokens().access().as_deref(), Some("expired"));
    }

    #[tokio::test]
    async fn test_refresh_network_error_clears_tokens() {
        let transport = ScriptedTransport::new().fail("connection refused");
        let client = client_with_tokens(transport, Some("r"));

        assert!(!client.refresh().await);
        assert!(!client.tokens().is_present());
        assert!(client.tokens().refresh().is_none());
    }

    #[tokio::test]
    async fn test_refresh_malformed_body_clears_tokens() {
        let transport =
            ScriptedTransport::new().respond(HttpResponse::json_body(200, r#"{"token":"x"}"#));
        let client = client_with_tokens(transport, Some("r"));

        assert!(!client.refresh().await);
        assert!(!client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_non_401_errors_are_passed_through() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(403, "{}"));
        let client = client_with_tokens(transport, Some("r"));

        let response = client.request(HttpRequest::get("/api/orders")).await.unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(client.transport().calls_to(endpoints::TOKEN_REFRESH), 0);
        assert!(client.tokens().is_present());
    }
}
