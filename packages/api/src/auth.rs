//! Password login and second-factor verification.
//!
//! `POST /api/token` answers either with a token pair or, for accounts with
//! two-factor authentication, with a short-lived `temporary_token` that has to be
//! exchanged together with a TOTP code at `POST /api/token/verify-2fa`.

use serde::Deserialize;
use store::{KeyValueStore, TokenPair};

use crate::client::AuthClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::transport::{HttpRequest, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    TwoFactorRequired {
        temporary_token: String,
        detail: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoginResponse {
    Tokens(TokenPair),
    TwoFactor {
        detail: String,
        temporary_token: String,
    },
}

pub async fn login<T, S>(
    client: &AuthClient<T, S>,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let request = HttpRequest::post_form(
        endpoints::TOKEN,
        [("username", username), ("password", password)],
    );
    let response = client.transport().send(request).await?.error_for_status()?;

    match response.json::<LoginResponse>()? {
        LoginResponse::Tokens(pair) => {
            client.tokens().store_pair(&pair);
            Ok(LoginOutcome::SignedIn)
        }
        LoginResponse::TwoFactor {
            detail,
            temporary_token,
        } => Ok(LoginOutcome::TwoFactorRequired {
            temporary_token,
            detail,
        }),
    }
}

pub async fn verify_two_factor<T, S>(
    client: &AuthClient<T, S>,
    temporary_token: &str,
    code: &str,
) -> Result<(), ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let request = HttpRequest::post_form(
        endpoints::TOKEN_VERIFY_2FA,
        [("token", temporary_token), ("totp_code", code.trim())],
    );
    let response = client.transport().send(request).await?.error_for_status()?;
    let pair: TokenPair = response.json()?;
    client.tokens().store_pair(&pair);
    Ok(())
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::transport::HttpResponse;

    #[tokio::test]
    async fn test_login_stores_tokens() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            200,
            r#"{"access_token":"a","refresh_token":"r","token_type":"bearer"}"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        let outcome = login(&client, "ivan", "secret").await.unwrap();
        assert_eq!(outcome, LoginOutcome::SignedIn);
        assert_eq!(client.tokens().access().as_deref(), Some("a"));
        assert_eq!(client.tokens().refresh().as_deref(), Some("r"));

        let sent = client.transport().requests();
        assert_eq!(sent[0].path, endpoints::TOKEN);
        assert_eq!(
            sent[0].encoded_form().as_deref(),
            Some("username=ivan&password=secret")
        );
    }

    #[tokio::test]
    async fn test_login_two_factor_challenge() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            200,
            r#"{"detail":"2FA required","temporary_token":"tmp"}"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        let outcome = login(&client, "ivan", "secret").await.unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::TwoFactorRequired {
                temporary_token: "tmp".to_string(),
                detail: "2FA required".to_string(),
            }
        );
        assert!(!client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            401,
            r#"{"detail":"Incorrect username or password"}"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        let err = login(&client, "ivan", "wrong").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Incorrect username or password");
        assert!(!client.tokens().is_present());
    }

    #[tokio::test]
    async fn test_verify_two_factor_stores_tokens() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            200,
            r#"{"access_token":"a2","refresh_token":"r2","token_type":"bearer"}"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        verify_two_factor(&client, "tmp", " 123456 ").await.unwrap();
        assert_eq!(client.tokens().access().as_deref(), Some("a2"));
        assert_eq!(
            client.transport().requests()[0].encoded_form().as_deref(),
            Some("token=tmp&totp_code=123456")
        );
    }
}
