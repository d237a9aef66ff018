//! # HTTP transport seam
//!
//! [`Transport`] is the single point where requests leave the client. The real
//! implementation, [`ReqwestTransport`], uses `reqwest` (which compiles to the
//! browser's `fetch` on `wasm32`). Tests substitute a scripted transport so the
//! token refresh and submission logic can be exercised without a server.
//!
//! Requests carry a path relative to the API origin and, optionally, a
//! form-encoded body. Every endpoint of the bookstore API accepts
//! `application/x-www-form-urlencoded` input and answers with JSON.

use std::future::Future;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// An outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: Vec::new(),
            form: None,
        }
    }

    pub fn post_form<K, V>(path: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            method: Method::POST,
            path: path.into(),
            headers: Vec::new(),
            form: Some(
                fields
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Replace any existing `Authorization` header with a bearer token.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION.as_str()));
        self.headers
            .push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The form body, url-encoded.
    pub fn encoded_form(&self) -> Option<String> {
        self.form.as_ref().map(|fields| {
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields.iter())
                .finish()
        })
    }
}

/// A fully buffered response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl HttpResponse {
    pub fn json_body(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The `detail` field of an error body, when the server sent one.
    pub fn error_detail(&self) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(&self.body).ok()?;
        match body.detail? {
            serde_json::Value::String(detail) => Some(detail),
            other => Some(other.to_string()),
        }
    }

    /// Convert a non-success response into [`ApiError::Status`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                detail: self.error_detail(),
            })
        }
    }
}

/// Something that can deliver an [`HttpRequest`].
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// `reqwest`-backed transport rooted at an API origin.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let body = request.encoded_form();

        let mut builder = self.client.request(request.method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encoding() {
        let request = HttpRequest::post_form(
            "/api/token/refresh",
            [("refresh_token", "a b&c=d")],
        );
        assert_eq!(
            request.encoded_form().as_deref(),
            Some("refresh_token=a+b%26c%3Dd")
        );
    }

    #[test]
    fn test_with_bearer_replaces_existing_header() {
        let request = HttpRequest::get("/api/users/me")
            .with_bearer("old")
            .with_bearer("new");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("authorization"), Some("Bearer new"));
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut response = HttpResponse::json_body(200, "{}");
        assert!(response.is_json());

        response.content_type = Some("application/json; charset=utf-8".to_string());
        assert!(response.is_json());

        response.content_type = Some("text/html".to_string());
        assert!(!response.is_json());

        response.content_type = None;
        assert!(!response.is_json());
    }

    #[test]
    fn test_error_detail() {
        let response = HttpResponse::json_body(400, r#"{"detail":"Not enough stock"}"#);
        assert_eq!(response.error_detail().as_deref(), Some("Not enough stock"));

        let response = HttpResponse::json_body(500, "<html>oops</html>");
        assert!(response.error_detail().is_none());

        match HttpResponse::json_body(404, r#"{"detail":"Book not found"}"#).error_for_status() {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail.as_deref(), Some("Book not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
