/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{BEARER_SCHEME, JSON_CONTENT_TYPE};
use crate::error::AppError;
use crate::model::authorization::AuthorizationManager;
use crate::utils::json::non_blank;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// A fully built request, consumed once by the sender
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL of the endpoint
    pub path: String,
    /// Headers to send, including `Authorization` when a token was supplied
    pub headers: HeaderMap,
    /// UTF-8 JSON body
    pub body: Option<String>,
}

impl OutboundRequest {
    /// Creates a request without headers or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Raw value of the `Authorization` header
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Token carried by a `Bearer` authorization header
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.authorization()?
            .strip_prefix(BEARER_SCHEME)?
            .strip_prefix(' ')
    }

    /// Value of the `Content-Type` header
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}

/// Response of one send, with the body already read
#[derive(Debug, Clone)]
pub struct InboundResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body text, empty when the server sent none
    pub body: String,
}

impl InboundResponse {
    /// Creates a response with no headers
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns its body text
    #[must_use]
    pub fn into_text(self) -> String {
        self.body
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Builds requests from method, URL, JSON content and an optional token
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    authorization: AuthorizationManager,
}

impl RequestBuilder {
    /// Creates a builder using `authorization` to attach tokens
    pub fn new(authorization: AuthorizationManager) -> Self {
        Self { authorization }
    }

    /// Builds a request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Absolute URL of the endpoint
    /// * `content` - JSON text; blank or absent content produces a request without body
    /// * `token` - Bearer token; blank or absent leaves the request unauthenticated
    pub fn build(
        &self,
        method: Method,
        path: &str,
        content: Option<&str>,
        token: Option<&str>,
    ) -> OutboundRequest {
        let mut request = OutboundRequest::new(method, path);

        if let Some(body) = non_blank(content) {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            request.body = Some(body.to_string());
        }

        self.authorization.authorize(request, token)
    }
}
