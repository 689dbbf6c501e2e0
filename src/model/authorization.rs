/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authorization header handling
//!
//! [`AuthorizationHeaderHandler`] decides how a token ends up on a request;
//! [`AuthorizationManager`] is what the request builder talks to and simply
//! delegates to whichever handler it was given.

use crate::constants::BEARER_SCHEME;
use crate::model::http::OutboundRequest;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::warn;

/// Writes or clears the authorization header of an outgoing request
pub trait AuthorizationHeaderHandler: Debug + Send + Sync {
    /// Returns the request with the header set for `token`, or removed when
    /// `token` is absent or blank
    fn apply(&self, request: OutboundRequest, token: Option<&str>) -> OutboundRequest;
}

/// `Authorization: Bearer <token>` writer
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerHeaderHandler;

impl AuthorizationHeaderHandler for BearerHeaderHandler {
    fn apply(&self, mut request: OutboundRequest, token: Option<&str>) -> OutboundRequest {
        let token = token.map(str::trim).filter(|t| !t.is_empty());

        match token.map(bearer_value) {
            Some(Ok(value)) => {
                request.headers.insert(AUTHORIZATION, value);
            }
            Some(Err(())) => {
                warn!(
                    "Token is not a valid header value, sending {} {} without authorization",
                    request.method, request.path
                );
                request.headers.remove(AUTHORIZATION);
            }
            None => {
                request.headers.remove(AUTHORIZATION);
            }
        }
        request
    }
}

fn bearer_value(token: &str) -> Result<HeaderValue, ()> {
    let mut value = HeaderValue::from_str(&format!("{BEARER_SCHEME} {token}")).map_err(|_| ())?;
    value.set_sensitive(true);
    Ok(value)
}

/// Entry point used by the request builder to attach credentials
#[derive(Debug, Clone)]
pub struct AuthorizationManager {
    handler: Arc<dyn AuthorizationHeaderHandler>,
}

impl AuthorizationManager {
    /// Creates a manager delegating to `handler`
    pub fn new(handler: Arc<dyn AuthorizationHeaderHandler>) -> Self {
        Self { handler }
    }

    /// Adds (or removes) the authorization header on `request`
    pub fn authorize(&self, request: OutboundRequest, token: Option<&str>) -> OutboundRequest {
        self.handler.apply(request, token)
    }
}

impl Default for AuthorizationManager {
    fn default() -> Self {
        Self::new(Arc::new(BearerHeaderHandler))
    }
}
