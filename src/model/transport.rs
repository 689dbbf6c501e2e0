/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Transport and sender
//!
//! [`HttpTransport`] is the raw "send bytes over HTTP" capability;
//! [`RequestSender`] adds the optional per-call timeout on top of it.

use crate::application::config::HttpConfig;
use crate::error::AppError;
use crate::model::http::{InboundResponse, OutboundRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Sends a request over the network and reads the whole response
#[async_trait]
pub trait HttpTransport: Debug + Send + Sync {
    /// Performs one HTTP exchange
    ///
    /// Non-2xx statuses are returned as responses, not errors; only failures to
    /// complete the exchange are errors.
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, AppError>;
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given client level settings
    pub fn new(config: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<InboundResponse, AppError> {
        let OutboundRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &path).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(InboundResponse {
            status,
            headers,
            body,
        })
    }
}

/// Sends a built request, optionally bounded by a timeout
#[async_trait]
pub trait RequestSender: Debug + Send + Sync {
    /// Sends `request`; when `timeout` elapses first the in-flight call is
    /// cancelled and [`AppError::Timeout`] is returned
    async fn send(
        &self,
        request: OutboundRequest,
        timeout: Option<Duration>,
    ) -> Result<InboundResponse, AppError>;
}

/// Sender delegating to an [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct DefaultRequestSender {
    transport: Arc<dyn HttpTransport>,
}

impl DefaultRequestSender {
    /// Creates a sender over `transport`
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl RequestSender for DefaultRequestSender {
    async fn send(
        &self,
        request: OutboundRequest,
        timeout: Option<Duration>,
    ) -> Result<InboundResponse, AppError> {
        debug!("{} {}", request.method, request.path);

        let response = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
                .await
                .map_err(|_| AppError::Timeout(limit))??,
            None => self.transport.send(request).await?,
        };

        debug!("Response status: {}", response.status);
        Ok(response)
    }
}
