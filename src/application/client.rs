/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::client::{
    ApiClient, DeleteApiClient, GetApiClient, PostApiClient,
};
use crate::error::AppError;
use crate::model::authorization::AuthorizationManager;
use crate::model::http::{InboundResponse, RequestBuilder};
use crate::model::retry::{RetryConfig, RetryPolicy};
use crate::model::transport::{
    DefaultRequestSender, HttpTransport, ReqwestTransport, RequestSender,
};
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, info_span, warn};

/// API client composing the request builder, the retry policy and the sender
///
/// The verb methods never fail: whatever goes wrong is logged and reported as
/// `None`. Use [`ApiClient::execute`] to see the error instead.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    sender: Arc<dyn RequestSender>,
    retry: RetryPolicy,
    builder: RequestBuilder,
}

impl HttpApiClient {
    /// Creates a client from its three collaborators
    pub fn new(
        sender: Arc<dyn RequestSender>,
        retry: RetryPolicy,
        builder: RequestBuilder,
    ) -> Self {
        Self {
            sender,
            retry,
            builder,
        }
    }

    /// Creates a client over `transport` with bearer authorization and the given retry schedule
    pub fn with_transport(transport: Arc<dyn HttpTransport>, retry: RetryConfig) -> Self {
        Self::new(
            Arc::new(DefaultRequestSender::new(transport)),
            RetryPolicy::new(retry),
            RequestBuilder::new(AuthorizationManager::default()),
        )
    }

    /// Creates a client talking HTTP through `reqwest`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config.http)?;
        Ok(Self::with_transport(Arc::new(transport), config.retry))
    }

    /// Retry policy in use
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    async fn send_for_text(
        &self,
        method: Method,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Option<String> {
        match self.execute(method.clone(), path, content, timeout, token).await {
            Ok(response) if response.is_success() => Some(response.into_text()),
            Ok(response) => {
                warn!("{} {} failed with status {}", method, path, response.status);
                None
            }
            Err(e) if e.is_timeout() => {
                warn!("{} {} timed out: {}", method, path, e);
                None
            }
            Err(e) => {
                warn!("{} {} failed: {}", method, path, e);
                None
            }
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Result<InboundResponse, AppError> {
        let span = info_span!("api_request", request_id = %request_id(), %method, path);
        let builder = &self.builder;
        let sender = &self.sender;

        self.retry
            .execute(move || {
                let request = builder.build(method.clone(), path, content, token);
                let sender = Arc::clone(sender);
                async move { sender.send(request, timeout).await }
            })
            .instrument(span)
            .await
    }
}

#[async_trait]
impl GetApiClient for HttpApiClient {
    async fn get(&self, path: &str, token: Option<&str>) -> Option<String> {
        self.send_for_text(Method::GET, path, None, None, token).await
    }
}

#[async_trait]
impl PostApiClient for HttpApiClient {
    async fn post(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Option<String> {
        self.send_for_text(Method::POST, path, content, timeout, token)
            .await
    }

    async fn post_raw(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Option<InboundResponse> {
        match self
            .execute(Method::POST, path, content, timeout, token)
            .await
        {
            Ok(response) => Some(response),
            Err(e) if e.is_timeout() => {
                warn!("POST {} timed out: {}", path, e);
                None
            }
            Err(e) => {
                warn!("POST {} failed: {}", path, e);
                None
            }
        }
    }
}

#[async_trait]
impl DeleteApiClient for HttpApiClient {
    async fn delete(
        &self,
        path: &str,
        content: Option<&str>,
        token: Option<&str>,
    ) -> Option<String> {
        self.send_for_text(Method::DELETE, path, content, None, token)
            .await
    }
}
