/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::TokenProvider;
use crate::application::interfaces::client::ApiClient;
use crate::application::interfaces::service::ApiService;
use crate::error::AppError;
use crate::model::http::InboundResponse;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Authenticated access to the API
///
/// Every call logs in again: a token is fetched right before the request and
/// dropped afterwards. Retries of that request reuse the same token.
pub struct BaseApiService {
    token_service: Arc<dyn TokenProvider>,
    api_client: Arc<dyn ApiClient>,
}

impl BaseApiService {
    /// Creates the service from a token source and an API client
    pub fn new(token_service: Arc<dyn TokenProvider>, api_client: Arc<dyn ApiClient>) -> Self {
        Self {
            token_service,
            api_client,
        }
    }

    async fn authentication_token(&self) -> Result<String, AppError> {
        let token = self.token_service.obtain_token(None).await?;
        debug!("Fresh token obtained for request");
        Ok(token)
    }
}

#[async_trait]
impl ApiService for BaseApiService {
    async fn get(&self, path: &str) -> Result<Option<String>, AppError> {
        let token = self.authentication_token().await?;
        Ok(self.api_client.get(path, Some(&token)).await)
    }

    async fn post(&self, path: &str, content: Option<&str>) -> Result<Option<String>, AppError> {
        let token = self.authentication_token().await?;
        Ok(self
            .api_client
            .post(path, content, None, Some(&token))
            .await)
    }

    async fn post_raw(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Duration,
    ) -> Result<Option<InboundResponse>, AppError> {
        let token = self.authentication_token().await?;
        Ok(self
            .api_client
            .post_raw(path, content, Some(timeout), Some(&token))
            .await)
    }

    async fn delete(
        &self,
        path: &str,
        content: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let token = self.authentication_token().await?;
        Ok(self.api_client.delete(path, content, Some(&token)).await)
    }
}
