/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::TokenService;
use crate::application::client::HttpApiClient;
use crate::application::config::Config;
use crate::application::interfaces::client::ApiClient;
use crate::application::interfaces::service::ApiService;
use crate::application::services::base_service::BaseApiService;
use crate::application::services::endpoints::UrlResolver;
use crate::error::AppError;
use crate::model::http::InboundResponse;
use crate::utils::json::{from_json_or_default, to_json};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Authenticated API access by endpoint key, with JSON payloads and typed results
///
/// A response that is absent, empty or only whitespace decodes to `T::default()`,
/// so "no data" and "request failed" look the same to the caller. Only an
/// authentication failure, an unknown endpoint key or a malformed JSON body is
/// reported as an error.
pub struct DeserializingApiService {
    base: Arc<dyn ApiService>,
    resolver: Arc<dyn UrlResolver>,
}

impl DeserializingApiService {
    /// Creates the service
    ///
    /// # Arguments
    /// * `base` - Authenticated service doing the calls
    /// * `resolver` - Maps endpoint keys to URLs
    pub fn new(base: Arc<dyn ApiService>, resolver: Arc<dyn UrlResolver>) -> Self {
        Self { base, resolver }
    }

    /// Wires the whole stack (reqwest transport, retry, token service) from configuration
    pub fn from_config(config: &Config, resolver: Arc<dyn UrlResolver>) -> Result<Self, AppError> {
        let api_client: Arc<dyn ApiClient> = Arc::new(HttpApiClient::from_config(config)?);
        let token_service = Arc::new(TokenService::new(
            Arc::clone(&api_client),
            Arc::new(config.settings.clone()),
        ));
        let base = Arc::new(BaseApiService::new(token_service, api_client));
        Ok(Self::new(base, resolver))
    }

    /// URL for `key` and the JSON body for `payload`
    fn build_request_data<P>(
        &self,
        key: &str,
        payload: Option<&P>,
    ) -> Result<(String, Option<String>), AppError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.resolver.resolve(key)?;
        let content = to_json(payload)?;
        Ok((url, content))
    }

    /// GET the endpoint registered as `key` and decode the response
    pub async fn deserialized_get<T>(&self, key: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.resolver.resolve(key)?;
        let response = self.base.get(&url).await?;
        debug!("GET {} -> {} bytes", key, response.as_ref().map_or(0, String::len));
        from_json_or_default(response.as_deref())
    }

    /// POST `payload` as JSON to the endpoint registered as `key` and decode the response
    pub async fn deserialized_post<T, P>(
        &self,
        key: &str,
        payload: Option<&P>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
        P: Serialize + Sync + ?Sized,
    {
        let (url, content) = self.build_request_data(key, payload)?;
        let response = self.base.post(&url, content.as_deref()).await?;
        debug!("POST {} -> {} bytes", key, response.as_ref().map_or(0, String::len));
        from_json_or_default(response.as_deref())
    }

    /// DELETE the endpoint registered as `key` with `payload` as JSON body and decode the response
    pub async fn deserialized_delete<T, P>(
        &self,
        key: &str,
        payload: Option<&P>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
        P: Serialize + Sync + ?Sized,
    {
        let (url, content) = self.build_request_data(key, payload)?;
        let response = self.base.delete(&url, content.as_deref()).await?;
        debug!("DELETE {} -> {} bytes", key, response.as_ref().map_or(0, String::len));
        from_json_or_default(response.as_deref())
    }
}

#[async_trait]
impl ApiService for DeserializingApiService {
    async fn get(&self, path: &str) -> Result<Option<String>, AppError> {
        self.base.get(path).await
    }

    async fn post(&self, path: &str, content: Option<&str>) -> Result<Option<String>, AppError> {
        self.base.post(path, content).await
    }

    async fn post_raw(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Duration,
    ) -> Result<Option<InboundResponse>, AppError> {
        self.base.post_raw(path, content, timeout).await
    }

    async fn delete(
        &self,
        path: &str,
        content: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        self.base.delete(path, content).await
    }
}
