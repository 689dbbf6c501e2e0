use crate::error::AppError;
use crate::model::http::InboundResponse;
use async_trait::async_trait;
use reqwest::Method;
use std::time::Duration;

/// GET capability of the API client
#[async_trait]
pub trait GetApiClient: Send + Sync {
    /// Sends a GET request
    ///
    /// # Returns
    /// * `Some(body)` - final response was 2xx
    /// * `None` - non-2xx after retries, transport failure or timeout
    async fn get(&self, path: &str, token: Option<&str>) -> Option<String>;
}

/// POST capability of the API client
#[async_trait]
pub trait PostApiClient: Send + Sync {
    /// Sends a POST request with an optional JSON body
    ///
    /// # Returns
    /// * `Some(body)` - final response was 2xx
    /// * `None` - non-2xx after retries, transport failure or timeout
    async fn post(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Option<String>;

    /// Sends a POST request and returns the whole final response
    ///
    /// # Returns
    /// * `Some(response)` - an exchange completed, whatever its status
    /// * `None` - transport failure or timeout
    async fn post_raw(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Option<InboundResponse>;
}

/// DELETE capability of the API client
#[async_trait]
pub trait DeleteApiClient: Send + Sync {
    /// Sends a DELETE request with an optional JSON body
    ///
    /// # Returns
    /// * `Some(body)` - final response was 2xx
    /// * `None` - non-2xx after retries, transport failure or timeout
    async fn delete(&self, path: &str, content: Option<&str>, token: Option<&str>)
    -> Option<String>;
}

/// Full API client: every verb plus the underlying retrying pipeline
#[async_trait]
pub trait ApiClient: GetApiClient + PostApiClient + DeleteApiClient {
    /// Builds the request, sends it through the retry policy and returns the
    /// final response or the last error, without swallowing anything
    async fn execute(
        &self,
        method: Method,
        path: &str,
        content: Option<&str>,
        timeout: Option<Duration>,
        token: Option<&str>,
    ) -> Result<InboundResponse, AppError>;
}
