use crate::error::AppError;
use crate::model::http::InboundResponse;
use async_trait::async_trait;
use std::time::Duration;

/// Authenticated API operations
///
/// Every call obtains a new token first. An authentication failure is returned
/// as an error; any later failure is reported as `Ok(None)`.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Authenticated GET
    async fn get(&self, path: &str) -> Result<Option<String>, AppError>;

    /// Authenticated POST
    async fn post(&self, path: &str, content: Option<&str>) -> Result<Option<String>, AppError>;

    /// Authenticated POST returning the whole response, bounded by `timeout`
    async fn post_raw(
        &self,
        path: &str,
        content: Option<&str>,
        timeout: Duration,
    ) -> Result<Option<InboundResponse>, AppError>;

    /// Authenticated DELETE
    async fn delete(&self, path: &str, content: Option<&str>)
    -> Result<Option<String>, AppError>;
}
