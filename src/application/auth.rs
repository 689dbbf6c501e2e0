/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Token acquisition
//!
//! The token is obtained with a dedicated, unauthenticated POST of the configured
//! credentials to `{base_uri}/v1/Autenticacao`. Nothing is cached: callers ask
//! for a new token every time they need one.

use crate::application::config::AppSettings;
use crate::application::interfaces::client::ApiClient;
use crate::error::AppError;
use crate::model::auth::{AuthRequest, TokenResponse};
use crate::utils::json::from_json_or_default;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Source of bearer tokens
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtains a new token
    ///
    /// # Arguments
    /// * `timeout` - Bound for each attempt of the login request
    ///
    /// # Returns
    /// * `Ok(token)` - token of the login response (empty when the response had none)
    /// * `Err(AppError::AuthenticationFailed)` - the login request could not be completed
    async fn obtain_token(&self, timeout: Option<Duration>) -> Result<String, AppError>;
}

/// Logs in with the configured credentials through the API client
pub struct TokenService {
    api_client: Arc<dyn ApiClient>,
    settings: Arc<AppSettings>,
}

impl TokenService {
    /// Creates a token service
    ///
    /// # Arguments
    /// * `api_client` - Client used for the login request
    /// * `settings` - Base URI and credentials
    pub fn new(api_client: Arc<dyn ApiClient>, settings: Arc<AppSettings>) -> Self {
        Self {
            api_client,
            settings,
        }
    }

    /// URL and JSON body of the login request
    fn build_request_data(&self) -> Result<(String, String), AppError> {
        let body = serde_json::to_string(&AuthRequest::from(self.settings.as_ref()))?;
        Ok((self.settings.auth_url(), body))
    }
}

#[async_trait]
impl TokenProvider for TokenService {
    async fn obtain_token(&self, timeout: Option<Duration>) -> Result<String, AppError> {
        let (url, content) = self
            .build_request_data()
            .map_err(AppError::authentication)?;

        debug!("Requesting token from {}", url);

        let response = self
            .api_client
            .execute(Method::POST, &url, Some(&content), timeout, None)
            .await
            .map_err(|e| {
                error!("Token request to {} failed: {}", url, e);
                AppError::authentication(e)
            })?;

        if !response.is_success() {
            error!("Token request to {} returned {}", url, response.status);
            return Err(AppError::authentication(AppError::Unexpected(
                response.status,
            )));
        }

        let token: TokenResponse =
            from_json_or_default(Some(response.text())).map_err(|e| {
                error!("Token response from {} is not valid JSON: {}", url, e);
                AppError::authentication(e)
            })?;

        debug!("Token obtained");
        Ok(token.token)
    }
}
