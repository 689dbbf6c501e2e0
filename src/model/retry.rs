/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_SECS};
use crate::error::AppError;
use crate::model::http::InboundResponse;
use crate::utils::config::get_env_or_none;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for HTTP request retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (None = 3)
    pub max_retry_count: Option<u32>,
    /// Base of the exponential backoff in seconds (None = 1, giving 2s, 4s, 8s)
    pub base_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a configuration with 3 retries and a 1 second backoff base
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_retry_count: None,
            base_delay_secs: None,
        }
    }

    /// Creates a configuration that never retries
    #[must_use]
    pub fn no_retries() -> Self {
        Self::with_max_retries(0)
    }

    /// Creates a configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            base_delay_secs: None,
        }
    }

    /// Creates a configuration with a custom backoff base
    #[must_use]
    pub fn with_delay(base_delay_secs: u64) -> Self {
        Self {
            max_retry_count: None,
            base_delay_secs: Some(base_delay_secs),
        }
    }

    /// Creates a configuration with both max retries and backoff base
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, base_delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            base_delay_secs: Some(base_delay_secs),
        }
    }

    /// Reads `MAX_RETRY_COUNT` and `RETRY_BASE_DELAY_SECS`, leaving unset values to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT"),
            base_delay_secs: get_env_or_none("RETRY_BASE_DELAY_SECS"),
        }
    }

    /// Gets the maximum retry count (default: 3)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the backoff base in seconds (default: 1)
    #[must_use]
    pub fn base_delay_secs(&self) -> u64 {
        self.base_delay_secs.unwrap_or(DEFAULT_RETRY_BASE_DELAY_SECS)
    }

    /// Delay before retry number `retry` (1-based): `base * 2^retry`
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u64.saturating_pow(retry);
        Duration::from_secs(self.base_delay_secs().saturating_mul(factor))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded retry with exponential backoff around a single send attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Creates a policy from its configuration
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Whether a response status asks for another attempt
    ///
    /// Anything outside 2xx is retried, client errors included.
    #[must_use]
    pub fn should_retry_status(status: StatusCode) -> bool {
        !status.is_success() || status == StatusCode::SERVICE_UNAVAILABLE
    }

    fn should_retry(outcome: &Result<InboundResponse, AppError>) -> bool {
        match outcome {
            Ok(response) => Self::should_retry_status(response.status),
            Err(e) => e.is_transient(),
        }
    }

    /// Runs `action` until it succeeds, fails permanently or retries run out
    ///
    /// The last response is returned (whatever its status) or the last error
    /// is propagated once all attempts are used.
    pub async fn execute<F, Fut>(&self, mut action: F) -> Result<InboundResponse, AppError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<InboundResponse, AppError>> + Send,
    {
        let max_retries = self.config.max_retries();
        let mut retry = 0;

        loop {
            let outcome = action().await;

            if !Self::should_retry(&outcome) {
                return outcome;
            }
            if retry >= max_retries {
                debug!("Giving up after {} attempts", retry + 1);
                return outcome;
            }

            retry += 1;
            let delay = self.config.delay_for(retry);
            match &outcome {
                Ok(response) => warn!(
                    "Attempt {} returned {}, retrying in {:?} ({}/{})",
                    retry, response.status, delay, retry, max_retries
                ),
                Err(e) => warn!(
                    "Attempt {} failed: {}, retrying in {:?} ({}/{})",
                    retry, e, delay, retry, max_retries
                ),
            }
            tokio::time::sleep(delay).await;
        }
    }
}
