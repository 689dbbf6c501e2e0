/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! The types and traits needed for most uses of the client in one import.
//!
//! ```rust
//! use bearer_client::prelude::*;
//!
//! let settings = AppSettings::new("https://api.example.com", "user", "password");
//! let endpoints = EndpointMap::from_settings(&settings).with("clientes", "/v1/Clientes");
//! assert!(endpoints.contains("clientes"));
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{AppSettings, Config, HttpConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Token acquisition
pub use crate::application::auth::{TokenProvider, TokenService};

/// Login request and token response
pub use crate::model::auth::{AuthRequest, TokenResponse};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client and service traits
pub use crate::application::interfaces::{
    ApiClient, ApiService, DeleteApiClient, GetApiClient, PostApiClient,
};

/// Client implementation
pub use crate::application::client::HttpApiClient;

/// Service implementations and endpoint resolution
pub use crate::application::services::{
    BaseApiService, DeserializingApiService, EndpointMap, UrlResolver,
};

// ============================================================================
// REQUEST PIPELINE
// ============================================================================

/// Requests, responses and the builder
pub use crate::model::http::{InboundResponse, OutboundRequest, RequestBuilder};

/// Authorization header handling
pub use crate::model::authorization::{
    AuthorizationHeaderHandler, AuthorizationManager, BearerHeaderHandler,
};

/// Retry configuration and policy
pub use crate::model::retry::{RetryConfig, RetryPolicy};

/// Transport and sender
pub use crate::model::transport::{
    DefaultRequestSender, HttpTransport, ReqwestTransport, RequestSender,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// JSON helpers
pub use crate::utils::json::{from_json_or_default, non_blank, to_json, to_json_pretty};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use std::time::Duration;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in the public API
pub use reqwest::{Method, StatusCode};
