/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # bearer-client
//!
//! A client layer for HTTP APIs protected by a bearer token obtained from a
//! username/password login endpoint.
//!
//! Every outbound call goes through the same pipeline:
//!
//! 1. a fresh token is requested from `{base_uri}/v1/Autenticacao`
//! 2. the request is built with the `Authorization: Bearer <token>` header and a JSON body
//! 3. the send is retried on transient failures with exponential backoff (2s, 4s, 8s)
//! 4. the JSON response is decoded into a typed value, or `T::default()` when nothing came back
//!
//! Tokens are never cached: each authenticated call logs in again.
//!
//! ## Usage
//!
//! ```ignore
//! use bearer_client::prelude::*;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Customer {
//!     id: u64,
//!     full_name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = Config::new();
//!     let endpoints =
//!         EndpointMap::new(&config.settings.base_uri).with("customer", "/v1/Clientes/42");
//!     let service = DeserializingApiService::from_config(&config, Arc::new(endpoints))?;
//!
//!     let customer: Customer = service.deserialized_get("customer").await?;
//!     info!("customer: {:?}", customer);
//!     Ok(())
//! }
//! ```

/// Token acquisition, API client and the services built on top of them
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type shared by every layer
pub mod error;
/// Wire models, request pipeline pieces and retry policy
pub mod model;
/// Commonly used types in one import
pub mod prelude;
/// Configuration, JSON, identifier and logging helpers
pub mod utils;

/// Crate version, as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
