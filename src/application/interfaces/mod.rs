/// API client capability traits
pub mod client;
/// Authenticated service trait
pub mod service;

pub use client::{ApiClient, DeleteApiClient, GetApiClient, PostApiClient};
pub use service::ApiService;
