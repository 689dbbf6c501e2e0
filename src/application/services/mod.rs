/// Authenticated service: one fresh token per call
pub mod base_service;
/// Endpoint key to URL resolution
pub mod endpoints;
/// Typed JSON layer over the authenticated service
pub mod deserialized_service;

pub use base_service::BaseApiService;
pub use deserialized_service::DeserializingApiService;
pub use endpoints::{EndpointMap, UrlResolver};
