/// Token acquisition
pub mod auth;
/// Retrying API client
pub mod client;
/// Application configuration module
pub mod config;
/// Traits implemented by clients and services
pub mod interfaces;
/// Authenticated and deserializing services
pub mod services;
