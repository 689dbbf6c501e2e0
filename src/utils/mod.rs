/// Environment and `.env` helpers for configuration loading
pub mod config;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// JSON and body content helpers
pub mod json;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use json::*;
pub use logger::*;
