/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Login request and token response models
pub mod auth;
/// Authorization header writers
pub mod authorization;
/// Request and response values and the request builder
pub mod http;
/// Retry configuration and policy for HTTP requests
pub mod retry;
/// Transport and timeout-aware sender
pub mod transport;
