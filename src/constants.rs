/// Path of the login endpoint, appended to the configured base URI
pub const AUTH_PATH: &str = "/v1/Autenticacao";
/// Number of retries after the first attempt (4 attempts in total)
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Base of the exponential backoff in seconds; retry `n` waits `base * 2^n`
pub const DEFAULT_RETRY_BASE_DELAY_SECS: u64 = 1;
/// Client level timeout for the `reqwest` transport, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 100;
/// Content type attached to every request carrying a body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
/// Authorization scheme used for the token
pub const BEARER_SCHEME: &str = "Bearer";
/// Length of the identifiers attached to request spans
pub const REQUEST_ID_LENGTH: usize = 12;
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = concat!("bearer-client/", env!("CARGO_PKG_VERSION"));
