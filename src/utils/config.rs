/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use dotenv::dotenv;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Once;
use tracing::{debug, error};

static ENV_FILE: Once = Once::new();

/// Loads the `.env` file from the working directory, at most once per process
///
/// A missing file is not an error: the process environment is used as is.
pub fn load_env_file() {
    ENV_FILE.call_once(|| match dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    });
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable is missing or does not parse
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.trim().parse::<T>().ok())
}

/// Gets a string setting, logging an error when it is missing
///
/// Missing settings resolve to an empty string so that loading never fails;
/// the first request that needs the value will fail instead.
pub fn get_required_string(env_var: &str) -> String {
    match env::var(env_var) {
        Ok(val) => val,
        Err(_) => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}

/// Collects every environment variable starting with `prefix`
///
/// Keys are returned without the prefix and lowercased, so `API_ENDPOINT_USERS`
/// read with prefix `API_ENDPOINT_` yields `users`.
pub fn get_env_with_prefix(prefix: &str) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .filter(|rest| !rest.is_empty())
                .map(|rest| (rest.to_lowercase(), value))
        })
        .collect();
    vars.sort();
    vars
}
