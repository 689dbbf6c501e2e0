/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::AppSettings;
use crate::error::AppError;
use crate::utils::config::get_env_with_prefix;
use std::collections::HashMap;

/// Turns a logical endpoint key into the URL to call
///
/// Any `Fn(&str) -> String` closure is a resolver, which covers computed URLs;
/// [`EndpointMap`] covers the configuration driven case.
pub trait UrlResolver: Send + Sync {
    /// URL for `key`
    fn resolve(&self, key: &str) -> Result<String, AppError>;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve(&self, key: &str) -> Result<String, AppError> {
        Ok(self(key))
    }
}

/// Table of endpoint keys and paths relative to a base URI
///
/// Keys are case-insensitive. A path that is already an absolute `http(s)`
/// URL is returned untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointMap {
    base_uri: String,
    paths: HashMap<String, String>,
}

impl EndpointMap {
    /// Creates an empty table rooted at `base_uri`
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            paths: HashMap::new(),
        }
    }

    /// Creates an empty table rooted at the configured base URI
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.base_uri.clone())
    }

    /// Loads every `<prefix><KEY>=<path>` environment variable
    ///
    /// With prefix `API_ENDPOINT_`, `API_ENDPOINT_CLIENTES=/v1/Clientes`
    /// registers the key `clientes`.
    pub fn from_env(base_uri: impl Into<String>, prefix: &str) -> Self {
        get_env_with_prefix(prefix)
            .into_iter()
            .fold(Self::new(base_uri), |map, (key, path)| map.with(key, path))
    }

    /// Adds a mapping, builder style
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, path: impl Into<String>) -> Self {
        self.insert(key, path);
        self
    }

    /// Adds or replaces a mapping
    pub fn insert(&mut self, key: impl AsRef<str>, path: impl Into<String>) {
        self.paths
            .insert(key.as_ref().to_lowercase(), path.into());
    }

    /// Whether `key` has a mapping
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.paths.contains_key(&key.to_lowercase())
    }

    /// Number of mappings
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the table has no mappings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl UrlResolver for EndpointMap {
    fn resolve(&self, key: &str) -> Result<String, AppError> {
        if key.trim().is_empty() {
            return Err(AppError::InvalidInput("endpoint key is empty".to_string()));
        }

        let path = self
            .paths
            .get(&key.to_lowercase())
            .ok_or_else(|| AppError::UnknownEndpoint(key.to_string()))?;

        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.clone());
        }

        Ok(format!(
            "{}/{}",
            self.base_uri.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}
