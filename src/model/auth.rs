/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::AppSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the login request sent to the authentication endpoint
///
/// Serialized as `{"usuario":"...","senha":"..."}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Login name
    pub usuario: String,
    /// Password
    pub senha: String,
}

impl AuthRequest {
    /// Creates a login body from explicit credentials
    pub fn new(usuario: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            usuario: usuario.into(),
            senha: senha.into(),
        }
    }
}

impl From<&AppSettings> for AuthRequest {
    fn from(settings: &AppSettings) -> Self {
        Self::new(settings.username.clone(), settings.password.clone())
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("usuario", &self.usuario)
            .field("senha", &"***")
            .finish()
    }
}

/// Response of the authentication endpoint
///
/// Only the token is kept; a response without it yields an empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Bearer token to attach to the following request
    #[serde(default)]
    pub token: String,
}
