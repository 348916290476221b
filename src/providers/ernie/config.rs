//! `ERNIE` configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::LlmError;
use crate::types::CallOptions;

/// Wenxin Workshop API root.
pub const DEFAULT_BASE_URL: &str = "https://aip.baidubce.com/rpc/2.0/ai_custom/v1/wenxinworkshop";
/// OAuth endpoint exchanging an API key / secret key pair for an access token.
pub const DEFAULT_AUTH_URL: &str = "https://aip.baidubce.com/oauth/2.0/token";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ERNIE_API_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "ERNIE_SECRET_KEY";

/// How requests are authenticated.
#[derive(Clone)]
pub enum Credentials {
    /// Pre-issued access token, used as-is.
    AccessToken(SecretString),
    /// Key pair exchanged for an access token on first use.
    KeyPair {
        api_key: SecretString,
        secret_key: SecretString,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken([REDACTED])"),
            Self::KeyPair { .. } => f.write_str("KeyPair([REDACTED])"),
        }
    }
}

#[derive(Clone, Default)]
pub struct ErnieConfig {
    pub access_token: Option<SecretString>,
    pub api_key: Option<SecretString>,
    pub secret_key: Option<SecretString>,
    /// Model fixed on the instance. Overrides any per-call model.
    pub model: Option<String>,
    /// Instance defaults merged under every call's options.
    pub default_options: CallOptions,
    pub base_url: Option<String>,
    pub auth_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl ErnieConfig {
    /// Pick credentials: a non-empty access token wins, otherwise a complete key pair.
    pub fn credentials(&self) -> Result<Credentials, LlmError> {
        if let Some(token) = non_blank(self.access_token.as_ref()) {
            return Ok(Credentials::AccessToken(token.clone()));
        }
        match (
            non_blank(self.api_key.as_ref()),
            non_blank(self.secret_key.as_ref()),
        ) {
            (Some(api_key), Some(secret_key)) => Ok(Credentials::KeyPair {
                api_key: api_key.clone(),
                secret_key: secret_key.clone(),
            }),
            (None, None) => Err(LlmError::MissingAuth(
                "no access token and no API key/secret key".to_string(),
            )),
            (None, Some(_)) => Err(LlmError::MissingAuth("API key is empty".to_string())),
            (Some(_), None) => Err(LlmError::MissingAuth("secret key is empty".to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), LlmError> {
        self.credentials().map(|_| ())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn auth_url(&self) -> &str {
        self.auth_url.as_deref().unwrap_or(DEFAULT_AUTH_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl std::fmt::Debug for ErnieConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErnieConfig")
            .field("has_access_token", &non_blank(self.access_token.as_ref()).is_some())
            .field("has_api_key", &non_blank(self.api_key.as_ref()).is_some())
            .field("has_secret_key", &non_blank(self.secret_key.as_ref()).is_some())
            .field("model", &self.model)
            .field("default_options", &self.default_options)
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout())
            .finish()
    }
}

fn non_blank(secret: Option<&SecretString>) -> Option<&SecretString> {
    secret.filter(|s| !s.expose_secret().is_empty())
}
