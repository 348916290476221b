//! `ERNIE` Builder Implementation
//!
//! Provides a builder pattern for creating [`ErnieLlm`] instances.

use std::sync::Arc;

use secrecy::SecretString;

use super::client::ErnieLlm;
use super::config::{API_KEY_ENV, ErnieConfig, SECRET_KEY_ENV};
use super::http::ErnieHttpClient;
use crate::callbacks::CallbackHandler;
use crate::error::LlmError;

/// `ERNIE` client builder
///
/// [`ErnieBuilder::new`] seeds the API key and secret key from
/// `ERNIE_API_KEY` / `ERNIE_SECRET_KEY`; [`ErnieBuilder::default`] starts
/// empty. Explicit setters always override environment values.
#[derive(Clone, Default)]
pub struct ErnieBuilder {
    config: ErnieConfig,
    callbacks: Option<Arc<dyn CallbackHandler>>,
    http_client: Option<reqwest::Client>,
}

impl ErnieBuilder {
    /// Create a builder seeded from the environment
    pub fn new() -> Self {
        let mut builder = Self::default();
        if let Ok(k) = std::env::var(API_KEY_ENV)
            && !k.is_empty()
        {
            builder.config.api_key = Some(SecretString::from(k));
        }
        if let Ok(k) = std::env::var(SECRET_KEY_ENV)
            && !k.is_empty()
        {
            builder.config.secret_key = Some(SecretString::from(k));
        }
        builder
    }

    /// Use a pre-issued access token (skips the key exchange)
    pub fn access_token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the API key / secret key pair
    pub fn aksk<A: Into<String>, S: Into<String>>(mut self, api_key: A, secret_key: S) -> Self {
        self.config.api_key = Some(SecretString::from(api_key.into()));
        self.config.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Fix the model for every call made through the instance
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.config.model = Some(model.into());
        self
    }

    pub fn callbacks(mut self, handler: Arc<dyn CallbackHandler>) -> Self {
        self.callbacks = Some(handler);
        self
    }

    /// Default temperature, overridable per call
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.config.default_options.temperature = Some(temperature);
        self
    }

    /// Default top-p, overridable per call
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.config.default_options.top_p = Some(top_p);
        self
    }

    /// Default repetition penalty, overridable per call
    pub const fn repetition_penalty(mut self, penalty: f64) -> Self {
        self.config.default_options.repetition_penalty = Some(penalty);
        self
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn auth_url<S: Into<String>>(mut self, auth_url: S) -> Self {
        self.config.auth_url = Some(auth_url.into());
        self
    }

    /// Set request timeout (ignored when a custom HTTP client is supplied)
    pub const fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set custom HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the `ERNIE` client
    ///
    /// Fails with [`LlmError::MissingAuth`] when there is neither an access
    /// token nor a complete API key / secret key pair.
    pub fn build(self) -> Result<ErnieLlm, LlmError> {
        self.config.validate()?;

        let transport = match self.http_client {
            Some(http) => ErnieHttpClient::with_http_client(&self.config, http)?,
            None => ErnieHttpClient::new(&self.config)?,
        };

        let mut llm = ErnieLlm::from_client(Arc::new(transport))
            .with_default_options(self.config.default_options);
        if let Some(model) = self.config.model {
            llm = llm.with_model(model);
        }
        if let Some(handler) = self.callbacks {
            llm = llm.with_callbacks(handler);
        }

        tracing::info!(target: "siumai::ernie", model = ?llm.model(), "ernie client built");
        Ok(llm)
    }
}

impl std::fmt::Debug for ErnieBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErnieBuilder")
            .field("config", &self.config)
            .field("has_callbacks", &self.callbacks.is_some())
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}
