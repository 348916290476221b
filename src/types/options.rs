//! Per-call generation options.

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::LlmError;

/// Callback receiving each streamed chunk of generated text.
///
/// Returning an error aborts the in-flight request.
pub type StreamingFunc = Arc<dyn Fn(&str) -> Result<(), LlmError> + Send + Sync>;

/// Optional parameters for a single `generate` / `call` invocation.
///
/// Every field is optional. Instance defaults fill in whatever is left unset
/// (see [`crate::params::merge_call_options`]).
#[derive(Clone, Default)]
pub struct CallOptions {
    /// Model identifier to use when the instance has no fixed model.
    pub model: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f64>,
    /// Nucleus sampling probability.
    pub top_p: Option<f64>,
    /// Repetition penalty, sent to ERNIE as `penalty_score`.
    pub repetition_penalty: Option<f64>,
    /// When set, requests are sent in streaming mode and chunks are delivered here.
    pub streaming_func: Option<StreamingFunc>,
    /// Cancels the in-flight client call; surfaces as [`LlmError::Cancelled`].
    pub cancellation: Option<CancellationToken>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub const fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub const fn with_repetition_penalty(mut self, penalty: f64) -> Self {
        self.repetition_penalty = Some(penalty);
        self
    }

    /// Enable streaming delivery through `f`.
    pub fn with_streaming_func<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), LlmError> + Send + Sync + 'static,
    {
        self.streaming_func = Some(Arc::new(f));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Whether a streaming callback is present.
    pub const fn is_streaming(&self) -> bool {
        self.streaming_func.is_some()
    }
}

impl fmt::Debug for CallOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallOptions")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("repetition_penalty", &self.repetition_penalty)
            .field("streaming", &self.is_streaming())
            .field("has_cancellation", &self.cancellation.is_some())
            .finish()
    }
}
