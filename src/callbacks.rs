//! Lifecycle callbacks
//!
//! Observer hooks invoked around a generation batch: once when the batch
//! starts and once when it terminates with an error. Hooks are best-effort and
//! fire-and-forget; they cannot alter the result returned to the caller and
//! should avoid expensive work.

use crate::error::LlmError;

/// Lifecycle observer for language model calls.
///
/// Every hook has a no-op default, so implementors only override what they need.
pub trait CallbackHandler: Send + Sync {
    /// Called once per `generate` call, before any request is sent.
    fn on_llm_start(&self, _prompts: &[String]) {}

    /// Called when a `generate` call aborts, with the error about to be returned.
    fn on_llm_error(&self, _error: &LlmError) {}
}

/// Callback handler that does nothing. Used when no handler is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl CallbackHandler for NoopCallbacks {}

/// A simple logging handler backed by `tracing` (prompt text is never logged).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCallbacks;

impl CallbackHandler for LoggingCallbacks {
    fn on_llm_start(&self, prompts: &[String]) {
        tracing::debug!(target: "siumai::ernie", prompts = prompts.len(), "llm start");
    }

    fn on_llm_error(&self, error: &LlmError) {
        tracing::warn!(target: "siumai::ernie", err = %error, "llm error");
    }
}
