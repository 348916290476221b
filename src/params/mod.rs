//! Parameter resolution
//!
//! Merges construction-time defaults with per-call [`CallOptions`] into the
//! effective parameters of one `generate` invocation. Resolution runs once per
//! call and the result is shared by every prompt in the batch.
//!
//! Precedence:
//! - **model**: a model fixed on the instance always wins; otherwise the
//!   per-call model; otherwise empty (the provider default endpoint applies).
//! - **everything else**: the per-call value when present, else the instance
//!   default.

use tokio_util::sync::CancellationToken;

use crate::types::{CallOptions, StreamingFunc};

/// Effective parameters for one `generate` call.
#[derive(Clone, Default)]
pub struct ResolvedParams {
    /// Effective model identifier; empty when neither the instance nor the call named one.
    pub model: String,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub repetition_penalty: Option<f64>,
    pub streaming_func: Option<StreamingFunc>,
    pub cancellation: Option<CancellationToken>,
}

impl ResolvedParams {
    pub fn resolve(fixed_model: Option<&str>, defaults: &CallOptions, per_call: &CallOptions) -> Self {
        let merged = merge_call_options(defaults, per_call);
        Self {
            model: resolve_model(fixed_model, merged.model.as_deref()),
            temperature: merged.temperature,
            top_p: merged.top_p,
            repetition_penalty: merged.repetition_penalty,
            streaming_func: merged.streaming_func,
            cancellation: merged.cancellation,
        }
    }

    pub const fn is_streaming(&self) -> bool {
        self.streaming_func.is_some()
    }
}

impl std::fmt::Debug for ResolvedParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedParams")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("repetition_penalty", &self.repetition_penalty)
            .field("streaming", &self.is_streaming())
            .finish()
    }
}

/// Field-by-field merge: `per_call` wins wherever it is set.
pub fn merge_call_options(defaults: &CallOptions, per_call: &CallOptions) -> CallOptions {
    CallOptions {
        model: non_empty(per_call.model.as_deref())
            .or_else(|| non_empty(defaults.model.as_deref()))
            .map(str::to_string),
        temperature: per_call.temperature.or(defaults.temperature),
        top_p: per_call.top_p.or(defaults.top_p),
        repetition_penalty: per_call.repetition_penalty.or(defaults.repetition_penalty),
        streaming_func: per_call
            .streaming_func
            .clone()
            .or_else(|| defaults.streaming_func.clone()),
        cancellation: per_call
            .cancellation
            .clone()
            .or_else(|| defaults.cancellation.clone()),
    }
}

/// Effective model identifier: the instance's fixed model, else the per-call one.
pub fn resolve_model(fixed: Option<&str>, per_call: Option<&str>) -> String {
    non_empty(fixed)
        .or_else(|| non_empty(per_call))
        .unwrap_or_default()
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
