//! siumai-provider-ernie
//!
//! Baidu ERNIE (Wenxin Workshop) language model and embedding provider.
//!
//! - [`traits::LanguageModel`]: batch generation, single-prompt `call` and
//!   prompt-value generation.
//! - [`traits::EmbeddingProvider`]: batched Embedding-V1 vectors.
//! - [`providers::ernie::ErnieBuilder`]: construction with credentials read
//!   from `ERNIE_API_KEY` / `ERNIE_SECRET_KEY` when not set explicitly.
//!
//! Logging goes through `tracing` under the `siumai::ernie` target. The crate
//! never installs a subscriber; applications configure their own.
#![deny(unsafe_code)]

pub mod callbacks;
pub mod error;
pub mod params;
pub mod providers;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::LlmError;
pub use providers::ernie::{ErnieBuilder, ErnieLlm};

/// Model constants for the ERNIE provider.
pub mod models {
    pub use crate::providers::ernie::models::*;
}

pub mod prelude {
    pub use crate::callbacks::{CallbackHandler, LoggingCallbacks, NoopCallbacks};
    pub use crate::error::LlmError;
    pub use crate::models;
    pub use crate::providers::ernie::{ErnieBuilder, ErnieLlm};
    pub use crate::traits::{EmbeddingProvider, LanguageModel};
    pub use crate::types::{
        CallOptions, ChatMessage, ChatPromptValue, Generation, LlmResult, PromptValue,
        StringPromptValue,
    };
}
