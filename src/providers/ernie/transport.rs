//! Transport seams
//!
//! The orchestrator in [`super::client`] talks to the service only through
//! these traits. [`super::http::ErnieHttpClient`] is the production
//! implementation; tests substitute in-memory fakes.

use async_trait::async_trait;

use super::types::{CompletionRequest, CompletionResponse, EmbeddingResponse, ModelPath};
use crate::error::LlmError;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one completion request to the endpoint selected by `path`.
    ///
    /// When `request.stream` is set the implementation delivers chunks to
    /// `request.streaming_func` and returns the aggregated response.
    /// Application error codes are returned inside the response, not as `Err`.
    async fn create_completion(
        &self,
        path: &ModelPath,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, LlmError>;
}

#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed all `texts` in a single batch request.
    async fn create_embedding(&self, texts: &[String]) -> Result<EmbeddingResponse, LlmError>;
}
