//! Embedding capability trait

use crate::error::LlmError;
use async_trait::async_trait;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, returning one vector per input in input order.
    ///
    /// Dropping the returned future cancels the request. Providers may also
    /// offer a token-based variant (see `ErnieLlm::create_embedding_cancellable`).
    async fn create_embedding(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError>;
}
