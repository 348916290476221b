//! `ERNIE` client implementation
//!
//! [`ErnieLlm`] turns a batch of prompts into sequential completion requests,
//! classifies application error codes and notifies the configured
//! [`CallbackHandler`]. It also serves single-batch embeddings.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::builder::ErnieBuilder;
use super::models::model_to_path;
use super::transport::{CompletionClient, EmbeddingClient};
use super::types::{CompletionRequest, Message};
use crate::callbacks::{CallbackHandler, NoopCallbacks};
use crate::error::LlmError;
use crate::params::ResolvedParams;
use crate::traits::{EmbeddingProvider, LanguageModel};
use crate::types::{CallOptions, Generation};

/// Returned by [`LanguageModel::num_tokens`]: ERNIE exposes no tokenizer.
pub const NUM_TOKENS_UNSUPPORTED: i64 = -1;

/// `ERNIE` language model and embedding provider.
#[derive(Clone)]
pub struct ErnieLlm {
    completion: Arc<dyn CompletionClient>,
    embedding: Arc<dyn EmbeddingClient>,
    model: Option<String>,
    defaults: CallOptions,
    callbacks: Arc<dyn CallbackHandler>,
}

impl ErnieLlm {
    pub fn builder() -> ErnieBuilder {
        ErnieBuilder::new()
    }

    /// Wrap one transport that serves both completions and embeddings.
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: CompletionClient + EmbeddingClient + 'static,
    {
        Self::from_clients(client.clone(), client)
    }

    pub fn from_clients(
        completion: Arc<dyn CompletionClient>,
        embedding: Arc<dyn EmbeddingClient>,
    ) -> Self {
        Self {
            completion,
            embedding,
            model: None,
            defaults: CallOptions::default(),
            callbacks: Arc::new(NoopCallbacks),
        }
    }

    /// Fix the model; per-call models are ignored while this is non-empty.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_callbacks(mut self, handler: Arc<dyn CallbackHandler>) -> Self {
        self.callbacks = handler;
        self
    }

    /// Instance defaults merged under every call's options.
    pub fn with_default_options(mut self, defaults: CallOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub const fn default_options(&self) -> &CallOptions {
        &self.defaults
    }

    fn build_request(prompt: &str, params: &ResolvedParams) -> CompletionRequest {
        CompletionRequest {
            messages: vec![Message::user(prompt)],
            temperature: params.temperature,
            top_p: params.top_p,
            penalty_score: params.repetition_penalty,
            stream: params.is_streaming(),
            user_id: None,
            streaming_func: params.streaming_func.clone(),
        }
    }

    fn fail(&self, err: LlmError) -> LlmError {
        tracing::warn!(target: "siumai::ernie", err = %err, "generation failed");
        self.callbacks.on_llm_error(&err);
        err
    }
}

impl std::fmt::Debug for ErnieLlm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErnieLlm")
            .field("model", &self.model)
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// Await `fut`, or fail with [`LlmError::Cancelled`] once `token` fires.
async fn cancellable<T, F>(token: Option<&CancellationToken>, fut: F) -> Result<T, LlmError>
where
    F: Future<Output = Result<T, LlmError>>,
{
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(LlmError::Cancelled),
            res = fut => res,
        },
        None => fut.await,
    }
}

#[async_trait]
impl LanguageModel for ErnieLlm {
    async fn generate(
        &self,
        prompts: &[String],
        options: CallOptions,
    ) -> Result<Vec<Generation>, LlmError> {
        self.callbacks.on_llm_start(prompts);

        let params = ResolvedParams::resolve(self.model.as_deref(), &self.defaults, &options);
        let path = model_to_path(&params.model);
        tracing::debug!(
            target: "siumai::ernie",
            model = %params.model,
            %path,
            prompts = prompts.len(),
            stream = params.is_streaming(),
            "generate"
        );

        let mut generations = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            let request = Self::build_request(prompt, &params);
            let response = cancellable(
                params.cancellation.as_ref(),
                self.completion.create_completion(&path, request),
            )
            .await
            .map_err(|e| self.fail(e))?;

            if response.has_error_code() {
                return Err(self.fail(LlmError::response_code(
                    response.error_code,
                    response.error_msg,
                    response.id,
                )));
            }
            generations.push(Generation::new(response.result));
        }
        Ok(generations)
    }

    fn num_tokens(&self, _text: &str) -> i64 {
        NUM_TOKENS_UNSUPPORTED
    }
}

impl ErnieLlm {
    /// [`EmbeddingProvider::create_embedding`] that also stops when `token`
    /// fires, failing with [`LlmError::Cancelled`].
    pub async fn create_embedding_cancellable(
        &self,
        texts: &[String],
        token: &CancellationToken,
    ) -> Result<Vec<Vec<f32>>, LlmError> {
        self.embed(texts, Some(token)).await
    }

    async fn embed(
        &self,
        texts: &[String],
        token: Option<&CancellationToken>,
    ) -> Result<Vec<Vec<f32>>, LlmError> {
        let response = cancellable(token, self.embedding.create_embedding(texts)).await?;
        if response.has_error_code() {
            return Err(LlmError::response_code(
                response.error_code,
                response.error_msg,
                response.id,
            ));
        }
        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }
}

#[async_trait]
impl EmbeddingProvider for ErnieLlm {
    async fn create_embedding(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
        self.embed(texts, None).await
    }
}
