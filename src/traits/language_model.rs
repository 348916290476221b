//! Language model capability trait and shared helpers

use crate::error::LlmError;
use crate::types::{CallOptions, Generation, LlmResult, PromptValue};
use async_trait::async_trait;

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate one completion per prompt, in input order.
    ///
    /// Either every prompt succeeds and the result has the same length as
    /// `prompts`, or the call fails and no generations are returned.
    async fn generate(
        &self,
        prompts: &[String],
        options: CallOptions,
    ) -> Result<Vec<Generation>, LlmError>;

    /// Number of tokens in `text`, or a negative value when the provider
    /// cannot count tokens.
    fn num_tokens(&self, text: &str) -> i64;

    /// Generate a single completion and return its text.
    async fn call(&self, prompt: &str, options: CallOptions) -> Result<String, LlmError> {
        let generations = self.generate(&[prompt.to_string()], options).await?;
        generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(LlmError::EmptyResponse)
    }

    /// Render prompt values to strings and generate them as one batch.
    async fn generate_prompt(
        &self,
        prompt_values: &[&dyn PromptValue],
        options: CallOptions,
    ) -> Result<LlmResult, LlmError> {
        generate_prompt(self, prompt_values, options).await
    }
}

/// Shared `generate_prompt` implementation usable by any [`LanguageModel`].
pub async fn generate_prompt<L>(
    llm: &L,
    prompt_values: &[&dyn PromptValue],
    options: CallOptions,
) -> Result<LlmResult, LlmError>
where
    L: LanguageModel + ?Sized,
{
    let prompts: Vec<String> = prompt_values
        .iter()
        .map(|v| v.to_prompt_string())
        .collect();
    let generations = llm.generate(&prompts, options).await?;
    Ok(LlmResult {
        generations: vec![generations],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatMessage, ChatPromptValue, StringPromptValue};
    use std::sync::Mutex;

    /// Echoes prompts back, or returns a canned outcome.
    #[derive(Default)]
    struct StubModel {
        outcome: Option<Result<Vec<Generation>, LlmError>>,
        seen: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl LanguageModel for StubModel {
        async fn generate(
            &self,
            prompts: &[String],
            _options: CallOptions,
        ) -> Result<Vec<Generation>, LlmError> {
            self.seen.lock().unwrap().push(prompts.to_vec());
            match &self.outcome {
                Some(outcome) => outcome.clone(),
                None => Ok(prompts.iter().map(Generation::new).collect()),
            }
        }

        fn num_tokens(&self, _text: &str) -> i64 {
            -1
        }
    }

    #[tokio::test]
    async fn call_returns_single_generation_text() {
        let model = StubModel::default();
        let text = model.call("hello", CallOptions::new()).await.unwrap();
        assert_eq!(text, "hello");
        assert_eq!(model.seen.lock().unwrap().as_slice(), &[vec!["hello".to_string()]]);
    }

    #[tokio::test]
    async fn call_reports_empty_response_when_nothing_generated() {
        let model = StubModel {
            outcome: Some(Ok(Vec::new())),
            ..Default::default()
        };
        let err = model.call("hello", CallOptions::new()).await.unwrap_err();
        assert_eq!(err, LlmError::EmptyResponse);
    }

    #[tokio::test]
    async fn call_propagates_generate_error_unchanged() {
        let model = StubModel {
            outcome: Some(Err(LlmError::response_code(17, "daily limit", "as-1"))),
            ..Default::default()
        };
        let err = model.call("hello", CallOptions::new()).await.unwrap_err();
        assert_eq!(err, LlmError::response_code(17, "daily limit", "as-1"));
    }

    #[tokio::test]
    async fn generate_prompt_renders_values_into_one_batch() {
        let model = StubModel::default();
        let plain = StringPromptValue("first".into());
        let chat = ChatPromptValue(vec![ChatMessage::user("second")]);
        let values: Vec<&dyn PromptValue> = vec![&plain, &chat];

        let result = model
            .generate_prompt(&values, CallOptions::new())
            .await
            .unwrap();

        assert_eq!(result.generations.len(), 1);
        assert_eq!(
            result.generations[0],
            vec![Generation::new("first"), Generation::new("Human: second")]
        );
        assert_eq!(result.first_text(), Some("first"));
    }

    #[tokio::test]
    async fn generate_prompt_propagates_errors() {
        let model = StubModel {
            outcome: Some(Err(LlmError::HttpError("down".into()))),
            ..Default::default()
        };
        let value = StringPromptValue("x".into());
        let err = generate_prompt(&model, &[&value], CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::HttpError(_)));
    }
}
