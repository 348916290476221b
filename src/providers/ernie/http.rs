//! HTTP transport for Wenxin Workshop
//!
//! Handles access-token acquisition and caching, request routing by
//! [`ModelPath`], and SSE streaming. Application error codes are handed back
//! inside the decoded response for the orchestrator to interpret.

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::Client;
use secrecy::ExposeSecret;
use tokio::sync::Mutex;

use super::config::{Credentials, ErnieConfig};
use super::models::EMBEDDING_V1_PATH;
use super::transport::{CompletionClient, EmbeddingClient};
use super::types::{
    AccessTokenResponse, CompletionRequest, CompletionResponse, EmbeddingRequest,
    EmbeddingResponse, ModelPath,
};
use crate::error::LlmError;

const EXPIRY_SAFETY_WINDOW: i64 = 300; // 5 minutes
const ERROR_BODY_SNIPPET: usize = 512;

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    exp_unix: i64,
}

/// reqwest-backed implementation of both transport traits.
pub struct ErnieHttpClient {
    http: Client,
    base_url: String,
    auth_url: String,
    credentials: Credentials,
    token_cache: Mutex<Option<CachedToken>>,
}

impl ErnieHttpClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: &ErnieConfig) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::ConfigurationError(format!("failed to build HTTP client: {e}")))?;
        Self::with_http_client(config, http)
    }

    /// Build a client around a caller-supplied `reqwest::Client`.
    pub fn with_http_client(config: &ErnieConfig, http: Client) -> Result<Self, LlmError> {
        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            auth_url: config.auth_url().to_string(),
            credentials: config.credentials()?,
            token_cache: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current access token, exchanging the key pair when the cache is empty or stale.
    pub async fn access_token(&self) -> Result<String, LlmError> {
        let (api_key, secret_key) = match &self.credentials {
            Credentials::AccessToken(token) => return Ok(token.expose_secret().to_string()),
            Credentials::KeyPair {
                api_key,
                secret_key,
            } => (api_key, secret_key),
        };

        // Held across the exchange so concurrent callers wait for one refresh.
        let mut cache = self.token_cache.lock().await;
        let now = chrono::Utc::now().timestamp();
        if let Some(ct) = cache.as_ref()
            && ct.exp_unix - EXPIRY_SAFETY_WINDOW > now
        {
            return Ok(ct.token.clone());
        }

        tracing::debug!(target: "siumai::ernie", "requesting access token");
        let response = self
            .http
            .post(&self.auth_url)
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", api_key.expose_secret()),
                ("client_secret", secret_key.expose_secret()),
            ])
            .send()
            .await?;
        let body = token_response(response).await?;

        if !body.error.is_empty() {
            return Err(LlmError::AuthenticationError(format!(
                "{}: {}",
                body.error, body.error_description
            )));
        }
        if body.access_token.is_empty() {
            return Err(LlmError::AuthenticationError(
                "token endpoint returned no access_token".to_string(),
            ));
        }

        *cache = Some(CachedToken {
            token: body.access_token.clone(),
            exp_unix: now + body.expires_in,
        });
        Ok(body.access_token)
    }

    async fn endpoint(&self, route: &str) -> Result<String, LlmError> {
        let token = self.access_token().await?;
        Ok(format!(
            "{}/{}?access_token={}",
            self.base_url,
            route,
            urlencoding::encode(&token)
        ))
    }

    async fn read_stream(
        &self,
        response: reqwest::Response,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        // Errors in stream mode come back as a plain JSON body.
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));
        if is_json {
            return Ok(response.json().await?);
        }

        let mut events = Box::pin(response.bytes_stream().eventsource());
        let mut text = String::new();
        let mut last = CompletionResponse::default();

        while let Some(event) = events.next().await {
            let event = event.map_err(|e| LlmError::StreamError(e.to_string()))?;
            let data = event.data.trim();
            if data.is_empty() || data == "[DONE]" {
                continue;
            }
            let chunk: CompletionResponse = serde_json::from_str(data)?;
            if chunk.has_error_code() {
                return Ok(chunk);
            }
            if let Some(f) = &request.streaming_func {
                f(&chunk.result)
                    .map_err(|e| LlmError::StreamError(format!("streaming callback failed: {e}")))?;
            }
            text.push_str(&chunk.result);
            let done = chunk.is_end;
            last = chunk;
            if done {
                break;
            }
        }

        last.result = text;
        Ok(last)
    }
}

impl std::fmt::Debug for ErnieHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErnieHttpClient")
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[async_trait]
impl CompletionClient for ErnieHttpClient {
    async fn create_completion(
        &self,
        path: &ModelPath,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        let url = self.endpoint(&format!("chat/{path}")).await?;
        tracing::debug!(target: "siumai::ernie", %path, stream = request.stream, "completion request");

        let response = self.http.post(url).json(&request).send().await?;
        let response = check_status(response).await?;

        if request.stream {
            self.read_stream(response, &request).await
        } else {
            Ok(response.json().await?)
        }
    }
}

#[async_trait]
impl EmbeddingClient for ErnieHttpClient {
    async fn create_embedding(&self, texts: &[String]) -> Result<EmbeddingResponse, LlmError> {
        let url = self
            .endpoint(&format!("embeddings/{EMBEDDING_V1_PATH}"))
            .await?;
        tracing::debug!(target: "siumai::ernie", texts = texts.len(), "embedding request");

        let response = self
            .http
            .post(url)
            .json(&EmbeddingRequest { input: texts })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(LlmError::HttpError(format!(
        "HTTP {status}: {}",
        snippet(&body)
    )))
}

/// Decode the token endpoint reply. Bad credentials arrive as a non-2xx status
/// with an OAuth `error` body.
async fn token_response(response: reqwest::Response) -> Result<AccessTokenResponse, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    match serde_json::from_str::<AccessTokenResponse>(&text) {
        Ok(body) if !body.error.is_empty() => Ok(body),
        _ => Err(LlmError::HttpError(format!(
            "HTTP {status}: {}",
            snippet(&text)
        ))),
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_SNIPPET {
        return body.to_string();
    }
    let mut s: String = body.chars().take(ERROR_BODY_SNIPPET).collect();
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_env;
    use secrecy::SecretString;

    #[test]
    fn snippet_truncates_long_bodies() {
        let body = "x".repeat(ERROR_BODY_SNIPPET + 10);
        let s = snippet(&body);
        assert_eq!(s.len(), ERROR_BODY_SNIPPET + 3);
        assert!(s.ends_with("..."));
        assert_eq!(snippet("short"), "short");
    }

    #[test]
    fn construction_requires_credentials() {
        let _lock = lock_env();
        let err = ErnieHttpClient::new(&ErnieConfig::default()).unwrap_err();
        assert!(matches!(err, LlmError::MissingAuth(_)));
    }

    #[tokio::test]
    async fn explicit_access_token_is_used_without_exchange() {
        let _lock = lock_env();
        let config = ErnieConfig {
            access_token: Some(SecretString::from("tok-123".to_string())),
            base_url: Some("http://localhost:1/".to_string()),
            ..Default::default()
        };
        let client = ErnieHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1");
        assert_eq!(client.access_token().await.unwrap(), "tok-123");
    }
}
