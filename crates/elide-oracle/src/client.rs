use elide_core::{instruction, Direction, RetentionPolicy, TextTransform, TransformError};
use thiserror::Error;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Model used unless the caller overrides it. External configuration, not
/// part of the functional contract.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key must be provided or set in the {} environment variable", API_KEY_ENV)]
    MissingApiKey,

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Transform that delegates both directions to a chat-completions oracle.
///
/// Holds the credential and HTTP client for its whole lifetime; all calls are
/// synchronous from the caller's point of view, driven on a private
/// current-thread runtime.
#[derive(Debug)]
pub struct OracleTransform {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    api_key: String,
    model: String,
}

impl OracleTransform {
    /// Build an oracle transform from an explicit key, falling back to the
    /// `OPENAI_API_KEY` environment variable. Fails fast when neither is set.
    pub fn new(api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ConfigError::Runtime)?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, TransformError> {
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body(&self.model, system, user))
            .send()
            .await
            .map_err(|e| TransformError::Oracle(Box::new(e)))?
            .error_for_status()
            .map_err(|e| TransformError::Oracle(Box::new(e)))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransformError::Oracle(Box::new(e)))?;

        match body["choices"][0]["message"]["content"].as_str() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(TransformError::EmptyResponse),
        }
    }
}

fn request_body(model: &str, system: &str, user: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system},
            {"role": "user", "content": user}
        ]
    })
}

impl TextTransform for OracleTransform {
    fn transform(
        &self,
        policy: RetentionPolicy,
        direction: Direction,
        text: &str,
    ) -> Result<String, TransformError> {
        let system = instruction(policy, direction);
        match self.runtime.block_on(self.complete(system, text)) {
            Ok(output) => Ok(output),
            Err(e) => {
                tracing::error!(
                    policy = %policy,
                    direction = ?direction,
                    error = %e,
                    "oracle transform failed"
                );
                Err(e)
            }
        }
    }
}
