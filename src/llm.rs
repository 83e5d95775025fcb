use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Capability interface over the generation backend: one system-plus-user
/// completion in, free text out. The orchestrator only ever talks to
/// this trait, so tests run against deterministic fakes.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// OpenAI-compatible chat-completions client (works against Ollama,
/// LM Studio, or a hosted endpoint).
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn from_env() -> Result<Self> {
        let base_url = dotenv::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:11434/v1".to_string());
        let model = dotenv::var("LLM_MODEL").unwrap_or_else(|_| "llama3.2:3b".to_string());
        let api_key = dotenv::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Backend(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            model,
            api_key,
        })
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    async fn chat(&self, messages: &[Message]) -> Result<String> {
        // Temperature 0: the pipeline wants reproducible JSON, not prose.
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0,
            "max_tokens": 2048,
        });

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Backend(format!("request failed: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Backend(format!("failed to read response: {e}")))?;
        if !status.is_success() {
            return Err(Error::Backend(format!("HTTP {status}: {text}")));
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| Error::Backend(format!("non-JSON response: {e}")))?;

        // choices[0].message.content, tolerating null
        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .unwrap_or("")
            .to_string();

        debug!(len = content.len(), "chat completion received");
        Ok(content)
    }
}

#[async_trait]
impl ChatBackend for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let messages = [
            Message {
                role: "system",
                content: system.to_string(),
            },
            Message {
                role: "user",
                content: user.to_string(),
            },
        ];
        self.chat(&messages).await
    }
}
