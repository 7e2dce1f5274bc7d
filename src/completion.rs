use serde::Deserialize;

use crate::config::Config;

/// The upstream generative text service. One blocking call per request, no
/// retries; a failure here is routed to the fallback path by the dispatcher.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, String>;
}

/// OpenAI-compatible chat completions client (Groq by default). Configuration
/// is threaded in at construction and read-only afterwards.
pub struct GroqClient {
    config: Config,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

impl GroqClient {
    pub fn new(config: Config) -> Self {
        GroqClient { config }
    }

    /// Verify the API is reachable and list the models it offers.
    pub fn test_connection(&self) -> Result<Vec<String>, String> {
        self.require_api_key()?;
        let url = format!("{}/models", self.config.base_url);
        let mut response = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .call()
            .map_err(|e| format!("Failed to reach {}: {}", url, e))?;
        let models: ModelList = response
            .body_mut()
            .read_json()
            .map_err(|e| format!("Failed to parse model list: {}", e))?;
        Ok(models.data.into_iter().map(|m| m.id).collect())
    }

    fn require_api_key(&self) -> Result<(), String> {
        if self.config.api_key.is_empty() {
            return Err(
                "API key is required (set api_key in the config file, or CHARTSMITH_API_KEY / GROQ_API_KEY)"
                    .to_string(),
            );
        }
        Ok(())
    }
}

impl CompletionClient for GroqClient {
    fn complete(&self, prompt: &str) -> Result<String, String> {
        self.require_api_key()?;

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let mut response = ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .send_json(&body)
            .map_err(|e| format!("Completion request failed: {}", e))?;

        let completion: ChatCompletion = response
            .body_mut()
            .read_json()
            .map_err(|e| format!("Failed to parse completion response: {}", e))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err("Completion service returned empty text".to_string());
        }
        Ok(content)
    }
}
