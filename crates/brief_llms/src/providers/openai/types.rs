//! OpenAI-specific types (Responses API)

use serde::{Deserialize, Serialize};

/// Configuration for OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL (default: https://api.openai.com/v1/)
    pub base_url: String,
}

impl OpenAiConfig {
    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1/".to_string(),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::new(std::env::var("OPENAI_API_KEY").unwrap_or_default())
    }
}

/// Responses API request
#[derive(Debug, Serialize)]
pub struct OpenAiRequest {
    pub model: String,
    pub input: Vec<OpenAiInputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// One input message (system/user/assistant + text)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenAiInputMessage {
    pub role: String,
    pub content: String,
}

/// Responses API response
#[derive(Debug, Deserialize)]
pub struct OpenAiResponse {
    pub id: String,
    pub model: String,
    pub output: Vec<OpenAiOutputItem>,
    #[serde(default)]
    pub usage: Option<OpenAiUsage>,
}

/// One output item. Non-message items (e.g. reasoning) carry no content.
#[derive(Debug, Deserialize)]
pub struct OpenAiOutputItem {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub content: Vec<OpenAiContentPart>,
}

/// One content segment of an output item
#[derive(Debug, Deserialize)]
pub struct OpenAiContentPart {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Token usage reported by the Responses API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// Models-list response (GET /models)
#[derive(Debug, Deserialize)]
pub struct OpenAiModelsResponse {
    pub data: Vec<OpenAiModel>,
}

/// One model entry
#[derive(Debug, Deserialize)]
pub struct OpenAiModel {
    pub id: String,
}
