//! OpenAI provider module
//!
//! Implements the Provider trait over OpenAI's Responses API.
//! API docs: https://platform.openai.com/docs/api-reference/responses

mod convert;
mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::{OpenAiConfig, OpenAiRequest, OpenAiResponse};
