//! The provider seam: one implementation per upstream API.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// A text-generation backend. Implementations own authentication,
/// transport and wire parsing; callers see only unified types.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier ("openai", ...).
    fn provider_id(&self) -> &str;

    /// Headers for an outgoing request, with any caller-supplied
    /// headers merged on top.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// Model identifiers this provider can serve.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// One request/response round trip. No retry, no backoff; failures
    /// surface as `Error` unchanged.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
