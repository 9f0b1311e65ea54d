//! Brief generation: payload + system instruction -> one provider call.

use brief_core::{build_payload, FileRecord};
use brief_llms::{GenerateOptions, GenerateRequest, Message, Provider, Result};
use serde::Deserialize;
use tracing::debug;

/// Model used when the caller doesn't pick one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Sampling temperature used when the caller doesn't pick one.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Model/temperature configuration for a brief request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BriefOptions {
    pub model: String,
    pub temperature: f32,
}

impl Default for BriefOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Generate a Project DNA brief for `folder_name` from the given records.
///
/// Builds the payload, sends one two-message request (system instruction +
/// payload) through the provider, and returns the generated text. Provider
/// failures propagate unchanged; there is no retry and no local recovery.
pub async fn generate_brief(
    provider: &dyn Provider,
    folder_name: &str,
    files: &[FileRecord],
    system_prompt: &str,
    options: &BriefOptions,
) -> Result<String> {
    let payload = build_payload(folder_name, files);

    debug!(
        provider = provider.provider_id(),
        model = %options.model,
        files = files.len(),
        payload_len = payload.len(),
        "generating project DNA brief"
    );

    let request = GenerateRequest::new(
        options.model.clone(),
        vec![Message::system(system_prompt), Message::user(payload)],
    )
    .with_options(GenerateOptions {
        temperature: Some(options.temperature),
        ..Default::default()
    });

    let response = provider.generate(request).await?;
    Ok(response.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brief_llms::{Error, GenerateResponse, Headers, Role};
    use std::sync::Mutex;

    /// Provider that records the request it was given and answers with a
    /// canned brief.
    #[derive(Default)]
    struct RecordingProvider {
        seen: Mutex<Option<GenerateRequest>>,
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        fn provider_id(&self) -> &str {
            "recording"
        }

        fn build_headers(&self, _custom_headers: Option<&Headers>) -> Headers {
            Headers::new()
        }

        async fn list_models(&self) -> brief_llms::Result<Vec<String>> {
            Ok(vec![])
        }

        async fn generate(&self, request: GenerateRequest) -> brief_llms::Result<GenerateResponse> {
            let model = request.model.clone();
            *self.seen.lock().unwrap() = Some(request);
            Ok(GenerateResponse {
                text: "# Project DNA Brief".to_string(),
                model,
                usage: None,
            })
        }
    }

    /// Provider that always fails, for propagation tests.
    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn provider_id(&self) -> &str {
            "failing"
        }

        fn build_headers(&self, _custom_headers: Option<&Headers>) -> Headers {
            Headers::new()
        }

        async fn list_models(&self) -> brief_llms::Result<Vec<String>> {
            Ok(vec![])
        }

        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> brief_llms::Result<GenerateResponse> {
            Err(Error::invalid_response("no output items"))
        }
    }

    fn sample_files() -> Vec<FileRecord> {
        vec![FileRecord::new(
            "budget.xlsx",
            "2025-12-01",
            "Q4 numbers...",
        )]
    }

    #[tokio::test]
    async fn sends_system_and_user_messages() {
        let provider = RecordingProvider::default();
        let brief = generate_brief(
            &provider,
            "Budget Reports",
            &sample_files(),
            "You are an expert project analyst",
            &BriefOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(brief, "# Project DNA Brief");

        let seen = provider.seen.lock().unwrap();
        let request = seen.as_ref().unwrap();
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.options.temperature, Some(DEFAULT_TEMPERATURE));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "You are an expert project analyst");
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1]
            .content
            .starts_with("I need a Project DNA Brief for: Budget Reports\n"));
        assert!(request.messages[1].content.contains("Name: budget.xlsx"));
        assert!(request.messages[1].content.contains("Date: 2025-12-01"));
        assert!(request.messages[1].content.contains("Excerpt: Q4 numbers..."));
    }

    #[tokio::test]
    async fn honors_caller_options() {
        let provider = RecordingProvider::default();
        let options = BriefOptions {
            model: "gpt-4.1".to_string(),
            temperature: 0.7,
        };
        generate_brief(&provider, "P", &[], "analyst", &options)
            .await
            .unwrap();

        let seen = provider.seen.lock().unwrap();
        let request = seen.as_ref().unwrap();
        assert_eq!(request.model, "gpt-4.1");
        assert_eq!(request.options.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        let err = generate_brief(
            &FailingProvider,
            "Budget Reports",
            &sample_files(),
            "analyst",
            &BriefOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::InvalidResponse { .. }));
    }
}
