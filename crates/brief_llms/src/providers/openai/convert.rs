//! Conversion between unified types and OpenAI Responses API types

use super::types::{OpenAiInputMessage, OpenAiRequest, OpenAiResponse};
use crate::error::{Error, Result};
use crate::types::{GenerateRequest, GenerateResponse, Usage};

/// Convert unified request to a Responses API request
pub fn to_openai_request(req: &GenerateRequest) -> OpenAiRequest {
    let input = req
        .messages
        .iter()
        .map(|msg| OpenAiInputMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        })
        .collect();

    OpenAiRequest {
        model: req.model.clone(),
        input,
        temperature: req.options.temperature,
        max_output_tokens: req.options.max_output_tokens,
    }
}

/// Convert a Responses API response to a unified response.
///
/// Takes the first text segment of the first output item. A response with
/// no output items or no content segments is rejected, never defaulted.
pub fn from_openai_response(resp: OpenAiResponse) -> Result<GenerateResponse> {
    let item = resp
        .output
        .first()
        .ok_or_else(|| Error::invalid_response("no output items in OpenAI response"))?;

    let part = item
        .content
        .first()
        .ok_or_else(|| Error::invalid_response("no content segments in OpenAI output item"))?;

    let text = part
        .text
        .clone()
        .ok_or_else(|| Error::invalid_response("first content segment carries no text"))?;

    let usage = resp.usage.map(|u| Usage {
        input_tokens: u.input_tokens,
        output_tokens: u.output_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(GenerateResponse {
        text,
        model: resp.model,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    fn response_json(body: &str) -> OpenAiResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_roles_and_order() {
        let req = GenerateRequest::new(
            "gpt-4.1-mini",
            vec![Message::system("analyst"), Message::user("payload")],
        );
        let wire = to_openai_request(&req);
        assert_eq!(wire.model, "gpt-4.1-mini");
        assert_eq!(wire.input.len(), 2);
        assert_eq!(wire.input[0].role, "system");
        assert_eq!(wire.input[0].content, "analyst");
        assert_eq!(wire.input[1].role, "user");
        assert_eq!(wire.input[1].content, "payload");
    }

    #[test]
    fn test_unset_options_are_omitted_from_wire() {
        let req = GenerateRequest::new("m", vec![Message::user("hi")]);
        let body = serde_json::to_value(to_openai_request(&req)).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_output_tokens").is_none());
    }

    #[test]
    fn test_response_takes_first_text_segment() {
        let resp = response_json(
            r##"{
                "id": "resp_1",
                "model": "gpt-4.1-mini",
                "output": [
                    { "type": "message", "content": [
                        { "type": "output_text", "text": "# Brief" },
                        { "type": "output_text", "text": "ignored" }
                    ]}
                ],
                "usage": { "input_tokens": 10, "output_tokens": 5, "total_tokens": 15 }
            }"##,
        );
        let unified = from_openai_response(resp).unwrap();
        assert_eq!(unified.text, "# Brief");
        assert_eq!(unified.model, "gpt-4.1-mini");
        assert_eq!(unified.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_empty_output_is_an_error() {
        let resp = response_json(r#"{ "id": "resp_2", "model": "m", "output": [] }"#);
        let err = from_openai_response(resp).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }

    #[test]
    fn test_empty_content_is_an_error() {
        let resp = response_json(
            r#"{ "id": "resp_3", "model": "m", "output": [ { "type": "message" } ] }"#,
        );
        let err = from_openai_response(resp).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }
}
