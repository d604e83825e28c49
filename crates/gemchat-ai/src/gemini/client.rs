//! Gemini API client struct, request building, and response parsing.

use gemchat_common::ModelId;

use crate::{AiError, GenerateRequest, Reply, TokenUsage};

use super::config::GeminiConfig;

/// Finish reasons that mean the model refused rather than misbehaved.
const BLOCKED_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII", "RECITATION"];

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client. Fails fast when the API key is missing or blank.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::MissingCredential(
                "Gemini API key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self, model: ModelId) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// History is replayed in order and the new message is appended as the
    /// final `user` entry.
    pub(crate) fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = request
            .history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.api_role(),
                    "parts": [{ "text": turn.content }]
                })
            })
            .collect();

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": request.message }]
        }));

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(ref instruction) = request.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": instruction }]
            });
        }

        body
    }

    /// Parse a successful (2xx) Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Reply, AiError> {
        let candidates = json["candidates"].as_array();

        if candidates.map_or(true, |c| c.is_empty()) {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::RemoteRejected {
                    status: 200,
                    message: format!("prompt blocked ({reason})"),
                });
            }
        }

        let first = candidates
            .ok_or_else(|| AiError::MalformedResponse("no candidates in response".to_string()))?
            .first()
            .ok_or_else(|| AiError::MalformedResponse("empty candidates".to_string()))?;

        let mut text = String::new();
        if let Some(parts) = first["content"]["parts"].as_array() {
            for part in parts {
                // Thought summaries are not part of the answer
                if part["thought"].as_bool() == Some(true) {
                    continue;
                }
                if let Some(t) = part["text"].as_str() {
                    text.push_str(t);
                }
            }
        }

        if text.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("UNSPECIFIED");
            if BLOCKED_FINISH_REASONS.contains(&reason) {
                return Err(AiError::RemoteRejected {
                    status: 200,
                    message: format!("reply blocked ({reason})"),
                });
            }
            return Err(AiError::MalformedResponse(format!(
                "candidate has no text (finishReason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(Reply { text, usage })
    }
}

/// Extract a readable message from a Gemini error body.
///
/// Error bodies look like `{"error": {"code": 400, "message": "...",
/// "status": "INVALID_ARGUMENT"}}`; anything else is returned verbatim.
pub(crate) fn rejection_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    let error = &json["error"];
    let message = error["message"].as_str().unwrap_or(body.trim());
    match error["status"].as_str() {
        Some(status) if !status.is_empty() => format!("{status}: {message}"),
        _ => message.to_string(),
    }
}
