//! ChatBackend trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, ChatBackend, GenerateRequest, Reply};

use super::client::{rejection_message, GeminiClient};

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<Reply, AiError> {
        let body = self.build_request_body(request);
        let url = self.api_url(request.model);

        debug!(
            model = %request.model,
            history = request.history.len(),
            system_instruction = request.system_instruction.is_some(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::RemoteUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::RemoteRejected {
                status: status.as_u16(),
                message: rejection_message(&text),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;

        let reply = self.parse_response(json)?;
        debug!(
            model = %request.model,
            input_tokens = reply.usage.input_tokens,
            output_tokens = reply.usage.output_tokens,
            "Gemini API reply"
        );
        Ok(reply)
    }
}
