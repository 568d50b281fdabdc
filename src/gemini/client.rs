// Gemini API client implementing the generation backend

use super::ApiKey;
use crate::config::GeminiConfig;
use crate::error::{GatewayError, Result};
use crate::gateway::{GenerationBackend, GenerationRequest, GenerationResponse};
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SystemInstruction, ThinkingConfig, ToolDeclaration,
};
use crate::models::ToolCall;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Google Gemini `generateContent` API.
///
/// Holds a pooled HTTP client with keep-alive, so repeated calls to the same
/// host reuse connections.
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(config.pool_size)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: ApiKey::new(config.api_key.clone()),
        })
    }

    /// Get the API base_url
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Translate a backend request into the Gemini wire format.
    pub fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(vec![ToolDeclaration {
                function_declarations: request.tools.clone(),
            }])
        };

        GenerateContentRequest {
            contents: vec![Content::user_text(request.prompt.clone())],
            system_instruction: Some(SystemInstruction {
                parts: vec![Part::text(request.system_instruction.clone())],
            }),
            tools,
            generation_config: Some(GenerationConfig {
                temperature: Some(request.temperature),
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: request.thinking_budget,
                }),
            }),
        }
    }

    /// Call Gemini `generateContent` (blocking, non-streaming).
    ///
    /// Errors are returned immediately; the router does not retry.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!("Calling generateContent API for model: {}", model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::BackendUnavailable(format!("HTTP error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = Self::extract_error_message(&error_text).unwrap_or(error_text);
            error!("Gemini API error: HTTP {} - {}", status, message);
            return Err(GatewayError::BackendUnavailable(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let response_text = response.text().await.map_err(|e| {
            GatewayError::BackendUnavailable(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            GatewayError::BackendUnavailable(format!("Response parsing error: {}", e))
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        serde_json::from_str::<ErrorResponse>(response_text)
            .ok()?
            .error
            .and_then(|error| error.message.or(error.status))
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let body = Self::build_request(&request);
        let response = self.generate_content(&body, &request.target_model).await?;
        debug!(
            "{} finished: reason={}, tokens={}",
            request.target_model,
            response.finish_reason().unwrap_or("unknown"),
            response
                .total_tokens()
                .map_or_else(|| "n/a".to_string(), |t| t.to_string())
        );

        Ok(GenerationResponse {
            text: response.text(),
            tool_calls: response
                .function_calls()
                .into_iter()
                .map(|call| ToolCall {
                    name: call.name,
                    args: call.args,
                })
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
