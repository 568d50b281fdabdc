//! Contract between the router and a generative text backend.

use crate::error::Result;
use crate::models::{FunctionDeclaration, ToolCall};
use async_trait::async_trait;

/// Everything the backend needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Backing model identifier of the selected route.
    pub target_model: String,
    /// The single user turn.
    pub prompt: String,
    pub system_instruction: String,
    pub tools: Vec<FunctionDeclaration>,
    pub temperature: f32,
    /// Thinking token budget; `0` disables extended thinking.
    pub thinking_budget: u32,
}

/// A successful completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
}

/// A generative text backend.
///
/// Implementations return `Err` for any transport, auth or provider failure;
/// the router turns every error into a fail-soft result.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "backend"
    }
}
